// Insertion-ordered word frequency table.
//
// Ranking ties are broken by first appearance, so the table remembers the
// order in which each token was first seen. A plain HashMap would make topic
// ranking nondeterministic across runs.

use std::collections::HashMap;

/// Token -> occurrence count, iterated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `token`.
    pub fn add(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), 1));
            }
        }
    }

    /// Occurrence count of `token`, 0 if it was never seen.
    pub fn get(&self, token: &str) -> usize {
        self.index
            .get(token)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// Keep only the entries matching `keep`, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, usize) -> bool) {
        self.entries.retain(|(token, count)| keep(token.as_str(), *count));
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(slot, (token, _))| (token.clone(), slot))
            .collect();
    }

    /// The `k` most frequent entries, highest count first.
    ///
    /// The sort is stable, so equal counts keep first-seen order.
    pub fn most_common(&self, k: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(k);
        ranked
    }

    /// How many distinct tokens occur exactly `count` times.
    pub fn count_with_frequency(&self, count: usize) -> usize {
        self.entries.iter().filter(|(_, c)| *c == count).count()
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for token in iter {
            table.add(token.as_ref());
        }
        table
    }
}

/// Build a frequency table from already-normalized tokens.
pub fn word_frequencies<I, S>(tokens: I) -> FrequencyTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens.into_iter().collect()
}
