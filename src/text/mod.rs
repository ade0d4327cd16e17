// Text primitives shared by every pipeline: normalization, sentence
// segmentation and word frequency counting.

pub mod frequency;
pub mod normalize;
pub mod segment;

pub use frequency::{word_frequencies, FrequencyTable};
pub use normalize::{normalize, tokenize};
pub use segment::{segment_coarse, segment_for_summary};
