//! Deterministic word statistics over text corpora.
//!
//! `wordrank-core` splits text into letter runs and offers two analyses over
//! the resulting token sequence: the most frequent token with a fixed
//! tie-break, and a six-stage ranked extraction of long words. All
//! operations are pure; identical inputs always produce identical outputs.

pub mod analysis;
pub mod corpus;
pub mod extraction;
pub mod frequency;
pub mod tokenize;
pub mod types;

pub use analysis::{analyze, par_analyze};
pub use corpus::{Corpus, CorpusError};
pub use extraction::{count_longer_than, extract, ExtractionConfig, RankedExtractor};
pub use frequency::{most_frequent, par_most_frequent, FrequencyTable};
pub use tokenize::{tokenize, Tokens};
pub use types::{FrequencyEntry, Token};
