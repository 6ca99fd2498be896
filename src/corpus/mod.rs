pub mod corpus;

pub use crate::types::identifiers::CorpusVersion;
pub use corpus::{Corpus, CorpusError};
