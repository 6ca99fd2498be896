pub mod identifiers;
pub mod report;
pub mod token;

pub use identifiers::CorpusVersion;
pub use report::{AnalysisReport, ExtractionMetadata, ExtractionResult, FrequencyEntry};
pub use token::{Token, TokenError};
