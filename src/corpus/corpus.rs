use thiserror::Error;

use crate::tokenize::{tokenize, Tokens};
use crate::types::identifiers::CorpusVersion;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Corpus must be valid UTF-8")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),
}

/// An immutable text blob handed to the analyses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    text: String,
    version: CorpusVersion,
}

impl Corpus {
    /// Wrap already-decoded text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let version = CorpusVersion::from_content(text.as_bytes());
        Corpus { text, version }
    }

    /// Validate raw bytes as UTF-8 and wrap them.
    ///
    /// This is the only place an encoding failure can surface; everything
    /// downstream operates on `&str` and is total.
    pub fn from_bytes(raw: Vec<u8>) -> Result<Self, CorpusError> {
        let text = String::from_utf8(raw)?;
        Ok(Corpus::new(text))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn version(&self) -> &CorpusVersion {
        &self.version
    }

    pub fn tokens(&self) -> Tokens<'_> {
        tokenize(&self.text)
    }
}
