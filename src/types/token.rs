use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tokenize::is_letter;

/// A maximal run of Unicode letters taken from a corpus.
///
/// Always non-empty and made only of characters in the Unicode letter
/// categories.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Token(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token must not be empty")]
    Empty,
    #[error("Token contains non-letter character {0:?}")]
    NonLetter(char),
}

impl Token {
    /// Validate and wrap a word.
    pub fn new(word: impl Into<String>) -> Result<Self, TokenError> {
        let word = word.into();
        if word.is_empty() {
            return Err(TokenError::Empty);
        }
        if let Some(c) = word.chars().find(|&c| !is_letter(c)) {
            return Err(TokenError::NonLetter(c));
        }
        Ok(Token(word))
    }

    /// Wrap a slice already produced by the tokenizer.
    pub(crate) fn from_run(run: &str) -> Self {
        debug_assert!(!run.is_empty() && run.chars().all(is_letter));
        Token(run.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Token {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Token::new(value)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
