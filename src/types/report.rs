use serde::{Deserialize, Serialize};

use crate::types::identifiers::CorpusVersion;
use crate::types::token::Token;

/// The modal token of a corpus and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub token: Token,
    pub count: u64,
}

impl FrequencyEntry {
    pub fn into_pair(self) -> (Token, u64) {
        (self.token, self.count)
    }
}

/// How many tokens survived each extraction stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    pub min_length: usize,
    pub limit_after_dedup: usize,
    pub limit_final: usize,

    pub tokens_considered: usize,
    pub after_length_filter: usize,
    pub after_dedup: usize,
    pub after_bound: usize,
    pub excluded_by_bound: usize,
    pub after_case_filter: usize,
    pub words_returned: usize,
    pub excluded_by_final_bound: usize,
}

/// Output of a ranked extraction together with its stage accounting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub words: Vec<String>,
    pub extraction: ExtractionMetadata,
}

/// Both analyses over one corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub corpus_version: CorpusVersion,
    pub token_count: u64,
    pub most_frequent: Option<FrequencyEntry>,
    pub extraction: ExtractionResult,
}
