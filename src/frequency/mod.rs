//! Exact-match token counting.
//!
//! Counts are keyed by the byte-exact token, so `Hello` and `hello` are
//! distinct. Each entry also remembers where the token first appeared; the
//! modal entry is chosen by `(count desc, first position asc)`, which makes
//! the answer independent of hash-map iteration order and identical between
//! the sequential and parallel builders.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::tokenize::Tokens;
use crate::types::report::FrequencyEntry;
use crate::types::token::Token;

/// Tokens per chunk when counting in parallel.
const PAR_CHUNK_LEN: usize = 64 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tally {
    count: u64,
    first_position: usize,
}

/// Count table over tokens borrowed from a corpus.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable<'a> {
    entries: FxHashMap<&'a str, Tally>,
    total: u64,
}

impl<'a> FrequencyTable<'a> {
    /// Single linear scan over the token sequence.
    pub fn from_tokens(tokens: Tokens<'a>) -> Self {
        let mut table = FrequencyTable::default();
        for (position, token) in tokens.enumerate() {
            table.record(token, position);
        }

        tracing::debug!(
            total = table.total,
            distinct = table.entries.len(),
            "built frequency table"
        );
        table
    }

    /// Chunked parallel build. Produces the same table as [`Self::from_tokens`].
    pub fn par_from_tokens(tokens: Tokens<'a>) -> Self {
        let tokens: Vec<&'a str> = tokens.collect();

        let table = tokens
            .par_chunks(PAR_CHUNK_LEN)
            .enumerate()
            .map(|(chunk_idx, chunk)| {
                let offset = chunk_idx * PAR_CHUNK_LEN;
                let mut partial = FrequencyTable::default();
                for (i, &token) in chunk.iter().enumerate() {
                    partial.record(token, offset + i);
                }
                partial
            })
            .reduce(FrequencyTable::default, FrequencyTable::merge);

        tracing::debug!(
            total = table.total,
            distinct = table.entries.len(),
            chunks = tokens.len().div_ceil(PAR_CHUNK_LEN),
            "built frequency table in parallel"
        );
        table
    }

    fn record(&mut self, token: &'a str, position: usize) {
        // Positions arrive in increasing order, so the first insert wins.
        let tally = self.entries.entry(token).or_insert(Tally {
            count: 0,
            first_position: position,
        });
        tally.count += 1;
        self.total += 1;
    }

    /// Combine two partial tables: counts add, first positions take the minimum.
    pub fn merge(self, other: Self) -> Self {
        let (mut base, extra) = if self.entries.len() >= other.entries.len() {
            (self, other)
        } else {
            (other, self)
        };

        for (token, tally) in extra.entries {
            base.entries
                .entry(token)
                .and_modify(|existing| {
                    existing.count += tally.count;
                    existing.first_position = existing.first_position.min(tally.first_position);
                })
                .or_insert(tally);
        }
        base.total += extra.total;
        base
    }

    pub fn count(&self, token: &str) -> u64 {
        self.entries.get(token).map_or(0, |tally| tally.count)
    }

    pub fn first_position(&self, token: &str) -> Option<usize> {
        self.entries.get(token).map(|tally| tally.first_position)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of tokens counted, duplicates included.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The entry with the greatest count; ties go to the earliest first occurrence.
    pub fn most_frequent(&self) -> Option<FrequencyEntry> {
        self.entries
            .iter()
            .max_by(|(_, a), (_, b)| {
                a.count
                    .cmp(&b.count)
                    .then_with(|| b.first_position.cmp(&a.first_position))
            })
            .map(|(token, tally)| FrequencyEntry {
                token: Token::from_run(token),
                count: tally.count,
            })
    }
}

/// Modal token of a token sequence, or `None` when the sequence is empty.
pub fn most_frequent(tokens: Tokens<'_>) -> Option<FrequencyEntry> {
    FrequencyTable::from_tokens(tokens).most_frequent()
}

/// Same as [`most_frequent`], counting chunks on the rayon pool.
pub fn par_most_frequent(tokens: Tokens<'_>) -> Option<FrequencyEntry> {
    FrequencyTable::par_from_tokens(tokens).most_frequent()
}
