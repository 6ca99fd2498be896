use rustc_hash::FxHashSet;

use super::measure::LengthMeasure;

/// Stage 1: keep tokens strictly longer than `min_length`.
pub fn longer_than<'a, I, L>(tokens: I, min_length: usize, measure: &L) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
    L: LengthMeasure + ?Sized,
{
    tokens
        .into_iter()
        .filter(|token| measure.length(token) > min_length)
        .collect()
}

/// Stage 2: keep the first occurrence of each token, in first-seen order.
pub fn dedup_first_seen(tokens: Vec<&str>) -> Vec<&str> {
    let mut seen = FxHashSet::default();
    tokens.into_iter().filter(|token| seen.insert(*token)).collect()
}

/// Stage 5: keep tokens whose second character is lowercase.
pub fn second_char_lowercase(tokens: Vec<&str>) -> Vec<&str> {
    tokens
        .into_iter()
        .filter(|token| has_lowercase_second_char(token))
        .collect()
}

/// False for words with fewer than two characters.
pub fn has_lowercase_second_char(word: &str) -> bool {
    word.chars().nth(1).is_some_and(char::is_lowercase)
}
