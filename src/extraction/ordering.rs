use super::measure::LengthMeasure;

/// Stage 3: stable sort by length ascending. Equal lengths keep their order.
pub fn sort_by_length<L>(tokens: &mut [&str], measure: &L)
where
    L: LengthMeasure + ?Sized,
{
    // sort_by_cached_key is stable and measures each token once.
    tokens.sort_by_cached_key(|token| measure.length(token));
}

/// Stage 6 without the bound: lowercase, then sort by code point.
///
/// Distinct tokens such as `Acquaintances` and `acquaintances` fold to the
/// same word and both copies are kept.
pub fn fold_and_sort(tokens: Vec<&str>) -> Vec<String> {
    let mut words: Vec<String> = tokens.into_iter().map(str::to_lowercase).collect();
    words.sort_unstable();
    words
}
