pub mod bounding;
pub mod config;
pub mod filters;
pub mod measure;
pub mod ordering;

pub use bounding::{take_first, BoundResult};
pub use config::{ConfigError, ExtractionConfig};
pub use measure::{CharLength, LengthMeasure, Utf16Length};

use crate::types::report::{ExtractionMetadata, ExtractionResult};

pub struct RankedExtractor<L> {
	config: ExtractionConfig,
	measure: L,
}

impl Default for RankedExtractor<CharLength> {
	fn default() -> Self {
		Self {
			config: ExtractionConfig::reference(),
			measure: CharLength,
		}
	}
}

impl RankedExtractor<CharLength> {
	pub fn with_config(config: ExtractionConfig) -> Self {
		Self::new(config, CharLength)
	}
}

impl<L> RankedExtractor<L>
where
	L: LengthMeasure,
{
	pub fn new(config: ExtractionConfig, measure: L) -> Self {
		Self { config, measure }
	}

	pub fn config(&self) -> &ExtractionConfig {
		&self.config
	}

	pub fn extract<'a, I>(&self, tokens: I) -> Vec<String>
	where
		I: IntoIterator<Item = &'a str>,
	{
		self.extract_with_metadata(tokens).words
	}

	pub fn extract_with_metadata<'a, I>(&self, tokens: I) -> ExtractionResult
	where
		I: IntoIterator<Item = &'a str>,
	{
		let ExtractionConfig {
			min_length,
			limit_after_dedup,
			limit_final,
		} = self.config;

		let mut tokens_considered = 0;
		let counted = tokens.into_iter().inspect(|_| tokens_considered += 1);

		// 1. Length filter
		let long = filters::longer_than(counted, min_length, &self.measure);
		let after_length_filter = long.len();

		// 2. Deduplication, first occurrence wins
		let mut unique = filters::dedup_first_seen(long);
		let after_dedup = unique.len();

		// 3. Stable length sort
		ordering::sort_by_length(&mut unique, &self.measure);

		// 4. Keep the shortest
		let BoundResult {
			kept: shortest,
			dropped: excluded_by_bound,
		} = take_first(unique, limit_after_dedup);
		let after_bound = shortest.len();

		// 5. Second character must be lowercase
		let eligible = filters::second_char_lowercase(shortest);
		let after_case_filter = eligible.len();

		// 6. Fold, sort, bound
		let BoundResult {
			kept: words,
			dropped: excluded_by_final_bound,
		} = take_first(ordering::fold_and_sort(eligible), limit_final);

		debug_assert!(words.windows(2).all(|w| w[0] <= w[1]));

		tracing::debug!(
			tokens_considered,
			after_length_filter,
			after_dedup,
			after_bound,
			excluded_by_bound,
			after_case_filter,
			words_returned = words.len(),
			excluded_by_final_bound,
			"ranked extraction finished"
		);

		let extraction = ExtractionMetadata {
			min_length,
			limit_after_dedup,
			limit_final,
			tokens_considered,
			after_length_filter,
			after_dedup,
			after_bound,
			excluded_by_bound,
			after_case_filter,
			words_returned: words.len(),
			excluded_by_final_bound,
		};

		ExtractionResult { words, extraction }
	}
}

/// Run the six-stage pipeline with explicit thresholds, measuring length in characters.
pub fn extract<'a, I>(
	tokens: I,
	min_length: usize,
	limit_after_dedup: usize,
	limit_final: usize,
) -> Vec<String>
where
	I: IntoIterator<Item = &'a str>,
{
	let config = ExtractionConfig {
		min_length,
		limit_after_dedup,
		limit_final,
	};
	RankedExtractor::with_config(config).extract(tokens)
}

/// Number of tokens strictly longer than `min_length` characters, duplicates included.
pub fn count_longer_than<'a, I>(tokens: I, min_length: usize) -> usize
where
	I: IntoIterator<Item = &'a str>,
{
	tokens
		.into_iter()
		.filter(|token| CharLength.length(token) > min_length)
		.count()
}
