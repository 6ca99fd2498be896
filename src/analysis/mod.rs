//! Run both analyses over one corpus and collect a serializable report.

use crate::corpus::Corpus;
use crate::extraction::{LengthMeasure, RankedExtractor};
use crate::frequency::FrequencyTable;
use crate::types::report::AnalysisReport;

/// Count frequencies, then run the extractor, over the same token sequence.
pub fn analyze<L>(corpus: &Corpus, extractor: &RankedExtractor<L>) -> AnalysisReport
where
    L: LengthMeasure,
{
    let table = FrequencyTable::from_tokens(corpus.tokens());
    let extraction = extractor.extract_with_metadata(corpus.tokens());

    AnalysisReport {
        corpus_version: corpus.version().clone(),
        token_count: table.total(),
        most_frequent: table.most_frequent(),
        extraction,
    }
}

/// Same report as [`analyze`]. Counting runs chunked on the rayon pool,
/// alongside the extractor.
pub fn par_analyze<L>(corpus: &Corpus, extractor: &RankedExtractor<L>) -> AnalysisReport
where
    L: LengthMeasure + Sync,
{
    let (table, extraction) = rayon::join(
        || FrequencyTable::par_from_tokens(corpus.tokens()),
        || extractor.extract_with_metadata(corpus.tokens()),
    );

    AnalysisReport {
        corpus_version: corpus.version().clone(),
        token_count: table.total(),
        most_frequent: table.most_frequent(),
        extraction,
    }
}
