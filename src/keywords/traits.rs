// Keyword extractor trait — swap-ready abstraction.
//
// Callers hold a corpus and ask for keywords; how the terms are scored is the
// extractor's business. TF-IDF is the implementation today.

use super::corpus::{SessionCorpus, SourceText};
use super::keyword::Keyword;

/// Trait for extracting ranked keywords from one document of a session.
pub trait KeywordExtractor {
    /// Build the corpus statistics this extractor scores against.
    fn build_corpus<D: SourceText>(&self, documents: &[D]) -> SessionCorpus;

    /// Rank the keywords of `document_text` against `corpus`.
    fn extract(&self, document_text: &str, corpus: &SessionCorpus) -> Vec<Keyword>;
}
