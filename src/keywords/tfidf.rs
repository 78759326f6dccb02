// TF-IDF keyword scoring.
//
// Every distinct term of the document gets `TF * IDF`. Terms that occur in every
// document of the session score zero no matter how often they are repeated,
// while terms specific to this document float to the top. The ranked list is
// cut to `top_n` and rescaled so the best keyword weighs exactly 1.0.

use std::cmp::Ordering;

use tracing::warn;

use super::corpus::{SessionCorpus, SourceText};
use super::frequency::{
    inverse_document_frequency, term_frequency, unseen_term_idf, DocumentFrequencies,
    InverseDocumentFrequencies, TermFrequencies,
};
use super::keyword::Keyword;
use super::tokenizer::Tokenizer;
use super::traits::KeywordExtractor;

/// Keywords returned per document unless the caller asks otherwise.
pub const DEFAULT_TOP_N: usize = 20;

/// A term with its unnormalized TF-IDF score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTerm {
    pub term: String,
    pub score: f64,
}

/// Extract the `top_n` keywords of `document_text` with the default tokenizer.
pub fn extract_keywords(
    document_text: &str,
    corpus_doc_freq: &DocumentFrequencies,
    total_documents: usize,
    top_n: usize,
) -> Vec<Keyword> {
    extract_keywords_with(
        &Tokenizer::default(),
        document_text,
        corpus_doc_freq,
        total_documents,
        top_n,
    )
}

pub fn extract_keywords_with(
    tokenizer: &Tokenizer,
    document_text: &str,
    corpus_doc_freq: &DocumentFrequencies,
    total_documents: usize,
    top_n: usize,
) -> Vec<Keyword> {
    let tokens = tokenizer.tokenize(document_text);
    if tokens.is_empty() {
        warn!("No tokens found in document text");
        return Vec::new();
    }

    let tf = term_frequency(&tokens);
    let idf = inverse_document_frequency(corpus_doc_freq, total_documents);

    let mut ranked = rank_terms(&tf, &idf, total_documents);
    ranked.truncate(top_n);
    normalize(&ranked)
}

/// Score every term of `tf` and sort by descending score, ties by term.
///
/// Terms missing from `idf` get `unseen_term_idf(total_documents)`.
pub fn rank_terms(
    tf: &TermFrequencies,
    idf: &InverseDocumentFrequencies,
    total_documents: usize,
) -> Vec<ScoredTerm> {
    let unseen = unseen_term_idf(total_documents);

    let mut scored: Vec<ScoredTerm> = tf
        .iter()
        .map(|(term, &tf_score)| {
            let idf_score = idf.get(term).copied().unwrap_or(unseen);
            ScoredTerm {
                term: term.clone(),
                score: tf_score * idf_score,
            }
        })
        .collect();

    scored.sort_by(|a, b| match b.score.total_cmp(&a.score) {
        Ordering::Equal => a.term.cmp(&b.term),
        ord => ord,
    });
    scored
}

/// Divide every score by the best one, rounded to 3 decimals.
///
/// If the best score is not positive every weight is 0.0.
pub fn normalize(ranked: &[ScoredTerm]) -> Vec<Keyword> {
    let max_score = ranked.first().map_or(0.0, |s| s.score);

    ranked
        .iter()
        .map(|s| Keyword {
            word: s.term.clone(),
            weight: if max_score > 0.0 {
                round3(s.score / max_score)
            } else {
                0.0
            },
        })
        .collect()
}

/// Round to 3 decimals from the exact binary value, ties to even.
fn round3(value: f64) -> f64 {
    format!("{value:.3}").parse().unwrap_or(value)
}

/// TF-IDF based keyword extractor.
#[derive(Debug, Clone)]
pub struct TfIdfExtractor {
    /// How many keywords to keep per document
    pub top_n: usize,
    /// Tokenizer used for both corpus and document
    pub tokenizer: Tokenizer,
}

impl Default for TfIdfExtractor {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            tokenizer: Tokenizer::default(),
        }
    }
}

impl KeywordExtractor for TfIdfExtractor {
    fn build_corpus<D: SourceText>(&self, documents: &[D]) -> SessionCorpus {
        SessionCorpus::build_with(&self.tokenizer, documents)
    }

    fn extract(&self, document_text: &str, corpus: &SessionCorpus) -> Vec<Keyword> {
        corpus.extract_with(&self.tokenizer, document_text, self.top_n)
    }
}
