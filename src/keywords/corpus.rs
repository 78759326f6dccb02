// Session corpus — document frequencies over every document of one sitting.
//
// A document only contributes the *set* of its tokens: saying "climate" fifty
// times in one speech still counts as one document containing "climate".
// The corpus size used for IDF is the number of documents handed in, including
// ones with no text, not the number that produced tokens.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use super::frequency::{inverse_document_frequency, DocumentFrequencies, InverseDocumentFrequencies};
use super::keyword::Keyword;
use super::tfidf;
use super::tokenizer::Tokenizer;

/// Anything that may carry document text.
pub trait SourceText {
    fn source_text(&self) -> Option<&str>;
}

/// A transcript record as the pipeline sees it: an identifier and its text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            text: Some(text.into()),
        }
    }
}

impl SourceText for Document {
    fn source_text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl SourceText for str {
    fn source_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl SourceText for String {
    fn source_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: SourceText> SourceText for Option<T> {
    fn source_text(&self) -> Option<&str> {
        self.as_ref().and_then(SourceText::source_text)
    }
}

/// Raw JSON records: reads a string `"text"` field, anything else is no text.
impl SourceText for serde_json::Value {
    fn source_text(&self) -> Option<&str> {
        self.get("text").and_then(serde_json::Value::as_str)
    }
}

impl<T: SourceText + ?Sized> SourceText for &T {
    fn source_text(&self) -> Option<&str> {
        (**self).source_text()
    }
}

/// Count, for each term, how many of `documents` contain it.
pub fn build_corpus<D: SourceText>(documents: &[D]) -> DocumentFrequencies {
    build_corpus_with(&Tokenizer::default(), documents)
}

pub fn build_corpus_with<D: SourceText>(
    tokenizer: &Tokenizer,
    documents: &[D],
) -> DocumentFrequencies {
    let mut doc_freq = DocumentFrequencies::new();

    for doc in documents {
        let Some(text) = doc.source_text().filter(|t| !t.is_empty()) else {
            continue;
        };

        let unique: HashSet<String> = tokenizer.tokenize(text).into_iter().collect();
        for term in unique {
            *doc_freq.entry(term).or_insert(0) += 1;
        }
    }

    debug!(
        documents = documents.len(),
        terms = doc_freq.len(),
        "Built session corpus"
    );

    doc_freq
}

/// Document frequencies plus the corpus size, built once per session and
/// reused for every document scored against it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionCorpus {
    doc_freq: DocumentFrequencies,
    total_documents: usize,
}

impl SessionCorpus {
    pub fn build<D: SourceText>(documents: &[D]) -> Self {
        Self::build_with(&Tokenizer::default(), documents)
    }

    pub fn build_with<D: SourceText>(tokenizer: &Tokenizer, documents: &[D]) -> Self {
        Self {
            doc_freq: build_corpus_with(tokenizer, documents),
            total_documents: documents.len(),
        }
    }

    /// Wrap counts computed elsewhere.
    pub fn from_parts(doc_freq: DocumentFrequencies, total_documents: usize) -> Self {
        Self {
            doc_freq,
            total_documents,
        }
    }

    pub fn doc_freq(&self) -> &DocumentFrequencies {
        &self.doc_freq
    }

    pub fn total_documents(&self) -> usize {
        self.total_documents
    }

    pub fn is_empty(&self) -> bool {
        self.total_documents == 0
    }

    /// Number of documents containing `term` (0 if never seen).
    pub fn document_frequency(&self, term: &str) -> usize {
        self.doc_freq.get(term).copied().unwrap_or(0)
    }

    pub fn idf(&self) -> InverseDocumentFrequencies {
        inverse_document_frequency(&self.doc_freq, self.total_documents)
    }

    /// Top `top_n` keywords of `document_text` against this corpus.
    pub fn extract(&self, document_text: &str, top_n: usize) -> Vec<Keyword> {
        self.extract_with(&Tokenizer::default(), document_text, top_n)
    }

    pub fn extract_with(
        &self,
        tokenizer: &Tokenizer,
        document_text: &str,
        top_n: usize,
    ) -> Vec<Keyword> {
        tfidf::extract_keywords_with(
            tokenizer,
            document_text,
            &self.doc_freq,
            self.total_documents,
            top_n,
        )
    }
}
