// Term frequency and inverse document frequency.
//
//   TF(t, d)  = occurrences of t in d / tokens in d
//   IDF(t)    = ln(N / df(t))
//
// where N is the number of documents in the session corpus and df(t) is the
// number of those documents containing t at least once.

use std::collections::{BTreeMap, HashMap};

/// Term -> fraction of the document's tokens. Ordered by term so that every
/// pass over it is deterministic.
pub type TermFrequencies = BTreeMap<String, f64>;

/// Term -> number of corpus documents containing it.
pub type DocumentFrequencies = HashMap<String, usize>;

/// Term -> `ln(N / df)`.
pub type InverseDocumentFrequencies = HashMap<String, f64>;

/// Normalized term frequency of a token sequence.
///
/// Empty input gives an empty map; otherwise the values sum to 1.
pub fn term_frequency<S: AsRef<str>>(tokens: &[S]) -> TermFrequencies {
    if tokens.is_empty() {
        return TermFrequencies::new();
    }

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.as_ref()).or_insert(0) += 1;
    }

    let total = tokens.len() as f64;
    counts
        .into_iter()
        .map(|(term, count)| (term.to_string(), count as f64 / total))
        .collect()
}

/// IDF for every term with a positive document count.
///
/// An empty corpus (`total_documents == 0`) yields an empty map.
pub fn inverse_document_frequency(
    doc_freq: &DocumentFrequencies,
    total_documents: usize,
) -> InverseDocumentFrequencies {
    if total_documents == 0 {
        return InverseDocumentFrequencies::new();
    }

    let n = total_documents as f64;
    doc_freq
        .iter()
        .filter(|(_, &count)| count > 0)
        .map(|(term, &count)| (term.clone(), (n / count as f64).ln()))
        .collect()
}

/// IDF assumed for a term the corpus never counted: `ln(N)`, i.e. as if it
/// appeared in exactly one document. Zero for an empty corpus.
pub fn unseen_term_idf(total_documents: usize) -> f64 {
    if total_documents == 0 {
        0.0
    } else {
        (total_documents as f64).ln()
    }
}
