// hansard-keywords: session-scoped TF-IDF keyword extraction for bilingual
// (English/French) parliamentary transcripts.
//
// This is the library root. `keywords` is the scoring pipeline; the other
// modules are the edges the CLI needs (configuration, file input, terminal output).

pub mod config;
pub mod input;
pub mod keywords;
pub mod output;

pub use keywords::bilingual::{extract_bilingual, extract_document_keywords, BilingualKeywords};
pub use keywords::corpus::{build_corpus, Document, SessionCorpus, SourceText};
pub use keywords::frequency::{inverse_document_frequency as idf, term_frequency};
pub use keywords::keyword::{Keyword, Language};
pub use keywords::tfidf::{extract_keywords, TfIdfExtractor, DEFAULT_TOP_N};
pub use keywords::tokenizer::{tokenize, Tokenizer};
pub use keywords::traits::KeywordExtractor;
