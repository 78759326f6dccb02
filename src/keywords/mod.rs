// Keyword extraction — tokenization, session corpus statistics, TF-IDF ranking.
//
// Data flow for one document:
//   session documents -> tokenizer -> corpus (document frequencies)
//   document text     -> tokenizer -> term frequencies
//   both              -> IDF -> TF-IDF ranking -> top-N normalized keywords

pub mod bilingual;
pub mod corpus;
pub mod frequency;
pub mod keyword;
pub mod stopwords;
pub mod tfidf;
pub mod tokenizer;
pub mod traits;
