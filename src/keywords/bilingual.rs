// Bilingual extraction — English and French are scored independently.
//
// A transcript comes in both official languages and each has its own session
// corpus. A language is only attempted when both its text and its corpus are
// present, and a language that yields no keywords is reported as `None`
// rather than an empty list.

use tracing::{debug, info};

use super::corpus::{SessionCorpus, SourceText};
use super::keyword::{Keyword, Language};
use super::tokenizer::Tokenizer;

/// Per-language keyword lists for one document. `None` means "no result".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BilingualKeywords {
    pub en: Option<Vec<Keyword>>,
    pub fr: Option<Vec<Keyword>>,
}

impl BilingualKeywords {
    pub fn get(&self, language: Language) -> Option<&[Keyword]> {
        match language {
            Language::English => self.en.as_deref(),
            Language::French => self.fr.as_deref(),
        }
    }

    /// Serialize each language to a JSON array of `{word, weight}` objects.
    /// Accented characters are written as-is, not escaped.
    pub fn to_json(&self) -> serde_json::Result<(Option<String>, Option<String>)> {
        Ok((to_json(self.en.as_deref())?, to_json(self.fr.as_deref())?))
    }
}

fn to_json(keywords: Option<&[Keyword]>) -> serde_json::Result<Option<String>> {
    keywords.map(serde_json::to_string).transpose()
}

/// Extract keywords for both languages of one document.
pub fn extract_document_keywords<D: SourceText>(
    text_en: Option<&str>,
    text_fr: Option<&str>,
    corpus_en: &[D],
    corpus_fr: &[D],
    top_n: usize,
) -> BilingualKeywords {
    extract_document_keywords_with(
        &Tokenizer::default(),
        text_en,
        text_fr,
        corpus_en,
        corpus_fr,
        top_n,
    )
}

pub fn extract_document_keywords_with<D: SourceText>(
    tokenizer: &Tokenizer,
    text_en: Option<&str>,
    text_fr: Option<&str>,
    corpus_en: &[D],
    corpus_fr: &[D],
    top_n: usize,
) -> BilingualKeywords {
    BilingualKeywords {
        en: extract_language(tokenizer, Language::English, text_en, corpus_en, top_n),
        fr: extract_language(tokenizer, Language::French, text_fr, corpus_fr, top_n),
    }
}

/// Same as `extract_document_keywords`, returning the serialized lists ready
/// for storage.
pub fn extract_bilingual<D: SourceText>(
    text_en: Option<&str>,
    text_fr: Option<&str>,
    corpus_en: &[D],
    corpus_fr: &[D],
    top_n: usize,
) -> serde_json::Result<(Option<String>, Option<String>)> {
    extract_document_keywords(text_en, text_fr, corpus_en, corpus_fr, top_n).to_json()
}

fn extract_language<D: SourceText>(
    tokenizer: &Tokenizer,
    language: Language,
    text: Option<&str>,
    corpus: &[D],
    top_n: usize,
) -> Option<Vec<Keyword>> {
    let text = text.filter(|t| !t.is_empty())?;
    if corpus.is_empty() {
        debug!(%language, "No session corpus, skipping language");
        return None;
    }

    // Built fresh on every call: corpora never leak between languages or documents
    let corpus = SessionCorpus::build_with(tokenizer, corpus);
    let keywords = corpus.extract_with(tokenizer, text, top_n);

    info!(
        %language,
        corpus_documents = corpus.total_documents(),
        keywords = keywords.len(),
        "Extracted keywords"
    );

    (!keywords.is_empty()).then_some(keywords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::corpus::Document;

    fn french_corpus() -> Vec<Document> {
        vec![
            Document::new("1", "débat climatique"),
            Document::new("2", "débat économique"),
        ]
    }

    #[test]
    fn test_missing_english_is_no_result() {
        let result =
            extract_document_keywords(Some(""), Some("débat climatique"), &[], &french_corpus(), 20);
        assert!(result.en.is_none());

        let fr = result.fr.expect("French keywords");
        let words: Vec<&str> = fr.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, vec!["climatique", "débat"]);
    }

    #[test]
    fn test_serialized_output_keeps_accents() {
        let (en, fr) =
            extract_bilingual(None, Some("débat climatique"), &[], &french_corpus(), 20).unwrap();
        assert!(en.is_none());
        let fr = fr.unwrap();
        assert_eq!(
            fr,
            r#"[{"word":"climatique","weight":1.0},{"word":"débat","weight":0.0}]"#
        );
    }

    #[test]
    fn test_text_without_corpus_is_no_result() {
        let result = extract_document_keywords::<Document>(
            Some("fisheries quota"),
            None,
            &[],
            &[],
            20,
        );
        assert_eq!(result, BilingualKeywords::default());
    }

    #[test]
    fn test_no_keywords_is_no_result() {
        let corpus = vec![Document::new("1", "fisheries quota")];
        let result = extract_document_keywords(Some("the speaker"), None, &corpus, &[], 20);
        assert!(result.en.is_none(), "empty list must collapse to no result");
    }

    #[test]
    fn test_languages_use_separate_corpora() {
        // "pipeline" is everywhere in English but rare in the French corpus
        let en_corpus = vec![
            Document::new("1", "pipeline approval"),
            Document::new("2", "pipeline expansion"),
        ];
        let fr_corpus = vec![
            Document::new("1", "pipeline approbation"),
            Document::new("2", "expansion"),
            Document::new("3", "approbation"),
        ];
        let result = extract_document_keywords(
            Some("pipeline approval"),
            Some("pipeline approbation"),
            &en_corpus,
            &fr_corpus,
            20,
        );

        let en = result.get(Language::English).unwrap();
        assert_eq!(en[0].word, "approval");
        assert_eq!(en.iter().find(|k| k.word == "pipeline").unwrap().weight, 0.0);

        let fr = result.get(Language::French).unwrap();
        assert_eq!(fr[0].word, "pipeline");
    }
}
