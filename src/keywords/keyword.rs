// Keyword results and the languages a transcript comes in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One extracted keyword.
///
/// Serializes as `{"word": ..., "weight": ...}`, which is the shape callers
/// persist alongside the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    /// Score relative to the best keyword of the same document, in [0, 1],
    /// rounded to 3 decimal places.
    pub weight: f64,
}

/// Language of a transcript. Each language is scored against its own corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    French,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::French];

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "fr" | "fra" | "fre" | "french" | "français" => Ok(Language::French),
            other => anyhow::bail!("Unknown language '{other}' (expected 'en' or 'fr')"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert_eq!("français".parse::<Language>().unwrap(), Language::French);
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_keyword_serializes_word_and_weight() {
        let kw = Keyword {
            word: "climatique".to_string(),
            weight: 0.5,
        };
        let json = serde_json::to_string(&kw).unwrap();
        assert_eq!(json, r#"{"word":"climatique","weight":0.5}"#);
    }
}
