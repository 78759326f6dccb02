// Tokenizer for bilingual transcripts.
//
// Steps, in order:
//   1. lowercase the whole text
//   2. drop the English possessive `'s` where it ends a word
//   3. split into runs of word characters (Unicode letters, digits, `_`) and
//      hyphens; hyphens only survive inside a token, never at its edges
//   4. drop stop words, tokens shorter than 3 characters, and all-digit tokens
//
// Accented letters are ordinary word characters, so "économique" stays whole,
// while quotes, em-dashes and other punctuation split tokens.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::keyword::Language;
use super::stopwords;

/// Shortest token (in characters) that can become a keyword.
pub const MIN_TOKEN_CHARS: usize = 3;

static DEFAULT_TOKENIZER: LazyLock<Tokenizer> = LazyLock::new(Tokenizer::new);

/// Tokenize with the curated parliamentary stop-word set.
pub fn tokenize(text: &str) -> Vec<String> {
    DEFAULT_TOKENIZER.tokenize(text)
}

/// Text-to-token converter.
///
/// Always filters the curated parliamentary set; any extra stop words are
/// checked on top of it.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    extra_stop_words: HashSet<String>,
}

impl Tokenizer {
    /// Tokenizer using only the curated set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Curated set plus the generic English and French lists.
    pub fn extended() -> Self {
        Self::extended_for(&Language::ALL)
    }

    /// Curated set plus the generic lists of the given languages.
    pub fn extended_for(languages: &[Language]) -> Self {
        let words = languages
            .iter()
            .flat_map(|&lang| stopwords::generic_stop_words(lang));
        Self::with_extra_stop_words(words)
    }

    /// Curated set plus caller-supplied words (matched case-insensitively).
    pub fn with_extra_stop_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extra_stop_words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        stopwords::is_stop_word(word)
            || (!self.extra_stop_words.is_empty()
                && self.extra_stop_words.contains(&word.to_lowercase()))
    }

    /// Split `text` into filtered lowercase tokens, in order of occurrence.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let lowered = strip_possessives(&text.to_lowercase());

        lowered
            .split(|c: char| !is_token_char(c))
            .map(|run| run.trim_matches('-'))
            .filter(|token| self.keeps(token))
            .map(str::to_string)
            .collect()
    }

    fn keeps(&self, token: &str) -> bool {
        token.chars().count() >= MIN_TOKEN_CHARS
            && !token.chars().all(|c| c.is_ascii_digit())
            && !self.is_stop_word(token)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_token_char(c: char) -> bool {
    is_word_char(c) || c == '-'
}

/// Remove every `'s` that is followed by a non-word character or the end of text.
fn strip_possessives(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find("'s") {
        let after = &rest[pos + 2..];
        out.push_str(&rest[..pos]);
        let ends_word = !after.chars().next().is_some_and(is_word_char);
        if !ends_word {
            out.push_str("'s");
        }
        rest = after;
    }
    out.push_str(rest);
    out
}
