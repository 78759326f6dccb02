// Stop words for parliamentary transcripts.
//
// The curated set below is the filtering contract: generic English and French
// function words plus the vocabulary every Hansard sitting is full of (titles,
// chamber and committee nouns, party names, procedure). None of those tell you
// what a particular debate was about, so they never become keywords.
//
// The larger generic lists from the `stop-words` crate can be merged in on top
// (see `Tokenizer::extended`), but they are opt-in.

use std::collections::HashSet;
use std::sync::LazyLock;

use stop_words::{get, LANGUAGE};

use super::keyword::Language;

const ENGLISH: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
    "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
    "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me", "when", "make",
    "can", "like", "time", "no", "just", "him", "know", "take", "people", "into", "year",
    "your", "good", "some", "could", "them", "see", "other", "than", "then", "now", "look",
    "only", "come", "its", "over", "think", "also", "back", "after", "use", "two", "how", "our",
    "work", "first", "well", "way", "even", "new", "want", "because", "any", "these", "give",
    "day", "most", "us", "is", "was", "are", "been", "has", "had", "were", "said", "did",
    "having", "may", "should", "am", "being", "very",
];

const FRENCH: &[&str] = &[
    "le", "la", "les", "de", "un", "une", "des", "du", "et", "en", "à", "dans", "pour", "que",
    "qui", "par", "sur", "avec", "au", "ce", "cette", "ces", "il", "elle", "on", "nous", "vous",
    "ils", "elles", "mon", "ma", "mes", "son", "sa", "ses", "notre", "nos", "leur", "leurs",
    "est", "sont", "été", "avoir", "être", "faire", "dit", "ça", "tout", "tous", "toute",
    "toutes",
];

const PARLIAMENTARY: &[&str] = &[
    // English
    "mr", "mrs", "ms", "hon", "honourable", "member", "members", "speaker", "chair",
    "chairman", "chairwoman", "chairperson", "madam", "sir", "committee", "house", "commons",
    "parliament", "parliamentary", "motion", "question", "answer", "minister", "prime",
    "opposition", "liberal", "conservative", "ndp", "bloc", "green", "party", "riding",
    "constituency", "vote", "voted", "voting",
    // French
    "député", "députée", "députés", "ministre", "président", "présidente", "monsieur",
    "madame", "mesdames", "messieurs", "comité", "chambre",
];

/// The curated bilingual set, built once on first use.
pub static PARLIAMENTARY_STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ENGLISH
        .iter()
        .chain(FRENCH)
        .chain(PARLIAMENTARY)
        .copied()
        .collect()
});

/// Check membership in the curated set. Matching is exact after lowercasing.
pub fn is_stop_word(word: &str) -> bool {
    if word.chars().any(char::is_uppercase) {
        PARLIAMENTARY_STOP_WORDS.contains(word.to_lowercase().as_str())
    } else {
        PARLIAMENTARY_STOP_WORDS.contains(word)
    }
}

/// Generic stop-word list for one language, from the `stop-words` crate.
pub fn generic_stop_words(language: Language) -> Vec<String> {
    let list = match language {
        Language::English => LANGUAGE::English,
        Language::French => LANGUAGE::French,
    };
    get(list).into_iter().map(|w| w.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_category() {
        // generic English, generic French, domain English, domain French
        for word in ["the", "because", "dans", "cette", "speaker", "riding", "député", "chambre"] {
            assert!(is_stop_word(word), "{word} should be a stop word");
        }
    }

    #[test]
    fn membership_is_case_insensitive() {
        assert!(is_stop_word("Speaker"));
        assert!(is_stop_word("COMITÉ"));
        assert!(is_stop_word("Député"));
    }

    #[test]
    fn membership_is_exact() {
        // Prefixes and inflections that are not listed stay in
        assert!(!is_stop_word("speakers"));
        assert!(!is_stop_word("committees"));
        assert!(!is_stop_word("climate"));
        assert!(!is_stop_word("débat"));
    }
}
