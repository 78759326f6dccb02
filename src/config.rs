use std::env;

use anyhow::{Context, Result};

use crate::keywords::tfidf::DEFAULT_TOP_N;
use crate::keywords::tokenizer::Tokenizer;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// take precedence over anything set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Keywords kept per document (HANSARD_TOP_N, default 20)
    pub top_n: usize,
    /// Merge the generic English/French stop-word lists into the curated
    /// parliamentary set (HANSARD_EXTENDED_STOPWORDS, default off)
    pub extended_stop_words: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            extended_stop_words: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment, or a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let top_n = match lookup("HANSARD_TOP_N") {
            Some(raw) => raw.trim().parse::<usize>().with_context(|| {
                format!("HANSARD_TOP_N must be a non-negative integer, got '{raw}'")
            })?,
            None => DEFAULT_TOP_N,
        };

        let extended_stop_words = match lookup("HANSARD_EXTENDED_STOPWORDS") {
            Some(raw) => parse_flag(&raw).with_context(|| {
                format!("HANSARD_EXTENDED_STOPWORDS must be true or false, got '{raw}'")
            })?,
            None => false,
        };

        Ok(Self {
            top_n,
            extended_stop_words,
        })
    }

    /// The tokenizer this configuration asks for.
    pub fn tokenizer(&self) -> Tokenizer {
        if self.extended_stop_words {
            Tokenizer::extended()
        } else {
            Tokenizer::default()
        }
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("unrecognized flag value '{other}'"),
    }
}
