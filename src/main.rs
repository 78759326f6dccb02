use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{info, warn};

use hansard_keywords::config::Config;
use hansard_keywords::input;
use hansard_keywords::keywords::bilingual;
use hansard_keywords::keywords::corpus::{Document, SessionCorpus};
use hansard_keywords::keywords::keyword::{Keyword, Language};
use hansard_keywords::keywords::tokenizer::Tokenizer;
use hansard_keywords::output::terminal;

/// hansard-keywords: TF-IDF keyword extraction for parliamentary transcripts.
///
/// Scores a document's terms against the other documents of the same session,
/// separately for English and French.
#[derive(Parser)]
#[command(name = "hansard-keywords", version, about)]
struct Cli {
    /// Merge generic English/French stop-word lists into the parliamentary set
    #[arg(long, global = true)]
    extended_stopwords: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the tokens a text produces after filtering
    Tokenize {
        /// Text file to tokenize
        file: Option<PathBuf>,

        /// Inline text (used instead of a file)
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
    },

    /// Extract keywords for one document against a session corpus
    Extract {
        /// Plain-text file holding the document
        #[arg(long)]
        document: PathBuf,

        /// Session corpus (JSON array or JSON Lines of {id, text})
        #[arg(long)]
        corpus: PathBuf,

        /// Keywords to keep (default: HANSARD_TOP_N or 20)
        #[arg(long)]
        top_n: Option<usize>,

        /// Language of the document, selects the generic stop-word list
        #[arg(long, default_value = "en")]
        lang: Language,

        /// Print JSON instead of a chart
        #[arg(long)]
        json: bool,
    },

    /// Extract English and French keywords for one document
    Bilingual {
        /// English document text
        #[arg(long)]
        text_en: Option<PathBuf>,

        /// French document text
        #[arg(long)]
        text_fr: Option<PathBuf>,

        /// English session corpus
        #[arg(long)]
        corpus_en: Option<PathBuf>,

        /// French session corpus
        #[arg(long)]
        corpus_fr: Option<PathBuf>,

        /// Keywords to keep per language (default: HANSARD_TOP_N or 20)
        #[arg(long)]
        top_n: Option<usize>,

        /// Print the serialized results instead of charts
        #[arg(long)]
        json: bool,
    },

    /// Extract keywords for every document of a session corpus
    Session {
        /// Session corpus (JSON array or JSON Lines of {id, text})
        corpus: PathBuf,

        /// Keywords to keep per document (default: HANSARD_TOP_N or 20)
        #[arg(long)]
        top_n: Option<usize>,

        /// Language of the corpus, selects the generic stop-word list
        #[arg(long, default_value = "en")]
        lang: Language,

        /// Emit JSON Lines ({id, keywords}) instead of a summary table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct SessionRecord<'a> {
    id: &'a str,
    keywords: &'a [Keyword],
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so JSON on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hansard_keywords=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;
    if cli.extended_stopwords {
        config.extended_stop_words = true;
    }

    match cli.command {
        Commands::Tokenize { file, text } => {
            let text = match (file, text) {
                (_, Some(text)) => text,
                (Some(file), None) => input::read_text(&file)?,
                (None, None) => anyhow::bail!("Pass a file or --text to tokenize"),
            };
            let tokens = config.tokenizer().tokenize(&text);
            terminal::display_tokens(&tokens);
        }

        Commands::Extract {
            document,
            corpus,
            top_n,
            lang,
            json,
        } => {
            let top_n = top_n.unwrap_or(config.top_n);
            let tokenizer = tokenizer_for(&config, &[lang]);
            let text = input::read_text(&document)?;
            let documents = input::load_documents(&corpus)?;

            if documents.is_empty() {
                warn!(corpus = %corpus.display(), "Corpus is empty, nothing to score against");
            }

            let session = SessionCorpus::build_with(&tokenizer, &documents);
            let keywords = session.extract_with(&tokenizer, &text, top_n);

            if json {
                println!("{}", serde_json::to_string(&keywords)?);
            } else {
                let title = format!(
                    "Keywords for {} ({} documents in session)",
                    file_label(&document),
                    session.total_documents()
                );
                terminal::display_keywords(&title, &keywords);
            }
        }

        Commands::Bilingual {
            text_en,
            text_fr,
            corpus_en,
            corpus_fr,
            top_n,
            json,
        } => {
            let top_n = top_n.unwrap_or(config.top_n);
            let tokenizer = tokenizer_for(&config, &Language::ALL);

            let text_en = text_en.as_deref().map(input::read_text).transpose()?;
            let text_fr = text_fr.as_deref().map(input::read_text).transpose()?;
            let corpus_en = load_optional_corpus(corpus_en.as_deref())?;
            let corpus_fr = load_optional_corpus(corpus_fr.as_deref())?;

            let result = bilingual::extract_document_keywords_with(
                &tokenizer,
                text_en.as_deref(),
                text_fr.as_deref(),
                &corpus_en,
                &corpus_fr,
                top_n,
            );

            if json {
                let (en, fr) = result.to_json()?;
                println!("{}", en.as_deref().unwrap_or("null"));
                println!("{}", fr.as_deref().unwrap_or("null"));
            } else {
                for language in Language::ALL {
                    terminal::display_language(language, result.get(language));
                }
            }
        }

        Commands::Session {
            corpus,
            top_n,
            lang,
            json,
        } => {
            let top_n = top_n.unwrap_or(config.top_n);
            let tokenizer = tokenizer_for(&config, &[lang]);
            let documents = input::load_documents(&corpus)?;

            // One corpus for the whole session, reused for every document
            let session = SessionCorpus::build_with(&tokenizer, &documents);
            info!(
                documents = session.total_documents(),
                terms = session.doc_freq().len(),
                "Session corpus ready"
            );

            let pb = ProgressBar::new(documents.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("  Extracting [{bar:30}] {pos}/{len} ({eta})")
                    .context("Invalid progress bar template")?,
            );

            let mut results = Vec::with_capacity(documents.len());
            for (i, doc) in documents.iter().enumerate() {
                let keywords = session.extract_with(&tokenizer, document_text(doc), top_n);
                results.push((document_id(doc, i), keywords));
                pb.inc(1);
            }
            pb.finish_and_clear();

            if json {
                for (id, keywords) in &results {
                    let record = SessionRecord { id, keywords };
                    println!("{}", serde_json::to_string(&record)?);
                }
            } else {
                println!(
                    "\n{}",
                    format!(
                        "=== Session keywords ({} documents) ===",
                        results.len()
                    )
                    .bold()
                );
                println!();
                for (id, keywords) in &results {
                    terminal::display_session_row(id, keywords, 8);
                }
                println!();
            }
        }
    }

    Ok(())
}

/// The configured tokenizer; with extended stop words, only the lists for
/// `languages` are merged in.
fn tokenizer_for(config: &Config, languages: &[Language]) -> Tokenizer {
    if config.extended_stop_words {
        Tokenizer::extended_for(languages)
    } else {
        config.tokenizer()
    }
}

fn load_optional_corpus(path: Option<&Path>) -> Result<Vec<Document>> {
    match path {
        Some(path) => input::load_documents(path),
        None => Ok(Vec::new()),
    }
}

fn document_text(doc: &Document) -> &str {
    doc.text.as_deref().unwrap_or("")
}

fn document_id(doc: &Document, index: usize) -> String {
    doc.id.clone().unwrap_or_else(|| format!("#{}", index + 1))
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
