// Composition tests — verifying that the pipeline stages chain together.
//
// These tests exercise the data flow between modules:
//   input files -> corpus -> TF-IDF ranking -> bilingual packaging -> JSON
// without touching anything but temporary files.

use std::io::Write;

use hansard_keywords::input::{load_documents, read_text};
use hansard_keywords::{
    build_corpus, extract_bilingual, extract_document_keywords, extract_keywords, Document,
    Keyword, KeywordExtractor, Language, SessionCorpus, TfIdfExtractor,
};

fn words(keywords: &[Keyword]) -> Vec<&str> {
    keywords.iter().map(|k| k.word.as_str()).collect()
}

// ============================================================
// Chain: corpus -> TF-IDF
// ============================================================

#[test]
fn ubiquitous_term_ranks_below_rare_terms() {
    let docs = vec![
        Document::new("a", "climate change policy"),
        Document::new("b", "economic policy reform"),
        Document::new("c", "climate policy debate"),
    ];
    let doc_freq = build_corpus(&docs);
    assert_eq!(doc_freq["policy"], 3);

    let keywords = extract_keywords("climate change policy", &doc_freq, docs.len(), 2);
    assert_eq!(words(&keywords), vec!["change", "climate"]);
}

#[test]
fn session_corpus_reuse_matches_one_shot_extraction() {
    let docs = vec![
        Document::new("a", "Fisheries quotas for the Atlantic coast"),
        Document::new("b", "Atlantic salmon stocks and aquaculture licences"),
        Document::new("c", "Rural broadband funding in the Atlantic provinces"),
    ];
    let session = SessionCorpus::build(&docs);
    let doc_freq = build_corpus(&docs);

    for doc in &docs {
        let text = doc.text.as_deref().unwrap();
        assert_eq!(
            session.extract(text, 5),
            extract_keywords(text, &doc_freq, docs.len(), 5),
            "reused corpus must give the same result for {:?}",
            doc.id
        );
    }
}

#[test]
fn extractor_trait_chains_corpus_and_scoring() {
    let extractor = TfIdfExtractor {
        top_n: 3,
        ..Default::default()
    };
    let posts = [
        "Pharmacare legislation tabled today",
        "Dental care expansion and pharmacare costs",
        "Housing accelerator fund announced",
    ];
    let corpus = extractor.build_corpus(&posts);
    let keywords = extractor.extract(posts[0], &corpus);

    assert!(keywords.len() <= 3);
    assert_eq!(keywords[0].weight, 1.0);
    assert!(
        words(&keywords).iter().all(|w| *w != "pharmacare"),
        "pharmacare is shared, the distinctive terms should win: {keywords:?}"
    );
}

// ============================================================
// Chain: bilingual packaging
// ============================================================

#[test]
fn bilingual_without_english_returns_only_french() {
    let corpus_fr = vec![
        Document::new("1", "débat climatique"),
        Document::new("2", "débat économique"),
    ];
    let (en, fr) =
        extract_bilingual::<Document>(Some(""), Some("débat climatique"), &[], &corpus_fr, 20)
            .unwrap();

    assert!(en.is_none());
    let fr = fr.expect("French result");
    assert!(fr.contains("climatique"));
    assert!(fr.contains("débat"), "accents are not escaped: {fr}");

    let parsed: Vec<Keyword> = serde_json::from_str(&fr).unwrap();
    assert_eq!(words(&parsed), vec!["climatique", "débat"]);
}

#[test]
fn bilingual_runs_both_languages_independently() {
    let corpus_en = vec![
        Document::new("1", "Softwood lumber tariffs"),
        Document::new("2", "Dairy supply management"),
    ];
    let corpus_fr = vec![
        Document::new("1", "Tarifs sur le bois d'oeuvre"),
        Document::new("2", "Gestion de l'offre laitière"),
    ];
    let result = extract_document_keywords(
        Some("Softwood lumber tariffs"),
        Some("Tarifs sur le bois d'oeuvre"),
        &corpus_en,
        &corpus_fr,
        20,
    );

    let en = words(result.get(Language::English).unwrap());
    let fr = words(result.get(Language::French).unwrap());
    assert!(en.contains(&"softwood"));
    assert!(fr.contains(&"bois"));
    assert!(!en.contains(&"bois") && !fr.contains(&"softwood"));
}

// ============================================================
// Chain: files -> corpus -> keywords
// ============================================================

#[test]
fn corpus_file_feeds_extraction() {
    let dir = tempfile::tempdir().unwrap();

    let corpus_path = dir.path().join("session.jsonl");
    let mut corpus_file = std::fs::File::create(&corpus_path).unwrap();
    writeln!(corpus_file, r#"{{"id": "d1", "text": "climate change policy"}}"#).unwrap();
    writeln!(corpus_file, r#"{{"id": "d2", "text": "economic policy reform"}}"#).unwrap();
    writeln!(corpus_file, r#"{{"id": "d3", "text": "climate policy debate"}}"#).unwrap();
    writeln!(corpus_file, r#"{{"id": "d4"}}"#).unwrap();

    let doc_path = dir.path().join("d1.txt");
    std::fs::write(&doc_path, "Climate change policy").unwrap();

    let docs = load_documents(&corpus_path).unwrap();
    let text = read_text(&doc_path).unwrap();
    assert_eq!(docs.len(), 4);

    let session = SessionCorpus::build(&docs);
    assert_eq!(session.total_documents(), 4, "text-less records still count");

    let keywords = session.extract(&text, 20);
    assert_eq!(words(&keywords), vec!["change", "climate", "policy"]);
    // policy is in 3 of 4 documents, so it is no longer exactly zero
    assert!(keywords[2].weight > 0.0);
}

#[test]
fn missing_corpus_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_documents(&dir.path().join("nope.json")).unwrap_err();
    assert!(err.to_string().contains("nope.json"));
}
