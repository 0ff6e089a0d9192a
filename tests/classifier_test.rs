//! Integration tests for content classification.

use deckplan::classify::{Classifier, ClassifierOptions};
use deckplan::model::{ContentType, LegacySlide, StatZone, Zones};

fn deck() -> Vec<LegacySlide> {
    vec![
        LegacySlide::new("Q3 Review", "Northwind Traders"),
        LegacySlide::new("Part Two", ""),
        LegacySlide::new("Key Metrics", "87% retention\n3x growth"),
        LegacySlide::new("Impact", "92% retention"),
        LegacySlide::new("Getting Started", "1. Install\n2. Configure\n3. Deploy"),
        LegacySlide::new("", "\u{201C}The best decision we made this year.\u{201D}\n\u{2014} Jane Doe, CTO"),
        LegacySlide::new("", ""),
        LegacySlide::new("Thank you", "Questions?"),
    ]
}

fn types(records: Vec<LegacySlide>, options: ClassifierOptions) -> Vec<ContentType> {
    Classifier::new(options)
        .classify_records(records, "deck.pptx", "pptx")
        .slides
        .iter()
        .map(|s| s.content_type)
        .collect()
}

#[test]
fn test_typical_deck() {
    assert_eq!(
        types(deck(), ClassifierOptions::default()),
        vec![
            ContentType::TitleOpening,
            ContentType::SectionHeader,
            ContentType::StatsDashboard,
            ContentType::Statistic,
            ContentType::NumberedStep,
            ContentType::Quote,
            ContentType::Auto,
            ContentType::Closing,
        ]
    );
}

#[test]
fn test_dashboard_zones_are_extracted() {
    let doc = Classifier::default().classify_records(deck(), "deck.pptx", "pptx");
    assert_eq!(
        doc.slides[2].zones,
        Some(Zones::stats(vec![
            StatZone::new("87%", "retention"),
            StatZone::new("3x", "growth"),
        ]))
    );
}

#[test]
fn test_classification_is_deterministic() {
    let first = Classifier::default().classify_records(deck(), "deck.pptx", "pptx");
    let second = Classifier::default().classify_records(deck(), "deck.pptx", "pptx");
    assert_eq!(first.slides, second.slides);
}

#[test]
fn test_parallel_matches_sequential() {
    let parallel = types(deck(), ClassifierOptions::default());
    let sequential = types(deck(), ClassifierOptions::default().sequential());
    assert_eq!(parallel, sequential);
}

#[test]
fn test_numbering_and_validity() {
    let doc = Classifier::default().classify_records(deck(), "deck.pptx", "pptx");
    let numbers: Vec<u32> = doc.slides.iter().map(|s| s.number).collect();
    assert_eq!(numbers, (1..=8).collect::<Vec<u32>>());
    assert!(doc.validate().is_empty());
}

#[test]
fn test_unclassified_slide_carries_note() {
    let doc = Classifier::default().classify_records(deck(), "deck.pptx", "pptx");
    assert_eq!(doc.slides[6].content_type, ContentType::Auto);
    assert!(!doc.slides[6].extraction_notes.is_empty());
}

#[test]
fn test_explicit_hint_is_never_overridden() {
    let records = vec![
        LegacySlide::new("Welcome", "Quarterly review").with_content_type(ContentType::Statement),
        LegacySlide::new("Thank you", "Questions?").with_layout("quote"),
    ];
    assert_eq!(
        types(records, ClassifierOptions::default()),
        vec![ContentType::Statement, ContentType::Quote]
    );
}

#[test]
fn test_stricter_numbered_step_threshold() {
    let records = vec![
        LegacySlide::new("Intro", "Hello there"),
        LegacySlide::new("Getting Started", "1. Install\n2. Configure\n3. Deploy"),
        LegacySlide::new("End", "Bye"),
    ];
    let relaxed = types(records.clone(), ClassifierOptions::default());
    let strict = types(records, ClassifierOptions::default().with_min_numbered_steps(4));
    assert_eq!(relaxed[1], ContentType::NumberedStep);
    assert_ne!(strict[1], ContentType::NumberedStep);
}

#[test]
fn test_classify_document_fills_auto_slides_only() {
    let mut doc = Classifier::default().classify_records(deck(), "deck.pptx", "pptx");
    doc.slides[1].content_type = ContentType::Auto;
    doc.slides[3].content_type = ContentType::Statement;

    let changed = Classifier::default().classify_document(&mut doc);

    assert_eq!(changed, 1);
    assert_eq!(doc.slides[1].content_type, ContentType::SectionHeader);
    assert_eq!(doc.slides[3].content_type, ContentType::Statement);
}
