//! Integration tests for the content document model.

use deckplan::model::{
    from_legacy_slides, to_legacy_slides, validate_content_json, ContentDocument, ContentType,
    LegacySlide, Metadata, SlideContent, SlideImage, StatZone, Zones,
};
use deckplan::{Error, JsonFormat};
use tempfile::tempdir;

fn sample_document() -> ContentDocument {
    ContentDocument::new(
        Metadata::new("decks/q3.pptx", ".PPTX"),
        vec![
            SlideContent::new(1, "Q3 Review", "Northwind Traders")
                .with_content_type(ContentType::TitleOpening),
            SlideContent::new(2, "Key Metrics", "87% retention\n3x growth")
                .with_content_type(ContentType::StatsDashboard)
                .with_zones(Zones::stats(vec![
                    StatZone::new("87%", "retention"),
                    StatZone::new("3x", "growth"),
                ])),
            SlideContent::new(3, "Thank you", "Questions?").with_content_type(ContentType::Closing),
        ],
    )
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("content.json");

    let doc = sample_document();
    doc.save(&path).unwrap();
    let loaded = ContentDocument::load(&path).unwrap();

    assert_eq!(loaded, doc);
    assert_eq!(loaded.metadata.source_format, "pptx");
}

#[test]
fn test_save_is_byte_stable() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    let mut doc = sample_document();
    doc.slides[0].images.push(
        SlideImage::new("media/cover.png")
            .with_size(1920, 1080)
            .with_caption("Cover"),
    );
    doc.save(&first).unwrap();
    ContentDocument::load(&first).unwrap().save(&second).unwrap();

    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
}

#[test]
fn test_blank_or_foreign_timestamps_load() {
    let load = |generated_at: &str| {
        let json = format!(
            r#"{{
                "version": "1.0",
                "metadata": {{"source_file": "deck.pptx", "source_format": "pptx", "generated_at": "{}"}},
                "slides": [{{"number": 1, "title": "Hello", "body": ""}}]
            }}"#,
            generated_at
        );
        ContentDocument::from_json_str(&json).unwrap().metadata.generated_at
    };

    assert_eq!(load(""), None);
    assert_eq!(load("last tuesday"), None);
    assert!(load("2024-05-01T09:30:00.123456").is_some());
    assert!(load("2024-05-01T09:30:00Z").is_some());
}

#[test]
fn test_alt_text_loads_as_caption() {
    let json = r#"{
        "version": "1.0",
        "metadata": {"source_file": "deck.pptx", "source_format": "pptx"},
        "slides": [{
            "number": 1, "title": "Team", "body": "",
            "images": [{"path": "media/team.jpg", "alt_text": "Team photo"}]
        }]
    }"#;
    let doc = ContentDocument::from_json_str(json).unwrap();
    assert_eq!(doc.slides[0].images[0].caption.as_deref(), Some("Team photo"));
    assert!(doc.to_json(JsonFormat::Compact).unwrap().contains("\"caption\":\"Team photo\""));

    let records: Vec<LegacySlide> = serde_json::from_str(
        r#"[{"title": "Team", "body": "", "images": [{"path": "media/team.jpg", "alt_text": "Team photo"}]}]"#,
    )
    .unwrap();
    let doc = from_legacy_slides(records, "deck.pptx", "pptx");
    assert_eq!(doc.slides[0].images[0].caption.as_deref(), Some("Team photo"));
}

#[test]
fn test_numbering_runs_one_to_n() {
    let doc = sample_document();
    let numbers: Vec<u32> = doc.slides_in_order().iter().map(|s| s.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn test_unsupported_major_version_is_format_error() {
    let json = r#"{
        "version": "9.9",
        "metadata": {"source_file": "deck.pptx", "source_format": "pptx"},
        "slides": [{"number": 1, "title": "Hello", "body": ""}]
    }"#;
    let err = ContentDocument::from_json_str(json).unwrap_err();
    assert!(err.is_format(), "unexpected error: {}", err);
}

#[test]
fn test_minor_version_bump_is_accepted() {
    let json = r#"{
        "version": "1.7",
        "metadata": {"source_file": "deck.pptx", "source_format": "pptx"},
        "slides": [{"number": 1, "title": "Hello", "body": "", "content_type": "statement"}]
    }"#;
    let doc = ContentDocument::from_json_str(json).unwrap();
    assert_eq!(doc.slides[0].content_type, ContentType::Statement);
}

#[test]
fn test_invalid_json_is_format_error() {
    let err = ContentDocument::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, Error::Format(_)));
}

#[test]
fn test_validation_reports_every_violation() {
    let json = r#"{
        "version": "1.0",
        "metadata": {"source_file": "deck.pptx", "source_format": "pptx"},
        "slides": [
            {"number": 1, "title": "A", "body": ""},
            {"number": 3, "title": "B", "body": ""},
            {"number": 4, "title": "C", "body": ""}
        ]
    }"#;
    let err = ContentDocument::from_json_str(json).unwrap_err();
    let violations = err.violations().expect("validation error");
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0].path, "slides[1].number");
    assert_eq!(violations[1].path, "slides[2].number");
}

#[test]
fn test_mismatched_zones_fail_validation() {
    let doc = ContentDocument::new(
        Metadata::new("deck.pptx", "pptx"),
        vec![SlideContent::new(1, "Hello", "")
            .with_content_type(ContentType::Quote)
            .with_zones(Zones::stats(vec![StatZone::new("1", "a")]))],
    );
    assert!(!doc.validate().is_empty());
    assert!(matches!(doc.ensure_valid(), Err(Error::Validation(_))));
}

#[test]
fn test_compact_json_is_single_line() {
    let json = sample_document().to_json(JsonFormat::Compact).unwrap();
    assert!(!json.contains('\n'));
    assert!(json.contains("\"stats_dashboard\""));
}

#[test]
fn test_legacy_conversion_renumbers_and_keeps_hints() {
    let records = vec![
        LegacySlide::new("Welcome", ""),
        LegacySlide::new("KPIs", "").with_zones(Zones::stats(vec![StatZone::new("5", "teams")])),
    ];
    let doc = from_legacy_slides(records, "deck.pptx", "pptx");

    assert_eq!(doc.slides[0].number, 1);
    assert_eq!(doc.slides[1].number, 2);
    assert_eq!(doc.slides[0].content_type, ContentType::Auto);
    assert!(doc.slides[1].zones.is_some());

    let back = to_legacy_slides(&doc);
    assert_eq!(back.len(), 2);
    assert_eq!(back[1].zones, doc.slides[1].zones);
}

#[test]
fn test_validate_content_json_collects_problems() {
    let dir = tempdir().unwrap();

    let missing = validate_content_json(dir.path().join("missing.json"));
    assert_eq!(missing.len(), 1);
    assert!(missing[0].starts_with("File not found"));

    let path = dir.path().join("content.json");
    sample_document().save(&path).unwrap();
    assert!(validate_content_json(&path).is_empty());

    std::fs::write(&path, "[]").unwrap();
    assert_eq!(validate_content_json(&path).len(), 1);
}

#[test]
fn test_retype_slide_rolls_back_on_violation() {
    let mut doc = sample_document();
    assert!(doc.retype_slide(2, ContentType::Quote).is_err());
    assert_eq!(doc.slides[1].content_type, ContentType::StatsDashboard);

    doc.retype_slide(3, ContentType::Statement).unwrap();
    assert_eq!(doc.slides[2].content_type, ContentType::Statement);
}
