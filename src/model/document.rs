//! Document-level types.

use super::{validate, ContentType, SlideContent};
use crate::detect::{check_version, CURRENT_VERSION};
use crate::error::{Error, Result};
use crate::render::JsonFormat;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

/// Generator identifier written into new documents.
pub const GENERATOR: &str = concat!("deckplan/", env!("CARGO_PKG_VERSION"));

/// A classified presentation: the interchange format between extraction,
/// planning and rendering (`content.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDocument {
    /// Content format version (`major.minor`)
    pub version: String,

    /// Informational metadata
    pub metadata: Metadata,

    /// Slides in presentation order
    pub slides: Vec<SlideContent>,
}

impl ContentDocument {
    /// Create a document at the current version.
    pub fn new(metadata: Metadata, slides: Vec<SlideContent>) -> Self {
        Self {
            version: CURRENT_VERSION.to_string(),
            metadata,
            slides,
        }
    }

    /// Load a document from a JSON string.
    ///
    /// Fails with a format error when the JSON or its structure is invalid
    /// or the version is unsupported, and with [`Error::Validation`] when
    /// the structure parses but breaks a document invariant. No partial
    /// document is ever returned.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;

        let version = value
            .get("version")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::Format("missing string field 'version'".to_string()))?;
        check_version(version)?;

        let doc: ContentDocument = serde_json::from_value(value)?;
        doc.ensure_valid()?;
        Ok(doc)
    }

    /// Load a document from raw bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(data)
            .map_err(|e| Error::Format(format!("content is not UTF-8: {}", e)))?;
        Self::from_json_str(text)
    }

    /// Load a document from a file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use deckplan::ContentDocument;
    ///
    /// let doc = ContentDocument::load("content.json").unwrap();
    /// println!("{} slides", doc.slide_count());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Self::from_slice(&data)
    }

    /// Serialize the document.
    ///
    /// Output is deterministic: keys keep declaration order and slides are
    /// emitted in `number` order.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let mut slides: Vec<&SlideContent> = self.slides.iter().collect();
        slides.sort_by_key(|s| s.number);

        let view = DocumentView {
            version: &self.version,
            metadata: &self.metadata,
            slides,
        };
        crate::render::to_json(&view, format)
    }

    /// Save the document as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut json = self.to_json(JsonFormat::Pretty)?;
        json.push('\n');
        fs::write(path, json)?;
        Ok(())
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get a slide by number (1-indexed).
    pub fn get_slide(&self, number: u32) -> Option<&SlideContent> {
        self.slides.iter().find(|s| s.number == number)
    }

    /// Slides sorted by ascending number.
    pub fn slides_in_order(&self) -> Vec<&SlideContent> {
        let mut slides: Vec<&SlideContent> = self.slides.iter().collect();
        slides.sort_by_key(|s| s.number);
        slides
    }

    /// Check every invariant and return all violations.
    pub fn validate(&self) -> Vec<crate::error::Violation> {
        validate::validate(self)
    }

    /// Fail with [`Error::Validation`] if any invariant is violated.
    pub fn ensure_valid(&self) -> Result<()> {
        let violations = self.validate();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(violations))
        }
    }

    /// Apply an interactive content type correction.
    ///
    /// The document is re-validated; on failure the edit is rolled back and
    /// the violations are returned.
    pub fn retype_slide(&mut self, number: u32, content_type: ContentType) -> Result<()> {
        let slide = self
            .slides
            .iter_mut()
            .find(|s| s.number == number)
            .ok_or_else(|| {
                Error::Validation(vec![crate::error::Violation::new(
                    "slides",
                    format!("no slide numbered {}", number),
                )])
            })?;

        let previous = slide.content_type;
        slide.content_type = content_type;

        if let Err(e) = self.ensure_valid() {
            if let Some(slide) = self.slides.iter_mut().find(|s| s.number == number) {
                slide.content_type = previous;
            }
            return Err(e);
        }

        log::debug!(
            "slide {} retyped from {} to {}",
            number,
            previous,
            content_type
        );
        Ok(())
    }
}

#[derive(Serialize)]
struct DocumentView<'a> {
    version: &'a str,
    metadata: &'a Metadata,
    slides: Vec<&'a SlideContent>,
}

/// Document metadata. Informational only; never affects planning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Source file path
    #[serde(default)]
    pub source_file: String,

    /// Source format tag, lowercase without a leading dot (e.g. "pptx")
    #[serde(default, deserialize_with = "deserialize_format")]
    pub source_format: String,

    /// Generation timestamp. Empty or unparseable values load as `None`.
    #[serde(
        default,
        deserialize_with = "deserialize_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub generated_at: Option<DateTime<Utc>>,

    /// Generator identifier
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub generator: String,
}

impl Metadata {
    /// Create metadata for a source file, stamped now.
    pub fn new(source_file: impl Into<String>, source_format: &str) -> Self {
        Self {
            source_file: source_file.into(),
            source_format: normalize_format(source_format),
            generated_at: Some(Utc::now()),
            generator: GENERATOR.to_string(),
        }
    }
}

/// Lowercase a format tag and strip a leading dot.
pub fn normalize_format(format: &str) -> String {
    format.trim().trim_start_matches('.').to_lowercase()
}

fn deserialize_format<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(normalize_format(&raw))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

/// RFC 3339, or an ISO 8601 local time taken as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(ts) => Some(ts.and_utc()),
        Err(e) => {
            log::warn!("ignoring unparseable generated_at '{}': {}", raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StatZone, Zones};

    fn sample() -> ContentDocument {
        ContentDocument::new(
            Metadata::new("deck.pptx", ".PPTX"),
            vec![
                SlideContent::new(1, "Welcome", "Q3 review")
                    .with_content_type(ContentType::TitleOpening),
                SlideContent::new(2, "Numbers", "")
                    .with_content_type(ContentType::StatsDashboard)
                    .with_zones(Zones::stats(vec![
                        StatZone::new("87%", "Satisfaction"),
                        StatZone::new("3x", "Growth"),
                    ])),
            ],
        )
    }

    #[test]
    fn test_metadata_format_normalization() {
        let doc = sample();
        assert_eq!(doc.metadata.source_format, "pptx");

        let meta: Metadata =
            serde_json::from_str(r#"{"source_file":"a","source_format":".KEY"}"#).unwrap();
        assert_eq!(meta.source_format, "key");
    }

    #[test]
    fn test_json_roundtrip() {
        let doc = sample();
        let json = doc.to_json(JsonFormat::Pretty).unwrap();
        let loaded = ContentDocument::from_json_str(&json).unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_slides_emitted_in_number_order() {
        let mut doc = sample();
        doc.slides.reverse();
        let json = doc.to_json(JsonFormat::Compact).unwrap();
        let first = json.find("\"number\":1").unwrap();
        let second = json.find("\"number\":2").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_unsupported_version_is_format_error() {
        let mut doc = sample();
        doc.version = "9.9".to_string();
        let json = doc.to_json(JsonFormat::Compact).unwrap();
        let err = ContentDocument::from_json_str(&json).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_missing_version_is_format_error() {
        let err = ContentDocument::from_json_str(r#"{"metadata":{},"slides":[]}"#).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_retype_rolls_back_on_violation() {
        let mut doc = sample();
        let err = doc.retype_slide(2, ContentType::Quote).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(
            doc.get_slide(2).unwrap().content_type,
            ContentType::StatsDashboard
        );

        doc.retype_slide(1, ContentType::SectionHeader).unwrap();
        assert_eq!(
            doc.get_slide(1).unwrap().content_type,
            ContentType::SectionHeader
        );
    }
}
