//! Conversion to and from the legacy slide record format.
//!
//! The extraction collaborator emits, and the rendering collaborator
//! consumes, flat slide records. Hints already present on a record
//! (`_content_type`, `_zones`) are carried through so nothing is re-detected.

use super::{ContentDocument, ContentType, Metadata, SlideContent, SlideImage, Zones};
use crate::model::ImagePlacement;
use serde::{Deserialize, Serialize};

/// A flat slide record as produced by extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacySlide {
    /// Slide number (advisory; conversion renumbers 1..N)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub body: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub speaker_notes: String,

    /// Layout name or content type hint
    #[serde(default, rename = "layout", alias = "layout_hint", skip_serializing_if = "String::is_empty")]
    pub layout: String,

    #[serde(default)]
    pub images: Vec<LegacyImage>,

    /// Explicit content type hint
    #[serde(default, rename = "_content_type", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,

    /// Explicit zones hint
    #[serde(default, rename = "_zones", skip_serializing_if = "Option::is_none")]
    pub zones: Option<Zones>,

    #[serde(default, rename = "_extraction_notes", skip_serializing_if = "Vec::is_empty")]
    pub extraction_notes: Vec<String>,
}

impl LegacySlide {
    /// Create a record with title and body only.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Default::default()
        }
    }

    /// Add an image handle.
    pub fn with_image(mut self, path: impl Into<String>) -> Self {
        self.images.push(LegacyImage::Path(path.into()));
        self
    }

    /// Set the content type hint.
    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// Set the zones hint.
    pub fn with_zones(mut self, zones: Zones) -> Self {
        self.zones = Some(zones);
        self
    }

    /// Set the layout hint.
    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }
}

/// An image in a legacy record: either a bare handle or a full object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LegacyImage {
    /// Bare handle
    Path(String),
    /// Full image record
    Detailed(SlideImage),
}

impl From<LegacyImage> for SlideImage {
    fn from(image: LegacyImage) -> Self {
        match image {
            LegacyImage::Path(path) => SlideImage::new(path),
            LegacyImage::Detailed(image) => image,
        }
    }
}

/// Build a content document from legacy slide records.
///
/// Slides are renumbered 1..N in record order. Records without a type
/// hint stay `auto`; use the classifier to infer their type.
pub fn from_legacy_slides(
    records: Vec<LegacySlide>,
    source_path: &str,
    source_format: &str,
) -> ContentDocument {
    let slides = records
        .into_iter()
        .enumerate()
        .map(|(i, record)| slide_from_record(i as u32 + 1, record))
        .collect();

    ContentDocument::new(Metadata::new(source_path, source_format), slides)
}

pub(crate) fn slide_from_record(number: u32, record: LegacySlide) -> SlideContent {
    SlideContent {
        number,
        title: record.title,
        body: record.body,
        speaker_notes: record.speaker_notes,
        content_type: record.content_type.unwrap_or_default(),
        layout_hint: record.layout,
        images: record.images.into_iter().map(SlideImage::from).collect(),
        zones: record.zones,
        extraction_notes: record.extraction_notes,
    }
}

/// Convert a content document back to legacy slide records.
///
/// The inverse of [`from_legacy_slides`] apart from informational fields.
pub fn to_legacy_slides(doc: &ContentDocument) -> Vec<LegacySlide> {
    doc.slides_in_order()
        .into_iter()
        .map(|slide| LegacySlide {
            number: Some(slide.number),
            title: slide.title.clone(),
            body: slide.body.clone(),
            speaker_notes: slide.speaker_notes.clone(),
            layout: slide.layout_hint.clone(),
            images: slide.images.iter().map(legacy_image).collect(),
            content_type: match slide.content_type {
                ContentType::Auto => None,
                other => Some(other),
            },
            zones: slide.zones.clone(),
            extraction_notes: slide.extraction_notes.clone(),
        })
        .collect()
}

fn legacy_image(image: &SlideImage) -> LegacyImage {
    let bare = image.width == 0
        && image.height == 0
        && image.ext.is_empty()
        && image.caption.is_none()
        && image.placement == ImagePlacement::Auto;
    if bare {
        LegacyImage::Path(image.path.clone())
    } else {
        LegacyImage::Detailed(image.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatZone;

    #[test]
    fn test_renumbers_in_order() {
        let mut a = LegacySlide::new("A", "");
        a.number = Some(7);
        let b = LegacySlide::new("B", "");
        let doc = from_legacy_slides(vec![a, b], "deck.pptx", "pptx");
        let numbers: Vec<u32> = doc.slides.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_parses_mixed_image_forms() {
        let json = r#"[{"title":"T","body":"","images":["a.png",{"path":"b.jpg","width":10,"height":20}]}]"#;
        let records: Vec<LegacySlide> = serde_json::from_str(json).unwrap();
        let doc = from_legacy_slides(records, "x", "pptx");
        let images = &doc.slides[0].images;
        assert_eq!(images[0].path, "a.png");
        assert_eq!(images[1].width, 10);
    }

    #[test]
    fn test_hints_are_carried() {
        let json = r#"[{"title":"Numbers","body":"","_content_type":"stats_dashboard",
            "_zones":{"type":"stats_dashboard","stats":[{"number":"1","label":"one"}]},
            "_extraction_notes":["merged two text frames"]}]"#;
        let records: Vec<LegacySlide> = serde_json::from_str(json).unwrap();
        let doc = from_legacy_slides(records, "x", "pptx");
        let slide = &doc.slides[0];
        assert_eq!(slide.content_type, ContentType::StatsDashboard);
        assert!(slide.zones.is_some());
        assert_eq!(slide.extraction_notes.len(), 1);
    }

    #[test]
    fn test_roundtrip_is_inverse() {
        let records = vec![
            LegacySlide::new("Opening", "Welcome").with_content_type(ContentType::TitleOpening),
            LegacySlide::new("Numbers", "")
                .with_content_type(ContentType::StatsDashboard)
                .with_zones(Zones::stats(vec![StatZone::new("87%", "Happy")])),
            LegacySlide::new("Photo", "").with_image("hero.jpg").with_layout("hero_photo"),
        ];
        let doc = from_legacy_slides(records, "deck.pptx", "pptx");
        let back = from_legacy_slides(to_legacy_slides(&doc), "deck.pptx", "pptx");
        assert_eq!(back.slides, doc.slides);
    }

    #[test]
    fn test_auto_is_not_emitted_as_hint() {
        let doc = from_legacy_slides(vec![LegacySlide::new("A", "")], "x", "pptx");
        let records = to_legacy_slides(&doc);
        assert!(records[0].content_type.is_none());
        let json = serde_json::to_value(&records[0]).unwrap();
        assert!(json.get("_content_type").is_none());
    }
}
