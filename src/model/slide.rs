//! Slide-level types.

use super::{ContentType, Zones};
use serde::{Deserialize, Serialize};

/// Placement hint for an image on a slide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImagePlacement {
    #[default]
    Auto,
    Background,
    Left,
    Right,
    Center,
    Inline,
}

/// An image referenced by a slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideImage {
    /// Opaque handle understood by the extraction and rendering collaborators
    pub path: String,

    /// Pixel width (0 when unknown)
    #[serde(default)]
    pub width: u32,

    /// Pixel height (0 when unknown)
    #[serde(default)]
    pub height: u32,

    /// File extension without the dot
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ext: String,

    /// Optional caption / alt text
    #[serde(default, alias = "alt_text", skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Placement hint
    #[serde(default)]
    pub placement: ImagePlacement,
}

impl SlideImage {
    /// Create an image reference with only a handle.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            width: 0,
            height: 0,
            ext: String::new(),
            caption: None,
            placement: ImagePlacement::Auto,
        }
    }

    /// Set the caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Set pixel dimensions.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// One slide's classified content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideContent {
    /// Slide number (1-indexed, contiguous across the document)
    pub number: u32,

    /// Title text
    #[serde(default)]
    pub title: String,

    /// Body text
    #[serde(default)]
    pub body: String,

    /// Speaker notes (informational)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub speaker_notes: String,

    /// Classified content type
    #[serde(default)]
    pub content_type: ContentType,

    /// Advisory layout override; wins over classifier inference
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub layout_hint: String,

    /// Images in presentation order
    #[serde(default)]
    pub images: Vec<SlideImage>,

    /// Structured payload for the content type, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zones: Option<Zones>,

    /// Free-text extraction diagnostics (informational)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extraction_notes: Vec<String>,
}

impl SlideContent {
    /// Create an unclassified slide.
    pub fn new(number: u32, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            body: body.into(),
            speaker_notes: String::new(),
            content_type: ContentType::Auto,
            layout_hint: String::new(),
            images: Vec::new(),
            zones: None,
            extraction_notes: Vec::new(),
        }
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Set the zones payload.
    pub fn with_zones(mut self, zones: Zones) -> Self {
        self.zones = Some(zones);
        self
    }

    /// Add an image.
    pub fn with_image(mut self, image: SlideImage) -> Self {
        self.images.push(image);
        self
    }

    /// Set the layout hint.
    pub fn with_layout_hint(mut self, hint: impl Into<String>) -> Self {
        self.layout_hint = hint.into();
        self
    }

    /// Check if the slide has no title, body or images.
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.body.trim().is_empty() && self.images.is_empty()
    }

    /// Record an extraction note.
    pub fn add_note(&mut self, note: impl Into<String>) {
        self.extraction_notes.push(note.into());
    }
}
