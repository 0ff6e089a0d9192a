//! Layout recipe types.
//!
//! All geometry is in EMUs (English Metric Units, 914400 per inch).

use crate::model::ContentType;
use serde::Serialize;

/// EMUs per inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// EMUs per typographic point.
pub const EMU_PER_PT: i64 = 12_700;

/// Standard 4:3 slide width (10 in).
pub const DEFAULT_SLIDE_WIDTH: i64 = 9_144_000;

/// Standard 4:3 slide height (7.5 in).
pub const DEFAULT_SLIDE_HEIGHT: i64 = 6_858_000;

/// Position and size in EMUs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BoxPosition {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

impl BoxPosition {
    /// Create a box from EMU values.
    pub const fn new(x: i64, y: i64, cx: i64, cy: i64) -> Self {
        Self { x, y, cx, cy }
    }

    /// Create a box from inch measurements.
    pub fn from_inches(x: f64, y: f64, w: f64, h: f64) -> Self {
        let emu = |v: f64| (v * EMU_PER_INCH as f64) as i64;
        Self::new(emu(x), emu(y), emu(w), emu(h))
    }

    /// Area in square EMUs.
    pub fn area(&self) -> i128 {
        self.cx as i128 * self.cy as i128
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical text anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAnchor {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// A positioned text box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBoxSpec {
    pub name: String,
    pub position: BoxPosition,
    pub font_size_pt: u32,
    pub bold: bool,
    pub italic: bool,
    pub alignment: Alignment,
    /// RGB hex without '#'
    pub font_color: String,
    pub vertical_anchor: VerticalAnchor,
}

impl TextBoxSpec {
    /// Create a 14pt black, top-left aligned text box.
    pub fn new(name: impl Into<String>, position: BoxPosition) -> Self {
        Self {
            name: name.into(),
            position,
            font_size_pt: 14,
            bold: false,
            italic: false,
            alignment: Alignment::Left,
            font_color: "000000".to_string(),
            vertical_anchor: VerticalAnchor::Top,
        }
    }

    pub fn size(mut self, pt: u32) -> Self {
        self.font_size_pt = pt;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    pub fn color(mut self, rgb: &str) -> Self {
        self.font_color = rgb.to_string();
        self
    }

    pub fn anchor(mut self, anchor: VerticalAnchor) -> Self {
        self.vertical_anchor = anchor;
        self
    }
}

/// A positioned image frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageBoxSpec {
    pub name: String,
    pub position: BoxPosition,
}

impl ImageBoxSpec {
    pub fn new(name: impl Into<String>, position: BoxPosition) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// Background of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackgroundSpec {
    /// RGB hex without '#'
    pub color: String,
    /// Whether the first image fills the background
    pub image: bool,
}

impl Default for BackgroundSpec {
    fn default() -> Self {
        Self {
            color: "FFFFFF".to_string(),
            image: false,
        }
    }
}

/// Role of a box in a resolved placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxRole {
    Title,
    Body,
    Text,
    Image,
}

/// A named box with a role, as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedBox {
    pub name: String,
    pub role: BoxRole,
    pub position: BoxPosition,
}

/// A named, immutable set of absolute placement instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutRecipe {
    pub name: &'static str,
    pub description: &'static str,
    /// Content types this recipe is designed for, most specific first
    pub content_types: &'static [ContentType],
    pub title: Option<TextBoxSpec>,
    pub body: Option<TextBoxSpec>,
    pub extra_text_boxes: Vec<TextBoxSpec>,
    pub image_boxes: Vec<ImageBoxSpec>,
    pub background: BackgroundSpec,
}

impl LayoutRecipe {
    pub(crate) fn new(
        name: &'static str,
        description: &'static str,
        content_types: &'static [ContentType],
    ) -> Self {
        Self {
            name,
            description,
            content_types,
            title: None,
            body: None,
            extra_text_boxes: Vec::new(),
            image_boxes: Vec::new(),
            background: BackgroundSpec::default(),
        }
    }

    /// Whether the recipe is designed for the content type.
    pub fn supports(&self, content_type: ContentType) -> bool {
        self.content_types.contains(&content_type)
    }

    /// Every box of the recipe in paint order: title, body, extra text, images.
    pub fn boxes(&self) -> Vec<PlacedBox> {
        let mut boxes = Vec::new();
        if let Some(title) = &self.title {
            boxes.push(PlacedBox {
                name: title.name.clone(),
                role: BoxRole::Title,
                position: title.position,
            });
        }
        if let Some(body) = &self.body {
            boxes.push(PlacedBox {
                name: body.name.clone(),
                role: BoxRole::Body,
                position: body.position,
            });
        }
        boxes.extend(self.extra_text_boxes.iter().map(|t| PlacedBox {
            name: t.name.clone(),
            role: BoxRole::Text,
            position: t.position,
        }));
        boxes.extend(self.image_boxes.iter().map(|i| PlacedBox {
            name: i.name.clone(),
            role: BoxRole::Image,
            position: i.position,
        }));
        boxes
    }
}
