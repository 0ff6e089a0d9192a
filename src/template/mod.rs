//! Read access to a template presentation: its parts, slides (slots),
//! shapes and relationships.

mod package;
mod slide;

pub use package::{
    parse_relationships, Relationship, TemplatePackage, CONTENT_TYPES_PART, PRESENTATION_PART,
    REQUIRED_PARTS,
};
pub use slide::{
    Placeholder, PlaceholderKind, ShapeKind, TemplateShape, TemplateSlide,
};
