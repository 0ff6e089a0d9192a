//! Content document model.
//!
//! This module defines the intermediate representation that bridges slide
//! extraction, migration planning and rendering. Every other component
//! reads or produces a [`ContentDocument`].

mod content_type;
mod document;
mod legacy;
mod slide;
pub mod validate;
mod zones;

pub use content_type::ContentType;
pub use document::{normalize_format, ContentDocument, Metadata, GENERATOR};
pub use legacy::{from_legacy_slides, to_legacy_slides, LegacyImage, LegacySlide};
pub(crate) use legacy::slide_from_record;
pub use slide::{ImagePlacement, SlideContent, SlideImage};
pub use validate::validate_content_json;
pub use zones::{StatZone, Zones, MAX_DASHBOARD_STATS};
