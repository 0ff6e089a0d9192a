//! Rendering module for converting documents, reports and plans to output formats.

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::to_outline;
