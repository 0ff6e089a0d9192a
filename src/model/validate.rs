//! Invariant checks for content documents.
//!
//! Validation never stops at the first problem: every check runs and all
//! violations are returned together so a caller can report them at once.

use super::{ContentDocument, ContentType, SlideContent, Zones, MAX_DASHBOARD_STATS};
use crate::detect::check_version;
use crate::error::{Error, Violation};
use std::path::Path;

/// Check every document invariant.
pub fn validate(doc: &ContentDocument) -> Vec<Violation> {
    let mut violations = Vec::new();

    match check_version(&doc.version) {
        Ok(_) => {}
        Err(Error::UnsupportedVersion(v)) => violations.push(Violation::new(
            "version",
            format!("unsupported major version in '{}'", v),
        )),
        Err(e) => violations.push(Violation::new("version", e.to_string())),
    }

    if doc.slides.is_empty() {
        violations.push(Violation::new("slides", "document must contain at least one slide"));
    }

    for (i, slide) in doc.slides.iter().enumerate() {
        check_slide(i, slide, &mut violations);
    }

    violations
}

fn check_slide(position: usize, slide: &SlideContent, violations: &mut Vec<Violation>) {
    let path = format!("slides[{}]", position);
    let expected = position as u32 + 1;

    if slide.number != expected {
        violations.push(Violation::new(
            format!("{}.number", path),
            format!(
                "expected {} (numbers must run 1..N without gaps), found {}",
                expected, slide.number
            ),
        ));
    }

    for (j, image) in slide.images.iter().enumerate() {
        if image.path.trim().is_empty() {
            violations.push(Violation::new(
                format!("{}.images[{}].path", path, j),
                "image handle must not be empty",
            ));
        }
    }

    if let Some(zones) = &slide.zones {
        check_zones(&path, slide.content_type, zones, violations);
    }
}

fn check_zones(
    path: &str,
    content_type: ContentType,
    zones: &Zones,
    violations: &mut Vec<Violation>,
) {
    if !zones.matches(content_type) {
        violations.push(Violation::new(
            format!("{}.zones", path),
            format!(
                "{} zones require content_type '{}', got '{}'",
                zones.content_type(),
                zones.content_type(),
                content_type
            ),
        ));
    }

    if let Zones::StatsDashboard { stats } = zones {
        if stats.is_empty() || stats.len() > MAX_DASHBOARD_STATS {
            violations.push(Violation::new(
                format!("{}.zones.stats", path),
                format!(
                    "expected 1 to {} stats, found {}",
                    MAX_DASHBOARD_STATS,
                    stats.len()
                ),
            ));
        }
    }
}

/// Validate a `content.json` file and return human-readable problems.
///
/// Returns an empty list when the file loads and validates. Never fails:
/// a missing file or invalid JSON is reported as a problem.
pub fn validate_content_json<P: AsRef<Path>>(path: P) -> Vec<String> {
    let path = path.as_ref();
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return vec![format!("File not found: {}", path.display())];
        }
        Err(e) => return vec![format!("Cannot read {}: {}", path.display(), e)],
    };

    match ContentDocument::from_slice(&data) {
        Ok(_) => Vec::new(),
        Err(Error::Validation(violations)) => {
            violations.iter().map(|v| v.to_string()).collect()
        }
        Err(e) => vec![e.to_string()],
    }
}
