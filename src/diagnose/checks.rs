//! Individual template checks, run in a fixed order by [`super::diagnose_package`].

use super::report::{Diagnostic, DiagnosticCode, Location};
use crate::config::SlideCatalog;
use crate::model::ContentType;
use crate::template::{TemplatePackage, TemplateSlide, REQUIRED_PARTS};
use std::collections::BTreeMap;

/// Named shapes a stats_dashboard slot must carry.
pub const STATS_DASHBOARD_SHAPES: [&str; 4] =
    ["Stat1_Number", "Stat1_Label", "Stat2_Number", "Stat2_Label"];

/// Named shapes a case_study_full slot must carry.
pub const CASE_STUDY_SHAPES: [&str; 2] = ["Quote", "Attribution"];

/// More masters than this is reported as bloat.
pub const MAX_MASTERS: usize = 3;

/// A shape larger than this share of the slide area is reported.
pub const COVERAGE_RATIO: (i128, i128) = (4, 5);

/// Parsed slides keyed by number.
pub(super) type SlideMap = BTreeMap<u32, TemplateSlide>;

/// TMPL-003
pub(super) fn required_parts(pkg: &TemplatePackage, issues: &mut Vec<Diagnostic>) {
    for part in REQUIRED_PARTS {
        if !pkg.has_part(part) {
            issues.push(Diagnostic::new(
                DiagnosticCode::MissingParts,
                format!("Missing required part: {}", part),
            ));
        }
    }
}

/// TMPL-004
pub(super) fn catalog_slots(
    pkg: &TemplatePackage,
    catalog: &SlideCatalog,
    issues: &mut Vec<Diagnostic>,
) {
    let slide_count = pkg.slide_count();
    for (content_type, slot) in catalog.all_slot_indices() {
        if !pkg.has_part(&TemplatePackage::slide_part_name(slot)) {
            issues.push(
                Diagnostic::new(
                    DiagnosticCode::UnknownSlot,
                    format!(
                        "Config references slide index {} for '{}' but template has {} slides",
                        slot, content_type, slide_count
                    ),
                )
                .at(Location::slide(slot)),
            );
        }
    }
}

/// TMPL-010, TMPL-011, TMPL-012
pub(super) fn placeholders(slides: &SlideMap, issues: &mut Vec<Diagnostic>) {
    for (&number, slide) in slides {
        if slide.title_placeholder().is_none() {
            issues.push(
                Diagnostic::new(DiagnosticCode::MissingTitle, "Slide missing TITLE placeholder")
                    .at(Location::slide(number)),
            );
        }
        if slide.body_placeholder().is_none() {
            issues.push(
                Diagnostic::new(DiagnosticCode::MissingBody, "Slide missing BODY placeholder")
                    .at(Location::slide(number)),
            );
        }
        if !slide.has_picture_placeholder() {
            issues.push(
                Diagnostic::new(
                    DiagnosticCode::MissingPicture,
                    "Slide has no PICTURE placeholder",
                )
                .at(Location::slide(number)),
            );
        }
    }
}

/// TMPL-020: reported once per slot, naming the first missing shape.
pub(super) fn stats_dashboard_shapes(
    slides: &SlideMap,
    catalog: &SlideCatalog,
    issues: &mut Vec<Diagnostic>,
) {
    for &slot in catalog.slots_for(ContentType::StatsDashboard) {
        let Some(slide) = slides.get(&slot) else {
            continue;
        };
        if let Some(name) = STATS_DASHBOARD_SHAPES
            .iter()
            .find(|name| slide.find_shape(name).is_none())
        {
            issues.push(
                Diagnostic::new(
                    DiagnosticCode::MissingStatShapes,
                    format!("stats_dashboard slide missing named shape '{}'", name),
                )
                .at(Location::slide(slot).with_shape(*name)),
            );
        }
    }
}

/// TMPL-021: one issue per missing shape.
pub(super) fn case_study_shapes(
    slides: &SlideMap,
    catalog: &SlideCatalog,
    issues: &mut Vec<Diagnostic>,
) {
    for &slot in catalog.slots_for(ContentType::CaseStudyFull) {
        let Some(slide) = slides.get(&slot) else {
            continue;
        };
        for name in CASE_STUDY_SHAPES {
            if slide.find_shape(name).is_none() {
                issues.push(
                    Diagnostic::new(
                        DiagnosticCode::MissingCaseStudyShapes,
                        format!("case_study_full slide missing '{}' shape", name),
                    )
                    .at(Location::slide(slot).with_shape(name)),
                );
            }
        }
    }
}

/// TMPL-030
pub(super) fn master_count(pkg: &TemplatePackage, issues: &mut Vec<Diagnostic>) {
    let count = pkg.master_count();
    if count > MAX_MASTERS {
        issues.push(Diagnostic::new(
            DiagnosticCode::TooManyMasters,
            format!("Template has {} slide masters (>{} may cause bloat)", count, MAX_MASTERS),
        ));
    }
}

/// TMPL-040
pub(super) fn media_relationships(pkg: &TemplatePackage, issues: &mut Vec<Diagnostic>) {
    for number in pkg.slide_rels_numbers() {
        let rels = match pkg.slide_relationships(number) {
            Ok(rels) => rels,
            Err(e) => {
                log::warn!("slide {} relationships unreadable: {}", number, e);
                continue;
            }
        };

        for rel in rels.iter().filter(|r| r.is_media() && !r.external) {
            let part = TemplatePackage::resolve_slide_target(&rel.target);
            if pkg.has_part(&part) {
                continue;
            }
            let file = part.rsplit('/').next().unwrap_or(&part);
            issues.push(
                Diagnostic::new(
                    DiagnosticCode::DanglingMedia,
                    format!("Relationship references missing media file: {}", file),
                )
                .at(Location::slide(number).with_relationship(rel.id.clone()))
                .with_detail(part.clone()),
            );
        }
    }
}

/// TMPL-050
pub(super) fn oversized_shapes(
    pkg: &TemplatePackage,
    slides: &SlideMap,
    issues: &mut Vec<Diagnostic>,
) {
    let (width, height) = pkg.slide_size();
    let slide_area = width as i128 * height as i128;
    let (num, den) = COVERAGE_RATIO;

    for (&number, slide) in slides {
        for shape in &slide.shapes {
            let Some(position) = shape.position else {
                continue;
            };
            if position.area() * den > slide_area * num {
                let name = if shape.name.is_empty() {
                    "unnamed"
                } else {
                    shape.name.as_str()
                };
                issues.push(
                    Diagnostic::new(
                        DiagnosticCode::OversizedShape,
                        format!("Shape '{}' covers >80% of slide area (potential overlap)", name),
                    )
                    .at(Location::slide(number).with_shape(name)),
                );
            }
        }
    }
}
