//! Template diagnostics.
//!
//! Inspects a template (and optionally the slide catalog that will target
//! it) and produces a [`DiagnosticReport`]. Diagnostics are data: every
//! entry point returns a report, even when the template cannot be opened.
//!
//! Opening the container is the only prerequisite. Once it is open all
//! structural checks run in a fixed order, so the issue list is stable for
//! a given template and catalog:
//!
//! 1. required parts (TMPL-003)
//! 2. catalog slot references (TMPL-004)
//! 3. per-slide placeholders (TMPL-010/011/012)
//! 4. named shape contracts (TMPL-020/021)
//! 5. master count (TMPL-030)
//! 6. media relationships (TMPL-040)
//! 7. shape coverage (TMPL-050)

mod checks;
mod report;

pub use checks::{CASE_STUDY_SHAPES, MAX_MASTERS, STATS_DASHBOARD_SHAPES};
pub use report::{
    Category, Diagnostic, DiagnosticCode, DiagnosticReport, Location, Severity,
};

use crate::config::SlideCatalog;
use crate::detect::is_zip_bytes;
use crate::template::{TemplatePackage, TemplateSlide};
use checks::SlideMap;
use std::fs;
use std::path::Path;

/// Diagnose a template file.
pub fn diagnose_path<P: AsRef<Path>>(path: P, catalog: Option<&SlideCatalog>) -> DiagnosticReport {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(data) => diagnose_bytes(&data, catalog),
        Err(e) => {
            log::debug!("template {} unreadable: {}", path.display(), e);
            single(
                Diagnostic::new(DiagnosticCode::Unreadable, "Template file could not be read")
                    .with_detail(format!("{}: {}", path.display(), e)),
            )
        }
    }
}

/// Diagnose a template held in memory.
pub fn diagnose_bytes(data: &[u8], catalog: Option<&SlideCatalog>) -> DiagnosticReport {
    if !is_zip_bytes(data) {
        return single(Diagnostic::new(
            DiagnosticCode::InvalidContainer,
            "Not a valid ZIP/PPTX container",
        ));
    }
    match TemplatePackage::from_bytes(data) {
        Ok(pkg) => diagnose_package(&pkg, catalog),
        Err(e) => single(
            Diagnostic::new(
                DiagnosticCode::InvalidContainer,
                "Not a valid ZIP/PPTX container",
            )
            .with_detail(e.to_string()),
        ),
    }
}

/// Run every structural check against an opened package.
pub fn diagnose_package(pkg: &TemplatePackage, catalog: Option<&SlideCatalog>) -> DiagnosticReport {
    let slides = parse_slides(pkg);
    let mut issues = Vec::new();

    checks::required_parts(pkg, &mut issues);
    if let Some(catalog) = catalog {
        checks::catalog_slots(pkg, catalog, &mut issues);
    }
    checks::placeholders(&slides, &mut issues);
    if let Some(catalog) = catalog {
        checks::stats_dashboard_shapes(&slides, catalog, &mut issues);
        checks::case_study_shapes(&slides, catalog, &mut issues);
    }
    checks::master_count(pkg, &mut issues);
    checks::media_relationships(pkg, &mut issues);
    checks::oversized_shapes(pkg, &slides, &mut issues);

    let report = DiagnosticReport {
        issues,
        slide_count: slides.len(),
        layout_count: pkg.layout_count(),
        master_count: pkg.master_count(),
    };
    log::debug!(
        "diagnostics: {} errors, {} warnings, {} info",
        report.errors().len(),
        report.warnings().len(),
        report.infos().len()
    );
    report
}

/// Parse every slide; a malformed slide part degrades to a slide without shapes.
fn parse_slides(pkg: &TemplatePackage) -> SlideMap {
    pkg.slide_numbers()
        .into_iter()
        .map(|number| {
            let slide = match pkg.slide(number) {
                Ok(Some(slide)) => slide,
                Ok(None) => TemplateSlide::new(number, Vec::new()),
                Err(e) => {
                    log::warn!("slide {} is malformed, treating as empty: {}", number, e);
                    TemplateSlide::new(number, Vec::new())
                }
            };
            (number, slide)
        })
        .collect()
}

fn single(issue: Diagnostic) -> DiagnosticReport {
    DiagnosticReport {
        issues: vec![issue],
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContentType;

    const TITLE_BODY: &str = r#"<p:sld xmlns:a="a" xmlns:p="p"><p:cSld><p:spTree>
        <p:sp><p:nvSpPr><p:cNvPr id="2" name="Title"/><p:cNvSpPr/><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr><p:spPr/></p:sp>
        <p:sp><p:nvSpPr><p:cNvPr id="3" name="Body"/><p:cNvSpPr/><p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr><p:spPr/></p:sp>
    </p:spTree></p:cSld></p:sld>"#;

    fn package(slides: &[&str]) -> TemplatePackage {
        let mut parts: Vec<(String, String)> = vec![
            ("[Content_Types].xml".to_string(), "<Types/>".to_string()),
            ("ppt/presentation.xml".to_string(), "<p:presentation xmlns:p=\"p\"/>".to_string()),
        ];
        for (i, xml) in slides.iter().enumerate() {
            parts.push((TemplatePackage::slide_part_name(i as u32 + 1), xml.to_string()));
        }
        TemplatePackage::from_parts(parts)
    }

    #[test]
    fn test_unreadable_path() {
        let report = diagnose_path("/nonexistent/template.pptx", None);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].code, DiagnosticCode::Unreadable);
        assert!(report.has_blocking_issues());
    }

    #[test]
    fn test_not_a_container() {
        let report = diagnose_bytes(b"plain text", None);
        assert_eq!(report.issues[0].code, DiagnosticCode::InvalidContainer);
        assert!(report.has_blocking_issues());
    }

    #[test]
    fn test_clean_text_slide_has_only_picture_info() {
        let report = diagnose_package(&package(&[TITLE_BODY]), None);
        assert_eq!(report.codes_at(1), vec![DiagnosticCode::MissingPicture]);
        assert!(!report.has_blocking_issues());
        assert_eq!(report.slide_count, 1);
    }

    #[test]
    fn test_missing_parts_do_not_stop_other_checks() {
        let pkg = TemplatePackage::from_parts([(
            TemplatePackage::slide_part_name(1),
            TITLE_BODY.to_string(),
        )]);
        let report = diagnose_package(&pkg, None);
        assert_eq!(report.errors().len(), 2);
        assert!(report.has_code(DiagnosticCode::MissingPicture));
    }

    #[test]
    fn test_malformed_slide_reports_missing_placeholders() {
        let report = diagnose_package(&package(&["<p:sld><p:sp></p:sld>"]), None);
        assert_eq!(
            report.codes_at(1),
            vec![
                DiagnosticCode::MissingTitle,
                DiagnosticCode::MissingBody,
                DiagnosticCode::MissingPicture
            ]
        );
    }

    #[test]
    fn test_catalog_slot_out_of_range() {
        let catalog = SlideCatalog::new()
            .with_slot(ContentType::Quote, 1)
            .with_slot(ContentType::Closing, 7);
        let report = diagnose_package(&package(&[TITLE_BODY]), Some(&catalog));
        let unknown: Vec<&Diagnostic> = report
            .issues
            .iter()
            .filter(|i| i.code == DiagnosticCode::UnknownSlot)
            .collect();
        assert_eq!(unknown.len(), 1);
        assert_eq!(unknown[0].slide_index(), Some(7));
        assert!(unknown[0].message.contains("'closing'"));
    }

    #[test]
    fn test_stability() {
        let catalog = SlideCatalog::new().with_slot(ContentType::StatsDashboard, 1);
        let pkg = package(&[TITLE_BODY, "<p:sld/>"]);
        assert_eq!(
            diagnose_package(&pkg, Some(&catalog)),
            diagnose_package(&pkg, Some(&catalog))
        );
    }
}
