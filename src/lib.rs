//! # deckplan
//!
//! Migration planning engine for presentation decks.
//!
//! Extracted slide records are classified into content types, a template
//! is checked for the placeholders and named shapes each content type
//! needs, and every slide is then assigned either a slot of the template
//! or an absolute-positioning cookbook recipe.
//!
//! ## Quick Start
//!
//! ```no_run
//! use deckplan::{BrandConfig, ContentDocument, Planner};
//!
//! fn main() -> deckplan::Result<()> {
//!     let mut doc = ContentDocument::load("content.json")?;
//!     let config = BrandConfig::from_file("brand.json")?;
//!
//!     let outcome = Planner::new()
//!         .with_catalog(config.slide_catalog)
//!         .plan_with_template(&mut doc, "template.pptx")?;
//!
//!     println!("{}", outcome.report);
//!     println!("{}", outcome.plan);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Content model**: versioned `content.json` with exhaustive validation
//! - **Classification**: deterministic, rule-based, parallel across slides
//! - **Template diagnostics**: TMPL-xxx codes with severity and location
//! - **Cookbook**: 13 absolute-positioning recipes covering every content type
//! - **Assignment**: slot-or-recipe placement with a variety constraint

pub mod assign;
pub mod classify;
pub mod config;
pub mod cookbook;
pub mod detect;
pub mod diagnose;
pub mod error;
pub mod model;
pub mod render;
pub mod template;

// Re-export commonly used types
pub use assign::{AssignOptions, LayoutAssigner, PlacementPlan, PlacementTarget};
pub use classify::{Classifier, ClassifierOptions};
pub use config::{BrandConfig, SlideCatalog};
pub use cookbook::{get_recipe, LayoutRecipe};
pub use detect::{check_version, is_supported_version, ContentVersion};
pub use diagnose::{Diagnostic, DiagnosticCode, DiagnosticReport, Severity};
pub use error::{Error, Result, Violation};
pub use model::{ContentDocument, ContentType, LegacySlide, Metadata, SlideContent, Zones};
pub use render::{to_outline, JsonFormat};
pub use template::TemplatePackage;

use std::fs;
use std::path::Path;

/// Load and validate a `content.json` file.
///
/// # Example
///
/// ```no_run
/// let doc = deckplan::load_content("content.json").unwrap();
/// println!("Slides: {}", doc.slide_count());
/// ```
pub fn load_content<P: AsRef<Path>>(path: P) -> Result<ContentDocument> {
    ContentDocument::load(path)
}

/// Classify raw slide records into a validated content document.
///
/// # Example
///
/// ```
/// use deckplan::{classify_slides, ContentType, LegacySlide};
///
/// let doc = classify_slides(
///     vec![LegacySlide::new("Welcome", "Quarterly review")],
///     "deck.pptx",
///     "pptx",
/// )
/// .unwrap();
/// assert_eq!(doc.slides[0].content_type, ContentType::TitleOpening);
/// ```
pub fn classify_slides(
    records: Vec<LegacySlide>,
    source_path: &str,
    source_format: &str,
) -> Result<ContentDocument> {
    let doc = classify::classify_records(records, source_path, source_format);
    doc.ensure_valid()?;
    Ok(doc)
}

/// Diagnose a template file without a slide catalog.
pub fn diagnose_template<P: AsRef<Path>>(path: P) -> DiagnosticReport {
    diagnose::diagnose_path(path, None)
}

/// Builder for the classify, diagnose and assign pipeline.
///
/// # Example
///
/// ```
/// use deckplan::{ContentDocument, ContentType, Metadata, Planner, SlideContent};
///
/// let mut doc = ContentDocument::new(
///     Metadata::new("deck.pptx", "pptx"),
///     vec![SlideContent::new(1, "Thanks", "").with_content_type(ContentType::Closing)],
/// );
/// let outcome = Planner::new().use_cookbook().plan(&mut doc).unwrap();
/// assert_eq!(outcome.plan.cookbook_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Planner {
    catalog: SlideCatalog,
    classifier_options: ClassifierOptions,
    assign_options: AssignOptions,
}

impl Planner {
    /// Create a new planner with an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the slide catalog.
    pub fn with_catalog(mut self, catalog: SlideCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Set classifier thresholds.
    pub fn with_classifier_options(mut self, options: ClassifierOptions) -> Self {
        self.classifier_options = options;
        self
    }

    /// Set assignment options.
    pub fn with_assign_options(mut self, options: AssignOptions) -> Self {
        self.assign_options = options;
        self
    }

    /// Place every slide with a cookbook recipe.
    pub fn use_cookbook(mut self) -> Self {
        self.assign_options = self.assign_options.cookbook_only();
        self
    }

    /// Allow the same target on consecutive slides.
    pub fn without_variety(mut self) -> Self {
        self.assign_options = self.assign_options.with_variety(false);
        self
    }

    /// Classify `auto` slides and assign layouts without a template.
    pub fn plan(&self, doc: &mut ContentDocument) -> Result<PlanOutcome> {
        self.classify(doc)?;
        let report = DiagnosticReport::default();
        let plan = LayoutAssigner::new(&self.catalog)
            .with_options(self.assign_options)
            .assign(doc, &report)?;
        Ok(PlanOutcome { report, plan })
    }

    /// Classify `auto` slides, diagnose the template and assign layouts.
    ///
    /// An unreadable or malformed template is reported through the
    /// diagnostics, whose blocking errors send every slide to the cookbook.
    pub fn plan_with_template<P: AsRef<Path>>(
        &self,
        doc: &mut ContentDocument,
        template: P,
    ) -> Result<PlanOutcome> {
        self.classify(doc)?;

        let template = template.as_ref();
        let package = fs::read(template)
            .ok()
            .and_then(|data| TemplatePackage::from_bytes(&data).ok());
        let report = match &package {
            Some(pkg) => diagnose::diagnose_package(pkg, Some(&self.catalog)),
            None => diagnose::diagnose_path(template, Some(&self.catalog)),
        };

        let mut assigner = LayoutAssigner::new(&self.catalog).with_options(self.assign_options);
        if let Some(pkg) = &package {
            assigner = assigner.with_template(pkg);
        }
        let plan = assigner.assign(doc, &report)?;
        Ok(PlanOutcome { report, plan })
    }

    fn classify(&self, doc: &mut ContentDocument) -> Result<()> {
        let changed = Classifier::new(self.classifier_options.clone()).classify_document(doc);
        if changed > 0 {
            log::debug!("classified {} auto slides", changed);
        }
        doc.ensure_valid()
    }
}

/// Diagnostics and placements produced by a [`Planner`].
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub report: DiagnosticReport,
    pub plan: PlacementPlan,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> ContentDocument {
        ContentDocument::new(
            Metadata::new("deck.pptx", "pptx"),
            vec![
                SlideContent::new(1, "Welcome", "Quarterly review"),
                SlideContent::new(2, "Thanks", "").with_content_type(ContentType::Closing),
            ],
        )
    }

    #[test]
    fn test_planner_defaults() {
        let planner = Planner::new();
        assert!(planner.catalog.is_empty());
        assert!(!planner.assign_options.use_cookbook);
        assert!(planner.assign_options.variety);
    }

    #[test]
    fn test_planner_builder_chained() {
        let planner = Planner::new()
            .with_catalog(SlideCatalog::new().with_slot(ContentType::Closing, 9))
            .use_cookbook()
            .without_variety();
        assert_eq!(planner.catalog.len(), 1);
        assert!(planner.assign_options.use_cookbook);
        assert!(!planner.assign_options.variety);
    }

    #[test]
    fn test_plan_classifies_auto_slides() {
        let mut d = doc();
        let outcome = Planner::new().plan(&mut d).unwrap();
        assert_eq!(d.slides[0].content_type, ContentType::TitleOpening);
        assert_eq!(outcome.plan.len(), 2);
        assert_eq!(
            outcome.plan.entries[1].target,
            PlacementTarget::Recipe("closing_cta")
        );
    }

    #[test]
    fn test_plan_uses_catalog_slot() {
        let mut d = doc();
        let outcome = Planner::new()
            .with_catalog(SlideCatalog::new().with_slot(ContentType::Closing, 7))
            .plan(&mut d)
            .unwrap();
        assert_eq!(outcome.plan.entries[1].target, PlacementTarget::Slot(7));
        assert!(outcome.report.issues.is_empty());
    }

    #[test]
    fn test_missing_template_falls_back_to_cookbook() {
        let mut d = doc();
        let outcome = Planner::new()
            .with_catalog(SlideCatalog::new().with_slot(ContentType::Closing, 7))
            .plan_with_template(&mut d, "/nonexistent/template.pptx")
            .unwrap();
        assert!(outcome.report.has_code(DiagnosticCode::Unreadable));
        assert_eq!(outcome.plan.cookbook_count(), 2);
    }

    #[test]
    fn test_classify_slides_numbers_from_one() {
        let doc = classify_slides(
            vec![
                LegacySlide::new("Welcome", "Quarterly review"),
                LegacySlide::new("Thank you", "Questions?"),
            ],
            "deck.pptx",
            "pptx",
        )
        .unwrap();
        let numbers: Vec<u32> = doc.slides.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_load_content_missing_file() {
        assert!(matches!(
            load_content("/nonexistent/content.json"),
            Err(Error::Io(_))
        ));
    }
}
