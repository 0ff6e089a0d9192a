//! Layout assignment.
//!
//! For each slide in ascending number order the engine picks a template
//! slot from the slide catalog, or a cookbook recipe when no cataloged slot
//! survives the [`FallbackPolicy`]. A soft variety constraint swaps a
//! choice that repeats the previous slide's target for the first
//! alternative in catalog or registry order; with no alternative the
//! repetition stands. A recipe named by the slide's layout hint is never
//! swapped out.
//!
//! # Example
//!
//! ```
//! use deckplan::assign::{AssignOptions, LayoutAssigner, PlacementTarget};
//! use deckplan::config::SlideCatalog;
//! use deckplan::diagnose::DiagnosticReport;
//! use deckplan::model::{ContentDocument, ContentType, Metadata, SlideContent};
//!
//! let doc = ContentDocument::new(
//!     Metadata::new("deck.pptx", "pptx"),
//!     vec![SlideContent::new(1, "Hello", "").with_content_type(ContentType::Statement)],
//! );
//! let catalog = SlideCatalog::new().with_slot(ContentType::Statement, 5);
//! let plan = LayoutAssigner::new(&catalog)
//!     .with_options(AssignOptions::default())
//!     .assign(&doc, &DiagnosticReport::default())
//!     .unwrap();
//! assert_eq!(plan.entries[0].target, PlacementTarget::Slot(5));
//! ```

mod options;
mod plan;
mod policy;

pub use options::AssignOptions;
pub use plan::{Fallback, Geometry, PlacementEntry, PlacementPlan, PlacementTarget, SlotBox};
pub use policy::{FallbackPolicy, SlotDecision};

use crate::config::SlideCatalog;
use crate::cookbook::{self, BoxRole};
use crate::diagnose::DiagnosticReport;
use crate::error::Result;
use crate::model::{ContentDocument, ContentType, SlideContent};
use crate::template::{PlaceholderKind, ShapeKind, TemplatePackage, TemplateSlide};
use std::collections::BTreeMap;

/// Assigns slides to template slots or cookbook recipes.
#[derive(Debug, Clone)]
pub struct LayoutAssigner<'a> {
    catalog: &'a SlideCatalog,
    /// Parsed template slots; `None` when no template was supplied
    slots: Option<BTreeMap<u32, TemplateSlide>>,
    options: AssignOptions,
}

impl<'a> LayoutAssigner<'a> {
    pub fn new(catalog: &'a SlideCatalog) -> Self {
        Self {
            catalog,
            slots: None,
            options: AssignOptions::default(),
        }
    }

    /// Read slot geometry from a template. Slots missing from the template
    /// are never chosen.
    pub fn with_template(mut self, pkg: &TemplatePackage) -> Self {
        let slots = pkg
            .slide_numbers()
            .into_iter()
            .map(|number| {
                let slide = match pkg.slide(number) {
                    Ok(Some(slide)) => slide,
                    Ok(None) => TemplateSlide::new(number, Vec::new()),
                    Err(e) => {
                        log::warn!("slot {} is malformed, no native geometry: {}", number, e);
                        TemplateSlide::new(number, Vec::new())
                    }
                };
                (number, slide)
            })
            .collect();
        self.slots = Some(slots);
        self
    }

    pub fn with_options(mut self, options: AssignOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the placement plan.
    ///
    /// Fails only with [`crate::Error::RecipeNotFound`] when the cookbook
    /// lacks a recipe for a content type.
    pub fn assign(&self, doc: &ContentDocument, report: &DiagnosticReport) -> Result<PlacementPlan> {
        let blocking = report.has_blocking_issues();
        let mut entries: Vec<PlacementEntry> = Vec::with_capacity(doc.slide_count());
        let mut previous: Option<PlacementTarget> = None;

        for slide in doc.slides_in_order() {
            let (candidates, fallback) = self.candidates(slide, report, blocking)?;

            let mut target = candidates[0].clone();
            let mut variety_swap = false;
            if self.options.variety
                && previous.as_ref() == Some(&target)
                && !is_hinted(&target, slide)
            {
                if let Some(alternative) = candidates.iter().find(|c| Some(*c) != previous.as_ref()) {
                    log::debug!(
                        "slide {}: {} repeats previous slide, using {}",
                        slide.number,
                        target,
                        alternative
                    );
                    target = alternative.clone();
                    variety_swap = true;
                }
            }

            let geometry = self.geometry(&target)?;
            log::debug!(
                "slide {} ({}) -> {}",
                slide.number,
                slide.content_type,
                target
            );
            previous = Some(target.clone());
            entries.push(PlacementEntry {
                slide_number: slide.number,
                content_type: slide.content_type,
                target,
                geometry,
                fallback,
                variety_swap,
            });
        }

        Ok(PlacementPlan { entries })
    }

    /// Eligible targets in preference order (never empty), plus the
    /// fallback reason when they are recipes.
    fn candidates(
        &self,
        slide: &SlideContent,
        report: &DiagnosticReport,
        blocking: bool,
    ) -> Result<(Vec<PlacementTarget>, Option<Fallback>)> {
        let content_type = slide.content_type;

        if self.options.use_cookbook {
            return Ok((recipes(content_type, &slide.layout_hint)?, Some(Fallback::Forced)));
        }

        let slots = self.catalog.slots_for(content_type);
        let mut eligible = Vec::new();
        let mut first_rejection = None;
        for &slot in slots {
            let codes = report.codes_at(slot);
            let present = self
                .slots
                .as_ref()
                .map(|s| s.contains_key(&slot))
                .unwrap_or(true);
            if present && FallbackPolicy::decide(content_type, &codes, blocking) == SlotDecision::UseSlot {
                eligible.push(PlacementTarget::Slot(slot));
            } else if first_rejection.is_none() {
                first_rejection = Some((slot, FallbackPolicy::disqualifying(content_type, &codes)));
            }
        }

        if !eligible.is_empty() {
            return Ok((eligible, None));
        }

        let fallback = match first_rejection {
            None => Fallback::NoSlot,
            Some(_) if blocking => Fallback::Blocking,
            Some((slot, codes)) => Fallback::Disqualified { slot, codes },
        };
        log::debug!(
            "slide {} ({}): cookbook fallback, {}",
            slide.number,
            content_type,
            fallback
        );
        Ok((recipes(content_type, &slide.layout_hint)?, Some(fallback)))
    }

    fn geometry(&self, target: &PlacementTarget) -> Result<Geometry> {
        match target {
            PlacementTarget::Slot(index) => {
                let boxes = self
                    .slots
                    .as_ref()
                    .and_then(|s| s.get(index))
                    .map(slot_boxes)
                    .unwrap_or_default();
                Ok(Geometry::Native { boxes })
            }
            PlacementTarget::Recipe(name) => {
                let recipe = cookbook::recipe_by_name(name)?;
                Ok(Geometry::Absolute {
                    boxes: recipe.boxes(),
                    background: recipe.background.clone(),
                })
            }
        }
    }
}

/// Recipes for a content type in registry order; a layout hint naming one
/// of them moves it to the front.
fn recipes(content_type: ContentType, layout_hint: &str) -> Result<Vec<PlacementTarget>> {
    cookbook::get_recipe(content_type)?;
    let mut names: Vec<&'static str> = cookbook::recipes_for(content_type)
        .iter()
        .map(|r| r.name)
        .collect();

    if let Some(pos) = names.iter().position(|n| *n == layout_hint.trim()) {
        let hinted = names.remove(pos);
        names.insert(0, hinted);
    }

    Ok(names.into_iter().map(PlacementTarget::Recipe).collect())
}

fn is_hinted(target: &PlacementTarget, slide: &SlideContent) -> bool {
    matches!(target, PlacementTarget::Recipe(name) if *name == slide.layout_hint.trim())
}

/// Native boxes of a slot in shape order.
fn slot_boxes(slide: &TemplateSlide) -> Vec<SlotBox> {
    slide
        .shapes
        .iter()
        .filter(|s| s.kind != ShapeKind::Connector)
        .map(|shape| {
            let role = match &shape.placeholder {
                Some(ph) if ph.kind.is_title() => BoxRole::Title,
                Some(ph) if ph.kind.is_body() => BoxRole::Body,
                Some(ph) if ph.kind == PlaceholderKind::Picture => BoxRole::Image,
                _ if shape.kind == ShapeKind::Picture => BoxRole::Image,
                _ => BoxRole::Text,
            };
            SlotBox {
                name: shape.name.clone(),
                role,
                position: shape.position,
            }
        })
        .collect()
}

/// Assign with the given options and no template geometry.
pub fn assign(
    doc: &ContentDocument,
    report: &DiagnosticReport,
    catalog: &SlideCatalog,
    options: AssignOptions,
) -> Result<PlacementPlan> {
    LayoutAssigner::new(catalog)
        .with_options(options)
        .assign(doc, report)
}
