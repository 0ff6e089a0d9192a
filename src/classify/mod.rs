//! Content classification.
//!
//! Each slide gets a content type and, where the type has one, a zones
//! payload. Explicit hints win: a `_content_type` hint, then a `_zones`
//! hint, then a layout hint naming a content type. Without hints a fixed,
//! ordered list of pure detectors runs and the first match wins, so the
//! same input always yields the same classification. Slides no detector
//! recognizes become `auto` with an extraction note; classification never
//! fails.
//!
//! # Example
//!
//! ```
//! use deckplan::classify::Classifier;
//! use deckplan::model::{ContentType, LegacySlide};
//!
//! let classifier = Classifier::default();
//! let record = LegacySlide::new("Setup", "1. Install\n2. Configure\n3. Deploy");
//! let result = classifier.classify(&(&record).into(), 3, 10);
//! assert_eq!(result.content_type, ContentType::NumberedStep);
//! ```

mod features;
mod options;
mod rules;

pub use options::ClassifierOptions;

use crate::model::{
    slide_from_record, ContentDocument, ContentType, LegacySlide, Metadata, SlideContent, Zones,
};
use features::SlideFeatures;
use rayon::prelude::*;
use rules::RULES;

/// What the classifier sees of one slide.
#[derive(Debug, Clone, Copy)]
pub struct SlideInput<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub image_count: usize,
    pub content_type_hint: Option<ContentType>,
    pub zones_hint: Option<&'a Zones>,
    pub layout_hint: &'a str,
}

impl<'a> From<&'a LegacySlide> for SlideInput<'a> {
    fn from(record: &'a LegacySlide) -> Self {
        Self {
            title: &record.title,
            body: &record.body,
            image_count: record.images.len(),
            content_type_hint: record.content_type,
            zones_hint: record.zones.as_ref(),
            layout_hint: &record.layout,
        }
    }
}

impl<'a> From<&'a SlideContent> for SlideInput<'a> {
    fn from(slide: &'a SlideContent) -> Self {
        Self {
            title: &slide.title,
            body: &slide.body,
            image_count: slide.images.len(),
            content_type_hint: Some(slide.content_type),
            zones_hint: slide.zones.as_ref(),
            layout_hint: &slide.layout_hint,
        }
    }
}

/// The result of classifying one slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub content_type: ContentType,
    pub zones: Option<Zones>,
    /// Name of the hint or rule that decided
    pub rule: &'static str,
    /// Notes to append to the slide's extraction notes
    pub notes: Vec<String>,
}

/// Rule-based slide classifier.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    options: ClassifierOptions,
}

impl Classifier {
    pub fn new(options: ClassifierOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ClassifierOptions {
        &self.options
    }

    /// Classify one slide at 0-based `index` of a `total`-slide deck.
    pub fn classify(&self, input: &SlideInput<'_>, index: usize, total: usize) -> Classification {
        let features = SlideFeatures::new(input.title, input.body, input.image_count, index, total);

        if let Some(hint) = input.content_type_hint.filter(|t| *t != ContentType::Auto) {
            return self.from_hint(hint, "content_type_hint", input.zones_hint, &features);
        }
        if let Some(zones) = input.zones_hint {
            return Classification {
                content_type: zones.content_type(),
                zones: Some(zones.clone()),
                rule: "zones_hint",
                notes: Vec::new(),
            };
        }
        if let Ok(hint) = input.layout_hint.parse::<ContentType>() {
            if hint != ContentType::Auto {
                return self.from_hint(hint, "layout_hint", None, &features);
            }
        }

        for rule in RULES {
            if let Some(detection) = (rule.detect)(&features, &self.options) {
                return Classification {
                    content_type: detection.content_type,
                    zones: detection.zones,
                    rule: rule.name,
                    notes: detection.note.into_iter().collect(),
                };
            }
        }

        Classification {
            content_type: ContentType::Auto,
            zones: None,
            rule: "fallback",
            notes: vec!["no classification rule matched; left as auto".to_string()],
        }
    }

    /// Honor an explicit type, keeping matching zones or deriving them.
    fn from_hint(
        &self,
        content_type: ContentType,
        rule: &'static str,
        zones_hint: Option<&Zones>,
        features: &SlideFeatures,
    ) -> Classification {
        let mut notes = Vec::new();
        let zones = match zones_hint {
            Some(zones) if zones.matches(content_type) => Some(zones.clone()),
            other => {
                if let Some(zones) = other {
                    notes.push(format!(
                        "{} zones dropped: slide is typed {}",
                        zones.content_type(),
                        content_type
                    ));
                }
                derive_zones(content_type, features)
            }
        };
        Classification {
            content_type,
            zones,
            rule,
            notes,
        }
    }

    /// Classify raw records into a new document, numbered 1..N.
    pub fn classify_records(
        &self,
        records: Vec<LegacySlide>,
        source_path: &str,
        source_format: &str,
    ) -> ContentDocument {
        let total = records.len();
        let classify_one = |(i, record): (usize, LegacySlide)| {
            let result = self.classify(&(&record).into(), i, total);
            let mut slide = slide_from_record(i as u32 + 1, record);
            apply(&mut slide, result);
            slide
        };

        let slides: Vec<SlideContent> = if self.options.parallel {
            records.into_par_iter().enumerate().map(classify_one).collect()
        } else {
            records.into_iter().enumerate().map(classify_one).collect()
        };

        ContentDocument::new(Metadata::new(source_path, source_format), slides)
    }

    /// Classify every `auto` slide of a document in place.
    ///
    /// Returns how many slides received a type.
    pub fn classify_document(&self, doc: &mut ContentDocument) -> usize {
        let total = doc.slides.len();
        let mut changed = 0;
        for (i, slide) in doc.slides.iter_mut().enumerate() {
            if slide.content_type != ContentType::Auto {
                continue;
            }
            let result = self.classify(&(&*slide).into(), i, total);
            if result.content_type != ContentType::Auto {
                changed += 1;
            }
            apply(slide, result);
        }
        changed
    }
}

fn apply(slide: &mut SlideContent, result: Classification) {
    log::debug!(
        "slide {}: {} via {}",
        slide.number,
        result.content_type,
        result.rule
    );
    slide.content_type = result.content_type;
    slide.zones = result.zones;
    slide.extraction_notes.extend(result.notes);
}

/// Zones for a hinted type whose payload was not supplied.
fn derive_zones(content_type: ContentType, features: &SlideFeatures) -> Option<Zones> {
    match content_type {
        ContentType::StatsDashboard => {
            let (mut stats, _) = rules::extract_stats(features);
            stats.truncate(crate::model::MAX_DASHBOARD_STATS);
            if stats.is_empty() {
                None
            } else {
                Some(Zones::stats(stats))
            }
        }
        ContentType::CaseStudyFull => Some(rules::extract_case_study(features)),
        _ => None,
    }
}

/// Classify raw records with default options.
pub fn classify_records(
    records: Vec<LegacySlide>,
    source_path: &str,
    source_format: &str,
) -> ContentDocument {
    Classifier::default().classify_records(records, source_path, source_format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatZone;

    fn classify(record: &LegacySlide, index: usize, total: usize) -> Classification {
        Classifier::default().classify(&record.into(), index, total)
    }

    #[test]
    fn test_content_type_hint_wins() {
        let record =
            LegacySlide::new("", "87% retention").with_content_type(ContentType::Statement);
        let result = classify(&record, 2, 5);
        assert_eq!(result.content_type, ContentType::Statement);
        assert_eq!(result.rule, "content_type_hint");
    }

    #[test]
    fn test_zones_hint_sets_type() {
        let zones = Zones::stats(vec![StatZone::new("1", "a")]);
        let record = LegacySlide::new("KPIs", "").with_zones(zones.clone());
        let result = classify(&record, 2, 5);
        assert_eq!(result.content_type, ContentType::StatsDashboard);
        assert_eq!(result.zones, Some(zones));
    }

    #[test]
    fn test_mismatched_zones_hint_dropped_with_note() {
        let record = LegacySlide::new("Hello", "")
            .with_content_type(ContentType::Quote)
            .with_zones(Zones::stats(vec![StatZone::new("1", "a")]));
        let result = classify(&record, 2, 5);
        assert_eq!(result.content_type, ContentType::Quote);
        assert!(result.zones.is_none());
        assert_eq!(result.notes.len(), 1);
    }

    #[test]
    fn test_layout_hint_names_content_type() {
        let record = LegacySlide::new("Our team", "Long text here").with_layout("section-header");
        assert_eq!(
            classify(&record, 2, 5).content_type,
            ContentType::SectionHeader
        );

        let record = LegacySlide::new("Our team", "Long text here").with_layout("DEFAULT");
        assert_eq!(classify(&record, 2, 5).rule, "statement");
    }

    #[test]
    fn test_hinted_dashboard_derives_zones() {
        let record = LegacySlide::new("KPIs", "87% retention\n3x growth")
            .with_content_type(ContentType::StatsDashboard);
        let result = classify(&record, 2, 5);
        assert_eq!(
            result.zones,
            Some(Zones::stats(vec![
                StatZone::new("87%", "retention"),
                StatZone::new("3x", "growth"),
            ]))
        );
    }

    #[test]
    fn test_unmatched_is_auto_with_note() {
        let result = classify(&LegacySlide::new("", ""), 2, 5);
        assert_eq!(result.content_type, ContentType::Auto);
        assert_eq!(result.notes.len(), 1);
    }

    #[test]
    fn test_classify_document_only_touches_auto() {
        let mut doc = Classifier::default().classify_records(
            vec![
                LegacySlide::new("Welcome", "Quarterly review"),
                LegacySlide::new("Part Two", "").with_content_type(ContentType::Quote),
            ],
            "deck.pptx",
            "pptx",
        );
        doc.slides[0].content_type = ContentType::Auto;
        let changed = Classifier::default().classify_document(&mut doc);
        assert_eq!(changed, 1);
        assert_eq!(doc.slides[0].content_type, ContentType::TitleOpening);
        assert_eq!(doc.slides[1].content_type, ContentType::Quote);
    }
}
