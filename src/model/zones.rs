//! Structured, content-type-specific slide payloads.

use super::ContentType;
use serde::{Deserialize, Serialize};

/// Maximum number of stats a dashboard can hold (3x2 grid).
pub const MAX_DASHBOARD_STATS: usize = 6;

/// A single statistic in a stats dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatZone {
    /// The figure, as written (e.g. "87%", "$4.2M")
    pub number: String,
    /// What the figure measures
    pub label: String,
}

impl StatZone {
    /// Create a new stat zone.
    pub fn new(number: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            label: label.into(),
        }
    }
}

/// Zone payload attached to a classified slide.
///
/// Each variant belongs to exactly one [`ContentType`]; a slide whose
/// zones variant does not match its content type fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Zones {
    /// Zones for `stats_dashboard`
    StatsDashboard {
        /// Between 1 and [`MAX_DASHBOARD_STATS`] stats
        stats: Vec<StatZone>,
    },
    /// Zones for `case_study_full`
    CaseStudyFull {
        #[serde(default)]
        company_name: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        bullets: String,
        #[serde(default)]
        quote: String,
        #[serde(default)]
        attribution: String,
    },
}

impl Zones {
    /// Build stats dashboard zones.
    pub fn stats(stats: Vec<StatZone>) -> Self {
        Zones::StatsDashboard { stats }
    }

    /// The content type this payload belongs to.
    pub fn content_type(&self) -> ContentType {
        match self {
            Zones::StatsDashboard { .. } => ContentType::StatsDashboard,
            Zones::CaseStudyFull { .. } => ContentType::CaseStudyFull,
        }
    }

    /// Whether this payload is valid for the given content type.
    pub fn matches(&self, content_type: ContentType) -> bool {
        self.content_type() == content_type
    }
}
