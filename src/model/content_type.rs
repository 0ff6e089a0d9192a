//! Content type classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Content type of a slide.
///
/// The enumeration is closed: every consumer (cookbook, fallback policy,
/// classifier) matches on it exhaustively. Declaration order is the
/// canonical ordering used by catalogs and reports.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Unclassified; the universal fallback
    #[default]
    Auto,
    /// A single large number or percentage
    Statistic,
    /// Several `{number, label}` pairs
    StatsDashboard,
    /// A quotation with attribution
    Quote,
    /// Enumerated steps
    NumberedStep,
    /// Short bulleted text
    BulletList,
    /// Two balanced text blocks
    Comparison,
    /// Section divider
    SectionHeader,
    /// Image-led customer story
    CaseStudy,
    /// Structured customer story with quote and attribution
    CaseStudyFull,
    /// One bold statement
    Statement,
    /// Image-led feature slide
    Feature,
    /// Long-form text
    DetailedContent,
    /// Deck opening
    TitleOpening,
    /// Deck closing
    Closing,
}

impl ContentType {
    /// Every content type, in declaration order.
    pub const ALL: [ContentType; 15] = [
        ContentType::Auto,
        ContentType::Statistic,
        ContentType::StatsDashboard,
        ContentType::Quote,
        ContentType::NumberedStep,
        ContentType::BulletList,
        ContentType::Comparison,
        ContentType::SectionHeader,
        ContentType::CaseStudy,
        ContentType::CaseStudyFull,
        ContentType::Statement,
        ContentType::Feature,
        ContentType::DetailedContent,
        ContentType::TitleOpening,
        ContentType::Closing,
    ];

    /// The serialized name (`snake_case`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Auto => "auto",
            ContentType::Statistic => "statistic",
            ContentType::StatsDashboard => "stats_dashboard",
            ContentType::Quote => "quote",
            ContentType::NumberedStep => "numbered_step",
            ContentType::BulletList => "bullet_list",
            ContentType::Comparison => "comparison",
            ContentType::SectionHeader => "section_header",
            ContentType::CaseStudy => "case_study",
            ContentType::CaseStudyFull => "case_study_full",
            ContentType::Statement => "statement",
            ContentType::Feature => "feature",
            ContentType::DetailedContent => "detailed_content",
            ContentType::TitleOpening => "title_opening",
            ContentType::Closing => "closing",
        }
    }

    /// Whether this type carries a structured zones payload.
    pub fn has_zones_schema(&self) -> bool {
        matches!(
            self,
            ContentType::StatsDashboard | ContentType::CaseStudyFull
        )
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase().replace(['-', ' '], "_");
        ContentType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == needle)
            .ok_or_else(|| format!("unknown content type '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_every_variant_once() {
        let mut sorted = ContentType::ALL.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), ContentType::ALL.len());
        assert_eq!(sorted, ContentType::ALL.to_vec());
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for t in ContentType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
    }

    #[test]
    fn test_from_str_is_lenient_about_separators() {
        assert_eq!(
            "stats-dashboard".parse::<ContentType>(),
            Ok(ContentType::StatsDashboard)
        );
        assert_eq!(
            "Bullet List".parse::<ContentType>(),
            Ok(ContentType::BulletList)
        );
        assert!("DEFAULT".parse::<ContentType>().is_err());
    }
}
