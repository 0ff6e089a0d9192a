//! Text features the classifier rules read.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// A figure: optional currency, digits with separators, optional unit.
pub(super) static NUMBER_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:[$€£¥]\s?|\b)\d+(?:[.,]\d+)*(?:\s?(?:%|(?:[xX]|[kKmMbB]n?)\b))?")
        .expect("valid regex")
});

/// A line holding nothing but a figure.
pub(super) static NUMBER_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[$€£¥]\s?)?[<>~+]?\d+(?:[.,]\d+)*\s?(?:%|[xX]|[kKmMbB]n?|/\d+)?\+?$")
        .expect("valid regex")
});

/// A figure followed by its label on the same line.
pub(super) static STAT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<number>(?:[$€£¥]\s?)?[<>~+]?\d+(?:[.,]\d+)*(?:\s?(?:%|(?:[xX]|[kKmMbB]n?)\b))?\+?)\s*(?:[-–—:|]\s*)?(?P<label>\p{L}.*)$",
    )
    .expect("valid regex")
});

static BARE_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:19|20)\d{2}$").expect("valid regex"));

/// A four-digit year with no currency or unit. Never a stat figure.
pub(super) fn is_bare_year(figure: &str) -> bool {
    BARE_YEAR.is_match(figure.trim())
}

static BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[-*•▪◦‣►]|\d{1,2}[.)])\s+").expect("valid regex"));

static NUMBERED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\(?\d{1,2}[.)]\s|(?i:step)\s+\d{1,2}\b)").expect("valid regex")
});

/// A line wrapped in quotation marks.
pub(super) static QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^["“„«‘'].{8,}["”»’']$"#).expect("valid regex"));

/// An attribution line (`— Name`).
pub(super) static ATTRIBUTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[—–~]|-{1,2})\s*\p{L}").expect("valid regex"));

pub(super) static CASE_STUDY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:case\s+stud(?:y|ies)|customer\s+stor(?:y|ies)|success\s+stor(?:y|ies))\b")
        .expect("valid regex")
});

pub(super) static VERSUS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:\bvs\b\.?|\bversus\b|\bbefore\s*(?:/|and|&)\s*after\b)")
        .expect("valid regex")
});

pub(super) static CLOSING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:thank\s*you|thanks|questions\b|q\s*&\s*a\b|get\s+started|contact\s+us|let'?s\s+talk|next\s+steps)",
    )
    .expect("valid regex")
});

/// One non-empty body line.
#[derive(Debug, Clone)]
pub(super) struct Line {
    /// Trimmed text without a bullet marker
    pub text: String,
    pub bullet: bool,
    pub numbered: bool,
}

/// Features of one slide, computed once per classification.
#[derive(Debug, Clone)]
pub(super) struct SlideFeatures {
    pub title: String,
    pub body: String,
    pub lines: Vec<Line>,
    /// Paragraphs separated by blank lines
    pub blocks: Vec<String>,
    pub title_words: usize,
    pub body_words: usize,
    pub body_chars: usize,
    pub image_count: usize,
    /// 0-based position in the deck
    pub index: usize,
    pub total: usize,
}

impl SlideFeatures {
    pub fn new(title: &str, body: &str, image_count: usize, index: usize, total: usize) -> Self {
        let title = normalize(title);
        let body = normalize(body);

        let lines = body
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|raw| Line {
                text: BULLET.replace(raw, "").trim().to_string(),
                bullet: BULLET.is_match(raw),
                numbered: NUMBERED.is_match(raw),
            })
            .collect();

        let blocks = body
            .split("\n\n")
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            title_words: title.split_whitespace().count(),
            body_words: body.split_whitespace().count(),
            body_chars: body.chars().count(),
            title,
            body,
            lines,
            blocks,
            image_count,
            index,
            total,
        }
    }

    pub fn total_words(&self) -> usize {
        self.title_words + self.body_words
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.body.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.total > 1 && self.index + 1 == self.total
    }

    /// Figures across title and body.
    pub fn number_count(&self) -> usize {
        NUMBER_TOKEN.find_iter(&self.title).count() + NUMBER_TOKEN.find_iter(&self.body).count()
    }

    pub fn has_bullets(&self) -> bool {
        self.lines.iter().any(|l| l.bullet)
    }

    pub fn quoted_line(&self) -> Option<&Line> {
        self.lines.iter().find(|l| QUOTED.is_match(&l.text))
    }

    pub fn attribution_line(&self) -> Option<&Line> {
        self.lines.iter().find(|l| ATTRIBUTION.is_match(&l.text))
    }
}

/// NFC-normalize, unify line endings and trim.
fn normalize(text: &str) -> String {
    text.nfc()
        .collect::<String>()
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .trim()
        .to_string()
}

/// Strip surrounding quotation marks.
pub(super) fn unquote(text: &str) -> String {
    text.trim_matches(|c| matches!(c, '"' | '“' | '”' | '„' | '«' | '»' | '‘' | '’' | '\''))
        .trim()
        .to_string()
}

/// Strip a leading attribution dash.
pub(super) fn strip_attribution(text: &str) -> String {
    text.trim_start_matches(|c| matches!(c, '—' | '–' | '-' | '~'))
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_and_blocks() {
        let f = SlideFeatures::new(
            "Agenda",
            "• First point\r\n- Second point\n\n1. Numbered\nplain",
            0,
            0,
            1,
        );
        assert_eq!(f.lines.len(), 4);
        assert_eq!(f.lines[0].text, "First point");
        assert!(f.lines[1].bullet);
        assert!(f.lines[2].numbered);
        assert!(!f.lines[3].bullet);
        assert_eq!(f.blocks.len(), 2);
        assert!(f.has_bullets());
    }

    #[test]
    fn test_nfc_normalization() {
        let decomposed = "Cafe\u{301}";
        let f = SlideFeatures::new(decomposed, "", 0, 0, 1);
        assert_eq!(f.title, "Café");
    }

    #[test]
    fn test_number_tokens() {
        let f = SlideFeatures::new("Q3 2024 Review", "Revenue $4.2M, growth 3x", 0, 0, 1);
        assert_eq!(f.number_count(), 3);
    }

    #[test]
    fn test_stat_line_patterns() {
        let caps = STAT_LINE.captures("87% customer satisfaction").unwrap();
        assert_eq!(&caps["number"], "87%");
        assert_eq!(&caps["label"], "customer satisfaction");

        let caps = STAT_LINE.captures("10 million users").unwrap();
        assert_eq!(caps["number"].trim(), "10");
        assert_eq!(&caps["label"], "million users");

        assert!(STAT_LINE.captures("1. Do this").is_none());
        assert!(NUMBER_ONLY.is_match("$4.2M"));
        assert!(NUMBER_ONLY.is_match("3x"));
        assert!(!NUMBER_ONLY.is_match("3 apples"));
    }

    #[test]
    fn test_quote_helpers() {
        assert_eq!(unquote("“Great product.”"), "Great product.");
        assert_eq!(strip_attribution("— Jane Doe, CTO"), "Jane Doe, CTO");
        assert!(ATTRIBUTION.is_match("— Jane Doe"));
        assert!(QUOTED.is_match("\"This changed how we work.\""));
    }
}
