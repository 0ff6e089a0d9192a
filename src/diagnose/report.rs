//! Diagnostic records and the aggregated report.

use crate::error::Result;
use crate::render::{to_json, JsonFormat};
use serde::Serialize;
use std::fmt;

/// Severity of a diagnostic, totally ordered `Info < Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    fn label(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
            Severity::Info => "INFO",
        }
    }
}

/// Area a diagnostic concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    File,
    Structure,
    Config,
    Placeholder,
    NamedShape,
    Media,
    Layout,
}

/// Stable diagnostic identifiers. Never renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DiagnosticCode {
    /// Template unreadable
    #[serde(rename = "TMPL-001")]
    Unreadable,
    /// Not a valid container
    #[serde(rename = "TMPL-002")]
    InvalidContainer,
    /// Required parts missing
    #[serde(rename = "TMPL-003")]
    MissingParts,
    /// Configuration references a nonexistent slot
    #[serde(rename = "TMPL-004")]
    UnknownSlot,
    #[serde(rename = "TMPL-010")]
    MissingTitle,
    #[serde(rename = "TMPL-011")]
    MissingBody,
    #[serde(rename = "TMPL-012")]
    MissingPicture,
    /// stats_dashboard slot missing named stat shapes
    #[serde(rename = "TMPL-020")]
    MissingStatShapes,
    /// case_study_full slot missing quote/attribution shapes
    #[serde(rename = "TMPL-021")]
    MissingCaseStudyShapes,
    #[serde(rename = "TMPL-030")]
    TooManyMasters,
    /// Dangling media relationship
    #[serde(rename = "TMPL-040")]
    DanglingMedia,
    /// Shape covers more than 80% of the slide
    #[serde(rename = "TMPL-050")]
    OversizedShape,
}

impl DiagnosticCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::Unreadable => "TMPL-001",
            DiagnosticCode::InvalidContainer => "TMPL-002",
            DiagnosticCode::MissingParts => "TMPL-003",
            DiagnosticCode::UnknownSlot => "TMPL-004",
            DiagnosticCode::MissingTitle => "TMPL-010",
            DiagnosticCode::MissingBody => "TMPL-011",
            DiagnosticCode::MissingPicture => "TMPL-012",
            DiagnosticCode::MissingStatShapes => "TMPL-020",
            DiagnosticCode::MissingCaseStudyShapes => "TMPL-021",
            DiagnosticCode::TooManyMasters => "TMPL-030",
            DiagnosticCode::DanglingMedia => "TMPL-040",
            DiagnosticCode::OversizedShape => "TMPL-050",
        }
    }

    /// Fixed severity of the code.
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticCode::Unreadable
            | DiagnosticCode::InvalidContainer
            | DiagnosticCode::MissingParts => Severity::Error,
            DiagnosticCode::MissingPicture | DiagnosticCode::OversizedShape => Severity::Info,
            _ => Severity::Warning,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            DiagnosticCode::Unreadable | DiagnosticCode::InvalidContainer => Category::File,
            DiagnosticCode::MissingParts | DiagnosticCode::TooManyMasters => Category::Structure,
            DiagnosticCode::UnknownSlot => Category::Config,
            DiagnosticCode::MissingTitle
            | DiagnosticCode::MissingBody
            | DiagnosticCode::MissingPicture => Category::Placeholder,
            DiagnosticCode::MissingStatShapes | DiagnosticCode::MissingCaseStudyShapes => {
                Category::NamedShape
            }
            DiagnosticCode::DanglingMedia => Category::Media,
            DiagnosticCode::OversizedShape => Category::Layout,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where in the template a diagnostic applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Location {
    /// 1-based slide (slot) index
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
}

impl Location {
    pub fn slide(index: u32) -> Self {
        Self {
            slide_index: Some(index),
            ..Default::default()
        }
    }

    pub fn with_shape(mut self, shape: impl Into<String>) -> Self {
        self.shape = Some(shape.into());
        self
    }

    pub fn with_relationship(mut self, id: impl Into<String>) -> Self {
        self.relationship = Some(id.into());
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(index) = self.slide_index {
            parts.push(format!("slide {}", index));
        }
        if let Some(shape) = &self.shape {
            parts.push(format!("shape '{}'", shape));
        }
        if let Some(rel) = &self.relationship {
            parts.push(format!("rel {}", rel));
        }
        write!(f, "{}", parts.join(", "))
    }
}

/// A single diagnostic finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub category: Category,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub detail: String,
}

impl Diagnostic {
    /// Create a diagnostic; severity and category follow from the code.
    pub fn new(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: code.severity(),
            category: code.category(),
            message: message.into(),
            location: None,
            detail: String::new(),
        }
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    /// Slide index from the location, if any.
    pub fn slide_index(&self) -> Option<u32> {
        self.location.as_ref().and_then(|l| l.slide_index)
    }
}

/// Result of one validation run. Never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticReport {
    /// Issues in discovery order
    pub issues: Vec<Diagnostic>,
    pub slide_count: usize,
    pub layout_count: usize,
    pub master_count: usize,
}

impl DiagnosticReport {
    /// True iff any issue has ERROR severity.
    pub fn has_blocking_issues(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Blocking check for CI gating: strict mode also blocks on warnings.
    pub fn is_blocking(&self, strict: bool) -> bool {
        let threshold = if strict {
            Severity::Warning
        } else {
            Severity::Error
        };
        self.issues.iter().any(|i| i.severity >= threshold)
    }

    pub fn errors(&self) -> Vec<&Diagnostic> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> Vec<&Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    pub fn infos(&self) -> Vec<&Diagnostic> {
        self.with_severity(Severity::Info)
    }

    fn with_severity(&self, severity: Severity) -> Vec<&Diagnostic> {
        self.issues
            .iter()
            .filter(|i| i.severity == severity)
            .collect()
    }

    /// Codes reported at a slot, in discovery order.
    pub fn codes_at(&self, slot: u32) -> Vec<DiagnosticCode> {
        self.issues
            .iter()
            .filter(|i| i.slide_index() == Some(slot))
            .map(|i| i.code)
            .collect()
    }

    pub fn has_code(&self, code: DiagnosticCode) -> bool {
        self.issues.iter().any(|i| i.code == code)
    }

    /// Serialize the report with summary counts.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let view = ReportView {
            slide_count: self.slide_count,
            layout_count: self.layout_count,
            master_count: self.master_count,
            error_count: self.errors().len(),
            warning_count: self.warnings().len(),
            info_count: self.infos().len(),
            has_blocking_issues: self.has_blocking_issues(),
            issues: &self.issues,
        };
        to_json(&view, format)
    }
}

#[derive(Serialize)]
struct ReportView<'a> {
    slide_count: usize,
    layout_count: usize,
    master_count: usize,
    error_count: usize,
    warning_count: usize,
    info_count: usize,
    has_blocking_issues: bool,
    issues: &'a [Diagnostic],
}

const RULE_HEAVY: &str = "============================================================";
const RULE_LIGHT: &str = "------------------------------------------------------------";

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE_HEAVY)?;
        writeln!(f, "TEMPLATE DIAGNOSTIC REPORT")?;
        writeln!(f, "{}", RULE_HEAVY)?;
        writeln!(
            f,
            "Slides: {}  |  Layouts: {}  |  Masters: {}",
            self.slide_count, self.layout_count, self.master_count
        )?;
        writeln!(
            f,
            "Issues: {} errors, {} warnings, {} info",
            self.errors().len(),
            self.warnings().len(),
            self.infos().len()
        )?;
        writeln!(f, "{}", RULE_LIGHT)?;

        for issue in &self.issues {
            let location = match &issue.location {
                Some(loc) => format!(" [{}]", loc),
                None => String::new(),
            };
            writeln!(
                f,
                "  {:<6} {}{}: {}",
                issue.severity.label(),
                issue.code,
                location,
                issue.message
            )?;
            if !issue.detail.is_empty() {
                writeln!(f, "         {}", issue.detail)?;
            }
        }

        writeln!(f, "{}", RULE_LIGHT)?;
        if self.has_blocking_issues() {
            write!(f, "RESULT: BLOCKING errors found. Fix before migration.")
        } else if !self.warnings().is_empty() {
            write!(
                f,
                "RESULT: Warnings found. Migration will proceed but some content may use fallback layouts."
            )
        } else {
            write!(f, "RESULT: Template looks good!")
        }
    }
}
