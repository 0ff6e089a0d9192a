//! Diagnostics-to-fallback decision table.

use crate::diagnose::DiagnosticCode;
use crate::model::ContentType::{self, *};

/// Whether a slot can host a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotDecision {
    UseSlot,
    UseCookbook,
}

/// Content types a disqualifying code applies to.
#[derive(Debug, Clone, Copy)]
enum Scope {
    All,
    AllExcept(&'static [ContentType]),
    Only(&'static [ContentType]),
}

impl Scope {
    fn covers(&self, content_type: ContentType) -> bool {
        match self {
            Scope::All => true,
            Scope::AllExcept(types) => !types.contains(&content_type),
            Scope::Only(types) => types.contains(&content_type),
        }
    }
}

/// Codes at a slot that send a slide of the covered types to the cookbook.
const DECISION_TABLE: &[(DiagnosticCode, Scope)] = &[
    (DiagnosticCode::UnknownSlot, Scope::All),
    (
        DiagnosticCode::MissingTitle,
        Scope::AllExcept(&[StatsDashboard, CaseStudyFull]),
    ),
    (
        DiagnosticCode::MissingBody,
        Scope::Only(&[
            BulletList,
            NumberedStep,
            DetailedContent,
            Comparison,
            Feature,
            CaseStudy,
        ]),
    ),
    (DiagnosticCode::MissingStatShapes, Scope::Only(&[StatsDashboard])),
    (
        DiagnosticCode::MissingCaseStudyShapes,
        Scope::Only(&[CaseStudyFull]),
    ),
];

/// The fallback policy. Pure: no state, no I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackPolicy;

impl FallbackPolicy {
    /// Whether a code disqualifies a slot for a content type.
    pub fn disqualifies(code: DiagnosticCode, content_type: ContentType) -> bool {
        DECISION_TABLE
            .iter()
            .any(|(c, scope)| *c == code && scope.covers(content_type))
    }

    /// The codes among `codes` that disqualify the slot, deduplicated in order.
    pub fn disqualifying(content_type: ContentType, codes: &[DiagnosticCode]) -> Vec<DiagnosticCode> {
        let mut found = Vec::new();
        for &code in codes {
            if Self::disqualifies(code, content_type) && !found.contains(&code) {
                found.push(code);
            }
        }
        found
    }

    /// Decide for one slot given the codes reported at it.
    ///
    /// A report with blocking issues disqualifies every slot.
    pub fn decide(
        content_type: ContentType,
        codes: &[DiagnosticCode],
        blocking: bool,
    ) -> SlotDecision {
        if blocking || !Self::disqualifying(content_type, codes).is_empty() {
            SlotDecision::UseCookbook
        } else {
            SlotDecision::UseSlot
        }
    }
}
