//! Placement plan types handed to the renderer.

use crate::cookbook::{BackgroundSpec, BoxPosition, BoxRole, PlacedBox};
use crate::diagnose::DiagnosticCode;
use crate::error::Result;
use crate::model::ContentType;
use crate::render::{to_json, JsonFormat};
use serde::Serialize;
use std::fmt;

/// Where a slide is placed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementTarget {
    /// A template slot (1-based slide index)
    Slot(u32),
    /// A cookbook recipe by name
    Recipe(&'static str),
}

impl fmt::Display for PlacementTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementTarget::Slot(index) => write!(f, "slot {}", index),
            PlacementTarget::Recipe(name) => write!(f, "recipe {}", name),
        }
    }
}

/// A box on a template slot. Position is `None` when the shape inherits
/// its geometry from the slide layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotBox {
    pub name: String,
    pub role: BoxRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<BoxPosition>,
}

/// Resolved geometry for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    /// The slot's native placeholder geometry (empty without a template)
    Native { boxes: Vec<SlotBox> },
    /// The recipe's absolute geometry, in EMUs
    Absolute {
        boxes: Vec<PlacedBox>,
        background: BackgroundSpec,
    },
}

/// Why a slide went to the cookbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Fallback {
    /// `use_cookbook` was set
    Forced,
    /// The catalog has no slot for the content type
    NoSlot,
    /// The template has blocking diagnostics
    Blocking,
    /// Every cataloged slot was disqualified; the first is reported
    Disqualified {
        slot: u32,
        codes: Vec<DiagnosticCode>,
    },
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::Forced => write!(f, "cookbook forced"),
            Fallback::NoSlot => write!(f, "no catalog slot"),
            Fallback::Blocking => write!(f, "template has blocking issues"),
            Fallback::Disqualified { slot, codes } => {
                let codes: Vec<&str> = codes.iter().map(|c| c.as_str()).collect();
                write!(f, "slot {} has {}", slot, codes.join(", "))
            }
        }
    }
}

/// One slide's placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementEntry {
    pub slide_number: u32,
    pub content_type: ContentType,
    pub target: PlacementTarget,
    pub geometry: Geometry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Fallback>,
    /// The first choice repeated the previous slide and was swapped
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub variety_swap: bool,
}

impl PlacementEntry {
    pub fn uses_cookbook(&self) -> bool {
        matches!(self.target, PlacementTarget::Recipe(_))
    }
}

/// Per-slide placements in slide order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlacementPlan {
    pub entries: Vec<PlacementEntry>,
}

impl PlacementPlan {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, slide_number: u32) -> Option<&PlacementEntry> {
        self.entries.iter().find(|e| e.slide_number == slide_number)
    }

    /// Targets in slide order.
    pub fn targets(&self) -> Vec<&PlacementTarget> {
        self.entries.iter().map(|e| &e.target).collect()
    }

    /// Number of slides placed with a recipe.
    pub fn cookbook_count(&self) -> usize {
        self.entries.iter().filter(|e| e.uses_cookbook()).count()
    }

    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        to_json(self, format)
    }
}

impl fmt::Display for PlacementPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>5}  {:<18} {:<26} NOTE", "SLIDE", "TYPE", "TARGET")?;
        for entry in &self.entries {
            let mut note = entry
                .fallback
                .as_ref()
                .map(|fb| fb.to_string())
                .unwrap_or_default();
            if entry.variety_swap {
                if !note.is_empty() {
                    note.push_str("; ");
                }
                note.push_str("variety");
            }
            let line = format!(
                "{:>5}  {:<18} {:<26} {}",
                entry.slide_number,
                entry.content_type.as_str(),
                entry.target.to_string(),
                note
            );
            writeln!(f, "{}", line.trim_end())?;
        }
        write!(
            f,
            "{} slides, {} on template slots, {} on cookbook recipes",
            self.len(),
            self.len() - self.cookbook_count(),
            self.cookbook_count()
        )
    }
}
