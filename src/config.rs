//! Brand configuration and slide catalog.

use crate::error::{Error, Result};
use crate::model::ContentType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Brand configuration.
///
/// Only `slide_catalog` is consumed by planning; colors and fonts are
/// carried for compliance scanning collaborators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandConfig {
    /// Brand display name
    #[serde(default, alias = "brand_name")]
    pub name: String,

    /// Named colors as RGB hex
    #[serde(default)]
    pub colors: BTreeMap<String, String>,

    /// Font families by role (e.g. "heading", "body")
    #[serde(default)]
    pub fonts: BTreeMap<String, String>,

    /// Template slots per content type
    #[serde(default)]
    pub slide_catalog: SlideCatalog,
}

impl BrandConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json_str(&text)?;
        log::debug!(
            "loaded brand config '{}' with {} catalog entries",
            config.name,
            config.slide_catalog.len()
        );
        Ok(config)
    }
}

/// Mapping content type → template slot indices (1-based), in preference order.
///
/// Iteration follows the content-type enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, SlotList>",
    into = "BTreeMap<String, Vec<u32>>"
)]
pub struct SlideCatalog {
    entries: BTreeMap<ContentType, Vec<u32>>,
}

impl SlideCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a slot for a content type (builder style).
    pub fn with_slot(mut self, content_type: ContentType, slot: u32) -> Self {
        self.insert(content_type, slot);
        self
    }

    /// Append a slot for a content type, ignoring duplicates.
    pub fn insert(&mut self, content_type: ContentType, slot: u32) {
        let slots = self.entries.entry(content_type).or_default();
        if !slots.contains(&slot) {
            slots.push(slot);
        }
    }

    /// Slots for a content type; empty when the type is not cataloged.
    pub fn slots_for(&self, content_type: ContentType) -> &[u32] {
        self.entries
            .get(&content_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every `(content type, slot)` reference in catalog order.
    pub fn all_slot_indices(&self) -> impl Iterator<Item = (ContentType, u32)> + '_ {
        self.entries
            .iter()
            .flat_map(|(ct, slots)| slots.iter().map(move |s| (*ct, *s)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContentType, &[u32])> {
        self.entries.iter().map(|(ct, slots)| (*ct, slots.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A catalog value: one slot or a list of slots.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SlotList {
    One(u32),
    Many(Vec<u32>),
}

impl TryFrom<BTreeMap<String, SlotList>> for SlideCatalog {
    type Error = String;

    fn try_from(raw: BTreeMap<String, SlotList>) -> std::result::Result<Self, String> {
        let mut catalog = SlideCatalog::new();
        for (key, value) in raw {
            let content_type: ContentType = key.parse()?;
            let slots = match value {
                SlotList::One(slot) => vec![slot],
                SlotList::Many(slots) => slots,
            };
            for slot in slots {
                if slot == 0 {
                    return Err(format!("slot indices are 1-based ('{}')", key));
                }
                catalog.insert(content_type, slot);
            }
        }
        Ok(catalog)
    }
}

impl From<SlideCatalog> for BTreeMap<String, Vec<u32>> {
    fn from(catalog: SlideCatalog) -> Self {
        catalog
            .entries
            .into_iter()
            .map(|(ct, slots)| (ct.as_str().to_string(), slots))
            .collect()
    }
}
