//! Template container access.
//!
//! A template is an Open Packaging Conventions ZIP: named parts, slides at
//! `ppt/slides/slideN.xml` with relationships in `ppt/slides/_rels/`.

use super::slide::{attr, TemplateSlide};
use crate::cookbook::{DEFAULT_SLIDE_HEIGHT, DEFAULT_SLIDE_WIDTH};
use crate::detect::is_zip_bytes;
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;
use zip::ZipArchive;

/// Content types part; required.
pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";

/// Presentation part; required.
pub const PRESENTATION_PART: &str = "ppt/presentation.xml";

/// Parts every usable template must contain.
pub const REQUIRED_PARTS: [&str; 2] = [CONTENT_TYPES_PART, PRESENTATION_PART];

static SLIDE_PART: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ppt/slides/slide(\d+)\.xml$").expect("valid regex"));
static LAYOUT_PART: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ppt/slideLayouts/slideLayout\d+\.xml$").expect("valid regex"));
static MASTER_PART: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ppt/slideMasters/slideMaster\d+\.xml$").expect("valid regex"));
static SLIDE_RELS_PART: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ppt/slides/_rels/slide(\d+)\.xml\.rels$").expect("valid regex"));

/// A relationship from a `.rels` part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub id: String,
    pub rel_type: String,
    pub target: String,
    /// `TargetMode="External"`
    pub external: bool,
}

impl Relationship {
    /// Whether the relationship points at media (image, video, audio).
    pub fn is_media(&self) -> bool {
        let kind = self.rel_type.rsplit('/').next().unwrap_or("");
        matches!(kind, "image" | "video" | "audio" | "media")
    }
}

/// An opened template package.
#[derive(Debug, Clone, Default)]
pub struct TemplatePackage {
    parts: BTreeMap<String, Vec<u8>>,
}

impl TemplatePackage {
    /// Build a package from in-memory parts.
    pub fn from_parts<I, K, V>(parts: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Vec<u8>>,
    {
        Self {
            parts: parts
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Read a package from ZIP bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if !is_zip_bytes(data) {
            return Err(Error::Template("not a ZIP container".to_string()));
        }

        let mut archive = ZipArchive::new(Cursor::new(data))?;
        let mut parts = BTreeMap::new();
        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            if file.is_dir() {
                continue;
            }
            let name = file.name().trim_start_matches('/').to_string();
            let mut contents = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut contents)?;
            parts.insert(name, contents);
        }

        log::debug!("template package opened with {} parts", parts.len());
        Ok(Self { parts })
    }

    /// Read a package from a file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Part names in sorted order.
    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.keys().map(String::as_str)
    }

    pub fn has_part(&self, name: &str) -> bool {
        self.parts.contains_key(name)
    }

    pub fn part(&self, name: &str) -> Option<&[u8]> {
        self.parts.get(name).map(Vec::as_slice)
    }

    /// Slide numbers present in the package, ascending.
    pub fn slide_numbers(&self) -> Vec<u32> {
        let mut numbers: Vec<u32> = self
            .parts
            .keys()
            .filter_map(|name| SLIDE_PART.captures(name))
            .filter_map(|caps| caps[1].parse().ok())
            .collect();
        numbers.sort_unstable();
        numbers
    }

    /// Slide numbers that have a relationships part, ascending.
    ///
    /// May include numbers whose slide part is missing.
    pub fn slide_rels_numbers(&self) -> Vec<u32> {
        let mut numbers: Vec<u32> = self
            .parts
            .keys()
            .filter_map(|name| SLIDE_RELS_PART.captures(name))
            .filter_map(|caps| caps[1].parse().ok())
            .collect();
        numbers.sort_unstable();
        numbers
    }

    pub fn slide_count(&self) -> usize {
        self.slide_numbers().len()
    }

    pub fn layout_count(&self) -> usize {
        self.parts.keys().filter(|n| LAYOUT_PART.is_match(n)).count()
    }

    pub fn master_count(&self) -> usize {
        self.parts.keys().filter(|n| MASTER_PART.is_match(n)).count()
    }

    /// Part name of a slide.
    pub fn slide_part_name(number: u32) -> String {
        format!("ppt/slides/slide{}.xml", number)
    }

    /// Part name of a slide's relationships.
    pub fn slide_rels_part_name(number: u32) -> String {
        format!("ppt/slides/_rels/slide{}.xml.rels", number)
    }

    /// Parse a slide; `Ok(None)` if the part does not exist.
    pub fn slide(&self, number: u32) -> Result<Option<TemplateSlide>> {
        match self.part(&Self::slide_part_name(number)) {
            Some(xml) => TemplateSlide::parse(number, xml).map(Some),
            None => Ok(None),
        }
    }

    /// Relationships of a slide; empty if it has no `.rels` part.
    pub fn slide_relationships(&self, number: u32) -> Result<Vec<Relationship>> {
        match self.part(&Self::slide_rels_part_name(number)) {
            Some(xml) => parse_relationships(xml),
            None => Ok(Vec::new()),
        }
    }

    /// Slide size in EMUs from `p:sldSz`, or the 4:3 default.
    pub fn slide_size(&self) -> (i64, i64) {
        let default = (DEFAULT_SLIDE_WIDTH, DEFAULT_SLIDE_HEIGHT);
        let Some(xml) = self.part(PRESENTATION_PART) else {
            return default;
        };
        match parse_slide_size(xml) {
            Ok(Some(size)) => size,
            Ok(None) => default,
            Err(e) => {
                log::warn!("could not read slide size: {}", e);
                default
            }
        }
    }

    /// Resolve a relationship target of a slide to a part name.
    pub fn resolve_slide_target(target: &str) -> String {
        resolve_target("ppt/slides", target)
    }
}

/// Parse a `.rels` part.
pub fn parse_relationships(xml: &[u8]) -> Result<Vec<Relationship>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut rels = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e)
                if e.local_name().as_ref() == b"Relationship" =>
            {
                rels.push(Relationship {
                    id: attr(e, b"Id")?.unwrap_or_default(),
                    rel_type: attr(e, b"Type")?.unwrap_or_default(),
                    target: attr(e, b"Target")?.unwrap_or_default(),
                    external: attr(e, b"TargetMode")?.as_deref() == Some("External"),
                });
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(rels)
}

fn parse_slide_size(xml: &[u8]) -> Result<Option<(i64, i64)>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e) if e.local_name().as_ref() == b"sldSz" => {
                let cx = attr(e, b"cx")?.and_then(|v| v.parse().ok());
                let cy = attr(e, b"cy")?.and_then(|v| v.parse().ok());
                return Ok(cx.zip(cy));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
        buf.clear();
    }
}

/// Resolve a relative target against the directory of its source part.
fn resolve_target(base_dir: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }

    let mut segments: Vec<&str> = base_dir.split('/').filter(|s| !s.is_empty()).collect();
    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}
