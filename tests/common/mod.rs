//! In-memory template containers for integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const IMAGE_REL: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

const SLIDE_OPEN: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"><p:cSld><p:spTree>"#;
const SLIDE_CLOSE: &str = "</p:spTree></p:cSld></p:sld>";

/// A placeholder shape; `ph_type` of `None` writes a typeless `p:ph`.
pub fn placeholder(id: u32, name: &str, ph_type: Option<&str>) -> String {
    let ph = match ph_type {
        Some(t) => format!(r#"<p:ph type="{}"/>"#, t),
        None => r#"<p:ph idx="1"/>"#.to_string(),
    };
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{}" name="{}"/><p:cNvSpPr/><p:nvPr>{}</p:nvPr></p:nvSpPr><p:spPr/></p:sp>"#,
        id, name, ph
    )
}

/// A named, positioned non-placeholder shape.
pub fn named_shape(id: u32, name: &str, x: i64, y: i64, cx: i64, cy: i64) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{}" name="{}"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr><a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm></p:spPr></p:sp>"#,
        id, name, x, y, cx, cy
    )
}

pub fn slide(shapes: &[String]) -> String {
    format!("{}{}{}", SLIDE_OPEN, shapes.concat(), SLIDE_CLOSE)
}

/// Title, body and picture placeholders: no findings.
pub fn full_slide() -> String {
    slide(&[
        placeholder(2, "Title 1", Some("title")),
        placeholder(3, "Content 2", None),
        placeholder(4, "Picture 3", Some("pic")),
    ])
}

/// Title and body placeholders only.
pub fn text_slide() -> String {
    slide(&[
        placeholder(2, "Title 1", Some("title")),
        placeholder(3, "Text 2", Some("body")),
    ])
}

/// Title placeholder only.
pub fn title_only_slide() -> String {
    slide(&[placeholder(2, "Title 1", Some("title"))])
}

pub fn rels(entries: &[(&str, &str, &str, bool)]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for (id, rel_type, target, external) in entries {
        let mode = if *external { r#" TargetMode="External""# } else { "" };
        xml.push_str(&format!(
            r#"<Relationship Id="{}" Type="{}" Target="{}"{}/>"#,
            id, rel_type, target, mode
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

/// Builds a template container part by part.
pub struct TemplateBuilder {
    parts: Vec<(String, Vec<u8>)>,
}

impl TemplateBuilder {
    /// A container with the required parts and no slides.
    pub fn new() -> Self {
        Self { parts: Vec::new() }
            .part("[Content_Types].xml", "<Types/>")
            .part(
                "ppt/presentation.xml",
                r#"<p:presentation xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"><p:sldSz cx="9144000" cy="6858000"/></p:presentation>"#,
            )
            .part("ppt/slideMasters/slideMaster1.xml", "<p:sldMaster/>")
            .part("ppt/slideLayouts/slideLayout1.xml", "<p:sldLayout/>")
    }

    /// A container without the required parts.
    pub fn bare() -> Self {
        Self { parts: Vec::new() }
    }

    pub fn part(mut self, name: &str, content: impl Into<Vec<u8>>) -> Self {
        self.parts.retain(|(n, _)| n != name);
        self.parts.push((name.to_string(), content.into()));
        self
    }

    pub fn slide(self, number: u32, xml: String) -> Self {
        self.part(&format!("ppt/slides/slide{}.xml", number), xml)
    }

    pub fn slide_rels(self, number: u32, xml: String) -> Self {
        self.part(&format!("ppt/slides/_rels/slide{}.xml.rels", number), xml)
    }

    pub fn masters(mut self, count: usize) -> Self {
        for i in 1..=count {
            self = self.part(
                &format!("ppt/slideMasters/slideMaster{}.xml", i),
                "<p:sldMaster/>",
            );
        }
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in &self.parts {
            writer
                .start_file(name.as_str(), SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }
}
