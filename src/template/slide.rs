//! Slide part parsing: shapes, placeholders and geometry.

use crate::cookbook::BoxPosition;
use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Placeholder type (`p:ph/@type`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderKind {
    Title,
    CenteredTitle,
    SubTitle,
    Body,
    /// `obj`, also the default when `type` is absent
    Object,
    Picture,
    Chart,
    Table,
    Other(String),
}

impl PlaceholderKind {
    fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("obj") => PlaceholderKind::Object,
            Some("title") => PlaceholderKind::Title,
            Some("ctrTitle") => PlaceholderKind::CenteredTitle,
            Some("subTitle") => PlaceholderKind::SubTitle,
            Some("body") => PlaceholderKind::Body,
            Some("pic") => PlaceholderKind::Picture,
            Some("chart") => PlaceholderKind::Chart,
            Some("tbl") => PlaceholderKind::Table,
            Some(other) => PlaceholderKind::Other(other.to_string()),
        }
    }

    pub fn is_title(&self) -> bool {
        matches!(self, PlaceholderKind::Title | PlaceholderKind::CenteredTitle)
    }

    pub fn is_body(&self) -> bool {
        matches!(
            self,
            PlaceholderKind::Body | PlaceholderKind::Object | PlaceholderKind::SubTitle
        )
    }
}

/// A placeholder reference on a shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub kind: PlaceholderKind,
    pub idx: Option<u32>,
}

/// Kind of shape element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// `p:sp`
    Shape,
    /// `p:pic`
    Picture,
    /// `p:graphicFrame`
    Frame,
    /// `p:cxnSp`
    Connector,
}

impl ShapeKind {
    fn from_local_name(name: &[u8]) -> Option<Self> {
        match name {
            b"sp" => Some(ShapeKind::Shape),
            b"pic" => Some(ShapeKind::Picture),
            b"graphicFrame" => Some(ShapeKind::Frame),
            b"cxnSp" => Some(ShapeKind::Connector),
            _ => None,
        }
    }
}

/// A shape on a template slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateShape {
    pub id: u32,
    pub name: String,
    pub kind: ShapeKind,
    pub placeholder: Option<Placeholder>,
    /// Declared geometry; `None` when the shape inherits it from its layout
    pub position: Option<BoxPosition>,
}

impl TemplateShape {
    /// Create a plain named shape without geometry.
    pub fn new(name: impl Into<String>, kind: ShapeKind) -> Self {
        Self {
            id: 0,
            name: name.into(),
            kind,
            placeholder: None,
            position: None,
        }
    }

    /// Mark the shape as a placeholder.
    pub fn with_placeholder(mut self, kind: PlaceholderKind) -> Self {
        self.placeholder = Some(Placeholder { kind, idx: None });
        self
    }

    /// Set the geometry.
    pub fn with_position(mut self, position: BoxPosition) -> Self {
        self.position = Some(position);
        self
    }
}

/// A parsed template slide (a slot).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSlide {
    /// 1-based slide number (`slideN.xml`)
    pub number: u32,
    /// Shapes in document order
    pub shapes: Vec<TemplateShape>,
}

impl TemplateSlide {
    /// Create a slide from already known shapes.
    pub fn new(number: u32, shapes: Vec<TemplateShape>) -> Self {
        Self { number, shapes }
    }

    /// Parse a slide part.
    pub fn parse(number: u32, xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut stack: Vec<ShapeBuilder> = Vec::new();
        let mut shapes = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => {
                    let local = e.local_name();
                    if let Some(kind) = ShapeKind::from_local_name(local.as_ref()) {
                        stack.push(ShapeBuilder::new(kind));
                    } else if let Some(top) = stack.last_mut() {
                        top.apply(e)?;
                    }
                }
                Event::Empty(ref e) => {
                    if let Some(top) = stack.last_mut() {
                        top.apply(e)?;
                    }
                }
                Event::End(ref e) => {
                    if ShapeKind::from_local_name(e.local_name().as_ref()).is_some() {
                        if let Some(builder) = stack.pop() {
                            shapes.push(builder.finish());
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(Self { number, shapes })
    }

    /// First title placeholder.
    pub fn title_placeholder(&self) -> Option<&TemplateShape> {
        self.shapes.iter().find(|s| {
            s.placeholder
                .as_ref()
                .map(|p| p.kind.is_title())
                .unwrap_or(false)
        })
    }

    /// First body placeholder.
    pub fn body_placeholder(&self) -> Option<&TemplateShape> {
        self.shapes.iter().find(|s| {
            s.placeholder
                .as_ref()
                .map(|p| p.kind.is_body())
                .unwrap_or(false)
        })
    }

    /// Whether the slide has a picture placeholder.
    pub fn has_picture_placeholder(&self) -> bool {
        self.shapes.iter().any(|s| {
            s.placeholder
                .as_ref()
                .map(|p| p.kind == PlaceholderKind::Picture)
                .unwrap_or(false)
        })
    }

    /// Find a shape by exact name.
    pub fn find_shape(&self, name: &str) -> Option<&TemplateShape> {
        self.shapes.iter().find(|s| s.name == name)
    }
}

struct ShapeBuilder {
    kind: ShapeKind,
    id: Option<u32>,
    name: Option<String>,
    placeholder: Option<Placeholder>,
    offset: Option<(i64, i64)>,
    extent: Option<(i64, i64)>,
}

impl ShapeBuilder {
    fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            id: None,
            name: None,
            placeholder: None,
            offset: None,
            extent: None,
        }
    }

    fn apply(&mut self, e: &BytesStart<'_>) -> Result<()> {
        match e.local_name().as_ref() {
            b"cNvPr" if self.name.is_none() => {
                self.id = attr(e, b"id")?.and_then(|v| v.parse().ok());
                self.name = Some(attr(e, b"name")?.unwrap_or_default());
            }
            b"ph" if self.placeholder.is_none() => {
                let kind = PlaceholderKind::parse(attr(e, b"type")?.as_deref());
                let idx = attr(e, b"idx")?.and_then(|v| v.parse().ok());
                self.placeholder = Some(Placeholder { kind, idx });
            }
            b"off" if self.offset.is_none() => {
                if let (Some(x), Some(y)) = (attr_i64(e, b"x")?, attr_i64(e, b"y")?) {
                    self.offset = Some((x, y));
                }
            }
            // a:ext inside extLst carries a uri, not cx/cy
            b"ext" if self.extent.is_none() => {
                if let (Some(cx), Some(cy)) = (attr_i64(e, b"cx")?, attr_i64(e, b"cy")?) {
                    self.extent = Some((cx, cy));
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn finish(self) -> TemplateShape {
        let position = self.extent.map(|(cx, cy)| {
            let (x, y) = self.offset.unwrap_or((0, 0));
            BoxPosition::new(x, y, cx, cy)
        });
        TemplateShape {
            id: self.id.unwrap_or(0),
            name: self.name.unwrap_or_default(),
            kind: self.kind,
            placeholder: self.placeholder,
            position,
        }
    }
}

pub(crate) fn attr(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| Error::Template(format!("XML attribute error: {}", err)))?;
        if attr.key.local_name().as_ref() == key {
            let value = attr
                .unescape_value()
                .map_err(|err| Error::Template(format!("XML attribute error: {}", err)))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn attr_i64(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<i64>> {
    Ok(attr(e, key)?.and_then(|v| v.trim().parse().ok()))
}
