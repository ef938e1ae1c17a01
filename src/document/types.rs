//! Declarative description of a document, consumed by the renderer.
//!
//! All lengths are PDF points (1/72 inch). Margins follow the
//! left, top, right, bottom order.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spacing {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Spacing {
    pub const ZERO: Spacing = Spacing::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn bottom(bottom: f32) -> Self {
        Self::new(0.0, 0.0, 0.0, bottom)
    }

    pub const fn vertical(top: f32, bottom: f32) -> Self {
        Self::new(0.0, top, 0.0, bottom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Letter,
}

impl PageSize {
    /// Width and height in points.
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            PageSize::Letter => (612.0, 792.0),
        }
    }

    pub fn width(self) -> f32 {
        self.dimensions().0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// A named paragraph style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyle {
    pub font_size: Option<f32>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub color: Option<Rgb>,
    /// Applied when the node itself carries no margin.
    pub margin: Option<Spacing>,
}

impl TextStyle {
    pub fn sized(font_size: f32) -> Self {
        Self {
            font_size: Some(font_size),
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_margin(mut self, margin: Spacing) -> Self {
        self.margin = Some(margin);
        self
    }
}

pub type StyleSheet = BTreeMap<String, TextStyle>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Share of whatever width the fixed columns leave over.
    Star,
    Fixed(f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub width: ColumnWidth,
    pub node: Node,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    pub text: String,
    pub style: Option<String>,
    pub margin: Option<Spacing>,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageNode {
    pub path: PathBuf,
    /// Rendered width; height follows the aspect ratio.
    pub width: f32,
    pub alignment: Alignment,
    pub margin: Spacing,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Columns {
        columns: Vec<Column>,
        gap: f32,
        margin: Spacing,
    },
    Stack {
        children: Vec<Node>,
        margin: Spacing,
    },
    Text(TextNode),
    Image(ImageNode),
    /// Unordered list of plain text items.
    List {
        items: Vec<String>,
        style: Option<String>,
        margin: Spacing,
    },
}

impl Node {
    pub fn text(text: impl Into<String>, style: &str) -> Node {
        Node::Text(TextNode {
            text: text.into(),
            style: Some(style.to_string()),
            margin: None,
            alignment: Alignment::Left,
        })
    }

    pub fn text_with_margin(text: impl Into<String>, style: &str, margin: Spacing) -> Node {
        Node::Text(TextNode {
            text: text.into(),
            style: Some(style.to_string()),
            margin: Some(margin),
            alignment: Alignment::Left,
        })
    }

    pub fn image(path: impl Into<PathBuf>, width: f32, alignment: Alignment) -> Node {
        Node::Image(ImageNode {
            path: path.into(),
            width,
            alignment,
            margin: Spacing::ZERO,
        })
    }

    /// Every text run in reading order, list items included.
    pub fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Node::Columns { columns, .. } => {
                for column in columns {
                    column.node.collect_text(out);
                }
            }
            Node::Stack { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Node::Text(text) => out.push(&text.text),
            Node::Image(_) => {}
            Node::List { items, .. } => out.extend(items.iter().map(String::as_str)),
        }
    }

    /// Every image path referenced by this node.
    pub fn collect_images<'a>(&'a self, out: &mut Vec<&'a ImageNode>) {
        match self {
            Node::Columns { columns, .. } => {
                for column in columns {
                    column.node.collect_images(out);
                }
            }
            Node::Stack { children, .. } => {
                for child in children {
                    child.collect_images(out);
                }
            }
            Node::Image(image) => out.push(image),
            Node::Text(_) | Node::List { .. } => {}
        }
    }
}

/// Produces the footer of a page from its 1-based page number.
pub type FooterFn = Arc<dyn Fn(usize) -> Node + Send + Sync>;

#[derive(Clone)]
pub struct DocumentDefinition {
    pub title: Option<String>,
    pub page_size: PageSize,
    pub page_margins: Spacing,
    pub content: Vec<Node>,
    pub styles: StyleSheet,
    pub footer: Option<FooterFn>,
}

impl DocumentDefinition {
    pub fn footer_for(&self, page: usize) -> Option<Node> {
        self.footer.as_ref().map(|footer| footer(page))
    }

    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for node in &self.content {
            node.collect_text(&mut out);
        }
        out
    }

    pub fn style(&self, name: &str) -> Option<&TextStyle> {
        self.styles.get(name)
    }
}

impl fmt::Debug for DocumentDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentDefinition")
            .field("title", &self.title)
            .field("page_size", &self.page_size)
            .field("page_margins", &self.page_margins)
            .field("content", &self.content)
            .field("styles", &self.styles)
            .field("footer", &self.footer.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
