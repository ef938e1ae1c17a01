//! PDF rendering of a [`DocumentDefinition`] with genpdf.
//!
//! Fonts are registered once when the renderer is built; the renderer is then
//! shared read-only by every request.

use genpdf::elements::{Break, Image, LinearLayout, Paragraph, UnorderedList};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::style::{Color, Style};
use genpdf::{Element, Margins, PaperSize, Scale};
use image::{DynamicImage, GenericImageView, Rgb, RgbImage};
use std::path::{Path, PathBuf};

use super::common::pt;
use super::layout::{BoxedElement, ColumnSpec, Columns, FooterBuilder, FooterDecorator};
use super::types::{
    Alignment, ColumnWidth, DocumentDefinition, ImageNode, Node, PageSize, Spacing, StyleSheet,
    TextNode, TextStyle,
};
use super::DocumentError;

/// genpdf places images at this resolution unless told otherwise.
const DEFAULT_IMAGE_DPI: f64 = 300.0;

/// Turns a content tree into PDF bytes.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, document: &DocumentDefinition) -> Result<Vec<u8>, DocumentError>;
}

/// Four style variants of one font family, referenced by file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontRegistration {
    pub normal: PathBuf,
    pub bold: PathBuf,
    pub italics: PathBuf,
    pub bolditalics: PathBuf,
}

impl FontRegistration {
    /// Roboto from `dir`; the medium weight stands in for bold.
    pub fn roboto(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            normal: dir.join("Roboto-Regular.ttf"),
            bold: dir.join("Roboto-Medium.ttf"),
            italics: dir.join("Roboto-Italic.ttf"),
            bolditalics: dir.join("Roboto-MediumItalic.ttf"),
        }
    }

    fn load(&self) -> Result<FontFamily<FontData>, DocumentError> {
        let load = |path: &PathBuf| {
            FontData::load(path, None).map_err(|source| DocumentError::FontLoad {
                path: path.clone(),
                source,
            })
        };

        Ok(FontFamily {
            regular: load(&self.normal)?,
            bold: load(&self.bold)?,
            italic: load(&self.italics)?,
            bold_italic: load(&self.bolditalics)?,
        })
    }
}

pub struct PdfRenderer {
    fonts: FontFamily<FontData>,
}

impl PdfRenderer {
    /// Load the font files. A missing file fails here, before any request is served.
    pub fn new(fonts: &FontRegistration) -> Result<Self, DocumentError> {
        let fonts = fonts.load()?;
        log::info!("PDF renderer ready");
        Ok(Self { fonts })
    }
}

impl DocumentRenderer for PdfRenderer {
    fn render(&self, document: &DocumentDefinition) -> Result<Vec<u8>, DocumentError> {
        let mut doc = genpdf::Document::new(self.fonts.clone());
        if let Some(title) = &document.title {
            doc.set_title(title.clone());
        }
        doc.set_paper_size(match document.page_size {
            PageSize::Letter => PaperSize::Letter,
        });

        let footer: Option<FooterBuilder> = document.footer.clone().map(|footer| {
            let styles = document.styles.clone();
            let builder: FooterBuilder = Box::new(move |page| {
                build_element(&footer(page), &styles).map_err(DocumentError::into_genpdf)
            });
            builder
        });
        doc.set_page_decorator(FooterDecorator::new(
            margins(document.page_margins),
            pt(document.page_margins.bottom),
            footer,
        ));

        for node in &document.content {
            doc.push(build_element(node, &document.styles)?);
        }

        let mut buffer = Vec::new();
        doc.render(&mut buffer).map_err(DocumentError::Render)?;
        Ok(buffer)
    }
}

fn margins(spacing: Spacing) -> Margins {
    Margins::trbl(
        pt(spacing.top),
        pt(spacing.right),
        pt(spacing.bottom),
        pt(spacing.left),
    )
}

fn alignment(alignment: Alignment) -> genpdf::Alignment {
    match alignment {
        Alignment::Left => genpdf::Alignment::Left,
        Alignment::Center => genpdf::Alignment::Center,
        Alignment::Right => genpdf::Alignment::Right,
    }
}

/// genpdf has no underline; `underline` is carried in the tree but not drawn.
fn text_style(style: Option<&TextStyle>) -> Style {
    let mut out = Style::new();
    let Some(style) = style else {
        return out;
    };
    if let Some(size) = style.font_size {
        out = out.with_font_size(size.round().clamp(1.0, 255.0) as u8);
    }
    if style.bold {
        out = out.bold();
    }
    if style.italic {
        out = out.italic();
    }
    if let Some(color) = style.color {
        out = out.with_color(Color::Rgb(color.0, color.1, color.2));
    }
    out
}

fn padded<E: Element + 'static>(element: E, spacing: Spacing) -> BoxedElement {
    if spacing == Spacing::ZERO {
        BoxedElement::new(element)
    } else {
        BoxedElement::new(element.padded(margins(spacing)))
    }
}

fn build_element(node: &Node, styles: &StyleSheet) -> Result<BoxedElement, DocumentError> {
    match node {
        Node::Columns {
            columns,
            gap,
            margin,
        } => {
            let mut layout = Columns::new(pt(*gap));
            for column in columns {
                let spec = match column.width {
                    ColumnWidth::Star => ColumnSpec::Star,
                    ColumnWidth::Fixed(width) => ColumnSpec::Fixed(pt(width)),
                };
                layout.push(spec, build_element(&column.node, styles)?);
            }
            Ok(padded(layout, *margin))
        }
        Node::Stack { children, margin } => {
            let mut layout = LinearLayout::vertical();
            for child in children {
                layout.push(build_element(child, styles)?);
            }
            Ok(padded(layout, *margin))
        }
        Node::Text(text) => Ok(text_element(text, styles)),
        Node::Image(image) => image_element(image),
        Node::List {
            items,
            style,
            margin,
        } => {
            let style = text_style(style.as_deref().and_then(|name| styles.get(name)));
            let mut list = UnorderedList::new();
            for item in items {
                list.push(Paragraph::new(item.as_str()));
            }
            Ok(padded(list.styled(style), *margin))
        }
    }
}

fn text_element(text: &TextNode, styles: &StyleSheet) -> BoxedElement {
    let named = text.style.as_deref().and_then(|name| styles.get(name));
    let margin = text
        .margin
        .or_else(|| named.and_then(|style| style.margin))
        .unwrap_or_default();

    // Explicit line breaks become separate paragraphs; an empty line keeps its height.
    let mut layout = LinearLayout::vertical();
    for line in text.text.split('\n') {
        if line.is_empty() {
            layout.push(Break::new(1.0));
        } else {
            layout.push(Paragraph::new(line).aligned(alignment(text.alignment)));
        }
    }

    padded(layout.styled(text_style(named)), margin)
}

/// Load an image, flattening transparency onto white since genpdf rejects alpha channels.
fn load_image(path: &Path) -> Result<DynamicImage, DocumentError> {
    let source = image::open(path).map_err(|source| DocumentError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = source.dimensions();
    let rgba = source.to_rgba8();
    let mut flat = RgbImage::new(width, height);
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = u16::from(a);
        let blend = |channel: u8| ((u16::from(channel) * alpha + 255 * (255 - alpha)) / 255) as u8;
        flat.put_pixel(x, y, Rgb([blend(r), blend(g), blend(b)]));
    }

    Ok(DynamicImage::ImageRgb8(flat))
}

fn image_element(node: &ImageNode) -> Result<BoxedElement, DocumentError> {
    let source = load_image(&node.path)?;
    let pixel_width = f64::from(source.width().max(1));

    // At the default DPI an image is `pixels / dpi` inches wide.
    let natural_points = pixel_width / DEFAULT_IMAGE_DPI * 72.0;
    let factor = f64::from(node.width) / natural_points;

    let image = Image::from_dynamic_image(source)
        .map_err(DocumentError::Render)?
        .with_alignment(alignment(node.alignment))
        .with_scale(Scale::new(factor, factor));

    Ok(padded(image, node.margin))
}
