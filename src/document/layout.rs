//! genpdf elements for layout features genpdf lacks: fixed/star columns and a
//! page decorator that draws a footer into the bottom page margin.

use genpdf::error::Error;
use genpdf::render::Area;
use genpdf::style::Style;
use genpdf::{Context, Element, Margins, Mm, PageDecorator, Position, RenderResult};

/// A type-erased element that genpdf containers accept, since they require
/// `E: Element` by value.
pub struct BoxedElement(Box<dyn Element>);

impl BoxedElement {
    pub fn new<E: Element + 'static>(element: E) -> Self {
        Self(Box::new(element))
    }
}

impl Element for BoxedElement {
    fn render(
        &mut self,
        context: &Context,
        area: Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        self.0.render(context, area, style)
    }
}

/// Resolved width of one column.
pub enum ColumnSpec {
    Star,
    Fixed(Mm),
}

/// Columns laid out side by side. Star columns split the width the fixed
/// columns and gaps leave over.
pub struct Columns {
    columns: Vec<(ColumnSpec, BoxedElement)>,
    gap: Mm,
}

impl Columns {
    pub fn new(gap: Mm) -> Self {
        Self {
            columns: Vec::new(),
            gap,
        }
    }

    pub fn push(&mut self, spec: ColumnSpec, element: BoxedElement) {
        self.columns.push((spec, element));
    }

    fn widths(&self, available: Mm) -> Vec<Mm> {
        let zero = Mm::from(0.0);
        let gaps = self.columns.len().saturating_sub(1) as f64;
        let mut fixed = self.gap * gaps;
        let mut stars = 0usize;
        for (spec, _) in &self.columns {
            match spec {
                ColumnSpec::Fixed(width) => fixed = fixed + *width,
                ColumnSpec::Star => stars += 1,
            }
        }

        let remaining = available - fixed;
        let star_width = if stars == 0 || remaining < zero {
            zero
        } else {
            remaining / stars as f64
        };

        self.columns
            .iter()
            .map(|(spec, _)| match spec {
                ColumnSpec::Fixed(width) => *width,
                ColumnSpec::Star => star_width,
            })
            .collect()
    }
}

impl Element for Columns {
    fn render(
        &mut self,
        context: &Context,
        area: Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let available = area.size().width;
        let widths = self.widths(available);

        let mut result = RenderResult::default();
        let mut offset = Mm::from(0.0);
        for ((_, element), width) in self.columns.iter_mut().zip(widths) {
            let mut column_area = area.clone();
            column_area.add_offset(Position::new(offset, Mm::from(0.0)));
            column_area.set_width(width);

            let column = element.render(context, column_area, style)?;
            if column.size.height > result.size.height {
                result.size.height = column.size.height;
            }
            result.has_more |= column.has_more;
            offset = offset + width + self.gap;
        }

        result.size.width = available;
        Ok(result)
    }
}

/// Builds the footer element for a 1-based page number.
pub type FooterBuilder = Box<dyn FnMut(usize) -> Result<BoxedElement, Error>>;

/// Applies page margins and renders a footer into the bottom margin of every page.
pub struct FooterDecorator {
    margins: Margins,
    /// Height of the bottom margin the footer is drawn into.
    footer_height: Mm,
    footer: Option<FooterBuilder>,
    page: usize,
}

impl FooterDecorator {
    pub fn new(margins: Margins, footer_height: Mm, footer: Option<FooterBuilder>) -> Self {
        Self {
            margins,
            footer_height,
            footer,
            page: 0,
        }
    }
}

impl PageDecorator for FooterDecorator {
    fn decorate_page<'a>(
        &mut self,
        context: &Context,
        mut area: Area<'a>,
        style: Style,
    ) -> Result<Area<'a>, Error> {
        self.page += 1;

        if let Some(build) = self.footer.as_mut() {
            let page_height = area.size().height;
            let mut footer_area = area.clone();
            footer_area.add_offset(Position::new(Mm::from(0.0), page_height - self.footer_height));
            footer_area.set_height(self.footer_height);

            let mut element = build(self.page)?;
            element.render(context, footer_area, style)?;
        }

        area.add_margins(self.margins);
        Ok(area)
    }
}
