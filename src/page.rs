use crate::colour::Colour;
use crate::field::TextField;
use crate::font::Font;
use crate::image::Image;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use crate::PDFError;
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf, Ref};
use std::io::Write;

/// A font selection for a span: which document font, at what size
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A placed run of text: the coordinates are the baseline start
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// A placed image
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ImageLayout {
    pub image_id: Id<Image>,
    pub position: Rect,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    Image(ImageLayout),
}

/// A single page: static drawn content plus any interactive fields placed
/// on it. Pages accumulate content until the owning document is written.
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// The laid out static content, drawn in insertion order
    pub contents: Vec<PageContents>,
    /// Interactive text fields, in placement order
    pub fields: Vec<TextField>,
}

impl Page {
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_else(Margins::empty);
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
            fields: Vec::default(),
        }
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(vec![span]));
    }

    pub fn add_image(&mut self, image: ImageLayout) {
        self.contents.push(PageContents::Image(image));
    }

    pub fn add_field(&mut self, field: TextField) {
        self.fields.push(field);
    }

    /// Render the static contents into raw PDF content stream operators.
    /// Text is shown as WinAnsi literal strings; anything outside ASCII is
    /// replaced, matching the measurement fallback in [Font].
    #[allow(clippy::write_with_newline)]
    fn render(&self) -> Result<Vec<u8>, std::io::Error> {
        if self.contents.is_empty() {
            return Ok(Vec::default());
        }

        let mut content: Vec<u8> = Vec::default();

        for page_content in self.contents.iter() {
            match page_content {
                PageContents::Text(spans) => {
                    render_text_spans(&mut content, spans)?;
                }
                PageContents::Image(image) => {
                    write!(&mut content, "q\n")?;
                    write!(
                        &mut content,
                        "{} 0 0 {} {} {} cm\n",
                        image.position.width(),
                        image.position.height(),
                        image.position.x1,
                        image.position.y1
                    )?;
                    write!(&mut content, "/I{} Do\n", image.image_id.index())?;
                    write!(&mut content, "Q\n")?;
                }
            }
        }

        Ok(content)
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        images: &Arena<Image>,
        field_refs: &[Ref],
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs
            .get(RefType::Page(page_index))
            .expect("page refs are pre-generated");
        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(refs.get(RefType::PageTree).expect("page tree ref exists"));

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (i, _) in fonts.iter() {
            resource_fonts.pair(
                Name(format!("F{}", i.index()).as_bytes()),
                refs.get(RefType::Font(i.index())).expect("font was written"),
            );
        }
        resource_fonts.finish();
        if images.len() != 0 {
            let mut resource_xobjects = resources.x_objects();
            for (i, _) in images.iter() {
                resource_xobjects.pair(
                    Name(format!("I{}", i.index()).as_bytes()),
                    refs.get(RefType::Image(i.index()))
                        .expect("image was written"),
                );
            }
            resource_xobjects.finish();
        }
        resources.finish();

        // widget annotations are indirect objects so the same references can
        // appear in the catalog's AcroForm field list
        if !field_refs.is_empty() {
            page.insert(Name(b"Annots"))
                .array()
                .items(field_refs.iter().copied());
        }

        let content_id = refs.gen(RefType::ContentForPage(page_index));
        page.contents(content_id);
        page.finish();

        let rendered = self.render()?;
        writer.stream(content_id, rendered.as_slice());

        Ok(())
    }
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(content: &mut Vec<u8>, spans: &[SpanLayout]) -> Result<(), std::io::Error> {
    let Some(first) = spans.first() else {
        return Ok(());
    };

    write!(content, "q\n")?;

    let mut current_font: SpanFont = first.font;
    let mut current_colour: Colour = first.colour;

    write!(
        content,
        "/F{} {} Tf\n",
        current_font.id.index(),
        current_font.size
    )?;
    write_colour(content, current_colour)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write!(
                content,
                "/F{} {} Tf\n",
                current_font.id.index(),
                current_font.size
            )?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_colour(content, current_colour)?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        write_literal_string(content, &span.text)?;
        write!(content, " Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::CMYK { c, m, y, k } => write!(content, "{c} {m} {y} {k} k\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

/// Write `text` as a PDF literal string, escaping delimiters and replacing
/// anything outside the ASCII range
fn write_literal_string(content: &mut Vec<u8>, text: &str) -> Result<(), std::io::Error> {
    content.push(b'(');
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                content.push(b'\\');
                content.push(ch as u8);
            }
            ch if ch.is_ascii_graphic() || ch == ' ' => content.push(ch as u8),
            _ => content.push(b'?'),
        }
    }
    content.push(b')');
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize;
    use crate::units::In;

    #[test]
    fn content_box_sits_inside_the_margins() {
        let page = Page::new(
            pagesize::LETTER,
            Some(Margins::trbl(
                In(0.5).into(),
                In(0.75).into(),
                In(0.45).into(),
                In(0.75).into(),
            )),
        );
        assert_eq!(page.content_box.x1, Pt(54.0));
        assert_eq!(page.content_box.x2, Pt(558.0));
        assert_eq!(page.content_box.y2, Pt(756.0));
        assert!((f32::from(page.content_box.y1) - 32.4).abs() < 1e-3);
        assert!(page.media_box.contains(&page.content_box));
    }

    #[test]
    fn literal_strings_escape_delimiters() {
        let mut buffer = Vec::new();
        write_literal_string(&mut buffer, r"a(b)c\d — e").unwrap();
        assert_eq!(buffer, br"(a\(b\)c\\d ? e)".to_vec());
    }
}
