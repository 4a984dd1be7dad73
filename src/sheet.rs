//! The decision balance sheet: a one-page editable PDF worksheet.
//!
//! Everything on the page is placed by a single top-to-bottom build pass
//! driven by a vertical cursor, using the fixed constants documented here.
//! The content script (title, paragraphs, field labels and names, footer)
//! is baked in; the only inputs are the output destination and the logo
//! image path.

use crate::colour::colours;
use crate::document::Document;
use crate::field::TextField;
use crate::font::Font;
use crate::image::Image;
use crate::info::Info;
use crate::layout::{self, Cursor, Margins};
use crate::page::{ImageLayout, Page, PageContents, SpanFont, SpanLayout};
use crate::pagesize;
use crate::rect::Rect;
use crate::units::{In, Pt};
use crate::PDFError;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Default output filename
pub const DEFAULT_OUTPUT: &str = "DecisionBalanceSheet_Editable.pdf";
/// Default logo image path, relative to the working directory
pub const DEFAULT_LOGO: &str = "logo.png";

const TITLE: &str = "Decision Balance Sheet";

const PARAGRAPHS: [&str; 2] = [
    "This worksheet can be used to help you make a decision on whether you want to make \
     certain changes in your life (e.g. stopping some old behaviours or doing something new).",
    "It is best to complete each section, even if it seems that some of the answers in \
     different sections are similar. Make sure you include both short-term and long-term \
     advantages and disadvantages.",
];

/// The four quadrants of the balance grid, row-major: (label, field name)
const CATEGORIES: [(&str, &str); 4] = [
    ("Advantages of Staying the Same", "AdvStay"),
    ("Disadvantages of Staying the Same", "DisadvStay"),
    ("Advantages of Changing", "AdvChange"),
    ("Disadvantages of Changing", "DisadvChange"),
];

const FOOTER_LINES: [&str; 2] = [
    "Based on the original by Practical Happiness - www.practicalhappiness.co.uk",
    "Edited by Kasey Robinson from Hackeroos - www.hackeroos.com.au",
];

/// Build the sheet and persist it to `output`.
///
/// A missing or unreadable logo is recovered from silently (the sheet is
/// complete without it); the only surfaced failure is an output destination
/// that cannot be written.
pub fn generate<P: AsRef<Path>, Q: AsRef<Path>>(output: P, logo: Q) -> Result<(), PDFError> {
    let doc = build_document(logo)?;
    let out = File::create(output.as_ref())?;
    doc.write(out)
}

/// Build the complete single-page document, loading the logo from
/// `logo_path` if possible. The returned document has not been written
/// anywhere yet; [Document::write] seals and renders it.
pub fn build_document<P: AsRef<Path>>(logo_path: P) -> Result<Document, PDFError> {
    let mut doc = Document::default();
    doc.set_info(Info::new().title(TITLE).clone());

    let helvetica = doc.add_font(Font::helvetica());
    let helvetica_bold = doc.add_font(Font::helvetica_bold());

    let (width, height) = pagesize::LETTER;
    let left_margin: Pt = In(0.75).into();
    let right_margin: Pt = In(0.75).into();
    let content_width = width - left_margin - right_margin;

    // the top margin reserves the logo band, the bottom margin the footer
    let margins = Margins::trbl(In(0.5).into(), right_margin, In(0.45).into(), left_margin);
    let mut page = Page::new(pagesize::LETTER, Some(margins));

    // logo, centred near the top, fitted into a fixed box
    let logo_width: Pt = In(2.0).into();
    let logo_height: Pt = In(1.5).into();
    let logo_top = height - Pt::from(In(0.5));
    let logo_bounds = Rect {
        x1: (width - logo_width) / 2.0,
        y1: logo_top - logo_height,
        x2: (width + logo_width) / 2.0,
        y2: logo_top,
    };
    match Image::new_from_disk(logo_path.as_ref()) {
        Ok(image) => {
            let position = image.fit_within(&logo_bounds);
            let image_id = doc.add_image(image);
            page.add_image(ImageLayout { image_id, position });
        }
        Err(error) => {
            // not fatal: the sheet is complete without its logo
            debug!(%error, path = %logo_path.as_ref().display(), "skipping logo");
        }
    }

    // bold centred title below the logo band
    let title_size = Pt(18.0);
    let title_y = height - Pt::from(In(2.3));
    page.add_span(SpanLayout {
        text: TITLE.to_string(),
        font: SpanFont {
            id: helvetica_bold,
            size: title_size,
        },
        colour: colours::BLACK,
        coords: (
            layout::centred_x(TITLE, &doc.fonts[helvetica_bold], title_size, width),
            title_y,
        ),
    });

    // wrapped body paragraphs
    let body_size = Pt(10.0);
    let line_height = Pt::from(In(0.18));
    let paragraph_gap = Pt::from(In(0.15));
    let mut cursor = Cursor::new(title_y - Pt::from(In(0.4)));
    for paragraph in PARAGRAPHS {
        for line in layout::wrap_text(paragraph, &doc.fonts[helvetica], body_size, content_width) {
            page.add_span(SpanLayout {
                text: line,
                font: SpanFont {
                    id: helvetica,
                    size: body_size,
                },
                colour: colours::BLACK,
                coords: (left_margin, cursor.position()),
            });
            cursor.descend(line_height);
        }
        cursor.descend(paragraph_gap);
    }

    // vertical gap between a label's baseline and the top of its field
    let label_drop = Pt::from(In(0.25));
    let label_font = SpanFont {
        id: helvetica_bold,
        size: Pt(10.0),
    };

    // full-width decision topic field
    page.add_span(SpanLayout {
        text: "The Decision Topic".to_string(),
        font: label_font,
        colour: colours::BLACK,
        coords: (left_margin, cursor.position()),
    });
    let decision_height = Pt::from(In(0.5));
    let decision_top = cursor.position() - label_drop;
    page.add_field(TextField::multiline(
        "DecisionTopic",
        Rect {
            x1: left_margin,
            y1: decision_top - decision_height,
            x2: left_margin + content_width,
            y2: decision_top,
        },
        body_size,
    ));
    cursor.descend(label_drop + decision_height + Pt::from(In(0.4)));

    // 2x2 grid of labelled fields, enumerated row-major
    let column_gap = Pt::from(In(0.5));
    let col_width = (content_width - column_gap) / 2.0;
    let row_height = Pt::from(In(1.3));
    let row_gap = Pt::from(In(0.6));
    for (index, (label, field_name)) in CATEGORIES.iter().enumerate() {
        let col = index % 2;
        let x = left_margin + (col_width + column_gap) * (col as f32);

        page.add_span(SpanLayout {
            text: label.to_string(),
            font: label_font,
            colour: colours::BLACK,
            coords: (x, cursor.position()),
        });
        let top = cursor.position() - label_drop;
        page.add_field(TextField::multiline(
            *field_name,
            Rect {
                x1: x,
                y1: top - row_height,
                x2: x + col_width,
                y2: top,
            },
            body_size,
        ));

        // the cursor only advances once both fields of a row are placed
        if col == 1 {
            cursor.descend(label_drop + row_height + row_gap);
        }
    }

    // centred footer lines at fixed offsets from the page bottom
    let footer_size = Pt(7.0);
    for (line, offset) in FOOTER_LINES.iter().zip([In(0.6), In(0.45)]) {
        page.add_span(SpanLayout {
            text: line.to_string(),
            font: SpanFont {
                id: helvetica,
                size: footer_size,
            },
            colour: colours::BLACK,
            coords: (
                layout::centred_x(line, &doc.fonts[helvetica], footer_size, width),
                Pt::from(offset),
            ),
        });
    }

    verify_layout(&page)?;
    doc.add_page(page);
    Ok(doc)
}

/// Check that the hand-tuned layout constants still satisfy the page
/// invariants: no two fields overlap, and every field and image stays
/// inside the content box. A violation aborts generation instead of
/// producing a silently clipped document.
fn verify_layout(page: &Page) -> Result<(), PDFError> {
    for (i, a) in page.fields.iter().enumerate() {
        if !page.content_box.contains(&a.rect) {
            return Err(PDFError::Layout(format!(
                "field {} escapes the content box",
                a.name
            )));
        }
        for b in page.fields.iter().skip(i + 1) {
            if a.rect.intersects(&b.rect) {
                return Err(PDFError::Layout(format!(
                    "fields {} and {} overlap",
                    a.name, b.name
                )));
            }
        }
    }

    for content in page.contents.iter() {
        if let PageContents::Image(image) = content {
            if !page.content_box.contains(&image.position) {
                return Err(PDFError::Layout("image escapes the content box".into()));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn build() -> Document {
        build_document("definitely-missing-logo.png").expect("sheet builds without a logo")
    }

    fn sheet_page(doc: &Document) -> &Page {
        doc.pages
            .get(doc.page_order[0])
            .expect("document has its page")
    }

    #[test]
    fn fields_are_named_row_major() {
        let doc = build();
        let names: Vec<&str> = sheet_page(&doc)
            .fields
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "DecisionTopic",
                "AdvStay",
                "DisadvStay",
                "AdvChange",
                "DisadvChange"
            ]
        );
    }

    #[test]
    fn no_two_fields_overlap() {
        let doc = build();
        let fields = &sheet_page(&doc).fields;
        for (i, a) in fields.iter().enumerate() {
            for b in fields.iter().skip(i + 1) {
                assert!(
                    !a.rect.intersects(&b.rect),
                    "{} overlaps {}",
                    a.name,
                    b.name
                );
            }
        }
    }

    #[test]
    fn every_field_stays_inside_the_content_box() {
        let doc = build();
        let page = sheet_page(&doc);
        for field in page.fields.iter() {
            assert!(
                page.content_box.contains(&field.rect),
                "{} escapes the content box",
                field.name
            );
        }
    }

    #[test]
    fn grid_fields_share_dimensions() {
        let doc = build();
        let page = sheet_page(&doc);
        let grid = &page.fields[1..];
        let expected_width = (page.content_box.width() - Pt::from(In(0.5))) / 2.0;
        for field in grid {
            assert!((f32::from(field.rect.width()) - f32::from(expected_width)).abs() < 1e-3);
            assert!((f32::from(field.rect.height()) - 1.3 * 72.0).abs() < 1e-3);
        }
        // the two columns of a row share their top and bottom edges
        assert_eq!(grid[0].rect.y1, grid[1].rect.y1);
        assert_eq!(grid[2].rect.y2, grid[3].rect.y2);
    }

    #[test]
    fn missing_logo_still_yields_the_complete_sheet() {
        let doc = build();
        let page = sheet_page(&doc);
        assert_eq!(page.fields.len(), 5);
        assert!(!page
            .contents
            .iter()
            .any(|c| matches!(c, PageContents::Image(_))));
    }

    #[test]
    fn title_is_rendered_exactly_once() {
        let doc = build();
        let count = sheet_page(&doc)
            .contents
            .iter()
            .filter_map(|c| match c {
                PageContents::Text(spans) => Some(spans.iter()),
                _ => None,
            })
            .flatten()
            .filter(|span| span.text == TITLE)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn present_logo_is_placed_inside_its_box() {
        let dir = tempfile::tempdir().expect("can create a temp dir");
        let logo = dir.path().join("logo.png");
        image::RgbImage::new(80, 20)
            .save(&logo)
            .expect("can write a png");

        let doc = build_document(&logo).expect("sheet builds with a logo");
        let page = sheet_page(&doc);
        let placed = page
            .contents
            .iter()
            .find_map(|c| match c {
                PageContents::Image(layout) => Some(layout.position),
                _ => None,
            })
            .expect("logo was placed");

        // fixed 2.0in x 1.5in box, centred, 0.5in below the top edge
        let bounds = Rect {
            x1: Pt(234.0),
            y1: Pt(648.0),
            x2: Pt(378.0),
            y2: Pt(756.0),
        };
        assert!(bounds.contains(&placed));
        // 80x20 source: width-bound fit, so the full box width is used
        assert!((f32::from(placed.width()) - 144.0).abs() < 1e-2);
        assert!((f32::from(placed.height()) - 36.0).abs() < 1e-2);
    }
}
