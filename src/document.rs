use crate::{
    font::Font,
    image::Image,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    PDFError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf, Ref, Str};
use std::io::Write;

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub fonts: Arena<Font>,
    pub images: Arena<Image>,
}

impl Document {
    /// Sets information about the document. If not provided, no information
    /// block will be written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the document, returning the id of that page within the
    /// document. The page will be added to the end of the document.
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// Add a font to the document structure. Fonts are stored "globally"
    /// within the document, such that any page can use any document font.
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// Add an image to the document structure. Images are stored "globally"
    /// within the document, such that any page can place any document image.
    pub fn add_image(&mut self, image: Image) -> Id<Image> {
        self.images.alloc(image)
    }

    /// Write the entire document to the writer. This consumes the document,
    /// sealing it: once written, no further content can be added. The entire
    /// document is rendered in memory first and the only I/O performed here
    /// is the final write to `w`, so an error from this function is an
    /// output-destination failure.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), PDFError> {
        let Document {
            info,
            pages,
            page_order,
            fonts,
            images,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        // page refs are keyed by page_order index (not arena index) so that
        // annotations can reference pages by their position in the document
        let page_refs: Vec<Ref> = page_order
            .iter()
            .enumerate()
            .map(|(i, _id)| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (i, font) in fonts.iter() {
            font.write(&mut refs, i, &mut writer);
        }

        for (i, image) in images.iter() {
            image.write(&mut refs, i.index(), &mut writer)?;
        }

        // pre-generate refs for all field widgets: each one is listed both
        // in its page's /Annots and in the catalog's /AcroForm /Fields
        let mut field_refs_by_page: Vec<Vec<Ref>> = Vec::with_capacity(page_order.len());
        let mut field_count = 0usize;
        for id in page_order.iter() {
            let page = pages.get(*id).ok_or(PDFError::PageMissing)?;
            let refs_for_page: Vec<Ref> = page
                .fields
                .iter()
                .map(|_| {
                    let r = refs.gen(RefType::Field(field_count));
                    field_count += 1;
                    r
                })
                .collect();
            field_refs_by_page.push(refs_for_page);
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(PDFError::PageMissing)?;
            page.write(
                &mut refs,
                page_index,
                &fonts,
                &images,
                &field_refs_by_page[page_index],
                &mut writer,
            )?;
        }

        // field dictionaries are written after the pages so each can point
        // back at its page
        let mut field_index = 0usize;
        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(PDFError::PageMissing)?;
            let page_ref = refs
                .get(RefType::Page(page_index))
                .expect("page refs were generated");
            for field in page.fields.iter() {
                field.write(&refs, field_index, page_ref, &mut writer);
                field_index += 1;
            }
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        if field_count > 0 {
            self::write_acro_form(&mut catalog, &refs, &field_refs_by_page, &fonts);
        }
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}

/// Write the interactive form dictionary into the catalog. `NeedAppearances`
/// is set so readers build appearance streams for the empty fields, and the
/// form's default resources register Helvetica under the `Helv` name the
/// field `/DA` strings refer to.
fn write_acro_form(
    catalog: &mut pdf_writer::writers::Catalog<'_>,
    refs: &ObjectReferences,
    field_refs_by_page: &[Vec<Ref>],
    fonts: &Arena<Font>,
) {
    let mut form = catalog.insert(Name(b"AcroForm")).dict();

    let mut fields = form.insert(Name(b"Fields")).array();
    for refs_for_page in field_refs_by_page.iter() {
        for r in refs_for_page.iter() {
            fields.item(*r);
        }
    }
    fields.finish();

    form.pair(Name(b"NeedAppearances"), true);
    form.pair(Name(b"DA"), Str(b"/Helv 0 Tf 0 g"));

    if let Some((id, _)) = fonts.iter().find(|(_, font)| font.is_form_default()) {
        let mut dr = form.insert(Name(b"DR")).dict();
        let mut dr_fonts = dr.insert(Name(b"Font")).dict();
        dr_fonts.pair(
            Name(b"Helv"),
            refs.get(RefType::Font(id.index()))
                .expect("fonts were written"),
        );
        dr_fonts.finish();
        dr.finish();
    }

    form.finish();
}
