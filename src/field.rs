use crate::colour::{colours, Colour};
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use pdf_writer::{Finish, Name, Pdf, Ref, Str, TextStr};

/// Field flag bit marking a text field as multi-line (PDF 32000-1, table 228)
const FF_MULTILINE: i32 = 1 << 12;
/// Annotation flag bit: render the widget when printing
const F_PRINT: i32 = 1 << 2;

/// An interactive text-entry region: a widget annotation merged with an
/// AcroForm text field, so the rectangle can be filled in by the reader
/// after the document is distributed.
///
/// Fields are distributed empty (no `/V` entry), with a solid border,
/// transparent background, and text in the form's default Helvetica.
#[derive(Debug, Clone, PartialEq)]
pub struct TextField {
    /// Unique field identifier, used as the field's partial name for later
    /// programmatic filling
    pub name: String,
    /// The bounding rectangle of the editable region
    pub rect: Rect,
    /// Size of entered text, in points
    pub font_size: Pt,
    pub text_colour: Colour,
    pub border_colour: Colour,
}

impl TextField {
    /// A multi-line field with black text and a black border
    pub fn multiline<S: ToString>(name: S, rect: Rect, font_size: Pt) -> TextField {
        TextField {
            name: name.to_string(),
            rect,
            font_size,
            text_colour: colours::BLACK,
            border_colour: colours::BLACK,
        }
    }

    /// The `/DA` string used by readers to render entered text, referring
    /// to the `Helv` font registered in the AcroForm default resources
    fn default_appearance(&self) -> String {
        let colour = match self.text_colour {
            Colour::RGB { r, g, b } => format!("{r} {g} {b} rg"),
            Colour::CMYK { c, m, y, k } => format!("{c} {m} {y} {k} k"),
            Colour::Grey { g } => format!("{g} g"),
        };
        format!("/Helv {} Tf {}", self.font_size, colour)
    }

    /// Write the merged field/widget dictionary. pdf-writer has no combined
    /// writer for these, so the dictionary is written directly; the object
    /// reference must have been generated up front (it is listed both in the
    /// page's `/Annots` and the catalog's `/AcroForm /Fields`).
    pub(crate) fn write(
        &self,
        refs: &ObjectReferences,
        field_index: usize,
        page: Ref,
        writer: &mut Pdf,
    ) {
        let id = refs
            .get(RefType::Field(field_index))
            .expect("field refs are pre-generated");
        let da = self.default_appearance();

        let mut dict = writer.indirect(id).dict();
        dict.pair(Name(b"Type"), Name(b"Annot"));
        dict.pair(Name(b"Subtype"), Name(b"Widget"));
        dict.insert(Name(b"Rect")).array().items([
            f32::from(self.rect.x1),
            f32::from(self.rect.y1),
            f32::from(self.rect.x2),
            f32::from(self.rect.y2),
        ]);
        dict.pair(Name(b"FT"), Name(b"Tx"));
        dict.pair(Name(b"T"), TextStr(&self.name));
        dict.pair(Name(b"Ff"), FF_MULTILINE);
        dict.pair(Name(b"F"), F_PRINT);
        dict.pair(Name(b"P"), page);
        dict.pair(Name(b"DA"), Str(da.as_bytes()));

        // appearance characteristics: border colour only, no background so
        // the field stays transparent-filled
        let mut mk = dict.insert(Name(b"MK")).dict();
        mk.insert(Name(b"BC"))
            .array()
            .items(self.border_colour.components());
        mk.finish();

        // a 1pt solid border
        let mut bs = dict.insert(Name(b"BS")).dict();
        bs.pair(Name(b"W"), 1.0);
        bs.pair(Name(b"S"), Name(b"S"));
        bs.finish();

        dict.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_appearance_names_the_form_font() {
        let field = TextField::multiline(
            "DecisionTopic",
            Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: Pt(10.0),
                y2: Pt(10.0),
            },
            Pt(10.0),
        );
        assert_eq!(field.default_appearance(), "/Helv 10 Tf 0 g");
    }
}
