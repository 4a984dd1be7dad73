use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use id_arena::Id;
use pdf_writer::{Name, Pdf};

/// Width used for any character outside the printable ASCII range, in
/// 1/1000 em. Matches the widest common glyph so wrapping errs towards
/// shorter lines rather than overflow.
const DEFAULT_WIDTH: u16 = 556;

/// Helvetica glyph advances for the printable ASCII range (0x20..=0x7E),
/// in 1/1000 em, taken from the Adobe AFM metrics for the standard fonts.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold glyph advances for the printable ASCII range, 1/1000 em.
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// One of the PDF standard-14 fonts. These are never embedded: every
/// conforming reader ships them, so the font object is a bare Type1
/// reference and the crate only carries the AFM metrics it needs to
/// measure text for layout.
pub struct Font {
    base_name: &'static str,
    ascent: i16,
    descent: i16,
    widths: &'static [u16; 95],
}

impl Font {
    /// Helvetica regular
    pub fn helvetica() -> Font {
        Font {
            base_name: "Helvetica",
            ascent: 718,
            descent: -207,
            widths: &HELVETICA_WIDTHS,
        }
    }

    /// Helvetica bold
    pub fn helvetica_bold() -> Font {
        Font {
            base_name: "Helvetica-Bold",
            ascent: 718,
            descent: -207,
            widths: &HELVETICA_BOLD_WIDTHS,
        }
    }

    /// The PostScript base name of the font, e.g. `Helvetica-Bold`
    pub fn name(&self) -> &'static str {
        self.base_name
    }

    /// Whether this font family is the one the AcroForm default resources
    /// register for field text
    pub(crate) fn is_form_default(&self) -> bool {
        self.base_name == "Helvetica"
    }

    fn char_width(&self, ch: char) -> u16 {
        let code = ch as u32;
        if (0x20..=0x7E).contains(&code) {
            self.widths[(code - 0x20) as usize]
        } else {
            DEFAULT_WIDTH
        }
    }

    /// Calculate the rendered width of `text` at the given font size
    pub fn width_of(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text.chars().map(|ch| u32::from(self.char_width(ch))).sum();
        size * (units as f32 / 1000.0)
    }

    /// The distance from the baseline to the top of the font at the given size
    pub fn ascent(&self, size: Pt) -> Pt {
        size * (self.ascent as f32 / 1000.0)
    }

    /// The distance from the baseline to the bottom of the font at the given
    /// size. Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        size * (self.descent as f32 / 1000.0)
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_id = refs.gen(RefType::Font(id.index()));
        let mut font = writer.type1_font(font_id);
        font.base_font(Name(self.base_name.as_bytes()));
        font.encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_known_widths() {
        let helvetica = Font::helvetica();
        // 'H' is 722/1000 em wide; at 10pt that's 7.22pt
        assert!((f32::from(helvetica.width_of("H", Pt(10.0))) - 7.22).abs() < 1e-4);
        // a space at 10pt is 2.78pt
        assert!((f32::from(helvetica.width_of(" ", Pt(10.0))) - 2.78).abs() < 1e-4);
    }

    #[test]
    fn bold_runs_wider_than_regular() {
        let text = "Decision Balance Sheet";
        let regular = Font::helvetica().width_of(text, Pt(12.0));
        let bold = Font::helvetica_bold().width_of(text, Pt(12.0));
        assert!(bold > regular);
    }

    #[test]
    fn characters_outside_ascii_fall_back_to_the_default_width() {
        let helvetica = Font::helvetica();
        assert_eq!(
            helvetica.width_of("é", Pt(10.0)),
            Pt(10.0) * (f32::from(DEFAULT_WIDTH) / 1000.0)
        );
    }
}
