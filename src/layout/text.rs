use crate::font::Font;
use crate::units::Pt;

/// The running vertical offset used to place elements top-to-bottom.
///
/// The cursor starts at a known top offset and only ever moves down the
/// page; it is owned by a single build pass and discarded when the page is
/// finished.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cursor {
    y: Pt,
}

impl Cursor {
    pub fn new(top: Pt) -> Cursor {
        Cursor { y: top }
    }

    /// The current vertical position
    pub fn position(&self) -> Pt {
        self.y
    }

    /// Move the cursor down the page by `amount`
    pub fn descend(&mut self, amount: Pt) {
        self.y -= amount;
    }
}

/// Greedily wrap a paragraph into lines no wider than `max_width` when
/// rendered in `font` at `size`.
///
/// Words are appended to the current line while it still fits; otherwise a
/// new line starts. There is no hyphenation: a single word wider than
/// `max_width` is placed alone on its own line, untruncated. Joining the
/// returned lines with single spaces reproduces the input's word sequence
/// (whitespace-normalized). Empty or whitespace-only input produces no
/// lines.
pub fn wrap_text(text: &str, font: &Font, size: Pt, max_width: Pt) -> Vec<String> {
    let space_width = font.width_of(" ", size);

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = Pt(0.0);

    for word in text.split_whitespace() {
        let word_width = font.width_of(word, size);

        if current.is_empty() {
            // an overwide word still gets its own line rather than an error
            current.push_str(word);
            current_width = word_width;
        } else if current_width + space_width + word_width > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += space_width + word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Calculate the width of a given string of text given the font and font size
pub fn width_of_text(text: &str, font: &Font, size: Pt) -> Pt {
    font.width_of(text, size)
}

/// The x-coordinate at which `text` must start to be centred on a page of
/// the given width
pub fn centred_x(text: &str, font: &Font, size: Pt, page_width: Pt) -> Pt {
    (page_width - width_of_text(text, font, size)) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PARAGRAPH: &str = "This worksheet can be used to help you make a decision on \
        whether you want to make certain changes in your life.";

    #[test]
    fn wrapped_lines_stay_within_the_width_limit() {
        let font = Font::helvetica();
        let max_width = Pt(200.0);
        let lines = wrap_text(PARAGRAPH, &font, Pt(10.0), max_width);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(
                font.width_of(line, Pt(10.0)) <= max_width,
                "line too wide: {line:?}"
            );
        }
    }

    #[test]
    fn joining_lines_reconstructs_the_word_sequence() {
        let font = Font::helvetica();
        let lines = wrap_text(PARAGRAPH, &font, Pt(10.0), Pt(150.0));
        assert_eq!(lines.join(" "), PARAGRAPH);
    }

    #[test]
    fn wrapping_normalizes_interior_whitespace() {
        let font = Font::helvetica();
        let lines = wrap_text("  spaced \t out\n words  ", &font, Pt(10.0), Pt(500.0));
        assert_eq!(lines, vec!["spaced out words".to_string()]);
    }

    #[test]
    fn an_overwide_word_occupies_its_own_line() {
        let font = Font::helvetica();
        let lines = wrap_text(
            "a incomprehensibilities b",
            &font,
            Pt(10.0),
            // narrower than the long word alone
            Pt(30.0),
        );
        assert_eq!(
            lines,
            vec![
                "a".to_string(),
                "incomprehensibilities".to_string(),
                "b".to_string()
            ]
        );
        assert!(font.width_of(&lines[1], Pt(10.0)) > Pt(30.0));
    }

    #[test]
    fn empty_input_produces_no_lines() {
        let font = Font::helvetica();
        assert!(wrap_text("", &font, Pt(10.0), Pt(100.0)).is_empty());
        assert!(wrap_text("   \n ", &font, Pt(10.0), Pt(100.0)).is_empty());
    }

    #[test]
    fn cursor_only_descends() {
        let mut cursor = Cursor::new(Pt(700.0));
        cursor.descend(Pt(12.96));
        cursor.descend(Pt(10.8));
        assert_eq!(cursor.position(), Pt(700.0 - 12.96 - 10.8));
    }
}
