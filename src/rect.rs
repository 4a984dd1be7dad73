use crate::units::*;

/// A rectangle, specified by two opposite corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the first (typically, lower-left) corner.
    pub x1: Pt,
    /// The y-coordinate of the first (typically, lower-left) corner.
    pub y1: Pt,
    /// The x-coordinate of the second (typically, upper-right) corner.
    pub x2: Pt,
    /// The y-coordinate of the second (typically, upper-right) corner.
    pub y2: Pt,
}

impl Rect {
    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }

    /// Whether `other` lies entirely within this rectangle, edges included
    pub fn contains(&self, other: &Rect) -> bool {
        self.x1 <= other.x1 && other.x2 <= self.x2 && self.y1 <= other.y1 && other.y2 <= self.y2
    }

    /// Whether the interiors of the two rectangles intersect. Rectangles
    /// that merely share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x1 < other.x2 && other.x1 < self.x2 && self.y1 < other.y2 && other.y1 < self.y2
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect {
            x1: r.x1.into(),
            y1: r.y1.into(),
            x2: r.x2.into(),
            y2: r.y2.into(),
        }
    }
}

impl From<&Rect> for pdf_writer::Rect {
    fn from(r: &Rect) -> Self {
        pdf_writer::Rect {
            x1: r.x1.into(),
            y1: r.y1.into(),
            x2: r.x2.into(),
            y2: r.y2.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x1: f32, y1: f32, x2: f32, y2: f32) -> Rect {
        Rect {
            x1: Pt(x1),
            y1: Pt(y1),
            x2: Pt(x2),
            y2: Pt(y2),
        }
    }

    #[test]
    fn containment_includes_edges() {
        let outer = rect(0.0, 0.0, 10.0, 10.0);
        assert!(outer.contains(&rect(0.0, 0.0, 10.0, 10.0)));
        assert!(outer.contains(&rect(1.0, 1.0, 9.0, 9.0)));
        assert!(!outer.contains(&rect(1.0, 1.0, 11.0, 9.0)));
    }

    #[test]
    fn adjacent_rectangles_do_not_intersect() {
        let a = rect(0.0, 0.0, 5.0, 5.0);
        let b = rect(5.0, 0.0, 10.0, 5.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&rect(4.0, 4.0, 6.0, 6.0)));
    }
}
