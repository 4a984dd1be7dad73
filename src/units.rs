use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};

/// A measurement in points, the native unit of PDF user space.
/// There are 72 points in 1 inch.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Display,
    From,
    Into,
)]
pub struct Pt(pub f32);

impl std::ops::Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

/// A measurement in inches, converted to [Pt] wherever the document
/// actually needs a coordinate
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display, From, Into)]
pub struct In(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Pt {
        Pt(value.0 * 72.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn inches_convert_to_points() {
        assert_eq!(Pt::from(In(1.0)), Pt(72.0));
        assert_eq!(Pt::from(In(0.5)), Pt(36.0));
    }

    #[test]
    fn point_arithmetic() {
        assert_eq!(Pt(10.0) + Pt(5.0), Pt(15.0));
        assert_eq!(Pt(10.0) - Pt(5.0), Pt(5.0));
        assert_eq!(Pt(10.0) * 1.5, Pt(15.0));
        assert_eq!(Pt(10.0) / 2.0, Pt(5.0));
    }
}
