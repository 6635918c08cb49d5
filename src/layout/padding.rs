use crate::units::Px;

/// Padding between the edges of the viewport and the columns. Columns are
/// placed inside the padded area, and the available width and height for
/// breaking are what remains of the viewport after padding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
    pub left: Px,
}

impl Padding {
    /// Create padding by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS padding)
    pub fn trbl(top: Px, right: Px, bottom: Px, left: Px) -> Padding {
        Padding {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create padding where all values are equal
    pub fn all(value: Px) -> Padding {
        Padding {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create padding by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) padding
    pub fn symmetric(vertical: Px, horizontal: Px) -> Padding {
        Padding {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create padding where all values are 0
    pub fn empty() -> Padding {
        Padding::default()
    }

    pub fn horizontal(&self) -> Px {
        self.left + self.right
    }

    pub fn vertical(&self) -> Px {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        let p = Padding::trbl(Px(1), Px(2), Px(3), Px(4));
        assert_eq!(p.horizontal(), Px(6));
        assert_eq!(p.vertical(), Px(4));
        assert_eq!(Padding::symmetric(Px(5), Px(7)), Padding::trbl(Px(5), Px(7), Px(5), Px(7)));
        assert_eq!(Padding::all(Px(0)), Padding::empty());
    }
}
