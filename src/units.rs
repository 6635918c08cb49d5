//! Pixel units used for all geometry in the crate.
//!
//! Layout works on whole device pixels, matching the integer coordinates that
//! text shapers report for line tops and bottoms.

use derive_more::{Add, AddAssign, Display, From, Into, Mul, MulAssign, Sub, SubAssign, Sum};

/// A length in device pixels
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Sum,
    From,
    Into,
    Display,
)]
#[display("{_0}px")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Px(pub i32);

impl Px {
    pub const ZERO: Px = Px(0);

    /// Round a fractional length (such as a scaled font metric) up to whole pixels
    pub fn ceil(value: f32) -> Px {
        Px(value.ceil() as i32)
    }

    /// Round a fractional length to the nearest whole pixel
    pub fn round(value: f32) -> Px {
        Px(value.round() as i32)
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Widen to `i64` so that sums of several lengths cannot overflow
    pub(crate) fn wide(self) -> i64 {
        i64::from(self.0)
    }
}
