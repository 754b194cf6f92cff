use derive_more::{Add, AddAssign, Deref, Display, Div, From, Into, Mul, Sub, SubAssign, Sum};

/// A distance or coordinate on the canvas, measured in whole pixels.
///
/// Pixel space has its origin in the top-left corner of the canvas with `y`
/// growing downwards, matching the layout of the selection channel.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Mul,
    Div,
    Sum,
    Deref,
    Display,
    From,
    Into,
)]
#[display("{_0}px")]
pub struct Px(pub i32);

impl Px {
    pub const ZERO: Px = Px(0);

    /// Half of this distance, rounded towards negative infinity
    pub fn half_floor(self) -> Px {
        Px(self.0.div_euclid(2))
    }

    /// Half of this distance, rounded towards positive infinity
    pub fn half_ceil(self) -> Px {
        Px(self.0 - self.0.div_euclid(2))
    }
}

impl From<Px> for f32 {
    fn from(px: Px) -> Self {
        px.0 as f32
    }
}

impl From<u32> for Px {
    fn from(v: u32) -> Self {
        Px(v as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_round_in_opposite_directions() {
        assert_eq!(Px(21).half_floor(), Px(10));
        assert_eq!(Px(21).half_ceil(), Px(11));
        assert_eq!(Px(20).half_floor(), Px(10));
        assert_eq!(Px(20).half_ceil(), Px(10));
        assert_eq!(Px(-3).half_floor(), Px(-2));
    }

    #[test]
    fn sums_and_scales() {
        let total: Px = [Px(10), Px(20), Px(5)].into_iter().sum();
        assert_eq!(total, Px(35));
        assert_eq!(Px(15) * 3, Px(45));
        assert_eq!(Px(45) / 2, Px(22));
        assert_eq!(Px(4).to_string(), "4px");
    }
}
