//! Physical pixel coordinate types used by the interaction engine.
//!
//! The coordinate system places the origin at the top-left corner, with the
//! x-axis increasing to the right and the y-axis increasing downward.
//! Negative coordinates are supported so pointer positions outside the track
//! (for example while dragging past its bounds) can be expressed directly.

use std::ops::{Add, Neg, Sub};

/// A single physical pixel coordinate value.
///
/// Wraps an `i32` so positions can be negative while staying cheap to copy
/// and hash. Fractional pointer input is rounded to the nearest pixel on
/// conversion.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// A constant representing zero pixels.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Px` from an i32 value.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw i32 value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Converts the pixel value to f32 for fractional math.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Creates a `Px` from an f32 value, rounding to the nearest pixel.
    ///
    /// Non-finite input collapses to zero rather than producing an
    /// unrepresentable coordinate.
    pub fn from_f32(value: f32) -> Self {
        if value.is_finite() {
            Self(value.round() as i32)
        } else {
            Self::ZERO
        }
    }
}

impl Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Px {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// A 2D position in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxPosition {
    /// X coordinate, increasing to the right.
    pub x: Px,
    /// Y coordinate, increasing downward.
    pub y: Px,
}

impl PxPosition {
    /// The origin position (0, 0).
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
    };

    /// Creates a new position from x and y coordinates.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    /// Returns this position shifted by the given deltas.
    pub fn offset(self, dx: Px, dy: Px) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A 2D size in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxSize {
    /// Horizontal extent.
    pub width: Px,
    /// Vertical extent.
    pub height: Px,
}

impl PxSize {
    /// A size of zero in both dimensions.
    pub const ZERO: Self = Self {
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a new size from width and height.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_arithmetic() {
        assert_eq!(Px(100) + Px(-50), Px(50));
        assert_eq!(Px(30) - Px(45), Px(-15));
        assert_eq!(-Px(7), Px(-7));
    }

    #[test]
    fn px_float_conversion_rounds() {
        assert_eq!(Px::from_f32(2.4), Px(2));
        assert_eq!(Px::from_f32(2.6), Px(3));
        assert_eq!(Px::from_f32(-1.5), Px(-2));
        assert_eq!(Px::from_f32(f32::NAN), Px::ZERO);
    }

    #[test]
    fn position_offset() {
        let pos = PxPosition::new(Px(10), Px(20));
        assert_eq!(pos.offset(Px(5), Px(-30)), PxPosition::new(Px(15), Px(-10)));
    }
}
