//! Integer pixel geometry shared by the drag logic and host adapters.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub};

/// A point (or offset) in whole pixels.
///
/// Pointer coordinates and widget offsets are integers in the host toolkit,
/// so the drag state machine works on this type instead of float geometry.
/// Arithmetic saturates at the `i32` bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    /// The origin `(0, 0)`.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Round float coordinates to the nearest pixel.
    ///
    /// Out-of-range values saturate and NaN maps to 0.
    pub fn round(x: f64, y: f64) -> Self {
        Self {
            x: round_to_i32(x),
            y: round_to_i32(y),
        }
    }

    /// Round a float point to the nearest pixel.
    pub fn from_kurbo_rounded(point: kurbo::Point) -> Self {
        Self::round(point.x, point.y)
    }

    /// Convert to a float point for host-side geometry.
    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(f64::from(self.x), f64::from(self.y))
    }
}

fn round_to_i32(v: f64) -> i32 {
    // `as` saturates and maps NaN to 0.
    v.round() as i32
}

impl Add for PixelPoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x.saturating_add(rhs.x),
            y: self.y.saturating_add(rhs.y),
        }
    }
}

impl AddAssign for PixelPoint {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for PixelPoint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x.saturating_sub(rhs.x),
            y: self.y.saturating_sub(rhs.y),
        }
    }
}

impl From<(i32, i32)> for PixelPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<PixelPoint> for kurbo::Point {
    fn from(p: PixelPoint) -> Self {
        p.to_kurbo()
    }
}
