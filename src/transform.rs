//! Pixel-space types and the mapping from scales to pixel ranges.
//!
//! A [`Scale`] maps its domain onto `[0, 1]`. [`PixelScale`] stretches that
//! interval onto a pixel range `[start, end]`. The range may run backwards
//! (`start > end`), which is how SVG y coordinates, growing downwards, are
//! made to put larger values higher up.
//!
//! # Examples
//!
//! ```rust
//! use stolpe::{PixelScale, scale::Linear};
//!
//! // Domain [0, 10] onto the vertical span of a 300px canvas, bottom to top
//! let y = PixelScale::new(Linear::<f64, f64>::new(0.0, 10.0), 280.0, 20.0);
//!
//! assert_eq!(y.apply(&0.0), 280.0);
//! assert_eq!(y.apply(&10.0), 20.0);
//! assert_eq!(y.invert(150.0), 5.0);
//! ```

use num_traits::{Float, ToPrimitive};

use crate::scale::{Linear, Scale, Tick, util::sorted_pair};

/// A rectangle in screen/pixel coordinates.
///
/// `(x, y)` is the top-left corner; SVG y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect<S = f64> {
    /// X coordinate of the top-left corner in pixels.
    pub x: S,
    /// Y coordinate of the top-left corner in pixels.
    pub y: S,
    /// Width of the rectangle in pixels.
    pub width: S,
    /// Height of the rectangle in pixels.
    pub height: S,
}

/// A point in screen/pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint<S = f64> {
    /// X coordinate in pixels.
    pub x: S,
    /// Y coordinate in pixels.
    pub y: S,
}

impl<S> ScreenPoint<S> {
    /// Creates a new screen point at the given pixel coordinates.
    pub const fn new(x: S, y: S) -> Self {
        Self { x, y }
    }
}

impl<S: Float> ScreenRect<S> {
    /// Returns the right edge, `x + width`.
    pub fn right(&self) -> S {
        self.x + self.width
    }

    /// Returns the bottom edge, `y + height`.
    pub fn bottom(&self) -> S {
        self.y + self.height
    }

    /// Returns true if the point lies within this rectangle, edges included.
    ///
    /// Negative widths and heights are handled by comparing sorted edges.
    pub fn contains(&self, point: &ScreenPoint<S>) -> bool {
        let (min_x, max_x) = sorted_pair(self.x, self.right());
        let (min_y, max_y) = sorted_pair(self.y, self.bottom());
        point.x >= min_x && point.x <= max_x && point.y >= min_y && point.y <= max_y
    }
}

/// A [`Scale`] bound to a pixel range.
///
/// # Method Variants
///
/// - `method_opt()` returns `None` when a value cannot be converted between
///   the domain, normalized and pixel types
/// - `method()` panics in that case
#[derive(Debug, Clone, PartialEq)]
pub struct PixelScale<S = Linear<f64, f64>> {
    scale: S,
    start: f64,
    end: f64,
}

impl<S> PixelScale<S>
where
    S: Scale,
    S::Domain: Float,
    S::Normalized: Float,
{
    /// Binds `scale` to the pixel range `[start, end]`.
    pub const fn new(scale: S, start: f64, end: f64) -> Self {
        Self { scale, start, end }
    }

    /// The underlying normalized scale.
    pub const fn scale(&self) -> &S {
        &self.scale
    }

    pub fn domain(&self) -> (&S::Domain, &S::Domain) {
        self.scale.domain()
    }

    /// Returns the pixel range as `(start, end)`.
    pub const fn range(&self) -> (f64, f64) {
        (self.start, self.end)
    }

    /// Maps a domain value to its pixel coordinate.
    pub fn apply_opt(&self, value: &S::Domain) -> Option<f64> {
        let t = self.scale.normalize_opt(value)?.to_f64()?;
        Some(self.start + t * (self.end - self.start))
    }

    /// Maps a domain value to its pixel coordinate.
    ///
    /// # Panics
    ///
    /// Panics if the normalized position cannot be represented as `f64`.
    pub fn apply(&self, value: &S::Domain) -> f64 {
        self.apply_opt(value)
            .expect("normalized position not representable as f64")
    }

    /// Maps a pixel coordinate back to a domain value.
    ///
    /// A zero-length pixel range inverts every coordinate to the domain start.
    pub fn invert_opt(&self, pixel: f64) -> Option<S::Domain> {
        let span = self.end - self.start;
        let t = if span == 0.0 {
            0.0
        } else {
            (pixel - self.start) / span
        };
        self.scale
            .denormalize_opt(<S::Normalized as num_traits::NumCast>::from(t)?)
    }

    /// Maps a pixel coordinate back to a domain value.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate cannot be converted into the domain type.
    pub fn invert(&self, pixel: f64) -> S::Domain {
        self.invert_opt(pixel)
            .expect("pixel coordinate not representable in domain type")
    }

    /// Ticks for about `count` intervals across the domain.
    pub fn ticks(&self, count: f64) -> Vec<Tick<S::Domain>> {
        self.scale.ticks(count)
    }
}
