//! Scales map domain values to a normalized `[0, 1]` range and generate ticks.
//!
//! A [`Scale`] only knows about normalized positions. Pixel ranges are layered
//! on top by [`PixelScale`](crate::PixelScale).

mod linear;
mod nice;
mod tick_iter;
pub(crate) mod util;

pub use linear::{Linear, LinearTickIter};
pub use nice::{Increment, TickSpec, nice_extent, tick_spec};
pub use tick_iter::TickIter;

/// A single tick mark produced by a scale.
///
/// `step` is the spacing between neighbouring ticks of the same run. Axis
/// renderers use it to pick a label precision. A lone tick on a zero-width
/// domain has a step of zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick<D> {
    pub value: D,
    pub step: D,
}

/// Mapping between a domain and the normalized `[0, 1]` interval.
///
/// The `_opt` methods return `None` when a value cannot be converted between
/// the domain and normalized types. The plain variants panic in that case.
pub trait Scale {
    type Domain;
    type Normalized;

    /// Returns the `(start, end)` of the domain, exactly as set.
    fn domain(&self) -> (&Self::Domain, &Self::Domain);

    fn normalize_opt(&self, value: &Self::Domain) -> Option<Self::Normalized>;

    fn denormalize_opt(&self, t: Self::Normalized) -> Option<Self::Domain>;

    /// Ticks for roughly `count` intervals across the domain.
    fn tick_iter(&self, count: f64) -> TickIter<Self::Domain>;

    /// # Panics
    ///
    /// Panics if `value` cannot be represented in the normalized type.
    fn normalize(&self, value: &Self::Domain) -> Self::Normalized {
        self.normalize_opt(value)
            .expect("domain value not representable in normalized type")
    }

    /// # Panics
    ///
    /// Panics if `t` cannot be represented in the domain type.
    fn denormalize(&self, t: Self::Normalized) -> Self::Domain {
        self.denormalize_opt(t)
            .expect("normalized value not representable in domain type")
    }

    fn ticks(&self, count: f64) -> Vec<Tick<Self::Domain>> {
        self.tick_iter(count).collect()
    }
}
