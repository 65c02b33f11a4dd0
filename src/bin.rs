//! Grouping values into contiguous bins.
//!
//! [`Binner`] follows d3's `bin().thresholds(n)`: the extent of the data is
//! widened to nice numbers, tick values over it become the bin boundaries, and
//! the top edge is pushed up one step when the maximum would otherwise sit on
//! it, so every bin but the last is half-open.

use num_traits::ToPrimitive;
use serde::Serialize;
use tracing::trace;

use crate::scale::{Increment, LinearTickIter, nice_extent, tick_spec};

/// Default number of bins the [`Binner`] aims for.
pub const DEFAULT_THRESHOLDS: usize = 40;

/// A contiguous range of the value domain and how many values fell in it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bin {
    /// Inclusive lower boundary.
    pub lower: f64,
    /// Upper boundary, exclusive except for the last bin.
    pub upper: f64,
    /// Number of values in the bin.
    pub count: usize,
}

/// Splits values into bins whose boundaries land on round numbers.
///
/// # Examples
///
/// ```
/// use stolpe::Binner;
///
/// let bins = Binner::new(4).bin_values([0.0, 0.4, 1.0, 1.9, 2.0]);
///
/// let bounds: Vec<(f64, f64)> = bins.iter().map(|b| (b.lower, b.upper)).collect();
/// assert_eq!(bounds, vec![(0.0, 0.5), (0.5, 1.0), (1.0, 1.5), (1.5, 2.0), (2.0, 2.5)]);
///
/// let counts: Vec<usize> = bins.iter().map(|b| b.count).collect();
/// assert_eq!(counts, vec![2, 0, 1, 1, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binner {
    thresholds: usize,
}

impl Default for Binner {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLDS)
    }
}

impl Binner {
    /// Creates a binner aiming for about `thresholds` bins.
    pub const fn new(thresholds: usize) -> Self {
        Self { thresholds }
    }

    pub const fn thresholds(&self) -> usize {
        self.thresholds
    }

    /// Bins `data` by the value `value_of` extracts from each element.
    pub fn bin<T, F>(&self, data: &[T], value_of: F) -> Vec<Bin>
    where
        F: Fn(&T) -> f64,
    {
        self.bin_values(data.iter().map(value_of))
    }

    /// Bins raw values.
    ///
    /// Non-finite values are skipped. With no finite values, or a zero
    /// threshold count, no bins are produced. When every value is equal the
    /// result is a single zero-width bin holding all of them.
    pub fn bin_values<I>(&self, values: I) -> Vec<Bin>
    where
        I: IntoIterator<Item = f64>,
    {
        let values: Vec<f64> = values
            .into_iter()
            .filter(|value| {
                let keep = value.is_finite();
                if !keep {
                    trace!(value, "skipping non-finite value");
                }
                keep
            })
            .collect();

        let Some((min, max)) = extent(&values) else {
            return Vec::new();
        };
        if self.thresholds == 0 {
            return Vec::new();
        }

        let count = self.thresholds as f64;
        let (x0, mut x1) = nice_extent(min, max, count);
        let mut boundaries: Vec<f64> = LinearTickIter::new(x0, x1, count)
            .map(|tick| tick.value)
            .collect();

        let mut uniform: Option<Increment<f64>> = None;
        if boundaries.first().is_some_and(|&first| first <= x0) {
            uniform = tick_spec(x0, x1, count).map(|spec| spec.increment);
        }
        if boundaries.last().is_some_and(|&last| last >= x1) {
            if max >= x1 {
                // Push the top edge out so the maximum lands inside a half-open bin.
                if let Some(spec) = tick_spec(x0, x1, count) {
                    x1 = match spec.increment {
                        Increment::Multiple(step) => ((x1 / step).floor() + 1.0) * step,
                        Increment::Fraction(k) => ((x1 * k).ceil() + 1.0) / k,
                    };
                }
            } else {
                boundaries.pop();
            }
        }

        boundaries.retain(|&b| b > x0 && b <= x1);

        let mut bins: Vec<Bin> = std::iter::once(x0)
            .chain(boundaries.iter().copied())
            .zip(boundaries.iter().copied().chain(std::iter::once(x1)))
            .map(|(lower, upper)| Bin {
                lower,
                upper,
                count: 0,
            })
            .collect();

        let last = bins.len() - 1;
        for &value in &values {
            if value < x0 || value > x1 {
                continue;
            }
            let index = match uniform {
                Some(increment) => {
                    let mut j = increment.steps_in(value - x0).to_usize().unwrap_or(0);
                    // The subtraction can round a value on a boundary into the bin below it.
                    if boundaries.get(j).is_some_and(|&upper| upper <= value) {
                        j += 1;
                    }
                    while j > 0 && boundaries.get(j - 1).is_some_and(|&lower| lower > value) {
                        j -= 1;
                    }
                    j.min(last)
                }
                None => boundaries.partition_point(|&b| b <= value),
            };
            bins[index].count += 1;
        }

        bins
    }
}

fn extent(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().fold(None, |acc, &value| match acc {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })
}
