use super::{Increment, Scale, Tick, TickIter, tick_spec, util};
use num_traits::Float;

/// Linear scale: affine mapping between a numeric domain and normalized `[0, 1]` range.
///
/// # Type Parameters
///
/// - `D`: Domain type (the data values, typically `f64`)
/// - `N`: Normalized type (typically `f64`, represents `[0, 1]` range)
///
/// # Domain Ordering
///
/// Domain values are kept exactly as set (no implicit sorting), so both
/// normal and reversed scales are supported:
/// - Normal: `new(0.0, 100.0)` maps 0 to 0 and 100 to 1
/// - Reversed: `new(100.0, 0.0)` maps 100 to 0 and 0 to 1
///
/// A zero-width domain maps every value to 0.
///
/// # Examples
///
/// ```rust
/// use stolpe::{Scale, scale::Linear};
///
/// let scale = Linear::<f64, f64>::new(0.0, 100.0);
///
/// assert_eq!(scale.normalize(&50.0), 0.5);
/// assert_eq!(scale.denormalize(0.25), 25.0);
///
/// // Out-of-range values are not clamped
/// assert_eq!(scale.normalize(&150.0), 1.5);
/// ```
///
/// ## Ticks
///
/// ```rust
/// use stolpe::{Scale, scale::Linear};
///
/// let scale = Linear::<f64, f64>::new(0.0, 2.0);
/// let values: Vec<f64> = scale.ticks(4.0).iter().map(|t| t.value).collect();
/// assert_eq!(values, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear<D, N = f64>
where
    D: Float,
    N: Float,
{
    min: D,
    max: D,
    _phantom: std::marker::PhantomData<N>,
}

const MAX_TICKS: usize = 100_000;

/// Iterator over the d3-style ticks of an interval.
pub struct LinearTickIter<D: Float> {
    state: LinearTickState<D>,
    remaining: usize,
}

enum LinearTickState<D: Float> {
    Single(Option<D>),
    Sweep(LinearSweepState<D>),
    Done,
}

struct LinearSweepState<D: Float> {
    first: D,
    increment: Increment<D>,
    current_index: usize,
}

impl<D: Float> LinearTickIter<D> {
    pub(crate) fn from_scale<N: Float>(scale: &Linear<D, N>, count: f64) -> Self {
        Self::new(scale.min, scale.max, count)
    }

    /// Ticks for about `count` intervals between `start` and `stop`, ascending.
    ///
    /// Reversed bounds are swapped. Equal bounds give a single tick and a
    /// non-positive count gives none.
    pub fn new(start: D, stop: D, count: f64) -> Self {
        let count: D = util::constant(count);
        if !(count > D::zero()) {
            return Self::done();
        }
        if start == stop {
            return Self {
                state: LinearTickState::Single(Some(start)),
                remaining: 1,
            };
        }

        let (lo, hi) = util::sorted_pair(start, stop);
        let Some(spec) = tick_spec(lo, hi, count) else {
            return Self::done();
        };
        if spec.last < spec.first {
            return Self::done();
        }

        let remaining = (spec.last - spec.first)
            .to_usize()
            .map(|span| span.saturating_add(1).min(MAX_TICKS))
            .unwrap_or(0);

        Self {
            state: LinearTickState::Sweep(LinearSweepState {
                first: spec.first,
                increment: spec.increment,
                current_index: 0,
            }),
            remaining,
        }
    }

    fn done() -> Self {
        Self {
            state: LinearTickState::Done,
            remaining: 0,
        }
    }
}

impl<D: Float> Iterator for LinearTickIter<D> {
    type Item = Tick<D>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            LinearTickState::Single(slot) => slot.take().map(|value| Tick {
                value,
                step: D::zero(),
            }),
            LinearTickState::Sweep(state) => {
                if self.remaining == 0 {
                    self.state = LinearTickState::Done;
                    return None;
                }
                self.remaining -= 1;

                // Index from the first tick to avoid accumulating rounding error
                let offset = D::from(state.current_index)?;
                state.current_index += 1;

                Some(Tick {
                    value: state.increment.at(state.first + offset),
                    step: state.increment.step(),
                })
            }
            LinearTickState::Done => None,
        }
    }
}

impl<D, N> Linear<D, N>
where
    D: Float,
    N: Float,
{
    /// Creates a new linear scale with the given domain.
    ///
    /// ```
    /// use stolpe::{Scale, scale::Linear};
    ///
    /// let scale = Linear::<f64, f64>::new(0.0, 100.0);
    /// assert_eq!(scale.domain(), (&0.0, &100.0));
    /// ```
    pub fn new(min: D, max: D) -> Self {
        Self {
            min,
            max,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<D, N> Scale for Linear<D, N>
where
    D: Float + 'static,
    N: Float,
{
    type Domain = D;
    type Normalized = N;

    fn domain(&self) -> (&D, &D) {
        (&self.min, &self.max)
    }

    fn normalize_opt(&self, value: &D) -> Option<N> {
        let span = self.max - self.min;
        if span == D::zero() {
            return Some(N::zero());
        }

        let offset_n: N = N::from(*value - self.min)?;
        let span_n: N = N::from(span)?;

        // No clamping: out-of-range values land below 0 or above 1.
        Some(offset_n / span_n)
    }

    fn denormalize_opt(&self, t: N) -> Option<D> {
        let span_n: N = N::from(self.max - self.min)?;
        let scaled: D = D::from(t * span_n)?;
        Some(self.min + scaled)
    }

    fn tick_iter(&self, count: f64) -> TickIter<D> {
        TickIter::from_linear(LinearTickIter::from_scale(self, count))
    }
}
