use super::util::{constant, round_half_up};
use num_traits::Float;

const MAX_NICE_ITERATIONS: usize = 16;

/// Spacing between consecutive ticks.
///
/// Steps below one are stored as their inverse so that tick values such as
/// `0.1 * 3` come out as `3 / 10`, which is exact in binary floating point
/// where the product is not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Increment<D> {
    /// Ticks sit on integer multiples of the step.
    Multiple(D),
    /// Ticks sit on integer multiples of `1 / k`.
    Fraction(D),
}

impl<D: Float> Increment<D> {
    /// Value of the `index`-th multiple of this increment.
    pub fn at(&self, index: D) -> D {
        match *self {
            Increment::Multiple(step) => index * step,
            Increment::Fraction(k) => index / k,
        }
    }

    /// The step as a plain (positive) value.
    pub fn step(&self) -> D {
        match *self {
            Increment::Multiple(step) => step,
            Increment::Fraction(k) => k.recip(),
        }
    }

    /// Number of whole steps covered by `offset`, rounded down.
    pub fn steps_in(&self, offset: D) -> D {
        match *self {
            Increment::Multiple(step) => (offset / step).floor(),
            Increment::Fraction(k) => (offset * k).floor(),
        }
    }

    fn steps_in_exact(&self, value: D) -> D {
        match *self {
            Increment::Multiple(step) => value / step,
            Increment::Fraction(k) => value * k,
        }
    }

    fn floor_to(&self, value: D) -> D {
        self.at(self.steps_in(value))
    }

    fn ceil_to(&self, value: D) -> D {
        match *self {
            Increment::Multiple(step) => (value / step).ceil() * step,
            Increment::Fraction(k) => (value * k).ceil() / k,
        }
    }
}

/// Indices of the first and last tick, plus the increment between them.
///
/// Tick `i` for `first <= i <= last` has value `increment.at(i)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSpec<D> {
    pub first: D,
    pub last: D,
    pub increment: Increment<D>,
}

/// Picks a 1, 2 or 5 × 10ⁿ step giving about `count` ticks over
/// `[start, stop]`.
///
/// Returns `None` for an empty or reversed interval, a non-positive count, or
/// non-finite input.
pub fn tick_spec<D: Float>(start: D, stop: D, count: D) -> Option<TickSpec<D>> {
    if !(count > D::zero()) {
        return None;
    }
    let raw_step = (stop - start) / count;
    if !raw_step.is_finite() || raw_step <= D::zero() {
        return None;
    }

    let ten: D = constant(10.0);
    let power = raw_step.log10().floor();
    let error = raw_step / ten.powf(power);
    let factor: D = if error >= constant::<D>(50.0).sqrt() {
        constant(10.0)
    } else if error >= constant::<D>(10.0).sqrt() {
        constant(5.0)
    } else if error >= constant::<D>(2.0).sqrt() {
        constant(2.0)
    } else {
        D::one()
    };

    let increment = if power < D::zero() {
        Increment::Fraction(ten.powf(-power) / factor)
    } else {
        Increment::Multiple(ten.powf(power) * factor)
    };

    let mut first = round_half_up(increment.steps_in_exact(start));
    let mut last = round_half_up(increment.steps_in_exact(stop));
    if increment.at(first) < start {
        first = first + D::one();
    }
    if increment.at(last) > stop {
        last = last - D::one();
    }

    if last < first && count >= constant(0.5) && count < constant(2.0) {
        return tick_spec(start, stop, count * constant(2.0));
    }
    if !increment.step().is_finite() || increment.step() == D::zero() {
        return None;
    }

    Some(TickSpec {
        first,
        last,
        increment,
    })
}

/// Extends `[start, stop]` outwards to multiples of the tick step for `count`.
///
/// The step is recomputed after each extension until it stops changing.
/// Intervals with no usable step are returned unchanged.
///
/// ```
/// use stolpe::scale::nice_extent;
///
/// assert_eq!(nice_extent(0.3, 9.6, 10.0), (0.0, 10.0));
/// assert_eq!(nice_extent(5.0, 5.0, 10.0), (5.0, 5.0));
/// ```
pub fn nice_extent<D: Float>(mut start: D, mut stop: D, count: D) -> (D, D) {
    let mut previous: Option<Increment<D>> = None;
    for _ in 0..MAX_NICE_ITERATIONS {
        let Some(spec) = tick_spec(start, stop, count) else {
            break;
        };
        if previous == Some(spec.increment) {
            break;
        }
        start = spec.increment.floor_to(start);
        stop = spec.increment.ceil_to(stop);
        previous = Some(spec.increment);
    }
    (start, stop)
}
