use num_traits::Float;

/// Return `(min, max)` for two owned values.
pub fn sorted_pair<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Converts an `f64` literal into `T`, yielding NaN if `T` cannot hold it.
pub fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Rounds half-way cases towards positive infinity, so `-2.5` becomes `-2`.
pub fn round_half_up<T: Float>(value: T) -> T {
    (value + constant(0.5)).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_pair() {
        assert_eq!(sorted_pair(3, 1), (1, 3));
        assert_eq!(sorted_pair(1.0, 3.0), (1.0, 3.0));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5f64), 3.0);
        assert_eq!(round_half_up(-2.5f64), -2.0);
        assert_eq!(round_half_up(-2.6f64), -3.0);
    }
}
