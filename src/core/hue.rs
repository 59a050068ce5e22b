//! Hue separation bound
//!
//! Colors are placed one at a time on a hue segment of length `L`, each keeping
//! a minimum distance `X` from the colors already placed. The bound computed
//! here is the largest `X` for which every placement order, including the
//! least efficient one, still leaves room for the next color.
//!
//! The least efficient placement keeps bisecting the free gaps: after the first
//! color there is 1 gap, then 2 more, then 4 more, and so on. The number of
//! same-size gaps needed to hold `N` colors is the first cumulative total
//! `1 + 2 + 4 + ...` that reaches `N`, and splitting `L` into that many plus
//! one equal pieces gives the gap width. The separation is half of that width,
//! since it is a radius around each hue.

use super::BoardError;

/// Number of same-size gaps the worst-case bisection needs to hold `color_count` colors
///
/// Returns the first cumulative total of `2^depth` (depth = 0, 1, 2, ...) that
/// is at least `color_count`: 1, 3, 7, 15, 31, ...
#[must_use]
pub fn bisection_capacity(color_count: usize) -> usize {
    let mut capacity = 0usize;
    let mut depth = 0u32;

    loop {
        capacity += 1 << depth;
        if capacity >= color_count {
            return capacity;
        }
        depth += 1;
    }
}

/// Largest minimum hue separation that guarantees `color_count` colors always fit
///
/// # Errors
/// Returns `BoardError::InvalidColorCount` when `color_count` is zero and
/// `BoardError::InvalidRange` when `range_length` is not a positive finite number.
///
/// # Examples
/// ```
/// use color_tiles::core::max_separation;
///
/// // 5 colors need 7 worst-case gaps: (0.95 / 8) / 2
/// let separation = max_separation(0.95, 5).unwrap();
/// assert!((separation - 0.059_375).abs() < 1e-12);
/// ```
pub fn max_separation(range_length: f64, color_count: usize) -> Result<f64, BoardError> {
    if color_count == 0 {
        return Err(BoardError::InvalidColorCount(color_count));
    }
    if !range_length.is_finite() || range_length <= 0.0 {
        return Err(BoardError::InvalidRange("hue"));
    }

    let gaps = bisection_capacity(color_count);
    Ok((range_length / (gaps + 1) as f64) / 2.0)
}

/// Distance between two hues on the unit hue circle
#[inline]
#[must_use]
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let direct = (a - b).abs().rem_euclid(1.0);
    direct.min(1.0 - direct)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn capacity_follows_cumulative_doubling() {
        assert_eq!(bisection_capacity(1), 1);
        assert_eq!(bisection_capacity(2), 3);
        assert_eq!(bisection_capacity(3), 3);
        assert_eq!(bisection_capacity(4), 7);
        assert_eq!(bisection_capacity(7), 7);
        assert_eq!(bisection_capacity(8), 15);
        assert_eq!(bisection_capacity(26), 31);
        assert_eq!(bisection_capacity(32), 63);
    }

    #[test]
    fn single_color_uses_one_gap() {
        let separation = max_separation(0.95, 1).unwrap();
        assert!((separation - 0.95 / 4.0).abs() < EPSILON);
    }

    #[test]
    fn five_colors_at_default_range() {
        let separation = max_separation(0.95, 5).unwrap();
        assert!((separation - 0.059_375).abs() < EPSILON);
    }

    #[test]
    fn colors_sharing_a_capacity_share_a_separation() {
        let four = max_separation(0.95, 4).unwrap();
        for count in 5..=7 {
            let other = max_separation(0.95, count).unwrap();
            assert!((four - other).abs() < EPSILON);
        }
        assert!(max_separation(0.95, 8).unwrap() < four);
    }

    #[test]
    fn separation_never_grows_with_more_colors() {
        let mut previous = f64::INFINITY;
        for count in 1..=40 {
            let separation = max_separation(1.0, count).unwrap();
            assert!(separation <= previous, "count {count}");
            previous = separation;
        }
    }

    #[test]
    fn zero_colors_rejected() {
        assert_eq!(
            max_separation(0.95, 0),
            Err(BoardError::InvalidColorCount(0))
        );
    }

    #[test]
    fn bad_range_rejected() {
        assert!(max_separation(0.0, 3).is_err());
        assert!(max_separation(-1.0, 3).is_err());
        assert!(max_separation(f64::NAN, 3).is_err());
    }

    #[test]
    fn circular_distance_wraps() {
        assert!((circular_distance(0.05, 0.95) - 0.1).abs() < EPSILON);
        assert!((circular_distance(0.95, 0.05) - 0.1).abs() < EPSILON);
        assert!((circular_distance(0.2, 0.5) - 0.3).abs() < EPSILON);
        assert!(circular_distance(0.4, 0.4).abs() < EPSILON);
        assert!((circular_distance(0.0, 0.5) - 0.5).abs() < EPSILON);
    }
}
