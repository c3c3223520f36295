//! Scalar interpolation helpers.

/// Linear interpolation between `a` and `b`. `t` is not clamped, so values
/// outside `[0, 1]` extrapolate.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse linear interpolation: the position of `value` between `a` and `b`.
///
/// The result is clamped to `[0, 1]`, so values outside the range map to the
/// nearest endpoint. Returns 0 when `a == b`.
#[inline]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if a == b {
        return 0.0;
    }
    ((value - a) / (b - a)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn test_lerp_extrapolates() {
        assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
        assert_eq!(lerp(0.0, 10.0, -0.5), -5.0);
    }

    #[test]
    fn test_inverse_lerp_recovers_parameter() {
        assert_eq!(inverse_lerp(2.0, 6.0, 2.0), 0.0);
        assert_eq!(inverse_lerp(2.0, 6.0, 6.0), 1.0);
        assert_eq!(inverse_lerp(2.0, 6.0, 4.0), 0.5);
    }

    #[test]
    fn test_inverse_lerp_clamps_out_of_range() {
        assert_eq!(inverse_lerp(0.0, 1.0, -3.0), 0.0);
        assert_eq!(inverse_lerp(0.0, 1.0, 7.0), 1.0);
    }

    #[test]
    fn test_inverse_lerp_degenerate_range() {
        assert_eq!(inverse_lerp(5.0, 5.0, 5.0), 0.0);
    }

    #[test]
    fn test_lerp_inverse_lerp_roundtrip() {
        let (a, b) = (-3.0, 12.5);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let v = lerp(a, b, t);
            assert!(
                (inverse_lerp(a, b, v) - t).abs() < 1e-12,
                "inverse_lerp(lerp(t)) must return t, got {} for t={t}",
                inverse_lerp(a, b, v)
            );
        }
    }
}
