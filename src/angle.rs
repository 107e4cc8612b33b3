//! Value-to-angle mapping for the meter arc.
//!
//! The arc occupies 270 of the 360 degrees, starting at 135 degrees so the
//! 90-degree gap sits centered at the bottom of the circle. Angles follow the
//! screen convention: 0 degrees points right, positive sweeps run clockwise.

/// Angle at which both arcs begin, in degrees.
pub const START_ANGLE_DEG: f64 = 135.0;

/// Sweep of a full meter, in degrees.
pub const MAX_SWEEP_DEG: f64 = 270.0;

/// Maps a balance value in `[0, max_value]` to a swept angle in `[0, 270]`.
///
/// `max_value` must be positive; configuration validation rejects anything
/// else before this is ever called.
pub fn sweep_angle(value: f64, max_value: f64) -> f64 {
    debug_assert!(max_value > 0.0);
    (value / max_value) * MAX_SWEEP_DEG
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn zero_value_maps_to_zero_sweep() {
        assert_relative_eq!(sweep_angle(0.0, 3000.0), 0.0);
    }

    #[test]
    fn max_value_maps_to_full_sweep() {
        assert_relative_eq!(sweep_angle(3000.0, 3000.0), MAX_SWEEP_DEG);
    }

    #[test]
    fn half_value_maps_to_half_sweep() {
        assert_relative_eq!(sweep_angle(1500.0, 3000.0), 135.0);
    }

    proptest! {
        #[test]
        fn sweep_stays_in_range(max in 0.01f64..1e9, t in 0.0f64..=1.0) {
            let sweep = sweep_angle(t * max, max);
            prop_assert!((0.0..=MAX_SWEEP_DEG + 1e-9).contains(&sweep));
        }

        #[test]
        fn sweep_is_monotonic(max in 0.01f64..1e9, a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(sweep_angle(lo * max, max) <= sweep_angle(hi * max, max));
        }
    }
}
