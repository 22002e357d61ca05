use crate::models::{MetricRange, NormalizedMetric};

/// Upper bound of the common metric scale
pub const SCALE_MAX: f64 = 100.0;

/// Rescale `raw` linearly from `[known_min, known_max]` onto 0-100.
///
/// Out-of-range input is clamped. Missing or non-finite input stays
/// `Unavailable`. When the range is degenerate (`known_max <= known_min`),
/// values at or below `known_min` map to 0 and anything above to 100.
pub fn normalize(raw: Option<f64>, known_min: f64, known_max: f64) -> NormalizedMetric {
    let Some(raw) = raw.filter(|v| v.is_finite()) else {
        return NormalizedMetric::Unavailable;
    };

    // Halved operands keep `max - min` finite for any finite bounds
    let half_span = known_max / 2.0 - known_min / 2.0;
    let scaled = if half_span > 0.0 && half_span.is_finite() {
        (raw / 2.0 - known_min / 2.0) / half_span * SCALE_MAX
    } else if raw <= known_min {
        0.0
    } else {
        SCALE_MAX
    };

    NormalizedMetric::Available(scaled.clamp(0.0, SCALE_MAX))
}

/// [`normalize`] against a [`MetricRange`]
pub fn normalize_in(raw: Option<f64>, range: MetricRange) -> NormalizedMetric {
    normalize(raw, range.min, range.max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_rescale() {
        assert_eq!(normalize(Some(25.0), 0.0, 50.0), NormalizedMetric::Available(50.0));
        assert_eq!(normalize(Some(10.0), 10.0, 20.0), NormalizedMetric::Available(0.0));
        assert_eq!(normalize(Some(20.0), 10.0, 20.0), NormalizedMetric::Available(100.0));
        assert_eq!(normalize(Some(40.0), 0.0, 100.0), NormalizedMetric::Available(40.0));
    }

    #[test]
    fn test_stays_in_bounds() {
        let (min, max) = (-5.0, 37.0);
        let mut raw = min;
        while raw <= max {
            let value = normalize(Some(raw), min, max).value().unwrap();
            assert!((0.0..=100.0).contains(&value), "{raw} -> {value}");
            raw += 0.25;
        }
    }

    #[test]
    fn test_clamps_out_of_range_input() {
        assert_eq!(normalize(Some(-3.0), 0.0, 10.0), NormalizedMetric::Available(0.0));
        assert_eq!(normalize(Some(250.0), 0.0, 10.0), NormalizedMetric::Available(100.0));
    }

    #[test]
    fn test_unavailable_propagates() {
        assert_eq!(normalize(None, 0.0, 100.0), NormalizedMetric::Unavailable);
        assert_eq!(normalize(Some(f64::NAN), 0.0, 100.0), NormalizedMetric::Unavailable);
        assert_eq!(
            normalize(Some(f64::INFINITY), 0.0, 100.0),
            NormalizedMetric::Unavailable
        );
        assert!(!normalize(None, 0.0, 0.0).is_available());
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(normalize(Some(5.0), 5.0, 5.0), NormalizedMetric::Available(0.0));
        assert_eq!(normalize(Some(6.0), 5.0, 5.0), NormalizedMetric::Available(100.0));
        assert_eq!(normalize(Some(1.0), 10.0, 0.0), NormalizedMetric::Available(0.0));
    }

    #[test]
    fn test_widest_finite_range() {
        let (min, max) = (-1e308, 1e308);
        assert_eq!(normalize(Some(0.0), min, max), NormalizedMetric::Available(50.0));
        assert_eq!(normalize(Some(5e307), min, max), NormalizedMetric::Available(75.0));
        assert_eq!(normalize(Some(min), min, max), NormalizedMetric::Available(0.0));
        assert_eq!(normalize(Some(max), min, max), NormalizedMetric::Available(100.0));
        assert_eq!(
            normalize(Some(f64::MAX), -f64::MAX, f64::MAX),
            NormalizedMetric::Available(100.0)
        );
    }

    #[test]
    fn test_normalize_in_range() {
        let range = MetricRange::new(0.0, 200.0);
        assert_eq!(normalize_in(Some(50.0), range), NormalizedMetric::Available(25.0));
    }
}
