pub struct StatsHelper;

impl StatsHelper {
    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Minimum and maximum of a sequence; `None` for an empty slice.
    pub fn extrema(values: &[f64]) -> Option<(f64, f64)> {
        let first = *values.first()?;
        Some(values.iter().skip(1).fold((first, first), |(min, max), &v| {
            (min.min(v), max.max(v))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_sequence_yields_zero() {
        assert_eq!(StatsHelper::mean(&[]), 0.0);
    }

    #[test]
    fn mean_handles_single_value() {
        assert_eq!(StatsHelper::mean(&[4.0]), 4.0);
    }

    #[test]
    fn mean_averages_a_batch() {
        assert_eq!(StatsHelper::mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn extrema_of_empty_sequence_is_none() {
        assert_eq!(StatsHelper::extrema(&[]), None);
    }

    #[test]
    fn extrema_tracks_min_and_max() {
        assert_eq!(StatsHelper::extrema(&[3.0, -1.0, 7.0, 2.0]), Some((-1.0, 7.0)));
        assert_eq!(StatsHelper::extrema(&[5.0]), Some((5.0, 5.0)));
    }
}
