use super::error::AnalyticsError;

/// Trailing mean over `window` consecutive values.
///
/// The result has the same length as `series`; the first `window - 1`
/// entries are `None` because partial windows are not averaged.
pub fn moving_average(series: &[f64], window: usize) -> Result<Vec<Option<f64>>, AnalyticsError> {
    if window < 2 || window > series.len() {
        return Err(AnalyticsError::InvalidWindow {
            window: window as i64,
            len: series.len(),
        });
    }

    let averages = (0..series.len())
        .map(|i| {
            (i + 1 >= window).then(|| {
                let sum: f64 = series[i + 1 - window..=i].iter().sum();
                sum / window as f64
            })
        })
        .collect();

    Ok(averages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_of_two() {
        let result = moving_average(&[10.0, 20.0, 30.0, 40.0], 2).unwrap();
        assert_eq!(result, vec![None, Some(15.0), Some(25.0), Some(35.0)]);
    }

    #[test]
    fn test_window_of_three() {
        let result = moving_average(&[3.0, 6.0, 9.0, 12.0, 0.0], 3).unwrap();
        assert_eq!(result, vec![None, None, Some(6.0), Some(9.0), Some(7.0)]);
    }

    #[test]
    fn test_window_equal_to_length() {
        let result = moving_average(&[1.0, 2.0, 3.0], 3).unwrap();
        assert_eq!(result, vec![None, None, Some(2.0)]);
    }

    #[test]
    fn test_window_longer_than_series() {
        let err = moving_average(&[1.0, 2.0, 3.0], 5).unwrap_err();
        assert_eq!(err, AnalyticsError::InvalidWindow { window: 5, len: 3 });
    }

    #[test]
    fn test_window_below_two() {
        assert!(moving_average(&[1.0, 2.0, 3.0], 1).is_err());
        assert!(moving_average(&[1.0, 2.0, 3.0], 0).is_err());
        assert!(moving_average(&[], 2).is_err());
    }
}
