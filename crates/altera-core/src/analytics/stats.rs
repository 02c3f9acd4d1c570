//! Descriptive statistics over raw screening scores.
//!
//! Mean/median/std-dev are computed from the actual (unbucketed) scores;
//! candidates without a score are excluded from the sample entirely rather
//! than counted as zero.

use crate::analytics::model::ScoreStats;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mean, median and population standard deviation, rounded to 2 decimals.
/// All fields are `None` for an empty sample; a single sample has a
/// std-dev of 0.0.
pub fn score_stats(values: &[f64]) -> ScoreStats {
    if values.is_empty() {
        return ScoreStats {
            mean: None,
            median: None,
            std_dev: None,
        };
    }
    if values.len() == 1 {
        return ScoreStats {
            mean: Some(round2(values[0])),
            median: Some(round2(values[0])),
            std_dev: Some(0.0),
        };
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    ScoreStats {
        mean: Some(round2(mean)),
        median: Some(round2(median)),
        std_dev: Some(round2(variance.sqrt())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sample_has_no_stats() {
        let stats = score_stats(&[]);
        assert_eq!(stats.mean, None);
        assert_eq!(stats.median, None);
        assert_eq!(stats.std_dev, None);
    }

    #[test]
    fn single_sample_has_zero_std_dev() {
        let stats = score_stats(&[3.456]);
        assert_eq!(stats.mean, Some(3.46));
        assert_eq!(stats.median, Some(3.46));
        assert_eq!(stats.std_dev, Some(0.0));
    }

    #[test]
    fn even_sample_median_averages_the_middle_pair() {
        let stats = score_stats(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(stats.mean, Some(2.5));
        assert_eq!(stats.median, Some(2.5));
        // Population std dev of {1,2,3,4} is sqrt(1.25).
        assert_eq!(stats.std_dev, Some(1.12));
    }

    #[test]
    fn odd_sample_median_is_the_middle_value() {
        let stats = score_stats(&[5.0, 1.0, 3.0]);
        assert_eq!(stats.median, Some(3.0));
        assert_eq!(stats.mean, Some(3.0));
        // Population std dev of {1,3,5} is sqrt(8/3).
        assert_eq!(stats.std_dev, Some(1.63));
    }
}
