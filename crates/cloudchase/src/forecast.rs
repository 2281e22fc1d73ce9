//! Synthetic cloud-cover forecasts.
//!
//! Nothing here is predicted: coverage values are uniform draws, and timestamps are a fixed hourly grid.
use std::ops::Range;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use rand::Rng;

/// Number of points in every forecast.
pub const FORECAST_LEN: usize = 10;

/// Coverage percentages are drawn uniformly from this range.
pub const COVERAGE_RANGE: Range<f64> = 30.0..70.0;

/// First timestamp of every forecast, 2023-01-05 00:00.
pub const FORECAST_START: NaiveDateTime = {
    let date = match NaiveDate::from_ymd_opt(2023, 1, 5) {
        Some(date) => date,
        None => panic!("invalid forecast start date"),
    };
    let time = match NaiveTime::from_hms_opt(0, 0, 0) {
        Some(time) => time,
        None => panic!("invalid forecast start time"),
    };
    date.and_time(time)
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastPoint {
    pub time: NaiveDateTime,
    /// Predicted cloud coverage, in percent.
    pub coverage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    points: Vec<ForecastPoint>,
}

impl ForecastSample {
    /// Draws a fresh sample of [`FORECAST_LEN`] hourly points starting at [`FORECAST_START`].
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::generate_from(rng, FORECAST_START, FORECAST_LEN)
    }

    pub(crate) fn generate_from<R: Rng + ?Sized>(rng: &mut R, start: NaiveDateTime, len: usize) -> Self {
        let points = (0..len)
            .map(|hour| ForecastPoint {
                time: start + TimeDelta::hours(hour as i64),
                coverage: rng.random_range(COVERAGE_RANGE),
            })
            .collect();

        Self { points }
    }

    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn mean_coverage(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }

        Some(self.points.iter().map(|point| point.coverage).sum::<f64>() / self.points.len() as f64)
    }

    /// Points as `(label, value)` pairs, ready for charting.
    pub fn series(&self) -> Vec<(String, f64)> {
        self.points
            .iter()
            .map(|point| (point.time.format("%H:%M").to_string(), point.coverage))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_coverage_stays_in_range() {
        for seed in 0..50 {
            let sample = ForecastSample::generate(&mut StdRng::seed_from_u64(seed));
            assert_eq!(sample.len(), FORECAST_LEN);
            for point in sample.points() {
                assert!(
                    (30.0..=70.0).contains(&point.coverage),
                    "coverage {} out of range",
                    point.coverage
                );
            }
        }
    }

    #[test]
    fn test_timestamps_step_by_one_hour() {
        let sample = ForecastSample::generate(&mut StdRng::seed_from_u64(7));

        assert_eq!(
            sample.points()[0].time.to_string(),
            "2023-01-05 00:00:00".to_string()
        );
        for pair in sample.points().windows(2) {
            assert_eq!(pair[1].time - pair[0].time, TimeDelta::hours(1));
        }
        assert_eq!(
            sample.points()[FORECAST_LEN - 1].time.to_string(),
            "2023-01-05 09:00:00".to_string()
        );
    }

    #[test]
    fn test_every_run_draws_fresh_values() {
        let mut rng = StdRng::seed_from_u64(1);
        let first = ForecastSample::generate(&mut rng);
        let second = ForecastSample::generate(&mut rng);

        assert_ne!(first, second);
    }

    #[test]
    fn test_mean_of_empty_sample() {
        let sample = ForecastSample::generate_from(&mut StdRng::seed_from_u64(0), FORECAST_START, 0);
        assert!(sample.is_empty());
        assert_eq!(sample.mean_coverage(), None);
    }

    #[test]
    fn test_series_labels_are_hours() {
        let sample = ForecastSample::generate(&mut StdRng::seed_from_u64(3));
        let series = sample.series();

        assert_eq!(series[0].0, "00:00");
        assert_eq!(series[3].0, "03:00");
    }
}
