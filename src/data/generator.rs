//! Synthetic daily series: a random walk with drift and a hard floor.

use chrono::{Days, Local, NaiveDate};
use rand::Rng;

use crate::config::constants::{LOOKBACK_DAYS, SERIES_LEN, VALUE_FLOOR_RATIO};
use crate::domain::{HistoricalPoint, SeriesSpec};

/// Generate a 31-day series ending today, drawn from the thread-local rng.
///
/// Repeat calls with the same spec give different walks. Inputs are not
/// validated: a non-positive base or an outsized volatility still
/// produces a well-formed (if degenerate) series.
pub fn generate(spec: SeriesSpec) -> Vec<HistoricalPoint> {
    generate_with(&mut rand::rng(), Local::now().date_naive(), spec)
}

/// Walk `SERIES_LEN` calendar days up to `end` inclusive.
///
/// The rng is a parameter so tests can pin the draws; `generate` is the
/// wall-clock front door.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    end: NaiveDate,
    spec: SeriesSpec,
) -> Vec<HistoricalPoint> {
    let floor = spec.base_value * VALUE_FLOOR_RATIO;
    let mut value = spec.base_value;
    let mut points = Vec::with_capacity(SERIES_LEN);

    // Oldest day first, so today's point lands last.
    for i in (0..=LOOKBACK_DAYS).rev() {
        let date = end - Days::new(i as u64);
        let u: f64 = rng.random();
        let delta = (u - 0.5 + spec.trend.bias()) * spec.volatility * spec.base_value;
        value = round_to_cents((value + delta).max(floor));
        points.push(HistoricalPoint { date, value });
    }
    points
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Trend;
    use chrono::NaiveDate;
    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    /// Rng whose f64 draws sit at the bottom of [0,1), forcing the
    /// strongest downward step every day.
    struct FloorRng;

    impl RngCore for FloorRng {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    #[test]
    fn always_31_points() {
        let mut rng = StdRng::seed_from_u64(7);
        let spec = SeriesSpec::new(1000.0, 0.02, Trend::Neutral);
        assert_eq!(generate_with(&mut rng, anchor(), spec).len(), 31);
        assert_eq!(generate(spec).len(), 31);
    }

    #[test]
    fn dates_are_contiguous_ascending_and_end_at_anchor() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = generate_with(&mut rng, anchor(), SeriesSpec::new(500.0, 0.01, Trend::Up));

        assert_eq!(points.last().unwrap().date, anchor());
        assert_eq!(points[0].date, anchor() - Days::new(30));
        for (a, b) in points.iter().tuple_windows() {
            assert_eq!(a.date.succ_opt(), Some(b.date));
        }
    }

    #[test]
    fn generate_anchors_on_the_wall_clock() {
        let before = Local::now().date_naive();
        let points = generate(SeriesSpec::new(250.0, 0.01, Trend::Neutral));
        let after = Local::now().date_naive();

        let last = points.last().unwrap().date;
        // Equality with either side tolerates a midnight rollover mid-call.
        assert!(last == before || last == after);
    }

    #[test]
    fn floor_holds_under_forced_worst_case_draws() {
        let spec = SeriesSpec::new(200.0, 0.5, Trend::Down);
        let points = generate_with(&mut FloorRng, anchor(), spec);

        // Every daily delta is (0 - 0.5 - 0.1) * 0.5 * 200 = -60; without
        // the clamp the walk would cross zero on day 4.
        for p in &points {
            assert!(p.value >= 140.0, "value {} fell through the floor", p.value);
        }
        assert_eq!(points.last().unwrap().value, 140.0);
    }

    #[test]
    fn floor_holds_across_seeded_runs() {
        let spec = SeriesSpec::new(1000.0, 0.9, Trend::Down);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            for p in generate_with(&mut rng, anchor(), spec) {
                assert!(p.value >= 700.0);
            }
        }
    }

    #[test]
    fn values_are_cent_precise() {
        let mut rng = StdRng::seed_from_u64(99);
        let points = generate_with(&mut rng, anchor(), SeriesSpec::new(178.42, 0.02, Trend::Up));
        for p in &points {
            assert_eq!((p.value * 100.0).round() / 100.0, p.value);
        }
    }

    #[test]
    fn zero_volatility_pins_every_point_to_base() {
        let mut rng = StdRng::seed_from_u64(3);
        let points = generate_with(&mut rng, anchor(), SeriesSpec::new(100.0, 0.0, Trend::Neutral));
        assert_eq!(points.len(), 31);
        for p in &points {
            assert_eq!(p.value, 100.0);
        }
    }

    #[test]
    fn same_seed_reproduces_different_seed_diverges() {
        let spec = SeriesSpec::new(190_000.0, 0.01, Trend::Up);
        let a = generate_with(&mut StdRng::seed_from_u64(42), anchor(), spec);
        let b = generate_with(&mut StdRng::seed_from_u64(42), anchor(), spec);
        let c = generate_with(&mut StdRng::seed_from_u64(43), anchor(), spec);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn repeat_calls_share_shape_but_not_values() {
        let spec = SeriesSpec::new(190_000.0, 0.01, Trend::Up);
        let a = generate(spec);
        let b = generate(spec);

        // The walks come from a non-deterministic source, so the values
        // are allowed to differ; only the date grid is fixed.
        let dates_a: Vec<_> = a.iter().map(|p| p.date).collect();
        let dates_b: Vec<_> = b.iter().map(|p| p.date).collect();
        assert_eq!(dates_a, dates_b);
    }

    #[test]
    fn portfolio_scenario_stays_in_sane_bounds() {
        let spec = SeriesSpec::new(190_000.0, 0.01, Trend::Up);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let points = generate_with(&mut rng, anchor(), spec);
            assert_eq!(points.len(), 31);
            for p in &points {
                assert!(p.value >= 133_000.0);
                assert!(p.value <= 280_000.0);
            }
        }
    }

    #[test]
    fn negative_base_still_generates() {
        let spec = SeriesSpec::new(-100.0, 0.1, Trend::Neutral);
        let points = generate_with(&mut StdRng::seed_from_u64(1), anchor(), spec);

        // The floor (-70) sits above every reachable step from -100, so
        // the clamp fires on day one; after that the walk may drift
        // upward. Degenerate but total.
        assert_eq!(points.len(), 31);
        assert_eq!(points[0].value, -70.0);
        for p in &points {
            assert!(p.value >= -70.0);
        }
    }
}
