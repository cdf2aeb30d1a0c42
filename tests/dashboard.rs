//! Checks over the crate's public surface: the assembled view-model and
//! the series generator driving it.

use {
    chrono::{Days, NaiveDate},
    quantum_finance::{
        SeriesSpec, Trend, generate_dashboard,
        config::constants::SERIES_LEN,
        data::generator,
        models::{Strategy, WatchlistTab},
    },
    rand::{SeedableRng, rngs::StdRng},
    strum::IntoEnumIterator,
};

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 28).unwrap()
}

mod assembly {
    use super::*;

    #[test]
    fn model_is_fully_populated() {
        let mut rng = StdRng::seed_from_u64(7);
        let model = generate_dashboard(&mut rng);

        assert_eq!(model.holdings.len(), 8);
        assert_eq!(model.trending.len(), 4);
        assert_eq!(model.allocation.len(), 7);
        assert_eq!(model.news.len(), 5);

        for strategy in Strategy::iter() {
            assert_eq!(
                model.strategy_history(strategy).len(),
                SERIES_LEN,
                "{strategy} series should cover the whole window"
            );
        }
        for quote in &model.holdings {
            assert_eq!(
                model.symbol_history(quote.symbol).len(),
                SERIES_LEN,
                "{} series should cover the whole window",
                quote.symbol
            );
        }
    }

    #[test]
    fn all_series_share_one_ascending_calendar() {
        let mut rng = StdRng::seed_from_u64(21);
        let model = generate_dashboard(&mut rng);

        let reference: Vec<NaiveDate> = model
            .strategy_history(Strategy::Complete)
            .iter()
            .map(|p| p.date)
            .collect();
        assert!(reference.windows(2).all(|w| w[1] > w[0]));

        for strategy in Strategy::iter() {
            let dates: Vec<NaiveDate> = model
                .strategy_history(strategy)
                .iter()
                .map(|p| p.date)
                .collect();
            assert_eq!(dates, reference, "{strategy} drifted off the shared anchor");
        }
        for quote in &model.holdings {
            let dates: Vec<NaiveDate> = model
                .symbol_history(quote.symbol)
                .iter()
                .map(|p| p.date)
                .collect();
            assert_eq!(dates, reference, "{} drifted off the shared anchor", quote.symbol);
        }
    }

    #[test]
    fn watchlist_tabs_resolve_to_their_quote_lists() {
        let mut rng = StdRng::seed_from_u64(3);
        let model = generate_dashboard(&mut rng);

        assert_eq!(model.quotes(WatchlistTab::Portfolio).len(), 8);
        assert_eq!(model.quotes(WatchlistTab::Trending).len(), 4);
        assert!(
            model
                .quotes(WatchlistTab::Portfolio)
                .iter()
                .all(|q| q.position.is_some()),
            "every holding should carry a position"
        );
    }
}

mod generator_properties {
    use super::*;

    #[test]
    fn portfolio_scenario_lands_in_the_documented_band() {
        let spec = SeriesSpec::new(190_000.0, 0.01, Trend::Up);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let points = generator::generate_with(&mut rng, anchor(), spec);

            assert_eq!(points.len(), SERIES_LEN);
            assert_eq!(points[0].date, anchor() - Days::new(30));
            assert_eq!(points[SERIES_LEN - 1].date, anchor());
            for p in &points {
                assert!(
                    (133_000.0..=280_000.0).contains(&p.value),
                    "seed {seed} out of band: {}",
                    p.value
                );
            }
        }
    }

    #[test]
    fn zero_volatility_neutral_walk_never_moves() {
        let mut rng = StdRng::seed_from_u64(5);
        let points =
            generator::generate_with(&mut rng, anchor(), SeriesSpec::new(100.0, 0.0, Trend::Neutral));
        assert!(points.iter().all(|p| p.value == 100.0));
    }

    #[test]
    fn hard_downtrend_respects_the_floor() {
        let spec = SeriesSpec::new(200.0, 0.5, Trend::Down);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let points = generator::generate_with(&mut rng, anchor(), spec);
            for p in &points {
                assert!(p.value >= 140.0, "seed {seed} broke the floor: {}", p.value);
            }
        }
    }

    #[test]
    fn values_carry_cent_precision() {
        let mut rng = StdRng::seed_from_u64(13);
        let points = generator::generate_with(
            &mut rng,
            anchor(),
            SeriesSpec::new(250.0, 0.025, Trend::Up),
        );
        for p in &points {
            let cents = (p.value * 100.0).round();
            assert!(
                (p.value * 100.0 - cents).abs() < 1e-6,
                "{} is not cent precise",
                p.value
            );
        }
    }
}
