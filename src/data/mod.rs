//! Mock data: the literal catalog plus the series generator.

pub mod catalog;
pub mod generator;

use chrono::Local;
use rand::Rng;
use strum::IntoEnumIterator;

use crate::config::DF;
use crate::models::{DashboardModel, Strategy};

/// Build the whole view-model in one pass.
///
/// One wall-clock anchor is taken up front so all series end on the
/// same day. Called once from the composition root; the result is
/// treated as immutable from then on.
pub fn generate_dashboard<R: Rng + ?Sized>(rng: &mut R) -> DashboardModel {
    let today = Local::now().date_naive();

    let strategy_series = Strategy::iter()
        .map(|s| {
            let points = generator::generate_with(rng, today, catalog::strategy_spec(s));
            (s, points)
        })
        .collect();
    let symbol_series = catalog::SYMBOL_SPECS
        .iter()
        .map(|&(symbol, spec)| (symbol, generator::generate_with(rng, today, spec)))
        .collect();

    let model = DashboardModel {
        summary: catalog::PORTFOLIO_SUMMARY,
        holdings: catalog::HOLDINGS.to_vec(),
        trending: catalog::TRENDING.to_vec(),
        allocation: catalog::ALLOCATION.to_vec(),
        news: catalog::NEWS.to_vec(),
        strategy_series,
        symbol_series,
    };

    if DF.log_generation {
        log::debug!(
            "📈 Generated {} strategy and {} symbol series ending {}",
            model.strategy_series.len(),
            model.symbol_series.len(),
            today
        );
    }
    model
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WatchlistTab;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strum::IntoEnumIterator;

    #[test]
    fn dashboard_has_a_series_per_strategy_and_symbol() {
        let model = generate_dashboard(&mut StdRng::seed_from_u64(11));

        for strategy in Strategy::iter() {
            assert_eq!(model.strategy_history(strategy).len(), 31);
        }
        for (symbol, _) in catalog::SYMBOL_SPECS {
            assert_eq!(model.symbol_history(symbol).len(), 31);
        }
        assert!(model.symbol_history("AMD").is_empty());
    }

    #[test]
    fn all_series_share_one_anchor_date() {
        let model = generate_dashboard(&mut StdRng::seed_from_u64(5));

        let anchor = model.strategy_history(Strategy::Complete).last().unwrap().date;
        for strategy in Strategy::iter() {
            assert_eq!(model.strategy_history(strategy).last().unwrap().date, anchor);
        }
        for series in model.symbol_series.values() {
            assert_eq!(series.last().unwrap().date, anchor);
        }
    }

    #[test]
    fn tabs_route_to_the_right_quote_lists() {
        let model = generate_dashboard(&mut StdRng::seed_from_u64(2));

        assert_eq!(model.quotes(WatchlistTab::Portfolio).len(), 8);
        assert_eq!(model.quotes(WatchlistTab::Trending).len(), 4);
        assert_eq!(model.quotes(WatchlistTab::Trending)[3].symbol, "AMD");
        assert_eq!(model.news.len(), 5);
    }
}
