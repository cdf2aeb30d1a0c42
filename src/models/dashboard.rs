use std::collections::BTreeMap;

use crate::domain::HistoricalPoint;
use crate::models::{
    AssetAllocationSlice, NewsItem, PortfolioSummary, StockQuote, Strategy, WatchlistTab,
};

/// Everything the dashboard renders, assembled once at startup.
///
/// Built by `data::generate_dashboard` and owned by the app shell; the
/// UI only ever borrows it. Static literals come from the catalog, the
/// series maps hold one generated walk per strategy and per portfolio
/// symbol.
#[derive(Debug, Clone, Default)]
pub struct DashboardModel {
    pub summary: PortfolioSummary,
    pub holdings: Vec<StockQuote>,
    pub trending: Vec<StockQuote>,
    pub allocation: Vec<AssetAllocationSlice>,
    pub news: Vec<NewsItem>,
    pub strategy_series: BTreeMap<Strategy, Vec<HistoricalPoint>>,
    pub symbol_series: BTreeMap<&'static str, Vec<HistoricalPoint>>,
}

impl DashboardModel {
    pub fn strategy_history(&self, strategy: Strategy) -> &[HistoricalPoint] {
        self.strategy_series
            .get(&strategy)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn symbol_history(&self, symbol: &str) -> &[HistoricalPoint] {
        self.symbol_series
            .get(symbol)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn quotes(&self, tab: WatchlistTab) -> &[StockQuote] {
        match tab {
            WatchlistTab::Portfolio => &self.holdings,
            WatchlistTab::Trending => &self.trending,
        }
    }
}
