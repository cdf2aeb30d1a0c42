use {
    eframe::egui::Color32,
    strum_macros::{Display, EnumIter},
};

/// Holdings data attached to portfolio watchlist entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Dollar value of the holding.
    pub value: f64,
    pub shares: u32,
}

/// One watchlist row. Trending entries carry no position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockQuote {
    pub symbol: &'static str,
    pub name: &'static str,
    pub price: f64,
    /// Absolute daily change.
    pub change: f64,
    /// Daily change as a percentage of the previous close.
    pub change_pct: f64,
    pub volume: u64,
    pub market_cap: f64,
    pub position: Option<Position>,
}

impl StockQuote {
    pub fn is_gaining(&self) -> bool {
        self.change >= 0.0
    }
}

/// Headline portfolio figures shown in the summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub daily_change: f64,
    pub daily_change_pct: f64,
    pub weekly_change: f64,
    pub weekly_change_pct: f64,
    pub total_profit: f64,
    pub total_profit_pct: f64,
}

/// One sector wedge of the allocation donut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssetAllocationSlice {
    pub sector: &'static str,
    pub weight_pct: f64,
    pub color: Color32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NewsImpact {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewsItem {
    pub id: u32,
    pub title: &'static str,
    pub source: &'static str,
    /// Age label as published, e.g. "2h ago".
    pub published: &'static str,
    pub summary: &'static str,
    pub impact: NewsImpact,
    pub related: &'static [&'static str],
}

/// Selectable portfolio composition backing the performance chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Ord, PartialOrd, Default)]
pub enum Strategy {
    #[strum(to_string = "Complete Portfolio")]
    #[default]
    Complete,

    #[strum(to_string = "Conservative")]
    Conservative,

    #[strum(to_string = "Balanced")]
    Balanced,

    #[strum(to_string = "Aggressive")]
    Aggressive,

    #[strum(to_string = "Technology Focus")]
    Tech,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Default)]
pub enum WatchlistTab {
    #[default]
    Portfolio,
    Trending,
}
