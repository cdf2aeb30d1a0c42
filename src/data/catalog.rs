//! Hard-coded mock market data backing the dashboard.
//!
//! Everything here is a literal: quotes, news, allocation weights and
//! the series specs fed to the generator. Figures stay fixed across
//! runs; only the generated histories change.

use eframe::egui::Color32;

use crate::domain::{SeriesSpec, Trend};
use crate::models::{
    AssetAllocationSlice, NewsImpact, NewsItem, PortfolioSummary, Position, StockQuote, Strategy,
};

pub const PORTFOLIO_SUMMARY: PortfolioSummary = PortfolioSummary {
    total_value: 240_892.54,
    daily_change: 2_187.43,
    daily_change_pct: 0.92,
    weekly_change: 5_432.12,
    weekly_change_pct: 2.31,
    total_profit: 54_321.87,
    total_profit_pct: 29.13,
};

pub const HOLDINGS: &[StockQuote] = &[
    StockQuote {
        symbol: "AAPL",
        name: "Apple Inc.",
        price: 178.42,
        change: 3.65,
        change_pct: 2.09,
        volume: 68_403_100,
        market_cap: 2_800_000_000_000.0,
        position: Some(Position {
            value: 43_690.24,
            shares: 245,
        }),
    },
    StockQuote {
        symbol: "MSFT",
        name: "Microsoft Corp.",
        price: 334.58,
        change: 5.23,
        change_pct: 1.59,
        volume: 22_611_200,
        market_cap: 2_490_000_000_000.0,
        position: Some(Position {
            value: 36_803.80,
            shares: 110,
        }),
    },
    StockQuote {
        symbol: "GOOGL",
        name: "Alphabet Inc.",
        price: 139.99,
        change: -2.31,
        change_pct: -1.62,
        volume: 27_584_300,
        market_cap: 1_760_000_000_000.0,
        position: Some(Position {
            value: 27_998.00,
            shares: 200,
        }),
    },
    StockQuote {
        symbol: "AMZN",
        name: "Amazon.com Inc.",
        price: 134.68,
        change: 1.93,
        change_pct: 1.45,
        volume: 39_281_000,
        market_cap: 1_390_000_000_000.0,
        position: Some(Position {
            value: 20_202.00,
            shares: 150,
        }),
    },
    StockQuote {
        symbol: "TSLA",
        name: "Tesla Inc.",
        price: 242.71,
        change: -5.62,
        change_pct: -2.26,
        volume: 121_628_000,
        market_cap: 772_000_000_000.0,
        position: Some(Position {
            value: 12_135.50,
            shares: 50,
        }),
    },
    StockQuote {
        symbol: "NVDA",
        name: "NVIDIA Corp.",
        price: 450.05,
        change: 11.47,
        change_pct: 2.62,
        volume: 36_284_900,
        market_cap: 1_110_000_000_000.0,
        position: Some(Position {
            value: 45_005.00,
            shares: 100,
        }),
    },
    StockQuote {
        symbol: "META",
        name: "Meta Platforms Inc.",
        price: 315.22,
        change: 8.73,
        change_pct: 2.85,
        volume: 16_923_800,
        market_cap: 808_000_000_000.0,
        position: Some(Position {
            value: 31_522.00,
            shares: 100,
        }),
    },
    StockQuote {
        symbol: "V",
        name: "Visa Inc.",
        price: 235.36,
        change: -1.12,
        change_pct: -0.47,
        volume: 7_124_900,
        market_cap: 481_000_000_000.0,
        position: Some(Position {
            value: 23_536.00,
            shares: 100,
        }),
    },
];

pub const TRENDING: &[StockQuote] = &[
    StockQuote {
        symbol: "NVDA",
        name: "NVIDIA Corp.",
        price: 450.05,
        change: 11.47,
        change_pct: 2.62,
        volume: 36_284_900,
        market_cap: 1_110_000_000_000.0,
        position: None,
    },
    StockQuote {
        symbol: "META",
        name: "Meta Platforms Inc.",
        price: 315.22,
        change: 8.73,
        change_pct: 2.85,
        volume: 16_923_800,
        market_cap: 808_000_000_000.0,
        position: None,
    },
    StockQuote {
        symbol: "AAPL",
        name: "Apple Inc.",
        price: 178.42,
        change: 3.65,
        change_pct: 2.09,
        volume: 68_403_100,
        market_cap: 2_800_000_000_000.0,
        position: None,
    },
    StockQuote {
        symbol: "AMD",
        name: "Advanced Micro Devices Inc.",
        price: 105.39,
        change: 4.98,
        change_pct: 4.96,
        volume: 73_941_300,
        market_cap: 170_000_000_000.0,
        position: None,
    },
];

pub const ALLOCATION: &[AssetAllocationSlice] = &[
    AssetAllocationSlice {
        sector: "Technology",
        weight_pct: 45.0,
        color: Color32::from_rgb(0x8B, 0x5C, 0xF6),
    },
    AssetAllocationSlice {
        sector: "Consumer Cyclical",
        weight_pct: 15.0,
        color: Color32::from_rgb(0x0E, 0xA5, 0xE9),
    },
    AssetAllocationSlice {
        sector: "Financial Services",
        weight_pct: 12.0,
        color: Color32::from_rgb(0x10, 0xB9, 0x81),
    },
    AssetAllocationSlice {
        sector: "Healthcare",
        weight_pct: 10.0,
        color: Color32::from_rgb(0xD9, 0x46, 0xEF),
    },
    AssetAllocationSlice {
        sector: "Energy",
        weight_pct: 8.0,
        color: Color32::from_rgb(0xF5, 0x9E, 0x0B),
    },
    AssetAllocationSlice {
        sector: "Real Estate",
        weight_pct: 6.0,
        color: Color32::from_rgb(0xEC, 0x48, 0x99),
    },
    AssetAllocationSlice {
        sector: "Utilities",
        weight_pct: 4.0,
        color: Color32::from_rgb(0x14, 0xB8, 0xA6),
    },
];

pub const NEWS: &[NewsItem] = &[
    NewsItem {
        id: 1,
        title: "Fed signals potential rate cuts as inflation cools",
        source: "Financial Times",
        published: "2h ago",
        summary: "Federal Reserve officials indicated they could cut interest rates in the coming months if inflation continues to ease, according to minutes from their latest meeting.",
        impact: NewsImpact::Positive,
        related: &["SPY", "QQQ", "DIA"],
    },
    NewsItem {
        id: 2,
        title: "NVIDIA smashes earnings expectations, stock surges",
        source: "Wall Street Journal",
        published: "4h ago",
        summary: "NVIDIA reported quarterly revenue of $22.1 billion, up 122% year-over-year, driven by soaring demand for AI chips. The company raised its guidance for the next quarter.",
        impact: NewsImpact::Positive,
        related: &["NVDA", "AMD", "INTC"],
    },
    NewsItem {
        id: 3,
        title: "Tesla faces production challenges in Berlin factory",
        source: "Reuters",
        published: "6h ago",
        summary: "Tesla's Berlin Gigafactory is experiencing production delays due to supply chain constraints and local regulatory issues, potentially impacting Q3 delivery targets.",
        impact: NewsImpact::Negative,
        related: &["TSLA"],
    },
    NewsItem {
        id: 4,
        title: "Apple unveils new AI features for iPhone lineup",
        source: "Bloomberg",
        published: "12h ago",
        summary: "Apple announced a suite of AI-powered features for its upcoming iOS update, bringing advanced intelligence capabilities to millions of iPhones worldwide.",
        impact: NewsImpact::Positive,
        related: &["AAPL", "GOOGL"],
    },
    NewsItem {
        id: 5,
        title: "Oil prices drop as OPEC+ considers output increase",
        source: "CNBC",
        published: "1d ago",
        summary: "Oil prices fell 3% after reports that OPEC+ members are discussing a potential increase in production quotas at their next meeting.",
        impact: NewsImpact::Negative,
        related: &["XLE", "XOM", "CVX"],
    },
];

/// Walk recipe for each selectable strategy chart.
pub const fn strategy_spec(strategy: Strategy) -> SeriesSpec {
    match strategy {
        Strategy::Complete => SeriesSpec::new(190_000.0, 0.01, Trend::Up),
        Strategy::Conservative => SeriesSpec::new(150_000.0, 0.005, Trend::Up),
        Strategy::Balanced => SeriesSpec::new(180_000.0, 0.01, Trend::Up),
        Strategy::Aggressive => SeriesSpec::new(220_000.0, 0.02, Trend::Up),
        Strategy::Tech => SeriesSpec::new(250_000.0, 0.025, Trend::Up),
    }
}

/// Walk recipes for the per-symbol histories (portfolio symbols only).
pub const SYMBOL_SPECS: &[(&str, SeriesSpec)] = &[
    ("AAPL", SeriesSpec::new(165.0, 0.02, Trend::Neutral)),
    ("MSFT", SeriesSpec::new(315.0, 0.015, Trend::Neutral)),
    ("GOOGL", SeriesSpec::new(142.0, 0.025, Trend::Neutral)),
    ("AMZN", SeriesSpec::new(129.0, 0.02, Trend::Neutral)),
    ("TSLA", SeriesSpec::new(250.0, 0.04, Trend::Neutral)),
    ("NVDA", SeriesSpec::new(410.0, 0.03, Trend::Neutral)),
    ("META", SeriesSpec::new(290.0, 0.025, Trend::Neutral)),
    ("V", SeriesSpec::new(240.0, 0.01, Trend::Neutral)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_weights_cover_the_portfolio() {
        let total: f64 = ALLOCATION.iter().map(|s| s.weight_pct).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn every_holding_carries_a_position() {
        assert_eq!(HOLDINGS.len(), 8);
        assert!(HOLDINGS.iter().all(|q| q.position.is_some()));
        assert!(TRENDING.iter().all(|q| q.position.is_none()));
    }

    #[test]
    fn symbol_specs_match_the_holdings() {
        for (symbol, _) in SYMBOL_SPECS {
            assert!(
                HOLDINGS.iter().any(|q| q.symbol == *symbol),
                "{symbol} has a series spec but no holding"
            );
        }
        assert_eq!(SYMBOL_SPECS.len(), HOLDINGS.len());
    }
}
