mod dashboard;
mod market;

pub use dashboard::DashboardModel;
pub use market::{
    AssetAllocationSlice, NewsImpact, NewsItem, PortfolioSummary, Position, StockQuote, Strategy,
    WatchlistTab,
};
