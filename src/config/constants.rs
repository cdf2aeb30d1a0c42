//! Core constants for the mock market data.

/// Days of history behind "today" in every generated series.
pub const LOOKBACK_DAYS: usize = 30;

/// Points per series: the lookback window plus today.
pub const SERIES_LEN: usize = LOOKBACK_DAYS + 1;

/// A series never falls below this fraction of its base value.
pub const VALUE_FLOOR_RATIO: f64 = 0.7;

/// Frames slower than this are logged when `DF.log_performance` is set.
pub const FRAME_BUDGET_MICROS: u128 = 50_000;
