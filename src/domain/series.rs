use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Direction bias applied to every step of a generated walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
    #[default]
    Neutral,
}

impl Trend {
    /// Constant drift term added to each uniform draw.
    pub const fn bias(self) -> f64 {
        match self {
            Trend::Up => 0.1,
            Trend::Down => -0.1,
            Trend::Neutral => 0.0,
        }
    }
}

/// Recipe for one synthetic daily series.
///
/// Inputs are taken as-is: callers own the plausibility of
/// `base_value` and `volatility`, degenerate specs still generate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub base_value: f64,
    pub volatility: f64,
    pub trend: Trend,
}

impl SeriesSpec {
    pub const fn new(base_value: f64, volatility: f64, trend: Trend) -> Self {
        Self {
            base_value,
            volatility,
            trend,
        }
    }
}

/// One day of a generated series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub date: NaiveDate,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_bias_values() {
        assert_eq!(Trend::Up.bias(), 0.1);
        assert_eq!(Trend::Down.bias(), -0.1);
        assert_eq!(Trend::Neutral.bias(), 0.0);
    }

    #[test]
    fn trend_defaults_to_neutral() {
        assert_eq!(Trend::default(), Trend::Neutral);
    }
}
