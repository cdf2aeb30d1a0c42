//! Display formatting for money, counts and dates.

use chrono::{Datelike, NaiveDate};

/// US-style currency: grouped thousands, two decimals, "-$1,234.56" when negative.
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let grouped = group_thousands(cents / 100);
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// Whole-dollar currency for chart tooltips and axis ticks: "$190,123".
pub fn format_dollars(value: f64) -> String {
    let dollars = value.abs().round() as u64;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(dollars))
}

pub fn format_pct(value: f64) -> String {
    format!("{:.2}%", value)
}

pub fn format_signed_pct(value: f64) -> String {
    format!("{:+.2}%", value)
}

/// Compact axis/tooltip magnitude: "$2.80T", "$1.39B", "$68.40M", "$190.0K",
/// plain currency below a thousand.
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000_000_000.0 {
        format!("${:.2}T", value / 1_000_000_000_000.0)
    } else if abs >= 1_000_000_000.0 {
        format!("${:.2}B", value / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("${:.1}K", value / 1_000.0)
    } else {
        format_dollars(value)
    }
}

/// Share/volume counts: "68.4M", "74K", small values verbatim.
pub fn format_count(value: u64) -> String {
    let v = value as f64;
    if v >= 1_000_000.0 {
        format!("{:.1}M", v / 1_000_000.0)
    } else if v >= 1_000.0 {
        format!("{:.0}K", v / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Axis tick label, day/month.
pub fn short_date(date: NaiveDate) -> String {
    format!("{}/{}", date.day(), date.month())
}

/// Tooltip date, e.g. "15 Mar 2024".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(240_892.54), "$240,892.54");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(178.42), "$178.42");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn currency_handles_negatives_and_rounding() {
        assert_eq!(format_currency(-5.62), "-$5.62");
        assert_eq!(format_currency(-1_234.567), "-$1,234.57");
        assert_eq!(format_currency(9.999), "$10.00");
    }

    #[test]
    fn signed_changes_carry_their_sign() {
        assert_eq!(format_signed_pct(0.92), "+0.92%");
        assert_eq!(format_signed_pct(-2.26), "-2.26%");
        assert_eq!(format_pct(2.09), "2.09%");
    }

    #[test]
    fn compact_picks_the_right_magnitude() {
        assert_eq!(format_compact(2_800_000_000_000.0), "$2.80T");
        assert_eq!(format_compact(1_390_000_000_000.0), "$1.39T");
        assert_eq!(format_compact(808_000_000_000.0), "$808.00B");
        assert_eq!(format_compact(22_100_000.0), "$22.10M");
        assert_eq!(format_compact(190_000.0), "$190.0K");
        assert_eq!(format_compact(450.05), "$450");
    }

    #[test]
    fn whole_dollars_drop_the_cents() {
        assert_eq!(format_dollars(190_123.49), "$190,123");
        assert_eq!(format_dollars(190_123.51), "$190,124");
        assert_eq!(format_dollars(-250.0), "-$250");
        assert_eq!(format_dollars(0.0), "$0");
    }

    #[test]
    fn counts_shrink_to_m_and_k() {
        assert_eq!(format_count(68_403_100), "68.4M");
        assert_eq!(format_count(7_124_900), "7.1M");
        assert_eq!(format_count(73_941), "74K");
        assert_eq!(format_count(245), "245");
    }

    #[test]
    fn dates_render_day_first() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(short_date(date), "5/3");
        assert_eq!(long_date(date), "05 Mar 2024");
    }
}
