//! Data shapes for the analytics dashboard.
//!
//! These carry illustrative figures only; nothing here is derived from
//! shortened links or real traffic.

use serde::Serialize;

/// Headline figure shown as a card at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    /// Change versus the previous week, pre-formatted (e.g. `+12.5%`).
    pub change: &'static str,
}

/// One point of the clicks-over-time series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyClicks {
    pub day: &'static str,
    pub clicks: u32,
}

/// One row of the geographic breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryClicks {
    pub country: &'static str,
    pub clicks: u32,
    pub percentage: u8,
}

/// One row of the top performing URLs table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopUrl {
    pub url: &'static str,
    pub original: &'static str,
    pub clicks: u32,
    pub ctr: &'static str,
}

/// Everything the dashboard displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsSnapshot {
    pub stats: Vec<StatCard>,
    pub clicks_over_time: Vec<DailyClicks>,
    pub locations: Vec<CountryClicks>,
    pub top_urls: Vec<TopUrl>,
}

/// Bar length for `value` relative to the series maximum, in percent.
///
/// Returns 0 when `max` is 0.
pub fn bar_percent(value: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    let pct = u64::from(value.min(max)) * 100 / u64::from(max);
    pct as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_percent() {
        assert_eq!(bar_percent(156, 156), 100);
        assert_eq!(bar_percent(78, 156), 50);
        assert_eq!(bar_percent(0, 156), 0);
    }

    #[test]
    fn test_bar_percent_zero_max() {
        assert_eq!(bar_percent(10, 0), 0);
    }

    #[test]
    fn test_bar_percent_clamps_above_max() {
        assert_eq!(bar_percent(200, 100), 100);
    }
}
