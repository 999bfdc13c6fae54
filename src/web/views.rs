//! View models shared by the page templates.

use crate::domain::entities::analytics::bar_percent;
use crate::domain::entities::AnalyticsSnapshot;

/// Top-level tab a page belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Shortener,
    Analytics,
}

impl Tab {
    pub fn is_shortener(&self) -> bool {
        *self == Tab::Shortener
    }

    pub fn is_analytics(&self) -> bool {
        *self == Tab::Analytics
    }
}

/// One horizontal bar of a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarView {
    pub label: &'static str,
    pub value: u32,
    /// Bar length relative to the longest bar in the chart.
    pub percent: u8,
    /// Share of the total, where the data carries one.
    pub share: Option<u8>,
}

/// Bars for the clicks-over-time chart.
pub fn daily_bars(snapshot: &AnalyticsSnapshot) -> Vec<BarView> {
    let max = snapshot
        .clicks_over_time
        .iter()
        .map(|d| d.clicks)
        .max()
        .unwrap_or(0);

    snapshot
        .clicks_over_time
        .iter()
        .map(|d| BarView {
            label: d.day,
            value: d.clicks,
            percent: bar_percent(d.clicks, max),
            share: None,
        })
        .collect()
}

/// Bars for the geographic distribution chart.
pub fn location_bars(snapshot: &AnalyticsSnapshot) -> Vec<BarView> {
    let max = snapshot
        .locations
        .iter()
        .map(|l| l.clicks)
        .max()
        .unwrap_or(0);

    snapshot
        .locations
        .iter()
        .map(|l| BarView {
            label: l.country,
            value: l.clicks,
            percent: bar_percent(l.clicks, max),
            share: Some(l.percentage),
        })
        .collect()
}
