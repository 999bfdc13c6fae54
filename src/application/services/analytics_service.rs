//! Analytics dashboard figures.

use crate::domain::entities::{AnalyticsSnapshot, CountryClicks, DailyClicks, StatCard, TopUrl};

/// Serves the analytics dashboard content.
///
/// All figures are fixed illustrative values. They are not derived from the
/// links created in any session and are not exported as metrics.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Returns the dashboard figures.
    pub fn snapshot(&self) -> AnalyticsSnapshot {
        AnalyticsSnapshot {
            stats: vec![
                StatCard {
                    title: "Total Clicks",
                    value: "2,847",
                    change: "+12.5%",
                },
                StatCard {
                    title: "Unique Visitors",
                    value: "1,924",
                    change: "+8.2%",
                },
                StatCard {
                    title: "Countries",
                    value: "23",
                    change: "+3",
                },
                StatCard {
                    title: "CTR",
                    value: "3.2%",
                    change: "+0.8%",
                },
            ],
            clicks_over_time: [
                ("Mon", 65),
                ("Tue", 89),
                ("Wed", 103),
                ("Thu", 78),
                ("Fri", 156),
                ("Sat", 134),
                ("Sun", 98),
            ]
            .into_iter()
            .map(|(day, clicks)| DailyClicks { day, clicks })
            .collect(),
            locations: [
                ("United States", 342, 45),
                ("United Kingdom", 156, 20),
                ("Canada", 98, 13),
                ("Germany", 76, 10),
                ("Others", 89, 12),
            ]
            .into_iter()
            .map(|(country, clicks, percentage)| CountryClicks {
                country,
                clicks,
                percentage,
            })
            .collect(),
            top_urls: vec![
                TopUrl {
                    url: "short.ly/abc123",
                    original: "https://example.com/product-launch",
                    clicks: 456,
                    ctr: "3.8%",
                },
                TopUrl {
                    url: "short.ly/def456",
                    original: "https://blog.example.com/article",
                    clicks: 323,
                    ctr: "2.9%",
                },
                TopUrl {
                    url: "short.ly/ghi789",
                    original: "https://example.com/signup",
                    clicks: 234,
                    ctr: "4.2%",
                },
            ],
        }
    }
}
