use crate::domain::Hackathon;
use crate::filter::FilterOptions;
use chrono::{DateTime, Utc};

/// Search text plus toggles, applied to one hackathon at a time
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HackathonFilter {
    /// Lowercased search text
    needle: String,
    options: FilterOptions,
}

impl HackathonFilter {
    pub fn new(search: &str, options: FilterOptions) -> Self {
        Self {
            needle: search.to_lowercase(),
            options,
        }
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Whether `hackathon` survives every active filter at `now`.
    ///
    /// Checks run text, status, level and stop at the first failure.
    pub fn matches(&self, hackathon: &Hackathon, now: DateTime<Utc>) -> bool {
        if !self.needle.is_empty() && !hackathon.mentions(&self.needle) {
            return false;
        }

        if !self.options.status.admits(hackathon.status_at(now)) {
            return false;
        }

        self.options.level.admits(hackathon.level)
    }

    /// Matching hackathons in their original order
    pub fn apply<'a>(&self, hackathons: &'a [Hackathon], now: DateTime<Utc>) -> Vec<&'a Hackathon> {
        let matching: Vec<&Hackathon> = hackathons
            .iter()
            .filter(|h| self.matches(h, now))
            .collect();

        tracing::debug!(
            "Filtered hackathons: {} -> {} (search: {:?})",
            hackathons.len(),
            matching.len(),
            self.needle
        );

        matching
    }
}

/// Filter `hackathons` by search text and toggles at `now`.
///
/// Returns an order-preserving subsequence of the input.
pub fn filter_hackathons<'a>(
    hackathons: &'a [Hackathon],
    search: &str,
    options: &FilterOptions,
    now: DateTime<Utc>,
) -> Vec<&'a Hackathon> {
    HackathonFilter::new(search, *options).apply(hackathons, now)
}
