use chrono::{DateTime, Duration, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a hackathon relative to an instant.
///
/// Derived on demand from the date range, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum HackathonStatus {
    /// Starts after the instant
    Upcoming,
    /// Instant lies within `[start, end]` (both inclusive)
    Active,
    /// Ended before the instant
    Past,
}

impl HackathonStatus {
    /// Classify a date range against `now`.
    ///
    /// For a well-formed range (`start <= end`) exactly one status applies.
    pub fn classify(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if start > now {
            HackathonStatus::Upcoming
        } else if end < now {
            HackathonStatus::Past
        } else {
            HackathonStatus::Active
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HackathonStatus::Upcoming => "Upcoming",
            HackathonStatus::Active => "Active",
            HackathonStatus::Past => "Past",
        }
    }
}

impl fmt::Display for HackathonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schedule line shown on a hackathon card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    StartsIn(Duration),
    EndsIn(Duration),
    EndedOn(DateTime<Utc>),
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schedule::StartsIn(d) => write!(f, "Starts in {}", HumanDuration(*d)),
            Schedule::EndsIn(d) => write!(f, "Ends in {}", HumanDuration(*d)),
            Schedule::EndedOn(date) => write!(f, "Ended on {}", date.format("%-d %b %Y")),
        }
    }
}

/// Two most significant units of a duration ("2d 4h", "5h 12m", "7m")
struct HumanDuration(Duration);

impl fmt::Display for HumanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.0.num_minutes().max(0);
        let (days, hours, mins) = (minutes / (24 * 60), (minutes / 60) % 24, minutes % 60);

        if days > 0 {
            write!(f, "{}d {}h", days, hours)
        } else if hours > 0 {
            write!(f, "{}h {}m", hours, mins)
        } else if mins > 0 {
            write!(f, "{}m", mins)
        } else {
            f.write_str("less than a minute")
        }
    }
}
