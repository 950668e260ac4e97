use crate::domain::{HackathonStatus, Level, Schedule};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hackathon ID (unique within a store)
pub type HackathonId = Uuid;

/// A single hackathon listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Hackathon {
    pub id: HackathonId,

    pub name: String,

    pub description: String,

    pub start_date: DateTime<Utc>,

    pub end_date: DateTime<Utc>,

    pub level: Level,

    /// Card artwork URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Errors for malformed hackathon records
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum HackathonError {
    #[error("Hackathon name cannot be empty")]
    EmptyName,

    #[error("Hackathon ends ({end}) before it starts ({start})")]
    InvalidDateRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Unknown level: {0}")]
    UnknownLevel(String),
}

impl Hackathon {
    /// Create a new hackathon with a random ID
    pub fn new(
        name: String,
        description: String,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        level: Level,
    ) -> Result<Self, HackathonError> {
        Self::with_id(Uuid::new_v4(), name, description, start_date, end_date, level)
    }

    /// Create with a specific ID
    pub fn with_id(
        id: HackathonId,
        name: String,
        description: String,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        level: Level,
    ) -> Result<Self, HackathonError> {
        let hackathon = Self {
            id,
            name,
            description,
            start_date,
            end_date,
            level,
            image: None,
        };
        hackathon.validate()?;
        Ok(hackathon)
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Check the invariants a decoded record may violate
    pub fn validate(&self) -> Result<(), HackathonError> {
        if self.name.trim().is_empty() {
            return Err(HackathonError::EmptyName);
        }

        if self.end_date < self.start_date {
            return Err(HackathonError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }

        Ok(())
    }

    pub fn status_at(&self, now: DateTime<Utc>) -> HackathonStatus {
        HackathonStatus::classify(self.start_date, self.end_date, now)
    }

    pub fn schedule_at(&self, now: DateTime<Utc>) -> Schedule {
        match self.status_at(now) {
            HackathonStatus::Upcoming => Schedule::StartsIn(self.start_date - now),
            HackathonStatus::Active => Schedule::EndsIn(self.end_date - now),
            HackathonStatus::Past => Schedule::EndedOn(self.end_date),
        }
    }

    /// Case-insensitive substring match on name or description.
    ///
    /// `needle` must already be lowercased.
    pub fn mentions(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
