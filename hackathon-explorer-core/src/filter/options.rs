use crate::domain::{HackathonStatus, Level};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Toggle addressing one flag of the status group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum StatusFlag {
    All,
    Active,
    Upcoming,
    Past,
}

impl StatusFlag {
    /// All status toggles, in display order
    pub const ALL: [StatusFlag; 4] = [
        StatusFlag::All,
        StatusFlag::Active,
        StatusFlag::Upcoming,
        StatusFlag::Past,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFlag::All => "All",
            StatusFlag::Active => "Active",
            StatusFlag::Upcoming => "Upcoming",
            StatusFlag::Past => "Past",
        }
    }
}

/// Status toggle group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct StatusFlags {
    pub all: bool,
    pub active: bool,
    pub upcoming: bool,
    pub past: bool,
}

impl StatusFlags {
    pub fn new(all: bool, active: bool, upcoming: bool, past: bool) -> Self {
        Self {
            all,
            active,
            upcoming,
            past,
        }
    }

    /// Whether the group restricts anything at all
    pub fn any(&self) -> bool {
        self.all || self.active || self.upcoming || self.past
    }

    pub fn get(&self, flag: StatusFlag) -> bool {
        match flag {
            StatusFlag::All => self.all,
            StatusFlag::Active => self.active,
            StatusFlag::Upcoming => self.upcoming,
            StatusFlag::Past => self.past,
        }
    }

    pub fn set(&mut self, flag: StatusFlag, value: bool) {
        match flag {
            StatusFlag::All => self.all = value,
            StatusFlag::Active => self.active = value,
            StatusFlag::Upcoming => self.upcoming = value,
            StatusFlag::Past => self.past = value,
        }
    }

    /// Status predicate for a classified hackathon.
    ///
    /// `all` passes every status, and an empty group passes vacuously.
    pub fn admits(&self, status: HackathonStatus) -> bool {
        if !self.any() {
            return true;
        }

        self.all
            || match status {
                HackathonStatus::Active => self.active,
                HackathonStatus::Upcoming => self.upcoming,
                HackathonStatus::Past => self.past,
            }
    }
}

impl Default for StatusFlags {
    fn default() -> Self {
        Self::new(true, true, true, true)
    }
}

/// Level toggle group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct LevelFlags {
    pub easy: bool,
    pub medium: bool,
    pub hard: bool,
}

impl LevelFlags {
    pub fn new(easy: bool, medium: bool, hard: bool) -> Self {
        Self { easy, medium, hard }
    }

    pub fn any(&self) -> bool {
        self.easy || self.medium || self.hard
    }

    pub fn get(&self, level: Level) -> bool {
        match level {
            Level::Easy => self.easy,
            Level::Medium => self.medium,
            Level::Hard => self.hard,
        }
    }

    pub fn set(&mut self, level: Level, value: bool) {
        match level {
            Level::Easy => self.easy = value,
            Level::Medium => self.medium = value,
            Level::Hard => self.hard = value,
        }
    }

    /// Level predicate; an empty group passes vacuously
    pub fn admits(&self, level: Level) -> bool {
        !self.any() || self.get(level)
    }
}

impl Default for LevelFlags {
    fn default() -> Self {
        Self::new(true, true, true)
    }
}

/// Filter toggles for the hackathon list
///
/// Every flag starts out set. Flags are independent of each other; nothing
/// keeps `All` consistent with the individual statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct FilterOptions {
    pub status: StatusFlags,
    pub level: LevelFlags,
}

impl FilterOptions {
    /// Options with every flag cleared (no group restricts anything)
    pub fn none() -> Self {
        Self {
            status: StatusFlags::new(false, false, false, false),
            level: LevelFlags::new(false, false, false),
        }
    }

    pub fn is_status_set(&self, flag: StatusFlag) -> bool {
        self.status.get(flag)
    }

    pub fn is_level_set(&self, level: Level) -> bool {
        self.level.get(level)
    }

    pub fn toggle_status(&mut self, flag: StatusFlag) {
        let current = self.status.get(flag);
        self.status.set(flag, !current);
    }

    pub fn toggle_level(&mut self, level: Level) {
        let current = self.level.get(level);
        self.level.set(level, !current);
    }

    pub fn with_status(mut self, flag: StatusFlag, value: bool) -> Self {
        self.status.set(flag, value);
        self
    }

    pub fn with_level(mut self, level: Level, value: bool) -> Self {
        self.level.set(level, value);
        self
    }
}
