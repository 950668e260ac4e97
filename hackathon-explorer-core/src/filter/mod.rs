//! Search and toggle filtering over a hackathon list

pub mod engine;
pub mod options;

pub use engine::{filter_hackathons, HackathonFilter};
pub use options::{FilterOptions, LevelFlags, StatusFlag, StatusFlags};
