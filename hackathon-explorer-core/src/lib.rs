//! # Hackathon Explorer Core
//!
//! Domain types, filtering and the read-only store behind the hackathon list.

pub mod config;
pub mod domain;
pub mod filter;
pub mod store;

pub use config::ExplorerConfig;
pub use domain::{Hackathon, HackathonError, HackathonId, HackathonStatus, Level, Schedule};
pub use filter::{
    filter_hackathons, FilterOptions, HackathonFilter, LevelFlags, StatusFlag, StatusFlags,
};
pub use store::{HackathonSource, HackathonStore, StoreError, StoreLoad};
