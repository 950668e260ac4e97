//! # Hackathon Explorer Yew Components
//!
//! Yew views for browsing, searching and filtering hackathons.

pub mod app;
pub mod components;
pub mod hooks;
pub mod providers;

// Re-exports for convenience
pub use app::App;
pub use components::{FilterCard, HackathonCard, HackathonsSection, SearchBar};
pub use hooks::{use_click_outside, use_hackathons, HackathonContext};
pub use providers::{HackathonProvider, HackathonProviderProps};
