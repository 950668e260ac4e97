//! UI components for the hackathon explorer

mod filter_card;
mod hackathon_card;
mod hackathons_section;
mod search_bar;
pub use filter_card::{FilterCard, FilterCardProps};
pub use hackathon_card::{HackathonCard, HackathonCardProps};
pub use hackathons_section::{HackathonsSection, HackathonsSectionProps};
pub use search_bar::{SearchBar, SearchBarProps};
