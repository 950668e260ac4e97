mod use_click_outside;
mod use_hackathons;

pub use use_click_outside::use_click_outside;
pub use use_hackathons::{use_hackathons, HackathonContext};
