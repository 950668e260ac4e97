pub mod hackathon;
pub mod level;
pub mod status;

pub use hackathon::{Hackathon, HackathonError, HackathonId};
pub use level::Level;
pub use status::{HackathonStatus, Schedule};
