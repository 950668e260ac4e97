mod hackathon_provider;

pub use hackathon_provider::{HackathonProvider, HackathonProviderProps};
