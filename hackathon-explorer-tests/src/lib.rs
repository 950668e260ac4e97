use chrono::{DateTime, Duration, Utc};
use cucumber::World;
use hackathon_explorer_core::{
    filter_hackathons, FilterOptions, Hackathon, HackathonSource, HackathonStatus, HackathonStore,
    Level, StoreError, StoreLoad,
};

#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct ExplorerWorld {
    /// Instant every status is evaluated against
    pub now: DateTime<Utc>,

    /// Hackathons known to the scenario, in insertion order
    pub hackathons: Vec<Hackathon>,

    pub search: String,

    pub options: FilterOptions,

    /// Raw JSON feed for store scenarios
    pub feed: Vec<serde_json::Value>,

    /// Outcome of the last feed load
    pub load_result: Option<Result<StoreLoad, StoreError>>,
}

impl ExplorerWorld {
    pub fn new() -> Self {
        Self {
            now: Utc::now(),
            hackathons: Vec::new(),
            search: String::new(),
            options: FilterOptions::default(),
            feed: Vec::new(),
            load_result: None,
        }
    }

    /// Add a hackathon whose date range puts it in `status` at `self.now`
    pub fn add_hackathon(
        &mut self,
        name: &str,
        description: &str,
        level: Level,
        status: HackathonStatus,
    ) {
        let (start, end) = match status {
            HackathonStatus::Upcoming => (Duration::days(1), Duration::days(2)),
            HackathonStatus::Active => (Duration::days(-1), Duration::days(1)),
            HackathonStatus::Past => (Duration::days(-3), Duration::days(-2)),
        };

        let hackathon = Hackathon::new(
            name.to_string(),
            description.to_string(),
            self.now + start,
            self.now + end,
            level,
        )
        .unwrap_or_else(|e| panic!("Invalid hackathon '{}': {}", name, e));

        self.hackathons.push(hackathon);
    }

    /// Names of the hackathons passing the current search and toggles
    pub fn visible(&self) -> Vec<String> {
        let store = HackathonStore::new(self.hackathons.clone());

        filter_hackathons(store.hackathons(), &self.search, &self.options, self.now)
            .into_iter()
            .map(|h| h.name.clone())
            .collect()
    }

    /// Load the collected feed into a store
    pub fn load_feed(&mut self) {
        let json = serde_json::Value::Array(self.feed.clone()).to_string();
        self.load_result = Some(HackathonStore::from_json(&json));
    }

    /// Result of the last load (panics if nothing was loaded)
    pub fn load_result(&self) -> &Result<StoreLoad, StoreError> {
        self.load_result.as_ref().expect("No feed loaded yet")
    }
}

impl Default for ExplorerWorld {
    fn default() -> Self {
        Self::new()
    }
}
