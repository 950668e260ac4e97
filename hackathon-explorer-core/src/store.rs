use crate::domain::{Hackathon, HackathonError, HackathonId};
use std::collections::HashSet;
use std::sync::Arc;

/// Read-only access to a list of hackathons
pub trait HackathonSource {
    fn hackathons(&self) -> &[Hackathon];
}

/// Errors raised while populating a store
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("Failed to parse hackathon feed: {0}")]
    Parse(String),

    #[error("Invalid hackathon {id}: {source}")]
    Invalid {
        id: HackathonId,
        #[source]
        source: HackathonError,
    },

    #[error("Duplicate hackathon id: {0}")]
    DuplicateId(HackathonId),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Parse(e.to_string())
    }
}

/// Immutable, validated list of hackathons.
///
/// Clones share the same backing slice.
#[derive(Debug, Clone, PartialEq)]
pub struct HackathonStore {
    hackathons: Arc<[Hackathon]>,
}

/// Outcome of populating a store: the accepted records plus every rejection
#[derive(Debug, Clone, PartialEq)]
pub struct StoreLoad {
    pub store: HackathonStore,
    pub rejected: Vec<StoreError>,
}

impl HackathonStore {
    /// Build a store from the valid records, dropping the rest
    pub fn new(hackathons: Vec<Hackathon>) -> Self {
        Self::load(hackathons).store
    }

    /// Build a store, skipping invalid records and repeated ids.
    ///
    /// The first record with a given id wins. Input order is kept.
    pub fn load(hackathons: Vec<Hackathon>) -> StoreLoad {
        let mut seen = HashSet::with_capacity(hackathons.len());
        let mut accepted = Vec::with_capacity(hackathons.len());
        let mut rejected = Vec::new();

        for hackathon in hackathons {
            if let Err(source) = hackathon.validate() {
                tracing::warn!("Skipping hackathon '{}': {}", hackathon.name, source);
                rejected.push(StoreError::Invalid {
                    id: hackathon.id,
                    source,
                });
                continue;
            }

            if !seen.insert(hackathon.id) {
                tracing::warn!("Skipping duplicate hackathon id {}", hackathon.id);
                rejected.push(StoreError::DuplicateId(hackathon.id));
                continue;
            }

            accepted.push(hackathon);
        }

        StoreLoad {
            store: Self {
                hackathons: accepted.into(),
            },
            rejected,
        }
    }

    /// Decode a JSON array of hackathon records.
    ///
    /// Fails only when the feed itself cannot be decoded.
    pub fn from_json(json: &str) -> Result<StoreLoad, StoreError> {
        let hackathons: Vec<Hackathon> = serde_json::from_str(json)?;
        Ok(Self::load(hackathons))
    }

    pub fn empty() -> Self {
        Self {
            hackathons: Arc::from(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.hackathons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hackathons.is_empty()
    }

    pub fn get(&self, id: HackathonId) -> Option<&Hackathon> {
        self.hackathons.iter().find(|h| h.id == id)
    }
}

impl HackathonSource for HackathonStore {
    fn hackathons(&self) -> &[Hackathon] {
        &self.hackathons
    }
}

impl Default for HackathonStore {
    fn default() -> Self {
        Self::empty()
    }
}
