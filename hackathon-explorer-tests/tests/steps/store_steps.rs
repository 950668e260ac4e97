use cucumber::{given, then, when};
use hackathon_explorer_core::{HackathonError, HackathonSource, StoreError};
use hackathon_explorer_tests::ExplorerWorld;
use serde_json::json;
use uuid::Uuid;

fn feed_entry(id: Uuid, name: &str, start: &str, end: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{} description", name),
        "startDate": start,
        "endDate": end,
        "level": "Medium",
    })
}

// ===== Given Steps =====

#[given(expr = "a feed with {int} valid hackathons")]
async fn feed_with_valid(world: &mut ExplorerWorld, count: usize) {
    for i in 0..count {
        world.feed.push(feed_entry(
            Uuid::new_v4(),
            &format!("Hackathon {}", i + 1),
            "2024-03-10T09:00:00Z",
            "2024-03-12T18:00:00Z",
        ));
    }
}

#[given(expr = "a feed hackathon starting {string} and ending {string}")]
async fn feed_with_dates(world: &mut ExplorerWorld, start: String, end: String) {
    world
        .feed
        .push(feed_entry(Uuid::new_v4(), "Odd Dates", &start, &end));
}

#[given("a feed where two hackathons share an id")]
async fn feed_with_duplicate(world: &mut ExplorerWorld) {
    let id = Uuid::new_v4();
    for name in ["First", "Second"] {
        world.feed.push(feed_entry(
            id,
            name,
            "2024-03-10T09:00:00Z",
            "2024-03-12T18:00:00Z",
        ));
    }
}

// ===== When Steps =====

#[when("the feed is loaded")]
async fn load_feed(world: &mut ExplorerWorld) {
    world.load_feed();
}

// ===== Then Steps =====

#[then(expr = "the store holds {int} hackathons")]
async fn store_holds(world: &mut ExplorerWorld, count: usize) {
    match world.load_result() {
        Ok(loaded) => assert_eq!(loaded.store.hackathons().len(), count),
        Err(e) => panic!("Expected feed to load, got: {}", e),
    }
}

#[then("loading fails with a parse error")]
async fn fails_with_parse_error(world: &mut ExplorerWorld) {
    assert!(
        matches!(world.load_result(), Err(StoreError::Parse(_))),
        "Expected parse error, got {:?}",
        world.load_result()
    );
}

#[then("one hackathon is skipped because it ends before it starts")]
async fn skipped_reversed_range(world: &mut ExplorerWorld) {
    let rejected = rejected(world);

    assert_eq!(rejected.len(), 1, "Expected one rejection, got {:?}", rejected);
    assert!(matches!(
        rejected[0],
        StoreError::Invalid {
            source: HackathonError::InvalidDateRange { .. },
            ..
        }
    ));
}

#[then("one hackathon is skipped as a duplicate id")]
async fn skipped_duplicate(world: &mut ExplorerWorld) {
    let rejected = rejected(world);

    assert_eq!(rejected.len(), 1, "Expected one rejection, got {:?}", rejected);
    assert!(matches!(rejected[0], StoreError::DuplicateId(_)));
}

fn rejected(world: &ExplorerWorld) -> &[StoreError] {
    match world.load_result() {
        Ok(loaded) => &loaded.rejected,
        Err(e) => panic!("Expected feed to load, got: {}", e),
    }
}
