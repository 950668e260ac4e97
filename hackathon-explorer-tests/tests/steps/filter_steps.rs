use cucumber::{then, when};
use hackathon_explorer_core::{FilterOptions, Level, StatusFlag};
use hackathon_explorer_tests::ExplorerWorld;

// ===== When Steps =====

#[when(expr = "I search for {string}")]
async fn search_for(world: &mut ExplorerWorld, text: String) {
    world.search = text;
}

#[when("I clear every filter")]
async fn clear_every_filter(world: &mut ExplorerWorld) {
    world.options = FilterOptions::none();
}

#[when(expr = "I toggle the {word} status filter")]
async fn toggle_status(world: &mut ExplorerWorld, label: String) {
    let flag = StatusFlag::ALL
        .into_iter()
        .find(|f| f.label() == label)
        .unwrap_or_else(|| panic!("Unknown status filter '{}'", label));

    world.options.toggle_status(flag);
}

#[when(expr = "I toggle the {word} level filter")]
async fn toggle_level(world: &mut ExplorerWorld, label: String) {
    let level: Level = label
        .parse()
        .unwrap_or_else(|e| panic!("Unknown level filter: {}", e));

    world.options.toggle_level(level);
}

// ===== Then Steps =====

#[then(expr = "I see {string}")]
async fn i_see(world: &mut ExplorerWorld, expected: String) {
    let expected: Vec<String> = expected.split(',').map(|s| s.trim().to_string()).collect();

    assert_eq!(world.visible(), expected);
}

#[then("I see every hackathon")]
async fn i_see_everything(world: &mut ExplorerWorld) {
    let all: Vec<String> = world.hackathons.iter().map(|h| h.name.clone()).collect();

    assert_eq!(world.visible(), all);
}

#[then("I see no hackathons")]
async fn i_see_nothing(world: &mut ExplorerWorld) {
    let visible = world.visible();

    assert!(visible.is_empty(), "Expected no hackathons, got {:?}", visible);
}
