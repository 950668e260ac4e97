use cucumber::given;
use hackathon_explorer_core::{HackathonStatus, Level};
use hackathon_explorer_tests::ExplorerWorld;

fn parse_status(status: &str) -> HackathonStatus {
    match status {
        "active" => HackathonStatus::Active,
        "upcoming" => HackathonStatus::Upcoming,
        "past" => HackathonStatus::Past,
        other => panic!("Unknown status '{}'", other),
    }
}

fn parse_level(level: &str) -> Level {
    level
        .parse()
        .unwrap_or_else(|e| panic!("Bad level in scenario: {}", e))
}

// ===== Given Steps =====

#[given(regex = r#"^an? (active|upcoming|past) (Easy|Medium|Hard) hackathon named "([^"]*)"$"#)]
async fn hackathon_named(world: &mut ExplorerWorld, status: String, level: String, name: String) {
    world.add_hackathon(&name, "", parse_level(&level), parse_status(&status));
}

#[given(
    regex = r#"^an? (active|upcoming|past) (Easy|Medium|Hard) hackathon named "([^"]*)" described as "([^"]*)"$"#
)]
async fn hackathon_with_description(
    world: &mut ExplorerWorld,
    status: String,
    level: String,
    name: String,
    description: String,
) {
    world.add_hackathon(&name, &description, parse_level(&level), parse_status(&status));
}
