pub mod get;
pub mod patch;
pub mod put;

pub use get::{
    RepairScan, count_live_matches, count_matches_between, get_match_view, league_past,
    league_upcoming, list_live_matches, list_matches, list_repair_candidates, team_past,
    team_upcoming,
};
pub use patch::{update_fixture_result, update_fixture_status};
pub use put::upsert_fixture;
