pub mod get;
pub mod patch;
pub mod put;

pub use get::{count_teams, find_team_by_external_id, find_team_by_slug, teams_missing_slug};
pub use patch::set_team_slug;
pub use put::{insert_team, upsert_team};
