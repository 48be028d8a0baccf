pub mod get;
pub mod patch;
pub mod put;

pub use get::{
    count_leagues, find_league_by_external_id, find_league_by_key, get_league,
    leagues_missing_slug, list_home_leagues, list_leagues_admin, list_leagues_for_country,
    list_public_home_leagues, list_sync_leagues,
};
pub use patch::{set_league_slug, update_league_home};
pub use put::{insert_minimal_league, upsert_league};
