pub mod delete;
pub mod get;
pub mod post;
pub mod put;

pub use delete::delete_league_config;
pub use get::{get_league_config, list_league_configs};
pub use post::create_league_config;
pub use put::update_league_config;
