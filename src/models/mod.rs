pub mod country;
pub mod fixture;
pub mod league;
pub mod league_config;
pub mod provider;
pub mod standings;
pub mod team;
pub mod user;

pub use user::User;
