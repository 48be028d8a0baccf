pub mod get;
pub mod patch;
pub mod put;

pub use get::{
    count_countries, countries_missing_slug, find_country_by_code, find_country_by_name,
    first_country, get_country, list_countries_admin, list_home_countries,
};
pub use patch::{set_country_slug, update_country_home};
pub use put::{ensure_country, upsert_country};
