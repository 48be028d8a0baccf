pub mod admin;
pub mod handlers;
pub mod query;
pub mod routes;

pub use routes::create_http_routes;
