pub mod get;
pub mod post;
pub mod put;

pub use get::{find_user_by_email, get_user, list_users};
pub use post::create_user;
pub use put::update_user;
