use sqlx::PgPool;
use std::sync::Arc;

use crate::{config::AppConfig, provider::FootballProvider};

#[derive(Clone)]
pub struct AppState {
    pub postgres: PgPool,
    pub provider: Arc<dyn FootballProvider>,
    pub config: Arc<AppConfig>,
}
