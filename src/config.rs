use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub football_api_base_url: String,
    pub football_api_key: String,
    pub jwt_secret: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub rate_limit_per_minute: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let database_url = required("DATABASE_URL")?;
        let football_api_base_url = std::env::var("FOOTBALL_API_BASE_URL")
            .unwrap_or_else(|_| "https://api-football-v1.p.rapidapi.com/v3".to_string());
        let football_api_key = required("FOOTBALL_API_KEY")?;
        let jwt_secret = required("JWT_SECRET")?;

        let port = parsed("PORT", 3001);
        let db_max_connections = parsed("DB_MAX_CONNECTIONS", 10);
        let rate_limit_per_minute = parsed("RATE_LIMIT_PER_MINUTE", 1000);

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            database_url,
            db_max_connections,
            football_api_base_url,
            football_api_key,
            jwt_secret,
            port,
            allowed_origins,
            rate_limit_per_minute,
        })
    }
}

fn required(key: &str) -> Result<String, AppError> {
    std::env::var(key).map_err(|_| AppError::EnvError(format!("{key} must be set")))
}

fn parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse::<T>().ok())
        .unwrap_or(default)
}
