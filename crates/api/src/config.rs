use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT validation configuration.
    pub jwt: JwtConfig,
    /// Base URL of the external dealer/review backend.
    pub dealer_backend_url: String,
    /// Base URL of the external sentiment analyzer.
    pub sentiment_analyzer_url: String,
    /// Populate the starter inventory on boot when the database is empty.
    pub seed_on_startup: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                    |
    /// |--------------------------|----------------------------|
    /// | `HOST`                   | `0.0.0.0`                  |
    /// | `PORT`                   | `3000`                     |
    /// | `CORS_ORIGINS`           | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                       |
    /// | `DEALER_BACKEND_URL`     | `http://localhost:3030`    |
    /// | `SENTIMENT_ANALYZER_URL` | `http://localhost:5050`    |
    /// | `SEED_ON_STARTUP`        | `false`                    |
    ///
    /// See [`JwtConfig::from_env`] for the JWT variables.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let dealer_backend_url = std::env::var("DEALER_BACKEND_URL")
            .unwrap_or_else(|_| "http://localhost:3030".into());

        let sentiment_analyzer_url = std::env::var("SENTIMENT_ANALYZER_URL")
            .unwrap_or_else(|_| "http://localhost:5050".into());

        let seed_on_startup: bool = std::env::var("SEED_ON_STARTUP")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("SEED_ON_STARTUP must be 'true' or 'false'");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            dealer_backend_url,
            sentiment_analyzer_url,
            seed_on_startup,
        }
    }
}
