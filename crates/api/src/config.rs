use flowpilot_agent::AgentConfig;

/// Server configuration loaded from environment variables.
///
/// Everything except the agent credentials has a default suitable for
/// local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `60`).
    ///
    /// Must exceed the agent timeout so chat calls fail with the agent's
    /// own 504 rather than the server-wide 408.
    pub request_timeout_secs: u64,
    /// Application name reported by `/health` and `/`.
    pub app_name: String,
    /// Application version reported by `/health` and `/`.
    pub app_version: String,
    /// Remote agent connection settings.
    pub agent: AgentConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                       |
    /// |------------------------|-----------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                     |
    /// | `PORT`                 | `8000`                                        |
    /// | `CORS_ORIGINS`         | `http://localhost:3000,http://localhost:8000` |
    /// | `REQUEST_TIMEOUT_SECS` | `60`                                          |
    /// | `APP_NAME`             | `FlowPilot Backend`                           |
    /// | `APP_VERSION`          | crate version                                 |
    ///
    /// Agent settings are read by [`AgentConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000,http://localhost:8000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let app_name = std::env::var("APP_NAME").unwrap_or_else(|_| "FlowPilot Backend".into());
        let app_version =
            std::env::var("APP_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").into());

        let agent = AgentConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            app_name,
            app_version,
            agent,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
