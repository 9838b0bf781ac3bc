use chrono::Duration;

/// Server configuration loaded from environment variables.
///
/// All fields except the auth secrets have sensible defaults suitable for
/// local development. In production, override via environment variables.
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
    /// Deployment environment. Only affects the token lifetime.
    pub environment: Environment,
    /// Login identity and token signing configuration.
    pub auth: AuthConfig,
}

/// Deployment environment, parsed from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
}

/// The single admin identity and the token signing material.
///
/// Injected at startup; nothing here lives in the record tables and no
/// credential is hardcoded in source.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub admin_email: String,
    pub admin_password: String,
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub jwt_secret: String,
    /// Token lifetime: 24 hours in production, 7 days otherwise.
    pub token_ttl: Duration,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Required | Default       |
    /// |------------------------|----------|---------------|
    /// | `HOST`                 | no       | `0.0.0.0`     |
    /// | `PORT`                 | no       | `3000`        |
    /// | `CORS_ORIGINS`         | no       | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | no       | `30`          |
    /// | `APP_ENV`              | no       | `development` |
    /// | `ADMIN_EMAIL`          | **yes**  | --            |
    /// | `ADMIN_PASSWORD`       | **yes**  | --            |
    /// | `JWT_SECRET`           | **yes**  | --            |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing or a numeric one is
    /// malformed; misconfiguration should fail fast at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let environment = match std::env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        let auth = AuthConfig::from_env(environment);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            environment,
            auth,
        }
    }
}

impl AuthConfig {
    /// Load the admin identity and signing secret from the environment.
    ///
    /// # Panics
    ///
    /// Panics if `ADMIN_EMAIL`, `ADMIN_PASSWORD`, or `JWT_SECRET` is unset
    /// or empty.
    pub fn from_env(environment: Environment) -> Self {
        let admin_email =
            std::env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL must be set in the environment");
        assert!(!admin_email.is_empty(), "ADMIN_EMAIL must not be empty");

        let admin_password =
            std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set in the environment");
        assert!(!admin_password.is_empty(), "ADMIN_PASSWORD must not be empty");

        let jwt_secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!jwt_secret.is_empty(), "JWT_SECRET must not be empty");

        Self {
            admin_email,
            admin_password,
            jwt_secret,
            token_ttl: token_ttl_for(environment),
        }
    }
}

/// Long-lived development tokens avoid constant re-login while testing.
fn token_ttl_for(environment: Environment) -> Duration {
    match environment {
        Environment::Production => Duration::hours(24),
        Environment::Development => Duration::days(7),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_tokens_live_one_day() {
        assert_eq!(token_ttl_for(Environment::Production), Duration::hours(24));
    }

    #[test]
    fn test_development_tokens_live_one_week() {
        assert_eq!(token_ttl_for(Environment::Development), Duration::days(7));
    }
}
