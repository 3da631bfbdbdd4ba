use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

/// Minimum length in bytes of the HS256 signing secret.
pub const MIN_JWT_SECRET_LEN: usize = 32;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_ACCESS_TOKEN_MINUTES: i64 = 120;
const DEFAULT_REFRESH_TOKEN_DAYS: i64 = 7;
const DEFAULT_MEDIA_ROOT: &str = "media";
const DEFAULT_MEDIA_URL: &str = "/media/";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,

    pub host: String,
    pub port: u16,

    pub access_token_minutes: i64,
    pub refresh_token_days: i64,

    /// Directory that media files are served from.
    pub media_root: String,
    /// URL prefix prepended to stored media paths, always ending in `/`.
    pub media_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// `from_env` delegates here with `std::env::var`; tests pass a map instead of
    /// mutating the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required values present and every value parsed
    /// - `Err(AppError::ConfigErr)` - Missing required variable, unparsable value, or
    ///   a JWT secret shorter than `MIN_JWT_SECRET_LEN`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let jwt_secret = required("JWT_SECRET")?;
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::WeakJwtSecret {
                min: MIN_JWT_SECRET_LEN,
                actual: jwt_secret.len(),
            }
            .into());
        }

        let mut media_url = lookup("MEDIA_URL").unwrap_or_else(|| DEFAULT_MEDIA_URL.to_string());
        if !media_url.ends_with('/') {
            media_url.push('/');
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            access_token_minutes: parse_or(
                &lookup,
                "ACCESS_TOKEN_MINUTES",
                DEFAULT_ACCESS_TOKEN_MINUTES,
            )?,
            refresh_token_days: parse_or(&lookup, "REFRESH_TOKEN_DAYS", DEFAULT_REFRESH_TOKEN_DAYS)?,
            media_root: lookup("MEDIA_ROOT").unwrap_or_else(|| DEFAULT_MEDIA_ROOT.to_string()),
            media_url,
        })
    }

    /// Socket address string the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.clone(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    /// Expected: defaults applied when only required variables are set
    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", SECRET),
        ]))
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.access_token_minutes, 120);
        assert_eq!(config.refresh_token_days, 7);
        assert_eq!(config.media_root, "media");
        assert_eq!(config.media_url, "/media/");
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }

    /// Expected: Err(MissingEnvVar) naming DATABASE_URL
    #[test]
    fn fails_without_database_url() {
        let result = Config::from_lookup(lookup(&[("JWT_SECRET", SECRET)]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "DATABASE_URL"
        ));
    }

    /// Expected: Err(WeakJwtSecret) for a secret under 32 bytes
    #[test]
    fn rejects_short_secret() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "too-short"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::WeakJwtSecret { actual: 9, .. }))
        ));
    }

    /// Expected: Err(InvalidEnvVar) when PORT is not a number
    #[test]
    fn rejects_invalid_port() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", SECRET),
            ("PORT", "eighty"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }

    /// Expected: trailing slash appended to MEDIA_URL
    #[test]
    fn normalizes_media_url() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", SECRET),
            ("MEDIA_URL", "/static/media"),
        ]))
        .unwrap();

        assert_eq!(config.media_url, "/static/media/");
    }
}
