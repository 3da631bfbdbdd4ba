use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value could not be parsed.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        name: String,
        value: String,
        reason: String,
    },

    /// The JWT signing secret is shorter than the minimum length.
    #[error("JWT_SECRET must be at least {min} bytes long, got {actual}")]
    WeakJwtSecret { min: usize, actual: usize },
}
