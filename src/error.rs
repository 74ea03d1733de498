use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the dashboard
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(barbearia::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(barbearia::config))]
    Config(String),

    #[error("API error: {0}")]
    #[diagnostic(code(barbearia::api))]
    Api(String),

    #[error("{0}")]
    #[diagnostic(code(barbearia::validation))]
    Validation(String),

    #[error("Invalid status transition from {from} to {to}")]
    #[diagnostic(
        code(barbearia::invalid_transition),
        help("Completed and canceled appointments cannot change status")
    )]
    InvalidTransition { from: String, to: String },

    #[error("CSV error: {0}")]
    #[diagnostic(code(barbearia::csv))]
    Csv(String),

    #[error(transparent)]
    #[diagnostic(code(barbearia::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(barbearia::serialization))]
    Serialization(String),

    #[error("Component error: {0}")]
    #[diagnostic(code(barbearia::component))]
    Component(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(barbearia::other))]
    Other(String),
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type DashboardResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create API errors
pub fn api_error(message: &str) -> Error {
    Error::Api(message.to_string())
}

/// Helper to create validation errors
pub fn validation_error(message: &str) -> Error {
    Error::Validation(message.to_string())
}

/// Helper to create component errors
pub fn component_error(message: &str) -> Error {
    Error::Component(message.to_string())
}
