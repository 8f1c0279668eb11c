use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unknown location: {0}")]
    UnknownLocation(String),
}

impl From<toml::de::Error> for DataError {
    fn from(err: toml::de::Error) -> Self {
        DataError::Config(ConfigError::from(err))
    }
}

/// All errors related to credential loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("service '{name}' not found in credentials store")]
    ServiceNotFound { name: String },

    #[error("credential field '{field}' is missing or empty")]
    MissingField { field: &'static str },
}

pub type Error = DataError;
pub type Result<T> = std::result::Result<T, DataError>;
