use data::DataError;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectivityError {
    #[error("network error: {0}")]
    Network(reqwest::Error),

    #[error("http status {status}: body {body}")]
    Status { status: StatusCode, body: String },
}

/// The request url carries the account key in its query, so it is dropped
/// before the error can be shown anywhere.
impl From<reqwest::Error> for ConnectivityError {
    fn from(err: reqwest::Error) -> Self {
        ConnectivityError::Network(err.without_url())
    }
}

/// Request encode / response decode error
#[derive(Debug, Error)]
pub enum MessageCodecError {
    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("urlencode error: {0}")]
    SerdeUrl(#[from] serde_urlencoded::ser::Error),
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Connectivity(#[from] ConnectivityError),

    #[error(transparent)]
    MessageCodec(#[from] MessageCodecError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error("client initialization failed: {0}")]
    ClientInitialization(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Connectivity(ConnectivityError::from(err))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::MessageCodec(MessageCodecError::Serde(err))
    }
}

impl From<serde_urlencoded::ser::Error> for ClientError {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        ClientError::MessageCodec(MessageCodecError::SerdeUrl(err))
    }
}

pub type Error = ClientError;
pub type Result<T> = std::result::Result<T, ClientError>;
