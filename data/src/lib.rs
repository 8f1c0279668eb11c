pub mod config;
pub mod error;
pub mod order;
pub mod params;
pub mod request;

pub use error::{ConfigError, DataError, Result};
pub use params::{ParamValue, Params};
