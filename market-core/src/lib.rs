pub mod client;
pub mod error;
pub mod transport;

pub use client::{ENDPOINT_REST, QueryClient};
pub use error::{ClientError, Result};
pub use transport::{HttpTransport, Transport};
