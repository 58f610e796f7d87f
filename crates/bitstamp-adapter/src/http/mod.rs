/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod gateway;
pub mod private;
pub mod public;
pub mod signature;

pub use client::{BitstampClient, Credentials};
pub use error::{BitstampError, Result};
pub use gateway::{ClientConfig, Gateway};
pub use signature::{NonceSource, RequestSigner};
