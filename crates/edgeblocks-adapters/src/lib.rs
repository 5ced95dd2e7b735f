//! Infrastructure adapters for edgeblocks.
//!
//! This crate implements the ports defined in `edgeblocks-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod clock;
pub mod embedding;
pub mod fixture;
pub mod http;

// Re-export commonly used adapters
pub use clock::{FixedClock, SystemClock};
pub use embedding::{AncestorOrigins, FixedEmbedding};
pub use fixture::StaticContentClient;
pub use http::{HttpClientConfig, HttpContentClient};
