//! Application ports (traits) for external dependencies.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ContentClient`: Fetching persisted query results
//!   - `EmbeddingProbe`: Editor (iframe) detection
//!   - `Clock`: Timestamps for cache busting
//!
//! - **Driving (Input) Ports**: Called by the host page, implemented by services
//!   - `Block`: Decorate a mounted container

pub mod input;
pub mod output;

pub use input::Block;
pub use output::{Clock, ContentClient, Credentials, EmbeddingProbe, FetchRequest, FetchResponse};
