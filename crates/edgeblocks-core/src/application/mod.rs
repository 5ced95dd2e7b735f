//! Application layer for edgeblocks.
//!
//! This layer contains:
//! - **Services**: One block renderer per service
//! - **Ports**: Interface definitions (traits) for the page and the network
//! - **Errors**: Application-specific error types
//!
//! Mapping and markup rules live in `crate::domain`; services only sequence
//! them around the single fetch each decoration performs.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ADVENTURES_LIST_BLOCK, AdventureListBlock, CATEGORY_LIST_BLOCK, CategoryListBlock,
};

pub use ports::{Block, Clock, ContentClient, Credentials, EmbeddingProbe, FetchRequest, FetchResponse};

pub use error::ApplicationError;
