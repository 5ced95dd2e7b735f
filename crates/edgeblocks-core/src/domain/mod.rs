//! Core domain layer for edgeblocks.
//!
//! Pure logic: query envelope decoding, entity mapping, URL rewriting and
//! markup. No I/O and no async; fetching, frame detection and time are
//! reached through ports in the application layer.

pub mod entities;
pub mod error;
pub mod markup;
pub mod query;
pub mod urls;
pub mod value_objects;
pub mod views;

pub use entities::{Adventure, CallToAction, Category, CategoryImage, resolve_image_url};
pub use error::{DomainError, ErrorCategory};
pub use markup::{Attribute, Element, Node};
pub use query::{AdventureRecord, ImageRecord, PlainText, QueryResponse};
pub use urls::{
    CACHE_KILLER_PARAM, QuerySource, parse_endpoint, published_image_url, to_author_endpoint,
    with_cache_killer,
};
pub use value_objects::EditorMode;
