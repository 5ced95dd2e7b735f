//! edgeblocks Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers for two content-list blocks of an
//! edge-delivered site: the adventure list and the category (content
//! fragment) list.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │     host page / edgeblocks-cli          │
//! │     (mounts blocks, calls decorate)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (AdventureListBlock, CategoryListBlock) │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (ContentClient, EmbeddingProbe, Clock)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     edgeblocks-adapters (Infra)         │
//! │ (HttpContentClient, AncestorOrigins..)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (QueryResponse, Category, Element)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use edgeblocks_core::prelude::*;
//!
//! # async fn run(client: Box<dyn ContentClient>) {
//! let mut block = Element::block(ADVENTURES_LIST_BLOCK)
//!     .child(Element::new("a").attr("href", "https://publish-p1.example.com/graphql/execute.json/wknd/adventures"));
//!
//! AdventureListBlock::new(client).decorate(&mut block).await;
//! println!("{}", block.to_html());
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ADVENTURES_LIST_BLOCK, AdventureListBlock, CATEGORY_LIST_BLOCK, CategoryListBlock,
        ports::{
            Block, Clock, ContentClient, Credentials, EmbeddingProbe, FetchRequest, FetchResponse,
        },
    };
    pub use crate::domain::{Adventure, Category, EditorMode, Element, Node};
    pub use crate::error::{EdgeError, EdgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
