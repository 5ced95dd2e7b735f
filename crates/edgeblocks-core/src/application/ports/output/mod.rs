//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits stand in for the browser state the blocks would otherwise
//! reach for directly. The `edgeblocks-adapters` crate provides
//! implementations.

use async_trait::async_trait;
use url::Url;

use crate::error::EdgeResult;

/// Whether cookies and authorization travel with a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Credentials {
    /// Anonymous request.
    #[default]
    Omit,
    /// Send the session's credentials; needed for access-controlled tiers.
    Include,
}

/// A single GET against the content API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: Url,
    pub credentials: Credentials,
}

impl FetchRequest {
    pub fn anonymous(url: Url) -> Self {
        Self {
            url,
            credentials: Credentials::Omit,
        }
    }

    pub fn with_credentials(url: Url) -> Self {
        Self {
            url,
            credentials: Credentials::Include,
        }
    }
}

/// Status and raw body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Port for fetching from the content API.
///
/// Implemented by:
/// - `edgeblocks_adapters::HttpContentClient` (production, reqwest)
/// - `edgeblocks_adapters::StaticContentClient` (fixtures and tests)
///
/// Returns `Err` only when no response was obtained. Non-success statuses
/// are a normal [`FetchResponse`]; each block decides what they mean.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentClient: Send + Sync {
    async fn fetch(&self, request: &FetchRequest) -> EdgeResult<FetchResponse>;
}

/// Port answering "is this page embedded in another frame?".
///
/// Implemented by:
/// - `edgeblocks_adapters::AncestorOrigins` (origins reported by the host)
/// - `edgeblocks_adapters::FixedEmbedding` (fixed answer)
#[cfg_attr(test, mockall::automock)]
pub trait EmbeddingProbe: Send + Sync {
    /// True when the page is loaded inside at least one iframe boundary
    /// visible to the script's security context.
    fn is_embedded(&self) -> bool;
}

/// Port for wall-clock time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}
