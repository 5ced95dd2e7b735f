//! Adventure list block.
//!
//! Reads a query link from the block, fetches the adventure list
//! anonymously and renders a thumbnail list. Any failure leaves the block
//! with no children at all.

use async_trait::async_trait;
use tracing::{debug, instrument};
use url::Url;

use crate::{
    application::{
        ApplicationError,
        ports::{Block, ContentClient, FetchRequest},
    },
    domain::{Adventure, Element, Node, QueryResponse, QuerySource, views},
    error::EdgeResult,
};

/// Block name as mounted by the host page.
pub const ADVENTURES_LIST_BLOCK: &str = "adventures-list";

/// Renders `adventures-list` blocks.
pub struct AdventureListBlock {
    client: Box<dyn ContentClient>,
    page_url: Option<Url>,
}

impl AdventureListBlock {
    pub fn new(client: Box<dyn ContentClient>) -> Self {
        Self {
            client,
            page_url: None,
        }
    }

    /// URL of the page hosting the block; relative links resolve against it.
    pub fn with_page_url(mut self, page_url: Url) -> Self {
        self.page_url = Some(page_url);
        self
    }

    /// Fetch and render. `Ok(None)` means the response held no items.
    pub async fn load(&self, block: &Element) -> EdgeResult<Option<Element>> {
        let source = QuerySource::from_block(block, self.page_url.as_ref())?;
        debug!(url = %source.url, image_host = %source.image_host, "Adventure query resolved");

        let adventures = self.fetch_adventures(&source.url).await?;
        if adventures.is_empty() {
            return Ok(None);
        }

        Ok(Some(views::adventure_list(&adventures, &source.image_host)))
    }

    /// Fetch the list. Missing `data.adventureList.items` is an empty list.
    pub async fn fetch_adventures(&self, url: &Url) -> EdgeResult<Vec<Adventure>> {
        let response = self
            .client
            .fetch(&FetchRequest::anonymous(url.clone()))
            .await?;

        if !response.is_success() {
            return Err(ApplicationError::UnexpectedStatus {
                url: url.to_string(),
                status: response.status,
            }
            .into());
        }

        let envelope = QueryResponse::from_slice(&response.body).map_err(|e| {
            ApplicationError::MalformedBody {
                url: url.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(envelope
            .into_items()
            .unwrap_or_default()
            .into_iter()
            .map(Adventure::from)
            .collect())
    }
}

#[async_trait]
impl Block for AdventureListBlock {
    fn name(&self) -> &'static str {
        ADVENTURES_LIST_BLOCK
    }

    #[instrument(skip_all, fields(block = ADVENTURES_LIST_BLOCK))]
    async fn decorate(&self, block: &mut Element) {
        match self.load(block).await {
            Ok(Some(list)) => {
                debug!(items = list.children().len(), "Adventure list rendered");
                block.replace_children([Node::from(list)]);
            }
            Ok(None) => {
                debug!("Adventure list empty");
                block.clear();
            }
            Err(e) => {
                debug!(error = %e, category = ?e.category(), "Adventure list unavailable");
                block.clear();
            }
        }
    }
}
