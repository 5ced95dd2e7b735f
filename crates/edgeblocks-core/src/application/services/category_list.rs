//! Category list block (content fragment list).
//!
//! Sequence for one decoration:
//! 1. Detect editor mode through the [`EmbeddingProbe`]
//! 2. In the editor, point the query at the author tier
//! 3. Append the cache killer and fetch with credentials
//! 4. Map items to [`Category`] cards and mount them in a wrapper
//!
//! Unlike the adventure list, a failed load still mounts the (empty)
//! `div.category-list` wrapper.

use async_trait::async_trait;
use tracing::{debug, instrument};
use url::Url;

use crate::{
    application::{
        ApplicationError,
        ports::{Block, Clock, ContentClient, EmbeddingProbe, FetchRequest},
    },
    domain::{
        Category, EditorMode, Element, Node, QueryResponse, parse_endpoint, to_author_endpoint,
        views, with_cache_killer,
    },
    error::EdgeResult,
};

/// Block name as mounted by the host page.
pub const CATEGORY_LIST_BLOCK: &str = "contentfragmentlist";

/// Renders `contentfragmentlist` blocks.
pub struct CategoryListBlock {
    client: Box<dyn ContentClient>,
    embedding: Box<dyn EmbeddingProbe>,
    clock: Box<dyn Clock>,
}

impl CategoryListBlock {
    pub fn new(
        client: Box<dyn ContentClient>,
        embedding: Box<dyn EmbeddingProbe>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            client,
            embedding,
            clock,
        }
    }

    pub fn editor_mode(&self) -> EditorMode {
        EditorMode::from_embedded(self.embedding.is_embedded())
    }

    /// The URL actually fetched for a persisted query in the given mode.
    pub fn request_url(&self, persisted_query: &str, mode: EditorMode) -> EdgeResult<Url> {
        let endpoint = parse_endpoint(persisted_query)?;
        let endpoint = if mode.is_editor() {
            to_author_endpoint(&endpoint)
        } else {
            endpoint
        };
        Ok(with_cache_killer(&endpoint, self.clock.now_millis()))
    }

    /// Fetch and map the categories behind a persisted query.
    ///
    /// The status code is not checked: whatever body comes back is decoded,
    /// and one without `data.adventureList.items` yields no categories.
    pub async fn fetch_categories(
        &self,
        persisted_query: &str,
        mode: EditorMode,
    ) -> EdgeResult<Vec<Category>> {
        let url = self.request_url(persisted_query, mode)?;
        debug!(url = %url, mode = %mode, "Category query resolved");

        let response = self
            .client
            .fetch(&FetchRequest::with_credentials(url.clone()))
            .await?;
        if !response.is_success() {
            debug!(status = response.status, "Category query returned non-success status");
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
            .map(|record| Category::from_record(record, mode))
            .collect())
    }
}

#[async_trait]
impl Block for CategoryListBlock {
    fn name(&self) -> &'static str {
        CATEGORY_LIST_BLOCK
    }

    #[instrument(skip_all, fields(block = CATEGORY_LIST_BLOCK))]
    async fn decorate(&self, block: &mut Element) {
        let mode = self.editor_mode();
        let persisted_query = block.text_content();

        let categories = match self.fetch_categories(&persisted_query, mode).await {
            Ok(categories) => categories,
            Err(e) => {
                debug!(error = %e, category = ?e.category(), "Category list unavailable");
                Vec::new()
            }
        };

        debug!(cards = categories.len(), "Category list rendered");
        block.replace_children([Node::from(views::category_list(&categories))]);
    }
}
