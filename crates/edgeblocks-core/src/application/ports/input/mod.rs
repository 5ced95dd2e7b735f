//! Driving (input) ports - called by the host page, implemented by services.

use async_trait::async_trait;

use crate::domain::Element;

/// A block the host page can decorate.
///
/// The host creates the block's container, fills it with the authored
/// content, and calls [`Block::decorate`] once. Decoration never fails: a
/// block that cannot load leaves an empty container behind.
#[async_trait]
pub trait Block: Send + Sync {
    /// Block name; the host mounts it as `div.<name>`.
    fn name(&self) -> &'static str;

    /// Replace the container's authored content with rendered markup.
    async fn decorate(&self, block: &mut Element);
}
