//! Frame-embedding probes.

use edgeblocks_core::application::ports::EmbeddingProbe;

/// Ancestor origins as reported by the hosting browsing context, nearest
/// frame first. Empty for a top-level page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AncestorOrigins {
    origins: Vec<String>,
}

impl AncestorOrigins {
    pub fn new(origins: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            origins: origins.into_iter().map(Into::into).collect(),
        }
    }

    /// A top-level page: no ancestors.
    pub fn top_level() -> Self {
        Self::default()
    }

    pub fn origins(&self) -> &[String] {
        &self.origins
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }
}

impl EmbeddingProbe for AncestorOrigins {
    fn is_embedded(&self) -> bool {
        !self.origins.is_empty()
    }
}

/// Probe with a fixed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedEmbedding(pub bool);

impl EmbeddingProbe for FixedEmbedding {
    fn is_embedded(&self) -> bool {
        self.0
    }
}
