//! Domain value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

// ── EditorMode ───────────────────────────────────────────────────────────────

/// Whether a block renders for the in-context editor or the published site.
///
/// The editor loads the published page inside an iframe, so the mode is
/// derived from whether the page sees at least one ancestor frame. That is a
/// heuristic: any embedding frame counts as the editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    #[default]
    Published,
    Editor,
}

impl EditorMode {
    pub const fn from_embedded(embedded: bool) -> Self {
        if embedded { Self::Editor } else { Self::Published }
    }

    pub const fn is_editor(&self) -> bool {
        matches!(self, Self::Editor)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Editor => "editor",
        }
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
