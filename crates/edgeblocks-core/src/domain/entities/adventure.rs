//! Adventure list entry.

use crate::domain::query::AdventureRecord;
use crate::domain::urls::dynamic_image_url;

/// One adventure as shown by the adventure list block.
///
/// Missing fields become empty strings: the block renders a broken thumbnail
/// or a blank title rather than dropping the item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adventure {
    pub title: String,
    pub image_path: String,
}

impl Adventure {
    pub fn image_src(&self, image_host: &str) -> String {
        dynamic_image_url(image_host, &self.image_path)
    }
}

impl From<AdventureRecord> for Adventure {
    fn from(record: AdventureRecord) -> Self {
        Self {
            title: record.title.unwrap_or_default(),
            image_path: record
                .primary_image
                .and_then(|image| image.dynamic_url)
                .unwrap_or_default(),
        }
    }
}
