//! Category card, the normalized content-fragment shape.

use crate::domain::error::DomainError;
use crate::domain::query::{AdventureRecord, ImageRecord};
use crate::domain::urls::published_image_url;
use crate::domain::value_objects::EditorMode;

/// One category card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    /// Repository path of the backing content fragment.
    pub path: String,
    pub title: String,
    pub description: String,
    pub cta: CallToAction,
    pub image: CategoryImage,
}

/// Carried with each card; not rendered by the list block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallToAction {
    pub text: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryImage {
    /// Visible `src`: author asset URL in the editor, delivery URL otherwise.
    pub url: String,
    /// Always the published delivery URL; feeds every `srcset`.
    pub delivery_url: String,
    pub width: Option<u64>,
    pub height: Option<u64>,
    pub mime_type: String,
}

impl Category {
    /// Build a card from a query item.
    ///
    /// Nothing is validated. An image whose publish URL cannot be resolved
    /// gets an empty URL and renders broken, like any other missing field.
    pub fn from_record(record: AdventureRecord, mode: EditorMode) -> Self {
        let image = record.primary_image.unwrap_or_default();
        let url = resolve_image_url(&image, mode).unwrap_or_default();
        let delivery_url = resolve_image_url(&image, EditorMode::Published).unwrap_or_default();

        Self {
            path: record.path.unwrap_or_default(),
            title: record.title.unwrap_or_default(),
            description: record
                .slug
                .and_then(|slug| slug.plaintext)
                .unwrap_or_default(),
            cta: CallToAction {
                text: record.cta_text.unwrap_or_default(),
                link: record.cta_link.unwrap_or_default(),
            },
            image: CategoryImage {
                url,
                delivery_url,
                width: image.width,
                height: image.height,
                mime_type: image.mime_type.unwrap_or_default(),
            },
        }
    }

    /// Address the editor uses to bind this card to its content fragment.
    pub fn editor_id(&self) -> String {
        format!("urn:aemconnection:{}/jcr:content/data/master", self.path)
    }
}

/// Image URL for the given mode.
pub fn resolve_image_url(image: &ImageRecord, mode: EditorMode) -> Result<String, DomainError> {
    match mode {
        EditorMode::Editor => Ok(image.author_url.clone().unwrap_or_default()),
        EditorMode::Published => {
            let publish = image
                .publish_url
                .as_deref()
                .ok_or(DomainError::MissingPublishUrl)?;
            published_image_url(publish, image.dynamic_url.as_deref().unwrap_or_default())
        }
    }
}
