//! Persisted query response envelope.
//!
//! The content API answers with `{ data: { adventureList: { items: [...] } } }`.
//! Every level is optional: a body missing any of them decodes to an envelope
//! whose [`QueryResponse::into_items`] is `None`, never to an error.
//!
//! Items decode leniently. A field of the wrong type reads as absent and an
//! item that is not an object reads as an empty record, so one bad item never
//! takes its neighbours down with it.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

/// Top-level persisted query body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub data: Option<QueryData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryData {
    #[serde(default, rename = "adventureList")]
    pub adventure_list: Option<ItemList>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemList {
    #[serde(default, deserialize_with = "lenient_items")]
    pub items: Option<Vec<AdventureRecord>>,
}

impl QueryResponse {
    /// Decode a response body. Missing levels decode fine; only a body that
    /// is not JSON, or whose `data`/`adventureList` levels are not objects,
    /// is an error.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    /// Items at `data.adventureList.items`, if every level is present.
    pub fn into_items(self) -> Option<Vec<AdventureRecord>> {
        self.data?.adventure_list?.items
    }
}

/// One raw item from the adventure list query.
///
/// Both blocks read the same query; the category block maps these records
/// into [`crate::domain::Category`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AdventureRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,

    #[serde(default, rename = "_path", deserialize_with = "lenient")]
    pub path: Option<String>,

    #[serde(default, rename = "primaryImage", deserialize_with = "lenient")]
    pub primary_image: Option<ImageRecord>,

    #[serde(default, deserialize_with = "lenient")]
    pub slug: Option<PlainText>,

    #[serde(default, rename = "ctaText", deserialize_with = "lenient")]
    pub cta_text: Option<String>,

    #[serde(default, rename = "ctaLink", deserialize_with = "lenient")]
    pub cta_link: Option<String>,
}

/// Image reference as delivered by the query.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImageRecord {
    #[serde(default, rename = "_dynamicUrl", deserialize_with = "lenient")]
    pub dynamic_url: Option<String>,

    #[serde(default, rename = "_authorUrl", deserialize_with = "lenient")]
    pub author_url: Option<String>,

    #[serde(default, rename = "_publishUrl", deserialize_with = "lenient")]
    pub publish_url: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub width: Option<u64>,

    #[serde(default, deserialize_with = "lenient")]
    pub height: Option<u64>,

    #[serde(default, rename = "mimeType", deserialize_with = "lenient")]
    pub mime_type: Option<String>,
}

/// Multi-format text field; only the plaintext rendition is read.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlainText {
    #[serde(default, deserialize_with = "lenient")]
    pub plaintext: Option<String>,
}

/// Absent, `null`, or mistyped all read as `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_items<'de, D>(deserializer: D) -> Result<Option<Vec<AdventureRecord>>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Option<Vec<Value>> = lenient(deserializer)?;
    Ok(values.map(|values| {
        values
            .into_iter()
            .map(|value| serde_json::from_value(value).unwrap_or_default())
            .collect()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_item() {
        let body = br#"{
            "data": { "adventureList": { "items": [{
                "_path": "/content/dam/wknd/en/adventures/bali",
                "title": "Bali Surf Camp",
                "slug": { "plaintext": "bali-surf-camp" },
                "ctaText": "Book",
                "ctaLink": "/book",
                "primaryImage": {
                    "_dynamicUrl": "/adobe/dynamicmedia/deliver/bali.jpg",
                    "_authorUrl": "https://author-p1.example.com/content/dam/bali.jpg",
                    "_publishUrl": "https://publish-p1.example.com/content/dam/bali.jpg",
                    "width": 1600,
                    "height": 1200,
                    "mimeType": "image/jpeg"
                }
            }] } }
        }"#;

        let items = QueryResponse::from_slice(body).unwrap().into_items().unwrap();
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.title.as_deref(), Some("Bali Surf Camp"));
        assert_eq!(item.slug.as_ref().unwrap().plaintext.as_deref(), Some("bali-surf-camp"));
        let image = item.primary_image.as_ref().unwrap();
        assert_eq!(image.width, Some(1600));
        assert_eq!(image.mime_type.as_deref(), Some("image/jpeg"));
    }

    #[test]
    fn empty_object_has_no_items() {
        assert!(QueryResponse::from_slice(b"{}").unwrap().into_items().is_none());
    }

    #[test]
    fn null_levels_have_no_items() {
        let body = br#"{ "data": { "adventureList": null } }"#;
        assert!(QueryResponse::from_slice(body).unwrap().into_items().is_none());
    }

    #[test]
    fn unrelated_fields_are_ignored() {
        let body = br#"{ "errors": [], "data": { "other": 1, "adventureList": { "items": [] } } }"#;
        let items = QueryResponse::from_slice(body).unwrap().into_items().unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn items_missing_fields_still_decode() {
        let body = br#"{ "data": { "adventureList": { "items": [{}] } } }"#;
        let items = QueryResponse::from_slice(body).unwrap().into_items().unwrap();
        assert_eq!(items, vec![AdventureRecord::default()]);
    }

    #[test]
    fn mistyped_field_degrades_only_its_item() {
        let body = br#"{ "data": { "adventureList": { "items": [
            { "title": "Bali", "primaryImage": { "_dynamicUrl": "/bali.jpg", "width": 1600 } },
            { "title": "Tahoe", "primaryImage": { "_dynamicUrl": "/tahoe.jpg", "width": 1600.5 } }
        ] } } }"#;

        let items = QueryResponse::from_slice(body).unwrap().into_items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].primary_image.as_ref().unwrap().width, Some(1600));

        let tahoe = &items[1];
        assert_eq!(tahoe.title.as_deref(), Some("Tahoe"));
        let image = tahoe.primary_image.as_ref().unwrap();
        assert_eq!(image.width, None);
        assert_eq!(image.dynamic_url.as_deref(), Some("/tahoe.jpg"));
    }

    #[test]
    fn non_object_item_reads_as_empty_record() {
        let body = br#"{ "data": { "adventureList": { "items": [null, 7, { "title": 42, "_path": "/p" }] } } }"#;
        let items = QueryResponse::from_slice(body).unwrap().into_items().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], AdventureRecord::default());
        assert_eq!(items[1], AdventureRecord::default());
        assert_eq!(items[2].title, None);
        assert_eq!(items[2].path.as_deref(), Some("/p"));
    }

    #[test]
    fn mistyped_items_read_as_missing() {
        let body = br#"{ "data": { "adventureList": { "items": "none" } } }"#;
        assert!(QueryResponse::from_slice(body).unwrap().into_items().is_none());
    }
}
