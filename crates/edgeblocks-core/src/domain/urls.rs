//! URL handling for query endpoints and image delivery.
//!
//! All rewrites work on parsed [`Url`]s rather than substrings, so a
//! `publish-` fragment in a path or query string is never touched.

use url::Url;

use crate::domain::error::DomainError;
use crate::domain::markup::Element;

/// Query parameter carrying the cache-busting timestamp.
pub const CACHE_KILLER_PARAM: &str = "ck";

const PUBLISH_HOST_PREFIX: &str = "publish-";
const AUTHOR_HOST_PREFIX: &str = "author-";

/// Parse an absolute endpoint, ignoring surrounding whitespace.
pub fn parse_endpoint(raw: &str) -> Result<Url, DomainError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DomainError::MissingEndpoint);
    }
    Url::parse(raw).map_err(|e| DomainError::invalid_endpoint(raw, e))
}

/// Parse an endpoint that may be relative to the page it is embedded in.
pub fn resolve_endpoint(raw: &str, base: Option<&Url>) -> Result<Url, DomainError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DomainError::MissingEndpoint);
    }
    match (Url::parse(raw), base) {
        (Ok(url), _) => Ok(url),
        (Err(url::ParseError::RelativeUrlWithoutBase), Some(base)) => base
            .join(raw)
            .map_err(|e| DomainError::invalid_endpoint(raw, e)),
        (Err(e), _) => Err(DomainError::invalid_endpoint(raw, e)),
    }
}

/// Point a publish-tier endpoint at the matching author tier.
///
/// `https://publish-p1-e2.example.com/graphql/...` becomes
/// `https://author-p1-e2.example.com/graphql/...`. Hosts without the
/// `publish-` prefix are returned unchanged.
pub fn to_author_endpoint(url: &Url) -> Url {
    let Some(rest) = url
        .host_str()
        .and_then(|host| host.strip_prefix(PUBLISH_HOST_PREFIX))
    else {
        return url.clone();
    };

    let mut author = url.clone();
    let host = format!("{AUTHOR_HOST_PREFIX}{rest}");
    if author.set_host(Some(&host)).is_err() {
        return url.clone();
    }
    author
}

/// Append `ck=<millis>` so no intermediate cache can answer the request.
/// Existing query pairs, including an earlier `ck`, are kept.
pub fn with_cache_killer(url: &Url, now_millis: i64) -> Url {
    let mut busted = url.clone();
    busted
        .query_pairs_mut()
        .append_pair(CACHE_KILLER_PARAM, &now_millis.to_string());
    busted
}

/// `https://<hostname><dynamic path>`, the dynamic-media delivery form.
pub fn dynamic_image_url(hostname: &str, dynamic_path: &str) -> String {
    format!("https://{hostname}{dynamic_path}")
}

/// Delivery URL of an asset: the hostname of its publish URL joined with
/// its dynamic path. The publish URL's own path is discarded.
pub fn published_image_url(publish_url: &str, dynamic_path: &str) -> Result<String, DomainError> {
    let parsed = parse_endpoint(publish_url)?;
    let host = parsed.host_str().ok_or_else(|| DomainError::MissingHost {
        url: publish_url.to_string(),
    })?;
    Ok(dynamic_image_url(host, dynamic_path))
}

/// Where an adventure list block should fetch from, and which host serves
/// its images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySource {
    pub url: Url,
    pub image_host: String,
}

impl QuerySource {
    /// Read the source from a block: the first link's `href` when the block
    /// holds one, otherwise its trimmed text.
    pub fn from_block(block: &Element, base: Option<&Url>) -> Result<Self, DomainError> {
        let raw = match block.query_selector("a") {
            Some(link) => link.get_attribute("href").unwrap_or_default().to_string(),
            None => block.text_content(),
        };

        let url = resolve_endpoint(&raw, base)?;
        let image_host = url
            .host_str()
            .ok_or_else(|| DomainError::MissingHost {
                url: url.to_string(),
            })?
            .to_string();

        Ok(Self { url, image_host })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUBLISH: &str =
        "https://publish-p123-e456.adobeaemcloud.com/graphql/execute.json/wknd/adventures-all";

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn author_endpoint_swaps_publish_prefix() {
        let rewritten = to_author_endpoint(&url(PUBLISH));
        assert_eq!(
            rewritten.as_str(),
            "https://author-p123-e456.adobeaemcloud.com/graphql/execute.json/wknd/adventures-all"
        );
    }

    #[test]
    fn author_endpoint_matches_plain_substitution_for_documented_inputs() {
        let persisted = format!("{PUBLISH};locale=en?x=1");
        let rewritten = to_author_endpoint(&url(&persisted));
        assert_eq!(rewritten.as_str(), persisted.replacen("//publish-", "//author-", 1));
    }

    #[test]
    fn author_endpoint_leaves_other_hosts_alone() {
        let other = url("https://cdn.example.com/graphql/publish-list");
        assert_eq!(to_author_endpoint(&other), other);
    }

    #[test]
    fn author_endpoint_ignores_publish_in_path() {
        let other = url("https://example.com//publish-x");
        assert_eq!(to_author_endpoint(&other), other);
    }

    #[test]
    fn cache_killer_appends_param() {
        let busted = with_cache_killer(&url("https://example.com/q;a=b"), 1_700_000_000_123);
        assert_eq!(busted.as_str(), "https://example.com/q;a=b?ck=1700000000123");
    }

    #[test]
    fn cache_killer_keeps_existing_query() {
        let busted = with_cache_killer(&url("https://example.com/q?lang=en"), 42);
        let pairs: Vec<(String, String)> = busted.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("lang".to_string(), "en".to_string()),
                ("ck".to_string(), "42".to_string())
            ]
        );
    }

    #[test]
    fn published_image_url_uses_publish_hostname() {
        let delivered =
            published_image_url("https://cdn.example.com/assets/x", "/img.png").unwrap();
        assert_eq!(delivered, "https://cdn.example.com/img.png");
    }

    #[test]
    fn published_image_url_drops_port() {
        let delivered =
            published_image_url("https://cdn.example.com:8443/assets/x", "/img.png").unwrap();
        assert_eq!(delivered, "https://cdn.example.com/img.png");
    }

    #[test]
    fn published_image_url_rejects_garbage() {
        assert!(published_image_url("not a url", "/img.png").is_err());
        assert_eq!(
            published_image_url("", "/img.png"),
            Err(DomainError::MissingEndpoint)
        );
    }

    #[test]
    fn source_prefers_link_href() {
        let block = Element::block("adventures-list").child(
            Element::new("div").child(
                Element::new("a")
                    .attr("href", "https://publish.example.com/q")
                    .text("https://ignored.example.com"),
            ),
        );
        let source = QuerySource::from_block(&block, None).unwrap();
        assert_eq!(source.url.as_str(), "https://publish.example.com/q");
        assert_eq!(source.image_host, "publish.example.com");
    }

    #[test]
    fn source_resolves_relative_link_against_page() {
        let page = url("https://www.example.com/en/index.html");
        let block = Element::block("adventures-list")
            .child(Element::new("a").attr("href", "/graphql/execute.json/q"));
        let source = QuerySource::from_block(&block, Some(&page)).unwrap();
        assert_eq!(source.url.as_str(), "https://www.example.com/graphql/execute.json/q");
        assert_eq!(source.image_host, "www.example.com");
    }

    #[test]
    fn source_relative_link_without_page_fails() {
        let block = Element::block("adventures-list").child(Element::new("a").attr("href", "/q"));
        assert!(matches!(
            QuerySource::from_block(&block, None),
            Err(DomainError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn source_falls_back_to_trimmed_text() {
        let block = Element::block("adventures-list")
            .child(Element::new("div").text("\n  https://publish.example.com/q  \n"));
        let source = QuerySource::from_block(&block, None).unwrap();
        assert_eq!(source.url.as_str(), "https://publish.example.com/q");
        assert_eq!(source.image_host, "publish.example.com");
    }

    #[test]
    fn empty_block_has_no_source() {
        let block = Element::block("adventures-list");
        assert_eq!(
            QuerySource::from_block(&block, None),
            Err(DomainError::MissingEndpoint)
        );
    }
}
