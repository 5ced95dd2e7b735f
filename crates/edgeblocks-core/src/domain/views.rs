//! Markup for both list blocks.
//!
//! Pure functions from entities to [`Element`] trees. Class names and
//! `itemprop`/`itemtype` attributes are part of the page contract: site CSS
//! and the in-context editor select on them.

use crate::domain::entities::{Adventure, Category};
use crate::domain::markup::Element;

/// Breakpoint at which the full-width renditions apply.
const WIDE_MEDIA: &str = "(min-width: 600px)";
/// Width requested for the narrow webp rendition.
const NARROW_WIDTH: u32 = 750;

// ── Adventure list ───────────────────────────────────────────────────────────

/// `<ul>` of thumbnail + title items, one per adventure, in input order.
pub fn adventure_list(adventures: &[Adventure], image_host: &str) -> Element {
    adventures
        .iter()
        .fold(Element::new("ul"), |list, adventure| {
            list.child(adventure_item(adventure, image_host))
        })
}

fn adventure_item(adventure: &Adventure, image_host: &str) -> Element {
    let thumbnail = Element::new("div").class("cmp-image-list__item-image").child(
        Element::new("img")
            .attr("src", adventure.image_src(image_host))
            .attr("alt", adventure.title.as_str())
            .class("cmp-image"),
    );

    let title = Element::new("span")
        .class("cmp-image-list__item-title")
        .text(adventure.title.as_str());

    Element::new("li").class("cmp-image-list__item").child(
        Element::new("article")
            .class("cmp-image-list__item-content")
            .child(thumbnail)
            .child(title),
    )
}

// ── Category list ────────────────────────────────────────────────────────────

/// `div.category-list` wrapper holding one card per category. Always
/// returned, even for an empty slice.
pub fn category_list(categories: &[Category]) -> Element {
    categories
        .iter()
        .fold(Element::new("div").class("category-list"), |root, category| {
            root.child(category_card(category))
        })
}

fn category_card(category: &Category) -> Element {
    Element::new("div")
        .class("category-item")
        .attr("itemscope", "")
        .attr("itemid", category.editor_id())
        .attr("itemtype", "reference")
        .child(
            Element::new("div")
                .class("category-item-image")
                .child(picture(category)),
        )
        .child(
            Element::new("div")
                .class("category-item-content")
                .child(
                    Element::new("h2")
                        .class("category-item-title")
                        .attr("itemprop", "title")
                        .attr("itemtype", "text")
                        .text(category.title.as_str()),
                )
                .child(
                    Element::new("p")
                        .class("category-item-desc")
                        .attr("itemprop", "description")
                        .attr("itemtype", "richtext")
                        .text(category.description.as_str()),
                ),
        )
}

fn picture(category: &Category) -> Element {
    let image = &category.image;
    let delivery = image.delivery_url.as_str();

    Element::new("picture")
        .child(
            Element::new("source")
                .attr("type", "image/webp")
                .attr("srcset", format!("{delivery}?preferwebp=true"))
                .attr("media", WIDE_MEDIA),
        )
        .child(
            Element::new("source")
                .attr("type", "image/webp")
                .attr("srcset", format!("{delivery}?preferwebp=true&width={NARROW_WIDTH}")),
        )
        .child(
            Element::new("source")
                .attr("type", image.mime_type.as_str())
                .attr("srcset", delivery)
                .attr("media", WIDE_MEDIA),
        )
        .child(
            Element::new("img")
                .attr("src", image.url.as_str())
                .attr("width", dimension(image.width))
                .attr("height", dimension(image.height))
                .attr("alt", category.title.as_str())
                .attr("type", image.mime_type.as_str())
                .attr("itemprop", "primaryImage")
                .attr("itemtype", "image")
                .attr("loading", "lazy"),
        )
}

fn dimension(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CategoryImage;

    fn adventures() -> Vec<Adventure> {
        vec![
            Adventure {
                title: "Bali".into(),
                image_path: "/bali.jpg".into(),
            },
            Adventure {
                title: "Tahoe".into(),
                image_path: "/tahoe.jpg".into(),
            },
        ]
    }

    fn category() -> Category {
        Category {
            path: "/content/dam/cf/climbing".into(),
            title: "Climbing".into(),
            description: "Up <high>".into(),
            image: CategoryImage {
                url: "https://author-p1.example.com/x.jpg".into(),
                delivery_url: "https://cdn.example.com/d.jpg".into(),
                width: Some(1200),
                height: Some(800),
                mime_type: "image/jpeg".into(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn adventure_list_has_one_item_per_adventure_in_order() {
        let list = adventure_list(&adventures(), "publish.example.com");
        let items = list.query_selector_all("li");
        assert_eq!(items.len(), 2);

        let images = list.query_selector_all("img");
        assert_eq!(images[0].get_attribute("alt"), Some("Bali"));
        assert_eq!(
            images[0].get_attribute("src"),
            Some("https://publish.example.com/bali.jpg")
        );
        assert_eq!(images[1].get_attribute("alt"), Some("Tahoe"));
    }

    #[test]
    fn adventure_item_markup() {
        let list = adventure_list(&adventures()[..1], "h.example.com");
        assert_eq!(
            list.to_html(),
            concat!(
                r#"<ul><li class="cmp-image-list__item"><article class="cmp-image-list__item-content">"#,
                r#"<div class="cmp-image-list__item-image"><img src="https://h.example.com/bali.jpg" alt="Bali" class="cmp-image"></div>"#,
                r#"<span class="cmp-image-list__item-title">Bali</span></article></li></ul>"#,
            )
        );
    }

    #[test]
    fn category_list_empty_is_bare_wrapper() {
        let root = category_list(&[]);
        assert_eq!(root.to_html(), r#"<div class="category-list"></div>"#);
    }

    #[test]
    fn category_card_carries_editor_addressing() {
        let root = category_list(&[category()]);
        let card = root.child_elements().next().unwrap();
        assert_eq!(card.get_attribute("class"), Some("category-item"));
        assert_eq!(card.get_attribute("itemscope"), Some(""));
        assert_eq!(
            card.get_attribute("itemid"),
            Some("urn:aemconnection:/content/dam/cf/climbing/jcr:content/data/master")
        );
        assert_eq!(card.get_attribute("itemtype"), Some("reference"));
    }

    #[test]
    fn picture_sources_use_delivery_url() {
        let root = category_list(&[category()]);
        let sources = root.query_selector_all("source");
        let srcsets: Vec<_> = sources
            .iter()
            .map(|s| s.get_attribute("srcset").unwrap())
            .collect();
        assert_eq!(
            srcsets,
            vec![
                "https://cdn.example.com/d.jpg?preferwebp=true",
                "https://cdn.example.com/d.jpg?preferwebp=true&width=750",
                "https://cdn.example.com/d.jpg",
            ]
        );
        assert_eq!(sources[0].get_attribute("media"), Some("(min-width: 600px)"));
        assert!(!sources[1].has_attribute("media"));
        assert_eq!(sources[2].get_attribute("type"), Some("image/jpeg"));
    }

    #[test]
    fn fallback_img_uses_mode_url_and_dimensions() {
        let root = category_list(&[category()]);
        let img = root.query_selector("img").unwrap();
        assert_eq!(img.get_attribute("src"), Some("https://author-p1.example.com/x.jpg"));
        assert_eq!(img.get_attribute("width"), Some("1200"));
        assert_eq!(img.get_attribute("height"), Some("800"));
        assert_eq!(img.get_attribute("alt"), Some("Climbing"));
        assert_eq!(img.get_attribute("itemprop"), Some("primaryImage"));
        assert_eq!(img.get_attribute("loading"), Some("lazy"));
    }

    #[test]
    fn description_is_text_not_markup() {
        let root = category_list(&[category()]);
        let desc = root.query_selector("p").unwrap();
        assert_eq!(desc.text_content(), "Up <high>");
        assert!(root.to_html().contains("Up &lt;high&gt;"));
    }
}
