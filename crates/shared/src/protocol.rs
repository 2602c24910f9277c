//! Wire shape of the cart feed: `{ "items": [ ... ] }`.

use serde::{Deserialize, Serialize};

use crate::domain::Subunits;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartFeed {
    #[serde(default)]
    pub items: Vec<FeedItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    pub title: String,
    #[serde(default)]
    pub featured_image: FeaturedImage,
    #[serde(default)]
    pub price: Subunits,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub line_price: Subunits,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturedImage {
    #[serde(default)]
    pub url: String,
}

fn default_quantity() -> i64 {
    1
}

impl CartFeed {
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_storefront_cart_payload_and_ignores_extra_fields() {
        let body = br#"{
            "token": "abc",
            "item_count": 3,
            "items": [
                {
                    "id": 49839206859071,
                    "title": "Asgaard sofa",
                    "price": 25000000,
                    "quantity": 1,
                    "line_price": 25000000,
                    "featured_image": { "url": "https://cdn.example.test/sofa.png", "width": 800 }
                }
            ]
        }"#;

        let feed = CartFeed::from_slice(body).expect("feed");
        assert_eq!(feed.items.len(), 1);
        let item = &feed.items[0];
        assert_eq!(item.title, "Asgaard sofa");
        assert_eq!(item.price, Subunits(25_000_000));
        assert_eq!(item.line_price, Subunits(25_000_000));
        assert_eq!(item.featured_image.url, "https://cdn.example.test/sofa.png");
    }

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let feed = CartFeed::from_slice(br#"{ "items": [ { "title": "bare" } ] }"#).expect("feed");
        let item = &feed.items[0];
        assert_eq!(item.price, Subunits::ZERO);
        assert_eq!(item.line_price, Subunits::ZERO);
        assert_eq!(item.quantity, 1);
        assert!(item.featured_image.url.is_empty());
    }

    #[test]
    fn rejects_non_json_body() {
        assert!(CartFeed::from_slice(b"<html>not found</html>").is_err());
    }
}
