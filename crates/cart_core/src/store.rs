//! In-memory cart contents, in display order.

use shared::{
    domain::{LineItemId, Subunits},
    protocol::FeedItem,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub id: LineItemId,
    pub title: String,
    pub image_url: String,
    pub unit_price: Subunits,
    pub quantity: u32,
    /// Line total as reported by the feed. Cleared once the quantity is
    /// edited locally; it is never reconciled with local edits.
    pub feed_line_total: Option<Subunits>,
}

impl LineItem {
    pub fn computed_total(&self) -> Subunits {
        self.unit_price.times(self.quantity)
    }

    /// Amount shown in the row's subtotal slot.
    pub fn display_subtotal(&self) -> Subunits {
        self.feed_line_total
            .unwrap_or_else(|| self.computed_total())
    }
}

#[derive(Debug, Default)]
pub struct CartStore {
    items: Vec<LineItem>,
    next_id: u64,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole contents with the feed's items, assigning fresh ids.
    pub fn replace_from_feed(&mut self, feed_items: Vec<FeedItem>) {
        self.items.clear();
        for feed_item in feed_items {
            let quantity = match u32::try_from(feed_item.quantity) {
                Ok(quantity) if quantity >= 1 => quantity,
                _ => {
                    tracing::warn!(
                        title = %feed_item.title,
                        quantity = feed_item.quantity,
                        "feed item has an invalid quantity; using 1"
                    );
                    1
                }
            };
            let id = self.allocate_id();
            self.items.push(LineItem {
                id,
                title: feed_item.title,
                image_url: feed_item.featured_image.url,
                unit_price: feed_item.price,
                quantity,
                feed_line_total: Some(feed_item.line_price),
            });
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position(&self, id: LineItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Commits a validated quantity. Returns the updated item, or `None` when
    /// the id is no longer in the cart.
    pub fn set_quantity(&mut self, id: LineItemId, quantity: u32) -> Option<&LineItem> {
        debug_assert!(quantity >= 1);
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.quantity = quantity;
        item.feed_line_total = None;
        Some(item)
    }

    pub fn remove(&mut self, id: LineItemId) -> Option<LineItem> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    fn allocate_id(&mut self) -> LineItemId {
        self.next_id += 1;
        LineItemId(self.next_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::protocol::FeaturedImage;

    fn feed_item(title: &str, price: i64, quantity: i64) -> FeedItem {
        FeedItem {
            title: title.to_string(),
            featured_image: FeaturedImage {
                url: format!("https://cdn.example.test/{title}.png"),
            },
            price: Subunits(price),
            quantity,
            line_price: Subunits(price * quantity),
        }
    }

    #[test]
    fn keeps_feed_order_and_duplicate_titles() {
        let mut store = CartStore::new();
        store.replace_from_feed(vec![
            feed_item("lamp", 100, 1),
            feed_item("sofa", 500, 2),
            feed_item("lamp", 100, 3),
        ]);

        let titles: Vec<_> = store.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["lamp", "sofa", "lamp"]);
        assert_ne!(store.items()[0].id, store.items()[2].id);
    }

    #[test]
    fn ids_are_not_reused_after_reload() {
        let mut store = CartStore::new();
        store.replace_from_feed(vec![feed_item("a", 1, 1)]);
        let first = store.items()[0].id;
        store.replace_from_feed(vec![feed_item("a", 1, 1)]);
        assert_ne!(store.items()[0].id, first);
        assert!(store.get(first).is_none());
    }

    #[test]
    fn normalizes_invalid_feed_quantities() {
        let mut store = CartStore::new();
        store.replace_from_feed(vec![feed_item("zero", 100, 0), feed_item("neg", 100, -4)]);
        assert!(store.items().iter().all(|item| item.quantity == 1));
    }

    #[test]
    fn row_subtotal_uses_feed_total_until_first_edit() {
        let mut store = CartStore::new();
        let mut item = feed_item("chair", 1_000, 2);
        item.line_price = Subunits(1_800);
        store.replace_from_feed(vec![item]);
        let id = store.items()[0].id;

        assert_eq!(store.items()[0].display_subtotal(), Subunits(1_800));

        let edited = store.set_quantity(id, 3).expect("item");
        assert_eq!(edited.display_subtotal(), Subunits(3_000));
    }

    #[test]
    fn remove_by_id_keeps_remaining_order() {
        let mut store = CartStore::new();
        store.replace_from_feed(vec![
            feed_item("a", 1, 1),
            feed_item("b", 1, 1),
            feed_item("c", 1, 1),
        ]);
        let middle = store.items()[1].id;

        let removed = store.remove(middle).expect("removed");
        assert_eq!(removed.title, "b");
        let titles: Vec<_> = store.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["a", "c"]);
        assert!(store.remove(middle).is_none());
    }
}
