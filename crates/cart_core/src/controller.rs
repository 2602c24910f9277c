//! Single owner of cart state: store contents, load status, the removal
//! dialog and any pending user notice.

use shared::{domain::LineItemId, protocol::CartFeed};

use crate::{
    checkout,
    error::{LoadError, QuantityError},
    loader::CartFeedSource,
    quantity::parse_quantity,
    removal::RemovalFlow,
    store::{CartStore, LineItem},
    totals::{compute_totals, Totals},
    view::{render_row, render_rows, totals_text, CartView, RowView},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    NotStarted,
    Loading,
    Ready,
    Failed,
}

/// Blocking message shown to the user until dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    InvalidQuantity,
    CheckoutConfirmed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::InvalidQuantity => crate::error::INVALID_QUANTITY_MESSAGE,
            Notice::CheckoutConfirmed => checkout::CHECKOUT_ACKNOWLEDGEMENT,
        }
    }
}

#[derive(Debug)]
pub struct CartController {
    store: CartStore,
    removal: RemovalFlow,
    load_state: LoadState,
    totals: Totals,
    notice: Option<Notice>,
    generation: u64,
    price_prefix: String,
}

impl Default for CartController {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PRICE_PREFIX)
    }
}

impl CartController {
    pub fn new(price_prefix: impl Into<String>) -> Self {
        Self {
            store: CartStore::new(),
            removal: RemovalFlow::Idle,
            load_state: LoadState::NotStarted,
            totals: Totals::default(),
            notice: None,
            generation: 0,
            price_prefix: price_prefix.into(),
        }
    }

    pub fn begin_load(&mut self) {
        self.load_state = LoadState::Loading;
    }

    pub fn finish_load(&mut self, result: Result<CartFeed, LoadError>) {
        match result {
            Ok(feed) => {
                tracing::info!(items = feed.items.len(), "cart loaded");
                self.store.replace_from_feed(feed.items);
                self.removal = RemovalFlow::Idle;
                self.load_state = LoadState::Ready;
                self.rebuild();
            }
            Err(err) => {
                tracing::error!("error fetching cart data: {err}");
                self.load_state = LoadState::Failed;
            }
        }
    }

    /// Runs the whole load sequence against `source`.
    pub async fn load_from(&mut self, source: &dyn CartFeedSource) {
        self.begin_load();
        let result = source.fetch_cart().await;
        self.finish_load(result);
    }

    /// Applies raw quantity field text to one row. Invalid text leaves the
    /// cart untouched and raises [`Notice::InvalidQuantity`]. Returns the
    /// refreshed row, or `None` if the row is gone.
    pub fn edit_quantity(
        &mut self,
        id: LineItemId,
        raw: &str,
    ) -> Result<Option<RowView>, QuantityError> {
        let quantity = match parse_quantity(raw) {
            Ok(quantity) => quantity,
            Err(err) => {
                tracing::warn!(item = %id, "rejected quantity edit: {err}");
                self.notice = Some(Notice::InvalidQuantity);
                return Err(err);
            }
        };

        let Some(item) = self.store.set_quantity(id, quantity) else {
            tracing::debug!(item = %id, "quantity edit for item no longer in cart");
            return Ok(None);
        };
        let row = render_row(item, &self.price_prefix);
        self.recompute_totals();
        Ok(Some(row))
    }

    pub fn request_removal(&mut self, id: LineItemId) {
        self.removal.request(id);
    }

    pub fn cancel_removal(&mut self) {
        self.removal.cancel();
    }

    /// Removes the pending target, if any, and rebuilds the rows.
    pub fn confirm_removal(&mut self) -> Option<LineItem> {
        let target = self.removal.confirm()?;
        let removed = self.store.remove(target);
        match &removed {
            Some(item) => {
                tracing::info!(item = %item.id, title = %item.title, "removed from cart");
                self.rebuild();
            }
            None => tracing::debug!(item = %target, "removal target no longer in cart"),
        }
        removed
    }

    pub fn checkout(&mut self) -> &'static str {
        self.notice = Some(Notice::CheckoutConfirmed);
        checkout::checkout()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn store(&self) -> &CartStore {
        &self.store
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    pub fn removal_target(&self) -> Option<LineItemId> {
        self.removal.target()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn view(&self) -> CartView {
        let (subtotal_text, total_text) = totals_text(self.totals, &self.price_prefix);
        CartView {
            generation: self.generation,
            loading: self.is_loading(),
            rows: render_rows(&self.store, &self.price_prefix),
            subtotal_text,
            total_text,
            removal_dialog_open: self.removal.is_open(),
            notice: self.notice.map(|notice| notice.message().to_string()),
        }
    }

    fn rebuild(&mut self) {
        self.generation += 1;
        self.recompute_totals();
    }

    fn recompute_totals(&mut self) {
        self.totals = compute_totals(self.store.items());
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
