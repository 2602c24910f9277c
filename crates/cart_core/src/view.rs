//! Projection of the cart into display-ready rows and slots.
//!
//! The desktop UI draws exactly what is in a [`CartView`]; it never reads the
//! store directly.

use shared::domain::LineItemId;

use crate::{
    currency::display_price,
    store::{CartStore, LineItem},
    totals::Totals,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: LineItemId,
    pub title: String,
    pub image_url: String,
    pub unit_price_text: String,
    pub quantity: u32,
    pub subtotal_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Bumped on every full rebuild of the row list.
    pub generation: u64,
    pub loading: bool,
    pub rows: Vec<RowView>,
    pub subtotal_text: String,
    pub total_text: String,
    pub removal_dialog_open: bool,
    pub notice: Option<String>,
}

pub fn render_row(item: &LineItem, price_prefix: &str) -> RowView {
    RowView {
        id: item.id,
        title: item.title.clone(),
        image_url: item.image_url.clone(),
        unit_price_text: display_price(price_prefix, item.unit_price),
        quantity: item.quantity,
        subtotal_text: display_price(price_prefix, item.display_subtotal()),
    }
}

pub fn render_rows(store: &CartStore, price_prefix: &str) -> Vec<RowView> {
    store
        .items()
        .iter()
        .map(|item| render_row(item, price_prefix))
        .collect()
}

pub fn totals_text(totals: Totals, price_prefix: &str) -> (String, String) {
    (
        display_price(price_prefix, totals.subtotal),
        display_price(price_prefix, totals.total),
    )
}
