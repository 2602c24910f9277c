use shared::domain::Subunits;

use crate::store::LineItem;

/// Cart-level amounts. Both are the plain sum of `unit_price * quantity`;
/// there is no tax, shipping or discount line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub subtotal: Subunits,
    pub total: Subunits,
}

pub fn compute_totals(items: &[LineItem]) -> Totals {
    let subtotal: Subunits = items.iter().map(LineItem::computed_total).sum();
    Totals {
        subtotal,
        total: subtotal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::format_subunits;
    use shared::domain::LineItemId;

    fn item(id: u64, unit_price: i64, quantity: u32) -> LineItem {
        LineItem {
            id: LineItemId(id),
            title: format!("item-{id}"),
            image_url: String::new(),
            unit_price: Subunits(unit_price),
            quantity,
            feed_line_total: Some(Subunits(1)),
        }
    }

    #[test]
    fn sums_unit_price_times_quantity() {
        let totals = compute_totals(&[item(1, 10_000, 2), item(2, 5_000, 1)]);
        assert_eq!(totals.subtotal, Subunits(25_000));
        assert_eq!(totals.total, totals.subtotal);
        assert_eq!(format_subunits(totals.total), "₹250.00");
    }

    #[test]
    fn ignores_stale_feed_line_totals() {
        let totals = compute_totals(&[item(1, 300, 3)]);
        assert_eq!(totals.subtotal, Subunits(900));
    }

    #[test]
    fn empty_cart_totals_zero() {
        assert_eq!(compute_totals(&[]), Totals::default());
    }
}
