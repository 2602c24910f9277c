pub const CHECKOUT_ACKNOWLEDGEMENT: &str = "Your order is Confirmed, Thank You";

/// Static checkout: nothing is submitted and the cart is left as is.
pub fn checkout() -> &'static str {
    tracing::info!("checkout acknowledged");
    CHECKOUT_ACKNOWLEDGEMENT
}
