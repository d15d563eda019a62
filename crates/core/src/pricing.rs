//! Price resolution for catalog filtering and checkout.

/// Resolve the price a buyer actually pays.
///
/// A discount applies only when present and strictly lower than the
/// list price; a discount at or above the list price is ignored.
pub fn effective_price(price: f64, discount_price: Option<f64>) -> f64 {
    match discount_price {
        Some(discount) if discount < price => discount,
        _ => price,
    }
}

/// Check that an effective price falls inside an inclusive range.
///
/// A missing bound imposes no constraint on that side.
pub fn price_in_range(price: f64, min_price: Option<f64>, max_price: Option<f64>) -> bool {
    if let Some(min) = min_price {
        if price < min {
            return false;
        }
    }
    if let Some(max) = max_price {
        if price > max {
            return false;
        }
    }
    true
}
