//! Discount arithmetic shared by products and their variants.

use serde::Serialize;

/// Price after applying a percentage discount.
///
/// A missing or non-positive discount leaves the price untouched. No rounding
/// is applied here.
pub fn final_price(price: f64, discount: Option<f64>) -> f64 {
    match discount {
        Some(discount) if discount > 0.0 => price - price * discount / 100.0,
        _ => price,
    }
}

/// Base price, discount percentage and the final price derived from them.
///
/// The only way to obtain a `Pricing` is from a price and a discount, so the
/// final price can never drift from its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pricing {
    price: f64,
    discount: f64,
    final_price: f64,
}

impl Pricing {
    pub fn new(price: f64, discount: Option<f64>) -> Self {
        Self {
            price,
            discount: discount.unwrap_or(0.0),
            final_price: final_price(price, discount),
        }
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Discount percentage in the `0..=100` range, `0` when none applies.
    pub fn discount(&self) -> f64 {
        self.discount
    }

    pub fn final_price(&self) -> f64 {
        self.final_price
    }

    /// Same discount, new base price.
    pub fn with_price(self, price: f64) -> Self {
        Self::new(price, Some(self.discount))
    }

    /// Same base price, new discount.
    pub fn with_discount(self, discount: f64) -> Self {
        Self::new(self.price, Some(discount))
    }
}
