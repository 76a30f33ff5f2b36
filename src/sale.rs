use crate::Money;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SaleRecord {
    #[serde(rename = "Product")]
    pub product: String,
    /// Not validated: negative or fractional quantities are used as given.
    #[serde(rename = "Quantity")]
    pub quantity: Money,
}

impl SaleRecord {
    pub fn new(product: impl Into<String>, quantity: Money) -> Self {
        SaleRecord {
            product: product.into(),
            quantity,
        }
    }

    /// `None` when price × quantity falls outside the range of `Money`.
    pub fn cost_at(&self, price: Money) -> Option<Money> {
        price.checked_mul(self.quantity)
    }
}
