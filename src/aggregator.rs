use crate::{
    catalogue::{CatalogueEntry, PriceIndex},
    sale::SaleRecord,
    Money,
};
use num_traits::Zero;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct SalesTotal {
    pub total: Money,
    /// Product names of unmatched sales, in input order.
    pub missing_products: Vec<String>,
}

pub fn compute_total(
    catalogue: &[CatalogueEntry],
    sales: &[SaleRecord],
) -> Result<Money, AggregateError> {
    Ok(aggregate(catalogue, sales)?.total)
}

/// Sums price × quantity over every sale whose product is in the catalogue.
///
/// A sale with no catalogue entry is logged and contributes nothing; it never stops
/// the fold. The total is not rounded. The only failure is leaving the range of `Money`.
pub fn aggregate(
    catalogue: &[CatalogueEntry],
    sales: &[SaleRecord],
) -> Result<SalesTotal, AggregateError> {
    let prices = PriceIndex::new(catalogue);
    if prices.is_empty() && !sales.is_empty() {
        log::warn!("Catalogue is empty, every sale will be unmatched");
    }
    log::debug!(
        "Indexed {} catalogue titles for {} sales",
        prices.len(),
        sales.len()
    );
    let mut summary = SalesTotal {
        total: Money::zero(),
        missing_products: vec![],
    };
    for sale in sales {
        match prices.price_of(&sale.product) {
            Some(price) => {
                summary.total = sale
                    .cost_at(price)
                    .and_then(|cost| summary.total.checked_add(cost))
                    .ok_or_else(|| AggregateError::Overflow {
                        product: sale.product.clone(),
                        price,
                        quantity: sale.quantity,
                    })?;
            }
            None => {
                log::warn!("'{}' not found in catalogue. Continuing.", sale.product);
                summary.missing_products.push(sale.product.clone());
            }
        }
    }
    Ok(summary)
}

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("sales total out of range adding {quantity} x '{product}' at {price}")]
    Overflow {
        product: String,
        price: Money,
        quantity: Money,
    },
}
