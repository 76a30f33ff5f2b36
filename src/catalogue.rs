use crate::Money;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CatalogueEntry {
    pub title: String,
    pub price: Money,
}

impl CatalogueEntry {
    pub fn new(title: impl Into<String>, price: Money) -> Self {
        CatalogueEntry {
            title: title.into(),
            price,
        }
    }
}

/// Title to price lookup over a loaded catalogue.
///
/// Catalogue files may repeat a title; the first entry in file order wins, the same
/// answer a front-to-back scan of the catalogue would give.
#[derive(Debug)]
pub struct PriceIndex<'a> {
    prices: HashMap<&'a str, Money>,
}

impl<'a> PriceIndex<'a> {
    pub fn new(catalogue: &'a [CatalogueEntry]) -> Self {
        let mut prices = HashMap::with_capacity(catalogue.len());
        for entry in catalogue {
            if prices.contains_key(entry.title.as_str()) {
                log::debug!(
                    "Duplicate catalogue title '{}' with price {}. Keeping first.",
                    entry.title,
                    entry.price
                );
                continue;
            }
            prices.insert(entry.title.as_str(), entry.price);
        }
        PriceIndex { prices }
    }

    pub fn price_of(&self, product: &str) -> Option<Money> {
        self.prices.get(product).copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
