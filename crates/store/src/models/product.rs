//! Product catalog record.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use guava_core::ProductId;

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// List price before the merchandising discount.
    pub price: Decimal,
    /// Discount percent off the list price (0 for none).
    pub discount: Decimal,
    pub images: Vec<String>,
    pub category: String,
    pub subcategory: String,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub stock: u32,
    /// Average rating, 0.0 to 5.0.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    pub featured: bool,
    pub trending: bool,
    pub bestseller: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<BTreeMap<String, String>>,
}

impl Product {
    /// Price after the merchandising discount percent.
    #[must_use]
    pub fn sale_price(&self) -> Decimal {
        self.price - (self.price * self.discount / Decimal::ONE_HUNDRED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shirt(price: u32, discount: u32) -> Product {
        Product {
            id: ProductId::new("p-1"),
            name: "Oxford Shirt".to_owned(),
            description: String::new(),
            price: Decimal::from(price),
            discount: Decimal::from(discount),
            images: Vec::new(),
            category: "Men".to_owned(),
            subcategory: "Shirts".to_owned(),
            sizes: vec!["M".to_owned()],
            colors: vec!["White".to_owned()],
            stock: 10,
            rating: 4.5,
            reviews: 12,
            featured: false,
            trending: false,
            bestseller: false,
            specifications: None,
        }
    }

    #[test]
    fn test_sale_price_applies_discount_percent() {
        assert_eq!(shirt(2000, 25).sale_price(), Decimal::from(1500));
        assert_eq!(shirt(2000, 0).sale_price(), Decimal::from(2000));
    }
}
