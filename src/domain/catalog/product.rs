//! Product entity - one item in the shop inventory.

use crate::domain::foundation::{DomainError, ErrorCode, ProductId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

/// A sellable product with stock on hand.
///
/// # Invariants
///
/// - `price_cents >= 0`
/// - `stock >= 0`; adjustments that would go below zero are rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for this product.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Unit price in cents.
    pub price_cents: i64,

    /// Units on hand.
    pub stock: i32,

    /// Stock level at or below which the product counts as low-stock.
    pub low_stock_threshold: i32,

    /// When the product was created.
    pub created_at: Timestamp,

    /// When the product was last updated.
    pub updated_at: Timestamp,
}

impl Product {
    /// Creates a new product.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `OutOfRange` if price or initial stock is negative
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price_cents: i64,
        stock: i32,
        low_stock_threshold: i32,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if price_cents < 0 {
            return Err(ValidationError::out_of_range(
                "price_cents",
                0,
                i64::MAX,
                price_cents,
            ));
        }
        if stock < 0 {
            return Err(ValidationError::out_of_range(
                "stock",
                0,
                i32::MAX as i64,
                stock as i64,
            ));
        }
        let now = Timestamp::now();
        Ok(Self {
            id,
            name,
            price_cents,
            stock,
            low_stock_threshold: low_stock_threshold.max(0),
            created_at: now,
            updated_at: now,
        })
    }

    /// Adjusts stock by a signed delta (restock or correction).
    ///
    /// # Errors
    ///
    /// Returns `InsufficientStock` if the adjustment would drive stock
    /// below zero.
    pub fn adjust_stock(&mut self, delta: i32) -> Result<(), DomainError> {
        let next = self.stock + delta;
        if next < 0 {
            return Err(DomainError::new(
                ErrorCode::InsufficientStock,
                format!(
                    "Cannot remove {} units of '{}'; only {} on hand",
                    -delta, self.name, self.stock
                ),
            ));
        }
        self.stock = next;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Removes sold units from stock.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientStock` if fewer units are on hand than sold.
    pub fn deduct(&mut self, quantity: u32) -> Result<(), DomainError> {
        self.adjust_stock(-(quantity as i32))
    }

    /// True if the product is at or below its low-stock threshold.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.low_stock_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> Product {
        Product::new(ProductId::new(), "Water 500ml", 150, 24, 6).unwrap()
    }

    #[test]
    fn creates_product_with_valid_fields() {
        let product = water();
        assert_eq!(product.stock, 24);
        assert!(!product.is_low_stock());
    }

    #[test]
    fn rejects_blank_name_and_negative_values() {
        assert!(Product::new(ProductId::new(), " ", 150, 1, 0).is_err());
        assert!(Product::new(ProductId::new(), "Water", -1, 1, 0).is_err());
        assert!(Product::new(ProductId::new(), "Water", 150, -1, 0).is_err());
    }

    #[test]
    fn adjust_stock_applies_signed_delta() {
        let mut product = water();
        product.adjust_stock(12).unwrap();
        assert_eq!(product.stock, 36);
        product.adjust_stock(-30).unwrap();
        assert_eq!(product.stock, 6);
    }

    #[test]
    fn adjust_stock_rejects_going_negative() {
        let mut product = water();
        let result = product.adjust_stock(-25);
        assert!(result.is_err());
        assert_eq!(product.stock, 24);
    }

    #[test]
    fn deduct_removes_sold_units() {
        let mut product = water();
        product.deduct(4).unwrap();
        assert_eq!(product.stock, 20);
    }

    #[test]
    fn low_stock_is_inclusive_of_threshold() {
        let mut product = water();
        product.adjust_stock(-18).unwrap();
        assert_eq!(product.stock, 6);
        assert!(product.is_low_stock());
    }
}
