//! Sale aggregate - one point-of-sale transaction.
//!
//! Sales are immutable once recorded: line items snapshot the product
//! name and unit price at the moment of sale, so later catalog edits
//! never rewrite history.

use crate::domain::foundation::{ProductId, SaleId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

/// One line of a sale: a product at its price when sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleLine {
    /// Product sold.
    pub product_id: ProductId,

    /// Product name at the moment of sale.
    pub product_name: String,

    /// Unit price in cents at the moment of sale.
    pub unit_price_cents: i64,

    /// Units sold; always at least one.
    pub quantity: u32,
}

impl SaleLine {
    /// Line total in cents.
    pub fn total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity as i64
    }
}

/// Sale aggregate - an immutable transaction with computed total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    /// Unique identifier for this sale.
    pub id: SaleId,

    /// What was sold.
    pub lines: Vec<SaleLine>,

    /// Sum of all line totals, in cents.
    pub total_cents: i64,

    /// When the sale happened, UTC.
    pub sold_at: Timestamp,
}

impl Sale {
    /// Records a new sale from its lines.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if there are no lines
    /// - `OutOfRange` if any line has zero quantity
    pub fn record(
        id: SaleId,
        lines: Vec<SaleLine>,
        sold_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        if lines.is_empty() {
            return Err(ValidationError::empty_field("lines"));
        }
        if let Some(line) = lines.iter().find(|l| l.quantity == 0) {
            return Err(ValidationError::out_of_range(
                format!("quantity ({})", line.product_name),
                1,
                u32::MAX as i64,
                0,
            ));
        }
        let total_cents = lines.iter().map(SaleLine::total_cents).sum();
        Ok(Self {
            id,
            lines,
            total_cents,
            sold_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, unit_price_cents: i64, quantity: u32) -> SaleLine {
        SaleLine {
            product_id: ProductId::new(),
            product_name: name.to_string(),
            unit_price_cents,
            quantity,
        }
    }

    #[test]
    fn total_is_sum_of_line_totals() {
        let sale = Sale::record(
            SaleId::new(),
            vec![line("Water 500ml", 150, 2), line("Protein bar", 350, 3)],
            Timestamp::now(),
        )
        .unwrap();

        assert_eq!(sale.total_cents, 2 * 150 + 3 * 350);
    }

    #[test]
    fn rejects_empty_sale() {
        assert!(Sale::record(SaleId::new(), vec![], Timestamp::now()).is_err());
    }

    #[test]
    fn rejects_zero_quantity_line() {
        let result = Sale::record(
            SaleId::new(),
            vec![line("Water 500ml", 150, 0)],
            Timestamp::now(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn line_total_multiplies_price_by_quantity() {
        assert_eq!(line("Towel", 900, 2).total_cents(), 1800);
    }
}
