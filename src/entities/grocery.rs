// 🥛 Grocery Item - Perishable warehouse stock

use crate::error::StoreError;
use crate::store::{check_quantity, Keyed, Named, RecordId, Stocked};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: RecordId,
    pub name: String,
    pub quantity: i64,
    pub expiry_date: NaiveDate,
}

impl GroceryItem {
    pub fn new(id: RecordId, name: &str, quantity: i64, expiry_date: NaiveDate) -> Self {
        GroceryItem {
            id,
            name: name.to_string(),
            quantity,
            expiry_date,
        }
    }

    /// Expired once `today` is past the expiry date
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        today > self.expiry_date
    }
}

impl Keyed for GroceryItem {
    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), StoreError> {
        check_quantity(self.quantity)
    }
}

impl Stocked for GroceryItem {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

impl Named for GroceryItem {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, Qty: {}, Expiry: {}",
            self.id,
            self.name,
            self.quantity,
            self.expiry_date.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_display_format() {
        let item = GroceryItem::new(101, "Milk", 20, date(2024, 12, 25));
        assert_eq!(item.to_string(), "101: Milk, Qty: 20, Expiry: 2024-12-25");
    }

    #[test]
    fn test_expiry() {
        let item = GroceryItem::new(102, "Bread", 50, date(2024, 1, 10));

        assert!(!item.is_expired(date(2024, 1, 9)));
        assert!(!item.is_expired(date(2024, 1, 10)));
        assert!(item.is_expired(date(2024, 1, 11)));
    }
}
