// 🔌 Electronic Item - Warehouse stock with brand and warranty

use crate::error::StoreError;
use crate::store::{check_quantity, Keyed, Named, RecordId, Stocked};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectronicItem {
    pub id: RecordId,
    pub name: String,
    pub quantity: i64,
    pub brand: String,

    /// Warranty length in months
    pub warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(id: RecordId, name: &str, quantity: i64, brand: &str, warranty_months: u32) -> Self {
        ElectronicItem {
            id,
            name: name.to_string(),
            quantity,
            brand: brand.to_string(),
            warranty_months,
        }
    }
}

impl Keyed for ElectronicItem {
    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), StoreError> {
        check_quantity(self.quantity)
    }
}

impl Stocked for ElectronicItem {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

impl Named for ElectronicItem {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ElectronicItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({}), Qty: {}, Warranty: {} months",
            self.id, self.name, self.brand, self.quantity, self.warranty_months
        )
    }
}
