// 📦 Inventory Item - Logged stock entry with the date it was added

use crate::error::StoreError;
use crate::store::{check_quantity, Keyed, Named, RecordId, Stocked};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: RecordId,
    pub name: String,
    pub quantity: i64,
    pub date_added: DateTime<Utc>,
}

impl InventoryItem {
    pub fn new(id: RecordId, name: &str, quantity: i64, date_added: DateTime<Utc>) -> Self {
        InventoryItem {
            id,
            name: name.to_string(),
            quantity,
            date_added,
        }
    }
}

impl Keyed for InventoryItem {
    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), StoreError> {
        check_quantity(self.quantity)
    }
}

impl Stocked for InventoryItem {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

impl Named for InventoryItem {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Qty: {}, Added: {}",
            self.id,
            self.name,
            self.quantity,
            self.date_added.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
