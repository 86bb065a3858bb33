// 🏭 Warehouse Manager - Two typed stores sharing one set of stock operations

use crate::entities::{ElectronicItem, GroceryItem};
use crate::error::StoreError;
use crate::store::{Keyed, Named, RecordId, RecordStore, Stocked};
use chrono::{Duration, NaiveDate};

/// State of a record right after a stock change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockChange {
    pub id: RecordId,
    pub name: String,
    pub quantity: i64,
}

/// Add `amount` units to a record's stock
pub fn increase_stock<T>(
    store: &mut RecordStore<T>,
    id: RecordId,
    amount: i64,
) -> Result<StockChange, StoreError>
where
    T: Stocked + Named + Clone,
{
    let quantity = store.adjust_quantity(id, amount)?;
    let name = store.inspect(id, |item| item.name().to_string())?;

    Ok(StockChange { id, name, quantity })
}

/// Take a record out of the store, handing it back to the caller
pub fn remove_item<T>(store: &mut RecordStore<T>, id: RecordId) -> Result<T, StoreError>
where
    T: Keyed + Clone,
{
    store.remove(id)
}

pub struct WarehouseManager {
    electronics: RecordStore<ElectronicItem>,
    groceries: RecordStore<GroceryItem>,
}

impl WarehouseManager {
    pub fn new() -> Self {
        WarehouseManager {
            electronics: RecordStore::new(),
            groceries: RecordStore::new(),
        }
    }

    /// Load the sample catalogue. Grocery expiry dates are relative to `today`.
    pub fn seed_data(&mut self, today: NaiveDate) -> Result<(), StoreError> {
        self.electronics
            .insert(ElectronicItem::new(1, "Laptop", 10, "Dell", 24))?;
        self.electronics
            .insert(ElectronicItem::new(2, "Smartphone", 15, "Samsung", 12))?;

        self.groceries
            .insert(GroceryItem::new(101, "Milk", 20, today + Duration::days(7)))?;
        self.groceries
            .insert(GroceryItem::new(102, "Bread", 50, today + Duration::days(3)))?;

        Ok(())
    }

    pub fn electronics(&self) -> &RecordStore<ElectronicItem> {
        &self.electronics
    }

    pub fn electronics_mut(&mut self) -> &mut RecordStore<ElectronicItem> {
        &mut self.electronics
    }

    pub fn groceries(&self) -> &RecordStore<GroceryItem> {
        &self.groceries
    }

    pub fn groceries_mut(&mut self) -> &mut RecordStore<GroceryItem> {
        &mut self.groceries
    }

    /// Groceries past their expiry date as of `today`
    pub fn expired_groceries(&self, today: NaiveDate) -> Vec<GroceryItem> {
        self.groceries
            .list_all()
            .into_iter()
            .filter(|item| item.is_expired(today))
            .collect()
    }
}

impl Default for WarehouseManager {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
