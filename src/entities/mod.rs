// Entity Models - Record shapes held by the keyed stores
//
// Each entity has:
// - Integer identity assigned by the caller at construction
// - A quantity that only changes through store-mediated updates
// - Descriptive attributes that never change

pub mod inventory_item;
pub mod electronic;
pub mod grocery;

pub use inventory_item::InventoryItem;
pub use electronic::ElectronicItem;
pub use grocery::GroceryItem;
