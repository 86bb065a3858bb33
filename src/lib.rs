// Record Keeper - Core Library
// Exposes all modules for use in the CLI and tests

pub mod store;      // Keyed Record Store (the core)
pub mod error;
pub mod entities;
pub mod inventory;  // JSON-backed inventory log
pub mod warehouse;
pub mod finance;
pub mod grading;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use store::{check_quantity, Keyed, Named, RecordId, RecordStore, Stocked};
pub use error::{FinanceError, GradingError, StoreError};
pub use entities::{ElectronicItem, GroceryItem, InventoryItem};
pub use inventory::{InventoryLogger, LoadOutcome};
pub use warehouse::{increase_stock, remove_item, StockChange, WarehouseManager};
pub use finance::{
    Account, AccountKind, FinanceLedger, Posting, Receipt, Transaction, TransactionProcessor,
    BankTransferProcessor, CryptoWalletProcessor, MobileMoneyProcessor,
};
pub use grading::{
    Grade, Student,
    read_students, read_students_from_file, write_report, write_report_to_file,
    ensure_sample_file, students_to_store,
};
pub use config::AppConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
