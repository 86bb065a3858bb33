// ⚠️ Error Types - Typed, recoverable failures
// Every error here is reported to the immediate caller; nothing is fatal.

use crate::store::RecordId;
use thiserror::Error;

// ============================================================================
// STORE ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("record with id {id} already exists")]
    DuplicateKey { id: RecordId },

    #[error("record with id {id} not found")]
    NotFound { id: RecordId },

    #[error("quantity cannot be negative (got {quantity})")]
    InvalidQuantity { quantity: i64 },
}

// ============================================================================
// GRADING ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum GradingError {
    #[error("cannot access student file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read student file: {0}")]
    Csv(#[from] csv::Error),

    /// Line does not have exactly three fields
    #[error("missing data in line {line}: {content}")]
    MissingField { line: u64, content: String },

    #[error("invalid ID format in line {line}: {content}")]
    InvalidId { line: u64, content: String },

    #[error("invalid score format in line {line}: {content}")]
    InvalidScore { line: u64, content: String },
}

// ============================================================================
// FINANCE ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FinanceError {
    #[error("insufficient funds: requested {requested:.2}, available {available:.2}")]
    InsufficientFunds { requested: f64, available: f64 },

    #[error("invalid transaction amount: {amount}")]
    InvalidAmount { amount: f64 },

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_messages() {
        assert_eq!(
            StoreError::DuplicateKey { id: 1 }.to_string(),
            "record with id 1 already exists"
        );
        assert_eq!(
            StoreError::NotFound { id: 999 }.to_string(),
            "record with id 999 not found"
        );
        assert_eq!(
            StoreError::InvalidQuantity { quantity: -5 }.to_string(),
            "quantity cannot be negative (got -5)"
        );
    }

    #[test]
    fn test_finance_error_wraps_store_error() {
        let err: FinanceError = StoreError::DuplicateKey { id: 3 }.into();
        assert_eq!(err, FinanceError::Store(StoreError::DuplicateKey { id: 3 }));
        assert_eq!(err.to_string(), "record with id 3 already exists");
    }
}
