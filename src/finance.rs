// 💸 Finance - Payment processors, accounts, and the transaction ledger
//
// A transaction flows: processor → account debit → ledger.
// Savings accounts refuse to overdraw; standard accounts may go negative.

use crate::error::{FinanceError, StoreError};
use crate::store::{Keyed, RecordId, RecordStore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// TRANSACTION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: RecordId,
    pub date: DateTime<Utc>,
    pub amount: f64,
    pub category: String,
}

impl Transaction {
    pub fn new(id: RecordId, date: DateTime<Utc>, amount: f64, category: &str) -> Self {
        Transaction {
            id,
            date,
            amount,
            category: category.to_string(),
        }
    }
}

impl Keyed for Transaction {
    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - ${:.2} on {}",
            self.id,
            self.category,
            self.amount,
            self.date.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

// ============================================================================
// PROCESSORS
// ============================================================================

/// Confirmation produced by a processor
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub channel: &'static str,
    pub transaction_id: RecordId,
    pub amount: f64,
    pub category: String,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] Processed ${:.2} for {}",
            self.channel, self.amount, self.category
        )
    }
}

/// A payment channel that can carry a transaction
pub trait TransactionProcessor {
    /// Human-readable channel name
    fn channel(&self) -> &'static str;

    fn process(&self, transaction: &Transaction) -> Receipt {
        Receipt {
            channel: self.channel(),
            transaction_id: transaction.id,
            amount: transaction.amount,
            category: transaction.category.clone(),
        }
    }
}

pub struct BankTransferProcessor;

impl TransactionProcessor for BankTransferProcessor {
    fn channel(&self) -> &'static str {
        "Bank Transfer"
    }
}

pub struct MobileMoneyProcessor;

impl TransactionProcessor for MobileMoneyProcessor {
    fn channel(&self) -> &'static str {
        "Mobile Money"
    }
}

pub struct CryptoWalletProcessor;

impl TransactionProcessor for CryptoWalletProcessor {
    fn channel(&self) -> &'static str {
        "Crypto Wallet"
    }
}

// ============================================================================
// ACCOUNT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    /// Debits always apply, balance may go negative
    Standard,

    /// Debits larger than the balance are refused
    Savings,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Standard => "Standard",
            AccountKind::Savings => "Savings",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub account_number: String,
    balance: f64,
    pub kind: AccountKind,
}

impl Account {
    pub fn new(account_number: &str, initial_balance: f64, kind: AccountKind) -> Self {
        Account {
            account_number: account_number.to_string(),
            balance: initial_balance,
            kind,
        }
    }

    pub fn savings(account_number: &str, initial_balance: f64) -> Self {
        Self::new(account_number, initial_balance, AccountKind::Savings)
    }

    pub fn standard(account_number: &str, initial_balance: f64) -> Self {
        Self::new(account_number, initial_balance, AccountKind::Standard)
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Debit the transaction amount. Returns the new balance.
    pub fn apply_transaction(&mut self, transaction: &Transaction) -> Result<f64, FinanceError> {
        self.check_debit(transaction.amount)?;
        self.balance -= transaction.amount;
        Ok(self.balance)
    }

    /// Would `amount` be accepted, without touching the balance
    fn check_debit(&self, amount: f64) -> Result<(), FinanceError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(FinanceError::InvalidAmount { amount });
        }

        if self.kind == AccountKind::Savings && amount > self.balance {
            return Err(FinanceError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        Ok(())
    }
}

// ============================================================================
// LEDGER
// ============================================================================

/// Outcome of recording one transaction
#[derive(Debug, Clone, PartialEq)]
pub struct Posting {
    pub receipt: Receipt,
    pub balance: f64,
}

pub struct FinanceLedger {
    account: Account,
    transactions: RecordStore<Transaction>,
}

impl FinanceLedger {
    pub fn new(account: Account) -> Self {
        FinanceLedger {
            account,
            transactions: RecordStore::new(),
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Process a transaction through `processor`, debit the account, and keep it.
    ///
    /// Nothing changes when the id is already recorded or the account refuses
    /// the debit.
    pub fn record(
        &mut self,
        processor: &dyn TransactionProcessor,
        transaction: Transaction,
    ) -> Result<Posting, FinanceError> {
        if self.transactions.contains(transaction.id) {
            return Err(StoreError::DuplicateKey { id: transaction.id }.into());
        }

        self.account.check_debit(transaction.amount)?;

        let receipt = processor.process(&transaction);
        let balance = self.account.apply_transaction(&transaction)?;
        self.transactions.insert(transaction)?;

        Ok(Posting { receipt, balance })
    }

    pub fn get(&self, id: RecordId) -> Result<Transaction, StoreError> {
        self.transactions.get(id)
    }

    /// All recorded transactions in the order they were posted
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.list_all()
    }

    pub fn total_spent(&self) -> f64 {
        self.transactions.list_all().iter().map(|tx| tx.amount).sum()
    }
}

// ============================================================================
// TESTS
// ============================================================================
