#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod services;

pub use error::LedgerError;
pub use model::{
    Balances, DebtGraph, ExpenseShares, Ledger, Money, Participant, TransactionLog, Transfer,
};
pub use services::{DebtSimplifier, ExpenseRecorder, PaymentSettler};
