//! The module contains the errors the engine can return.
//!
//! The errors are:
//!
//! - [`InvalidAmount`] returned when a monetary input is malformed or
//!   violates a domain rule (negative share magnitude, overflow).
//! - [`UnbalancedLedger`] returned when the net balances handed to the
//!   netting sweep do not sum to zero within tolerance. This signals an
//!   upstream data-integrity bug and is never silently corrected.
//!
//! An empty ledger is **not** an error anywhere in the engine.
//!
//! [`InvalidAmount`]: EngineError::InvalidAmount
//! [`UnbalancedLedger`]: EngineError::UnbalancedLedger
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Unbalanced ledger: {0}")]
    UnbalancedLedger(String),
}
