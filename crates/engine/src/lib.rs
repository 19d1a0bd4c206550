//! Debt-settlement engine for a group-expense tracker.
//!
//! The engine is pure data-in/data-out: the host reads a consistent snapshot
//! of [`ExpenseShare`] records, calls in, and serializes what comes back. No
//! storage, no authorization, no logging happens here.
//!
//! Data flows strictly upward:
//!
//! 1. [`net_balances`] reduces share records into a signed [`NetBalance`]
//!    per user (lent minus owed).
//! 2. [`settle`] turns net balances into a minimal ordered list of
//!    [`Transfer`]s that zero out the collective debt.
//! 3. [`personal_balance`] and [`group_settlement`] combine the two into the
//!    report shapes the API exposes.
pub use error::EngineError;
pub use money::MoneyCents;
pub use reports::{CounterpartyBalance, group_settlement, personal_balance};
pub use settlements::{BALANCE_EPSILON, Transfer, settle};
pub use shares::{ExpenseId, ExpenseShare, NetBalance, UserId, net_balances};

mod error;
mod money;
mod reports;
mod settlements;
mod shares;

type ResultEngine<T> = Result<T, EngineError>;
