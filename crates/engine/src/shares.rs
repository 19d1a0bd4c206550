use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, MoneyCents, ResultEngine};

/// Identity of a user, as issued by the host's identity service.
///
/// The engine never resolves users; it only needs a total order so that
/// tie-breaks in the netting sweep are deterministic.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct UserId(i64);

impl UserId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Identity of an expense record.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Generates a fresh random id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One user's slice of one expense: how much of the total they owe and how
/// much they fronted.
///
/// Both amounts are non-negative magnitudes; the sign convention lives in the
/// derived net balance (`lent - owed`), not here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseShare {
    pub expense_id: ExpenseId,
    pub user_id: UserId,
    pub amount_owed: MoneyCents,
    pub amount_lent: MoneyCents,
}

/// Net position per user over some aggregation scope.
///
/// Positive = creditor, negative = debtor. Users with no share records are
/// absent (implicitly net zero). A complete, consistent set sums to exactly
/// zero. Derived per request, never persisted.
pub type NetBalance = BTreeMap<UserId, MoneyCents>;

/// Reduces share records into a [`NetBalance`] mapping.
///
/// For each record, `net[user] += amount_lent - amount_owed`, with exact
/// integer addition and no rounding mid-sum. The records may span one expense
/// or many; the caller picks the scope.
///
/// Fails with [`EngineError::InvalidAmount`] if a share carries a negative
/// owed/lent magnitude, or if a running sum overflows. Nothing is coerced
/// silently.
pub fn net_balances<'a, I>(shares: I) -> ResultEngine<NetBalance>
where
    I: IntoIterator<Item = &'a ExpenseShare>,
{
    let mut net = NetBalance::new();

    for share in shares {
        if share.amount_owed.is_negative() || share.amount_lent.is_negative() {
            return Err(EngineError::InvalidAmount(format!(
                "negative share amount for user {} in expense {}",
                share.user_id, share.expense_id
            )));
        }

        let delta = share
            .amount_lent
            .checked_sub(share.amount_owed)
            .ok_or_else(|| {
                EngineError::InvalidAmount(format!(
                    "share amount overflow for user {}",
                    share.user_id
                ))
            })?;

        let entry = net.entry(share.user_id).or_insert(MoneyCents::ZERO);
        *entry = entry.checked_add(delta).ok_or_else(|| {
            EngineError::InvalidAmount(format!("balance overflow for user {}", share.user_id))
        })?;
    }

    Ok(net)
}
