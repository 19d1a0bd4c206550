use serde::{Deserialize, Serialize};

use crate::{EngineError, MoneyCents, NetBalance, ResultEngine, UserId};

/// Largest net-balance sum tolerated by [`settle`]: one minor currency unit.
///
/// Anything beyond this is an upstream data-integrity bug and is rejected as
/// [`EngineError::UnbalancedLedger`] instead of being absorbed.
pub const BALANCE_EPSILON: MoneyCents = MoneyCents::new(1);

/// A directed settlement payment from a debtor to a creditor.
///
/// Always strictly positive and never a self-transfer. The amount serializes
/// as an exact decimal string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub from_user: UserId,
    pub to_user: UserId,
    pub amount: MoneyCents,
}

/// Converts net balances into an ordered list of transfers that zero out the
/// collective debt, heuristically minimizing the number of transfers.
///
/// Deterministic two-pointer greedy sweep: nonzero balances are sorted
/// ascending by value (ties broken by user id), then the largest debtor pays
/// the largest creditor until the pointers cross. For `n` nonzero balances
/// this emits at most `n - 1` transfers in O(n log n). The exact
/// minimum-cardinality solution is combinatorially hard; this trade-off is
/// deliberate.
///
/// An empty mapping yields an empty list. Balances summing outside
/// [`BALANCE_EPSILON`] yield [`EngineError::UnbalancedLedger`] with no
/// partial result; a residual within the tolerance is treated as settled.
pub fn settle(balances: &NetBalance) -> ResultEngine<Vec<Transfer>> {
    let mut total = MoneyCents::ZERO;
    for (user, balance) in balances {
        total = total.checked_add(*balance).ok_or_else(|| {
            EngineError::InvalidAmount(format!("balance overflow at user {user}"))
        })?;
    }
    if total.abs() > BALANCE_EPSILON {
        return Err(EngineError::UnbalancedLedger(format!(
            "net balances sum to {total}, expected 0.00"
        )));
    }

    let mut dues: Vec<(UserId, MoneyCents)> = balances
        .iter()
        .filter(|(_, balance)| !balance.is_zero())
        .map(|(user, balance)| (*user, *balance))
        .collect();
    // Secondary key keeps the order independent of how the mapping was built.
    dues.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

    let mut transfers = Vec::new();
    if dues.is_empty() {
        return Ok(transfers);
    }

    let mut start = 0;
    let mut end = dues.len() - 1;
    while start < end {
        let amount = dues[start].1.abs().min(dues[end].1);
        if amount.is_zero() {
            // Whatever remains is within the tolerance; treat it as settled.
            break;
        }

        transfers.push(Transfer {
            from_user: dues[start].0,
            to_user: dues[end].0,
            amount,
        });
        dues[start].1 += amount;
        dues[end].1 -= amount;

        // When both sides zero out at once, advance only the debtor side so
        // the creditor side is still checked for a residual.
        if dues[start].1.is_zero() {
            start += 1;
        } else {
            end -= 1;
        }
    }

    Ok(transfers)
}
