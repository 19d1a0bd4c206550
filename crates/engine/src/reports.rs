use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    ExpenseId, ExpenseShare, MoneyCents, ResultEngine, Transfer, UserId, net_balances, settle,
};

/// One row of the personal cross-expense view: how much a single counterparty
/// owes the viewing user (positive) or is owed by them (negative).
///
/// `amount` is in whole currency units, truncated toward zero. This view is
/// deliberately coarser than the group settlement view, which keeps cents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterpartyBalance {
    pub user: UserId,
    pub amount: i64,
}

/// Builds the personal cross-expense view for `viewer`.
///
/// Every expense in `shares` is aggregated and settled **independently**;
/// the resulting transfers are then folded into one signed tally per
/// counterparty from the viewer's perspective: viewer pays, subtract; viewer
/// is paid, add. Counterparties whose tally lands on exactly zero are
/// dropped before truncation, so a sub-unit tally still shows up as a zero
/// row. Output is ordered by counterparty id.
///
/// This is intentionally not the same as settling all expenses in one pass;
/// the two granularities produce observably different results and both are
/// part of the external contract (see [`group_settlement`]).
pub fn personal_balance(
    viewer: UserId,
    shares: &[ExpenseShare],
) -> ResultEngine<Vec<CounterpartyBalance>> {
    let mut by_expense: BTreeMap<ExpenseId, Vec<&ExpenseShare>> = BTreeMap::new();
    for share in shares {
        by_expense.entry(share.expense_id).or_default().push(share);
    }

    let mut tallies: BTreeMap<UserId, MoneyCents> = BTreeMap::new();
    for expense_shares in by_expense.values() {
        let net = net_balances(expense_shares.iter().copied())?;
        for transfer in settle(&net)? {
            if transfer.from_user == viewer {
                *tallies.entry(transfer.to_user).or_insert(MoneyCents::ZERO) -= transfer.amount;
            }
            if transfer.to_user == viewer {
                *tallies.entry(transfer.from_user).or_insert(MoneyCents::ZERO) +=
                    transfer.amount;
            }
        }
    }

    Ok(tallies
        .into_iter()
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(user, amount)| CounterpartyBalance {
            user,
            amount: amount.whole_units(),
        })
        .collect())
}

/// Builds the whole-group settlement view.
///
/// All shares of the group are aggregated in a **single pass** into one
/// combined net-balance mapping, which is then settled once. Amounts keep
/// full 2-decimal precision and serialize as exact decimal strings.
pub fn group_settlement(shares: &[ExpenseShare]) -> ResultEngine<Vec<Transfer>> {
    let net = net_balances(shares)?;
    settle(&net)
}
