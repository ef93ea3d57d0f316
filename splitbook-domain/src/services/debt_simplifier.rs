use std::{cmp::Ordering, collections::BinaryHeap, ops::Add};

use crate::{
    error::LedgerError,
    model::{Ledger, Money, Participant},
};

/// Heap entry ordered by amount, largest first. Equal amounts order by
/// participant name, ascending, so every run is deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
struct QueueEntry {
    amount: Money,
    participant: Participant,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.amount
            .cmp(&other.amount)
            .then_with(|| other.participant.cmp(&self.participant))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Rebuilds a ledger's cached debt graph from its current net balances.
pub struct DebtSimplifier;

impl DebtSimplifier {
    /// Greedy creditor/debtor matching over a snapshot of the balances.
    ///
    /// Creditors and debtors are drawn from two max-heaps (debtors keyed by
    /// the magnitude of what they owe). Each round settles
    /// `min(top credit, top debt)` between the two tops, records the edge,
    /// logs it, and pushes any remainder back. Only edges matched in this
    /// run are written; rows cleared by
    /// [`crate::services::ExpenseRecorder`] stay empty for participants
    /// that end up with a zero or positive balance.
    pub fn simplify(&self, ledger: &mut Ledger) -> Result<(), LedgerError> {
        let mut creditors = BinaryHeap::new();
        let mut debtors = BinaryHeap::new();

        for (participant, balance) in ledger.balances() {
            let entry = QueueEntry {
                amount: balance.abs(),
                participant: participant.clone(),
            };
            match balance.signum() {
                1 => creditors.push(entry),
                -1 => debtors.push(entry),
                _ => {}
            }
        }

        loop {
            let Some(creditor) = creditors.pop() else { break };
            let Some(debtor) = debtors.pop() else {
                creditors.push(creditor);
                break;
            };

            let settled = creditor.amount.min(debtor.amount);
            ledger.insert_debt(&debtor.participant, &creditor.participant, settled);
            ledger.log_mut().append(format!(
                "{} will pay {settled} to {}",
                debtor.participant, creditor.participant
            ));

            let credit_left = creditor.amount - settled;
            if credit_left.signum() > 0 {
                creditors.push(QueueEntry {
                    amount: credit_left,
                    participant: creditor.participant,
                });
            }
            let debt_left = debtor.amount - settled;
            if debt_left.signum() > 0 {
                debtors.push(QueueEntry {
                    amount: debt_left,
                    participant: debtor.participant,
                });
            }
        }

        // With balanced books both heaps drain together. Anything left means
        // the zero-sum invariant was already broken before this call.
        let residual = creditors
            .iter()
            .map(|entry| entry.amount)
            .fold(Money::zero(), Add::add)
            - debtors
                .iter()
                .map(|entry| entry.amount)
                .fold(Money::zero(), Add::add);
        if !residual.is_zero() {
            return Err(LedgerError::ImbalancedBalances { residual });
        }
        Ok(())
    }
}
