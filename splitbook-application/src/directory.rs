use arcstr::ArcStr;
use indexmap::IndexMap;
use splitbook_domain::{
    DebtSimplifier, ExpenseRecorder, ExpenseShares, Ledger, Money, Participant, PaymentSettler,
};

use crate::error::DirectoryError;

/// Named-ledger registry, the boundary that resolves group names before any
/// core operation runs. Groups keep their creation order.
#[derive(Default)]
pub struct GroupDirectory {
    groups: IndexMap<ArcStr, Ledger>,
}

impl GroupDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails on duplicates rather than silently replacing an existing
    /// ledger, which would discard its whole history.
    pub fn create_group(&mut self, name: &str) -> Result<(), DirectoryError> {
        if self.groups.contains_key(name) {
            return Err(DirectoryError::DuplicateGroup {
                name: name.to_owned(),
            });
        }
        self.groups.insert(ArcStr::from(name), Ledger::new());
        tracing::info!("Created group {name}");
        Ok(())
    }

    pub fn add_member(
        &mut self,
        group: &str,
        participant: Participant,
    ) -> Result<(), DirectoryError> {
        let ledger = self.group_mut(group)?;
        ledger.add_member(participant.clone());
        tracing::info!("Added {participant} to group {group}");
        Ok(())
    }

    /// Records the expense and immediately resimplifies the group's debt
    /// graph, as one flow. Recording alone would leave the cached graph
    /// stale for every participant named in `shares`.
    pub fn record_expense(
        &mut self,
        group: &str,
        payer: &Participant,
        shares: &ExpenseShares,
    ) -> Result<(), DirectoryError> {
        let ledger = self.group_mut(group)?;
        ExpenseRecorder.record(ledger, payer, shares)?;
        DebtSimplifier.simplify(ledger)?;
        tracing::info!(
            "Recorded expense in {group}: {payer} paid for {} shares",
            shares.len()
        );
        Ok(())
    }

    pub fn settle_payment(
        &mut self,
        group: &str,
        from: &Participant,
        to: &Participant,
        amount: Money,
    ) -> Result<(), DirectoryError> {
        let ledger = self.group_mut(group)?;
        PaymentSettler.settle(ledger, from, to, amount)?;
        tracing::info!("Settled payment in {group}: {from} paid {amount} to {to}");
        Ok(())
    }

    pub fn group(&self, name: &str) -> Option<&Ledger> {
        self.groups.get(name)
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(ArcStr::as_str)
    }

    fn group_mut(&mut self, name: &str) -> Result<&mut Ledger, DirectoryError> {
        self.groups
            .get_mut(name)
            .ok_or_else(|| DirectoryError::UnknownGroup {
                name: name.to_owned(),
            })
    }
}
