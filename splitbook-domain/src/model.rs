use std::{
    collections::BTreeMap,
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use arcstr::ArcStr;
use fxhash::FxHashSet;

/// A person taking part in shared expenses.
///
/// Identity is the display name: two participants with the same name are the
/// same entity. The name is a shared string, so clones are cheap and the
/// value can key ordered maps directly.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Participant(ArcStr);

impl Participant {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(ArcStr::from(name.as_ref()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Participant {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A signed amount in smallest currency units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub fn zero() -> Self {
        Self(0)
    }

    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    pub fn amount(self) -> i64 {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn signum(self) -> i64 {
        self.0.signum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// Net balance per participant.
///
/// Positive means the group owes the participant, negative means the
/// participant owes the group. Kept in a `BTreeMap` so iteration order is
/// stable across runs.
pub type Balances = BTreeMap<Participant, Money>;

/// Per-participant share of a single expense. Shares are non-negative.
pub type ExpenseShares = BTreeMap<Participant, Money>;

/// Debtor -> creditor -> amount owed. Amounts are strictly positive; an edge
/// that would drop to zero is removed instead.
pub type DebtGraph = BTreeMap<Participant, BTreeMap<Participant, Money>>;

/// One simplified debt edge: `from` owes `amount` to `to`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: Participant,
    pub to: Participant,
    pub amount: Money,
}

/// Append-only record of settlement and payment events.
///
/// Append access is crate-private: only the simplifier and the payment
/// settler write entries.
#[derive(Debug, Default)]
pub struct TransactionLog {
    entries: Vec<String>,
}

impl TransactionLog {
    pub(crate) fn append(&mut self, entry: String) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-group ledger state: members, net balances, the cached debt graph and
/// the transaction log.
///
/// The debt graph is a derived view of the balances, rebuilt by
/// [`crate::services::DebtSimplifier`]; it is allowed to go stale between an
/// expense being recorded and the next simplification.
#[derive(Debug, Default)]
pub struct Ledger {
    members: FxHashSet<Participant>,
    balances: Balances,
    debts: DebtGraph,
    log: TransactionLog,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent: re-adding an existing member never resets their state.
    pub fn add_member(&mut self, participant: Participant) {
        if !self.members.insert(participant.clone()) {
            return;
        }
        self.balances
            .entry(participant.clone())
            .or_insert(Money::zero());
        self.debts.entry(participant).or_default();
    }

    pub fn is_member(&self, participant: &Participant) -> bool {
        self.members.contains(participant)
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Zero for unknown participants.
    pub fn net_balance_of(&self, participant: &Participant) -> Money {
        self.balances
            .get(participant)
            .copied()
            .unwrap_or(Money::zero())
    }

    pub fn balances(&self) -> &Balances {
        &self.balances
    }

    pub fn debts(&self) -> &DebtGraph {
        &self.debts
    }

    /// What `debtor` currently owes `creditor` in the cached graph, zero if
    /// there is no such edge.
    pub fn owed(&self, debtor: &Participant, creditor: &Participant) -> Money {
        self.debts
            .get(debtor)
            .and_then(|row| row.get(creditor))
            .copied()
            .unwrap_or(Money::zero())
    }

    /// Every debt edge, ordered by debtor name then creditor name.
    pub fn all_debts(&self) -> Vec<Transfer> {
        self.debts
            .iter()
            .flat_map(|(debtor, row)| {
                row.iter().map(|(creditor, amount)| Transfer {
                    from: debtor.clone(),
                    to: creditor.clone(),
                    amount: *amount,
                })
            })
            .collect()
    }

    pub fn log(&self) -> &TransactionLog {
        &self.log
    }

    pub(crate) fn balances_mut(&mut self) -> &mut Balances {
        &mut self.balances
    }

    pub(crate) fn log_mut(&mut self) -> &mut TransactionLog {
        &mut self.log
    }

    /// Drops every cached debt edge where `participant` is the debtor. The
    /// row itself stays for the ledger's lifetime.
    pub(crate) fn clear_debt_row(&mut self, participant: &Participant) {
        self.debts.entry(participant.clone()).or_default().clear();
    }

    /// Overwrites (not adds to) any existing edge.
    pub(crate) fn insert_debt(
        &mut self,
        debtor: &Participant,
        creditor: &Participant,
        amount: Money,
    ) {
        debug_assert!(amount.signum() > 0);
        self.debts
            .entry(debtor.clone())
            .or_default()
            .insert(creditor.clone(), amount);
    }

    pub(crate) fn remove_debt(&mut self, debtor: &Participant, creditor: &Participant) {
        if let Some(row) = self.debts.get_mut(debtor) {
            row.remove(creditor);
        }
    }

    pub(crate) fn debug_assert_balanced(&self) {
        debug_assert!(
            self.balances
                .values()
                .fold(Money::zero(), |acc, balance| acc + *balance)
                .is_zero(),
            "net balances must sum to zero"
        );
    }
}
