use crate::{
    error::LedgerError,
    model::{Ledger, Money, Participant},
};

/// Applies a direct payment between two members: balances move
/// unconditionally, and the cached debt graph is patched in place.
pub struct PaymentSettler;

impl PaymentSettler {
    /// Settle a payment of `amount` from `from` to `to`.
    ///
    /// The graph patch is a local correction against whatever `from`
    /// currently owes `to` in the cached graph: it never re-runs the full
    /// simplifier, so it can diverge from a from-scratch rebuild when other
    /// balances changed in between. Overpaying an edge flips its direction.
    pub fn settle(
        &self,
        ledger: &mut Ledger,
        from: &Participant,
        to: &Participant,
        amount: Money,
    ) -> Result<(), LedgerError> {
        if !ledger.is_member(from) {
            return Err(LedgerError::unknown(from));
        }
        if !ledger.is_member(to) {
            return Err(LedgerError::unknown(to));
        }
        if from == to {
            return Err(LedgerError::SelfPayment);
        }
        if amount.signum() <= 0 {
            return Err(LedgerError::InvalidAmount { amount });
        }

        let balances = ledger.balances_mut();
        *balances.entry(from.clone()).or_insert(Money::zero()) -= amount;
        *balances.entry(to.clone()).or_insert(Money::zero()) += amount;

        let owed = ledger.owed(from, to);
        if owed >= amount {
            let remaining = owed - amount;
            if remaining.is_zero() {
                ledger.remove_debt(from, to);
            } else {
                ledger.insert_debt(from, to, remaining);
            }
        } else {
            ledger.remove_debt(from, to);
            let reverse = ledger.owed(to, from) + (amount - owed);
            ledger.insert_debt(to, from, reverse);
        }

        ledger.log_mut().append(format!("{from} paid {amount} to {to}"));
        ledger.debug_assert_balanced();
        Ok(())
    }
}
