use crate::{
    error::LedgerError,
    model::{ExpenseShares, Ledger, Money, Participant},
};

/// Applies a shared expense to a ledger's net balances.
pub struct ExpenseRecorder;

impl ExpenseRecorder {
    /// Record an expense paid by `payer`, split per `shares`.
    ///
    /// Shares may include the payer's own part; that entry leaves balances
    /// untouched but still clears the payer's cached debt row. Every
    /// participant appearing in `shares` has their cached debt row dropped,
    /// so the caller is expected to run [`crate::services::DebtSimplifier`]
    /// right afterwards to rebuild a consistent graph.
    ///
    /// Expenses are not logged; only settlements and direct payments are.
    pub fn record(
        &self,
        ledger: &mut Ledger,
        payer: &Participant,
        shares: &ExpenseShares,
    ) -> Result<(), LedgerError> {
        if !ledger.is_member(payer) {
            return Err(LedgerError::unknown(payer));
        }
        for (participant, share) in shares {
            if !ledger.is_member(participant) {
                return Err(LedgerError::unknown(participant));
            }
            if share.signum() < 0 {
                return Err(LedgerError::InvalidAmount { amount: *share });
            }
        }

        for (participant, share) in shares {
            if participant != payer {
                let balances = ledger.balances_mut();
                *balances.entry(participant.clone()).or_insert(Money::zero()) -= *share;
                *balances.entry(payer.clone()).or_insert(Money::zero()) += *share;
            }
            ledger.clear_debt_row(participant);
        }
        ledger.debug_assert_balanced();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::DebtSimplifier;
    use rstest::{fixture, rstest};

    #[fixture]
    fn trip() -> (Ledger, Vec<Participant>) {
        let mut ledger = Ledger::new();
        let members: Vec<Participant> = ["Asha", "Bikram", "Chetan"]
            .iter()
            .map(Participant::new)
            .collect();
        for member in &members {
            ledger.add_member(member.clone());
        }
        (ledger, members)
    }

    fn shares_of(pairs: &[(&Participant, i64)]) -> ExpenseShares {
        pairs
            .iter()
            .map(|(participant, share)| ((*participant).clone(), Money::from_i64(*share)))
            .collect()
    }

    #[rstest]
    fn splits_an_expense_across_balances(trip: (Ledger, Vec<Participant>)) {
        let (mut ledger, members) = trip;
        let [asha, bikram, chetan] = [&members[0], &members[1], &members[2]];

        ExpenseRecorder
            .record(
                &mut ledger,
                asha,
                &shares_of(&[(asha, 100), (bikram, 100), (chetan, 100)]),
            )
            .expect("recording failed");

        assert_eq!(ledger.net_balance_of(asha), Money::from_i64(200));
        assert_eq!(ledger.net_balance_of(bikram), Money::from_i64(-100));
        assert_eq!(ledger.net_balance_of(chetan), Money::from_i64(-100));
        assert!(ledger.log().is_empty());
    }

    #[rstest]
    fn payer_share_is_a_balance_noop_but_clears_their_debt_row(
        trip: (Ledger, Vec<Participant>),
    ) {
        let (mut ledger, members) = trip;
        let [asha, bikram] = [&members[0], &members[1]];

        // Leave Asha owing Bikram in the cached graph.
        ExpenseRecorder
            .record(&mut ledger, bikram, &shares_of(&[(asha, 50)]))
            .expect("recording failed");
        DebtSimplifier.simplify(&mut ledger).expect("simplify failed");
        assert_eq!(ledger.owed(asha, bikram), Money::from_i64(50));

        // An expense whose shares name only the payer moves no money, but
        // drops the payer's stale row.
        ExpenseRecorder
            .record(&mut ledger, asha, &shares_of(&[(asha, 30)]))
            .expect("recording failed");

        assert_eq!(ledger.net_balance_of(asha), Money::from_i64(-50));
        assert_eq!(ledger.owed(asha, bikram), Money::zero());
    }

    #[rstest]
    fn zero_shares_are_allowed(trip: (Ledger, Vec<Participant>)) {
        let (mut ledger, members) = trip;
        let [asha, bikram] = [&members[0], &members[1]];

        ExpenseRecorder
            .record(&mut ledger, asha, &shares_of(&[(bikram, 0)]))
            .expect("recording failed");

        assert_eq!(ledger.net_balance_of(asha), Money::zero());
        assert_eq!(ledger.net_balance_of(bikram), Money::zero());
    }

    #[rstest]
    fn rejects_unknown_payer(trip: (Ledger, Vec<Participant>)) {
        let (mut ledger, members) = trip;
        let ghost = Participant::new("Ghost");

        let err = ExpenseRecorder
            .record(&mut ledger, &ghost, &shares_of(&[(&members[0], 10)]))
            .unwrap_err();
        assert_eq!(
            err,
            LedgerError::UnknownParticipant {
                name: "Ghost".to_owned()
            }
        );
    }

    #[rstest]
    fn rejects_unknown_share_participant(trip: (Ledger, Vec<Participant>)) {
        let (mut ledger, members) = trip;
        let ghost = Participant::new("Ghost");

        let err = ExpenseRecorder
            .record(&mut ledger, &members[0], &shares_of(&[(&ghost, 10)]))
            .unwrap_err();
        assert_eq!(
            err,
            LedgerError::UnknownParticipant {
                name: "Ghost".to_owned()
            }
        );
        // Validation happens before any mutation.
        assert_eq!(ledger.net_balance_of(&members[0]), Money::zero());
    }

    #[rstest]
    fn rejects_negative_share(trip: (Ledger, Vec<Participant>)) {
        let (mut ledger, members) = trip;

        let err = ExpenseRecorder
            .record(&mut ledger, &members[0], &shares_of(&[(&members[1], -5)]))
            .unwrap_err();
        assert_eq!(
            err,
            LedgerError::InvalidAmount {
                amount: Money::from_i64(-5)
            }
        );
    }
}
