use std::fmt::Write;

use splitbook_domain::Ledger;

use crate::strings;

/// The detailed-debts view: one line per cached debt edge, debtor name
/// order first, creditor name order within a debtor.
pub struct DebtPresenter;

impl DebtPresenter {
    pub fn render(ledger: &Ledger) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", strings::DEBTS_HEADER);
        for transfer in ledger.all_debts() {
            let _ = writeln!(
                out,
                "{} will pay {} {} to {}",
                transfer.from,
                strings::CURRENCY,
                transfer.amount,
                transfer.to
            );
        }
        let _ = writeln!(out, "{}", strings::DEBTS_FOOTER);
        out
    }
}
