use std::fmt::Write;

use splitbook_domain::Ledger;

use crate::strings;

/// The transaction-log view: one bulleted line per entry, oldest first.
pub struct LogPresenter;

impl LogPresenter {
    pub fn render(ledger: &Ledger) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", strings::LOGS_HEADER);
        for entry in ledger.log().entries() {
            let _ = writeln!(out, "- {entry}");
        }
        let _ = writeln!(out, "{}", strings::LOGS_FOOTER);
        out
    }
}
