use std::borrow::Cow;

use splitbook_domain::Ledger;

use crate::{
    strings,
    text_table::{Alignment, TextTableBuilder},
};

/// Renders every member's net balance, one row per member in name order.
pub struct BalancePresenter;

impl BalancePresenter {
    pub fn render(ledger: &Ledger) -> String {
        let headers = [Cow::Borrowed(strings::MEMBER), Cow::Borrowed(strings::BALANCE)];
        let rows: Vec<[Cow<'_, str>; 2]> = ledger
            .balances()
            .iter()
            .map(|(member, balance)| {
                [
                    Cow::Borrowed(member.name()),
                    Cow::Owned(format!("{} {balance}", strings::CURRENCY)),
                ]
            })
            .collect();

        TextTableBuilder::new()
            .headers(&headers)
            .alignments(&[Alignment::Left, Alignment::Right])
            .rows(rows)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitbook_domain::{ExpenseRecorder, ExpenseShares, Money, Participant};

    #[test]
    fn renders_members_in_name_order_with_signed_amounts() {
        let mut ledger = Ledger::new();
        let [asha, bikram, chetan] = ["Asha", "Bikram", "Chetan"].map(Participant::new);
        for member in [&asha, &bikram, &chetan] {
            ledger.add_member(member.clone());
        }
        let shares: ExpenseShares = [
            (asha.clone(), Money::from_i64(100)),
            (bikram.clone(), Money::from_i64(100)),
            (chetan.clone(), Money::from_i64(100)),
        ]
        .into_iter()
        .collect();
        ExpenseRecorder
            .record(&mut ledger, &asha, &shares)
            .expect("recording failed");

        let expected = "\
Member   Balance
------  --------
Asha     Rs. 200
Bikram  Rs. -100
Chetan  Rs. -100
";
        assert_eq!(BalancePresenter::render(&ledger), expected);
    }
}
