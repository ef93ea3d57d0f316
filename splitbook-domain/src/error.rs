use crate::model::Money;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A referenced participant is not a member of the group.
    #[error("'{name}' is not a member of this group")]
    UnknownParticipant { name: String },
    /// A negative share, or a non-positive payment amount.
    #[error("invalid amount: {amount}")]
    InvalidAmount { amount: Money },
    #[error("payer and recipient are the same participant")]
    SelfPayment,
    /// Net balances no longer sum to zero. This is not a caller error: it
    /// means a previous mutation corrupted the books.
    #[error("net balances do not sum to zero (residual {residual})")]
    ImbalancedBalances { residual: Money },
}

impl LedgerError {
    pub(crate) fn unknown(participant: &crate::model::Participant) -> Self {
        Self::UnknownParticipant {
            name: participant.name().to_owned(),
        }
    }
}
