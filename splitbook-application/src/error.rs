use splitbook_domain::LedgerError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("group '{name}' does not exist")]
    UnknownGroup { name: String },
    #[error("group '{name}' already exists")]
    DuplicateGroup { name: String },
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
