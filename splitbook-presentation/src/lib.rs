#![warn(clippy::uninlined_format_args)]

pub mod balance_presenter;
pub mod debt_presenter;
pub mod log_presenter;
pub mod strings;
pub mod text_table;

pub use balance_presenter::BalancePresenter;
pub use debt_presenter::DebtPresenter;
pub use log_presenter::LogPresenter;
pub use text_table::{Alignment, TextTableBuilder};
