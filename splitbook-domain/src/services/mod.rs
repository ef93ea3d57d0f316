pub mod debt_simplifier;
pub mod expense_recorder;
pub mod payment_settler;

pub use debt_simplifier::DebtSimplifier;
pub use expense_recorder::ExpenseRecorder;
pub use payment_settler::PaymentSettler;
