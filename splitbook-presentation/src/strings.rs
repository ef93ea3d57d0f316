pub const MEMBER: &str = "Member";
pub const BALANCE: &str = "Balance";
pub const CURRENCY: &str = "Rs.";

pub const DEBTS_HEADER: &str = "================ Detailed Debts ================";
pub const DEBTS_FOOTER: &str = "=================================================";
pub const LOGS_HEADER: &str = "================ Transaction Logs ================";
pub const LOGS_FOOTER: &str = "===================================================";
