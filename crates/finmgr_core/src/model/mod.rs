mod credit;
mod ids;
mod income;
mod loan;
mod savings;
mod stock;
mod summary;

pub use credit::{Bill, CreditCard};
pub use ids::{RecordId, UserId};
pub use income::{Income, PayFrequency, PayType};
pub use loan::{Loan, LoansSummary, PaymentScheduleComparisonItem, PaymentScheduleItem};
pub use savings::{SavingsCalculationRequest, SavingsCalculationResponse};
pub use stock::{
    PortfolioBalanceHistory, PortfolioPosition, PortfolioSummary, StockBar, UserStock,
};
pub use summary::{
    CreditSummary, ExpenseSummary, IncomeSummary, Summary, SummaryItem, SummaryItemType,
    SummarySource,
};
