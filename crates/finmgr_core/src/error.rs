use thiserror::Error;

/// Errors raised while amortizing a loan
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoanError {
    #[error("cannot perform calculation without total loan amount")]
    MissingTotal,

    #[error("cannot perform calculation without interest rate")]
    MissingInterestRate,

    #[error("cannot perform calculation without loan term")]
    MissingLoanTerm,

    /// A fixed payment that never reduces the balance would amortize forever
    #[error("monthly payment of {payment:.2} does not cover first month interest of {interest:.2}")]
    PaymentBelowInterest { payment: f64, interest: f64 },

    #[error("loan did not amortize within {0} months")]
    ScheduleTooLong(usize),
}

/// Errors raised while projecting pay fields for an income
#[derive(Debug, Error)]
pub enum IncomeError {
    #[error("rate or gross pay is required")]
    MissingRate,

    #[error("tax rate must be positive")]
    NegativeTaxPercentage,

    #[error("pay frequency is required")]
    MissingFrequency,

    #[error("pay type is required")]
    MissingPayType,

    #[error("start date is required")]
    MissingStartDate,

    #[error("date calculation error: {0}")]
    Date(#[from] jiff::Error),
}

/// Errors raised by the savings goal calculator
#[derive(Debug, Error)]
pub enum SavingsError {
    #[error("goal or amount is required")]
    MissingGoalOrAmount,

    #[error("deadline is required")]
    MissingDeadline,

    #[error("pay frequency is required")]
    MissingFrequency,

    #[error("next pay date is required")]
    MissingNextPay,

    #[error("no pays remain before the deadline")]
    NoPaysBeforeDeadline,

    #[error("date calculation error: {0}")]
    Date(#[from] jiff::Error),
}

/// Errors raised while aggregating stock holdings
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("days must be between 1 and 365 inclusively, got {0}")]
    InvalidHistoryDays(i64),

    #[error("date calculation error: {0}")]
    Date(#[from] jiff::Error),
}

/// A record failed a save-time check
///
/// `field` names the offending JSON field so callers can point at it;
/// `message` is the user-facing description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Unrecognised value for one of the closed enumerations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEnumError {
    #[error("pay type '{0}' is invalid")]
    PayType(String),

    #[error("pay frequency '{0}' is invalid")]
    PayFrequency(String),
}
