//! Calculating many loans at once

use crate::error::LoanError;
use crate::model::Loan;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Calculate each loan independently, preserving input order
#[cfg(feature = "parallel")]
pub fn calculate_loans(loans: &[Loan]) -> Vec<Result<Loan, LoanError>> {
    loans.par_iter().map(Loan::calculate).collect()
}

/// Calculate each loan independently, preserving input order
#[cfg(not(feature = "parallel"))]
pub fn calculate_loans(loans: &[Loan]) -> Vec<Result<Loan, LoanError>> {
    loans.iter().map(Loan::calculate).collect()
}
