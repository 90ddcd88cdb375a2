//! Monthly budget summary
//!
//! Rolls a user's loans, incomes, bills and credit cards into one view of
//! the month containing `now`: what comes in, what goes out, and how much
//! credit is in use.

use std::cmp::Ordering;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::model::{
    Bill, CreditCard, CreditSummary, ExpenseSummary, Income, Loan, Summary, SummaryItem,
    SummaryItemType, SummarySource,
};

const TAX_ITEM_NAME: &str = "income tax";

/// Everything that feeds a monthly summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BudgetInputs {
    pub loans: Vec<Loan>,
    pub incomes: Vec<Income>,
    pub bills: Vec<Bill>,
    pub credit_cards: Vec<CreditCard>,
}

fn expense(source: SummarySource, name: &str, amount: f64, balance: f64) -> SummaryItem {
    SummaryItem {
        item_type: SummaryItemType::Expense,
        source,
        name: name.to_string(),
        amount,
        balance,
    }
}

impl ExpenseSummary {
    fn recalculate(&mut self) {
        self.total_cost = self.loan_cost + self.taxes + self.bill_cost + self.credit_card_cost;
        self.total_balance = self.loan_balance + self.credit_card_balance;
    }
}

impl Summary {
    /// Loans contribute their monthly payment as cost and principal as balance
    pub fn load_loans(&mut self, loans: &[Loan]) {
        let e = &mut self.expense_summary;
        for l in loans {
            let payment = l.monthly_payment.unwrap_or(0.0);
            e.expenses
                .push(expense(SummarySource::Loan, &l.name, payment, l.total));
            e.loan_balance += l.total;
            e.loan_cost += payment;
        }
        e.recalculate();
    }

    /// Incomes contribute this month's gross pay; withheld taxes become a
    /// single expense line.
    pub fn load_incomes(&mut self, incomes: &[Income], now: Timestamp) {
        let mut taxes = 0.0;

        for i in incomes {
            let item = SummaryItem {
                item_type: SummaryItemType::Income,
                source: SummarySource::Income,
                name: i.name.clone(),
                amount: i.monthly_gross_pay(now),
                balance: 0.0,
            };
            self.income_summary.total_income += item.amount;
            self.income_summary.incomes.push(item);
            taxes += i.monthly_taxes(now);
        }

        let e = &mut self.expense_summary;
        if taxes > 0.0 {
            e.expenses
                .push(expense(SummarySource::Taxes, TAX_ITEM_NAME, taxes, 0.0));
        }
        e.taxes += taxes;
        e.recalculate();
    }

    pub fn load_bills(&mut self, bills: &[Bill]) {
        let e = &mut self.expense_summary;
        for b in bills {
            e.expenses
                .push(expense(SummarySource::Bill, &b.name, b.amount, 0.0));
            e.bill_cost += b.amount;
        }
        e.recalculate();
    }

    /// Credit cards contribute their required payment and balance, and
    /// determine the credit summary.
    pub fn load_credit_cards(&mut self, cards: &[CreditCard]) {
        let mut total_limit = 0.0;
        let e = &mut self.expense_summary;

        for cc in cards {
            let payment = cc.payment();
            e.expenses.push(expense(
                SummarySource::CreditCard,
                &cc.name,
                payment,
                cc.balance,
            ));
            e.credit_card_cost += payment;
            e.credit_card_balance += cc.balance;
            total_limit += cc.limit;
        }
        e.recalculate();

        let balance = self.expense_summary.credit_card_balance;
        self.credit_summary = CreditSummary {
            total: total_limit,
            available: total_limit - balance,
            utilization: if total_limit > 0.0 {
                (balance / total_limit * 100.0).round()
            } else {
                0.0
            },
        };
    }

    /// Compute net funds and order both lists by amount, largest first
    pub fn finalize(&mut self) {
        self.net_funds = self.income_summary.total_income - self.expense_summary.total_cost;

        let by_amount_desc =
            |a: &SummaryItem, b: &SummaryItem| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal);
        self.expense_summary.expenses.sort_by(by_amount_desc);
        self.income_summary.incomes.sort_by(by_amount_desc);
    }
}

/// Build the summary for the month containing `now`
///
/// Loans are expected to be calculated already (their `monthly_payment`
/// set) and incomes projected.
pub fn summarize(inputs: &BudgetInputs, now: Timestamp) -> Summary {
    let mut summary = Summary::default();
    summary.load_loans(&inputs.loans);
    summary.load_incomes(&inputs.incomes, now);
    summary.load_bills(&inputs.bills);
    summary.load_credit_cards(&inputs.credit_cards);
    summary.finalize();

    tracing::debug!(
        income = summary.income_summary.total_income,
        cost = summary.expense_summary.total_cost,
        net = summary.net_funds,
        "budget summarized"
    );

    summary
}
