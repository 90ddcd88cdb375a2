//! Tests for save-time validation

use super::ts;
use crate::model::{Bill, CreditCard, Income, Loan, PayFrequency, PayType, UserId, UserStock};
use crate::validation::{
    is_permitted, validate_can_save_bill, validate_can_save_credit_card, validate_can_save_income,
    validate_can_save_loan, validate_can_save_user_stock, validate_type_and_frequency,
};

fn saved_loan() -> Loan {
    let mut loan = Loan::new(10_000.0, 5.0, 12).calculate().unwrap();
    loan.name = "car".into();
    loan.user_id = UserId(3);
    loan
}

fn saved_income() -> Income {
    Income {
        user_id: UserId(3),
        name: "job".into(),
        rate: 25.0,
        hours: 40.0,
        pay_type: Some(PayType::Hourly),
        gross_pay: 1_000.0,
        frequency: Some(PayFrequency::Weekly),
        tax_percentage: 0.2,
        start_dt: Some(ts("2024-01-05T00:00:00Z")),
        ..Default::default()
    }
}

#[test]
fn test_calculated_loan_can_be_saved() {
    assert_eq!(validate_can_save_loan(&saved_loan()), Ok(()));
}

#[test]
fn test_loan_checks_in_order() {
    let mut loan = saved_loan();
    loan.name.clear();
    loan.user_id = UserId(0);
    let err = validate_can_save_loan(&loan).unwrap_err();
    assert_eq!(err.field, "name");
    assert_eq!(err.to_string(), "cannot save loan without loan name");

    let mut loan = saved_loan();
    loan.user_id = UserId(0);
    assert_eq!(validate_can_save_loan(&loan).unwrap_err().field, "userId");

    let uncalculated = Loan {
        name: "car".into(),
        user_id: UserId(3),
        ..Loan::new(10_000.0, 5.0, 12)
    };
    let err = validate_can_save_loan(&uncalculated).unwrap_err();
    assert_eq!(err.message, "cannot save loan without total_cost");
}

#[test]
fn test_negative_term_cannot_be_saved() {
    let mut loan = saved_loan();
    loan.loan_term = -1;
    let err = validate_can_save_loan(&loan).unwrap_err();
    assert_eq!(err.field, "loanTerm");
    assert_eq!(err.to_string(), "cannot save loan without loan term");
}

#[test]
fn test_income_can_be_saved() {
    assert_eq!(validate_can_save_income(&saved_income()), Ok(()));
}

#[test]
fn test_income_checks_in_order() {
    let cases: [(fn(&mut Income), &str); 8] = [
        (|i| i.name.clear(), "name"),
        (|i| i.gross_pay = 0.0, "grossPay"),
        (|i| i.hours = 0.0, "hours"),
        (|i| i.rate = 0.0, "rate"),
        (|i| i.start_dt = None, "startDt"),
        (|i| i.tax_percentage = 0.0, "taxPercentage"),
        (|i| i.user_id = UserId(-1), "userId"),
        (|i| i.frequency = None, "type"),
    ];

    for (break_it, field) in cases {
        let mut income = saved_income();
        break_it(&mut income);
        assert_eq!(validate_can_save_income(&income).unwrap_err().field, field);
    }

    let mut both = saved_income();
    both.name.clear();
    both.rate = 0.0;
    assert_eq!(validate_can_save_income(&both).unwrap_err().field, "name");
}

#[test]
fn test_type_and_frequency_required() {
    let mut income = saved_income();
    income.pay_type = None;
    let err = validate_type_and_frequency(&income).unwrap_err();
    assert_eq!(err.message, "type and frequency are required");
}

#[test]
fn test_bill_validation() {
    let bill = Bill {
        user_id: UserId(1),
        name: "rent".into(),
        amount: 0.0,
        ..Default::default()
    };
    assert_eq!(validate_can_save_bill(&bill), Ok(()));

    let negative = Bill {
        amount: -5.0,
        ..bill.clone()
    };
    assert_eq!(
        validate_can_save_bill(&negative).unwrap_err().message,
        "amount cannot be negative"
    );

    let orphan = Bill {
        user_id: UserId(0),
        ..bill
    };
    assert_eq!(validate_can_save_bill(&orphan).unwrap_err().field, "userId");
}

#[test]
fn test_credit_card_validation() {
    let card = CreditCard {
        user_id: UserId(1),
        name: "visa".into(),
        balance: 0.0,
        limit: 1_000.0,
        min_payment: 25.0,
        min_payment_percentage: 2.0,
        ..Default::default()
    };
    assert_eq!(validate_can_save_credit_card(&card), Ok(()));

    for broken in [
        CreditCard {
            name: String::new(),
            ..card.clone()
        },
        CreditCard {
            min_payment: 0.0,
            ..card.clone()
        },
        CreditCard {
            min_payment_percentage: 0.0,
            ..card.clone()
        },
        CreditCard {
            user_id: UserId(0),
            ..card.clone()
        },
    ] {
        let err = validate_can_save_credit_card(&broken).unwrap_err();
        assert_eq!(err.to_string(), "credit card is invalid");
    }
}

#[test]
fn test_user_stock_validation() {
    let stock = UserStock {
        id: Default::default(),
        user_id: UserId(1),
        ticker: "VTI".into(),
        quantity: 0.0,
        effective_dt: ts("2024-01-01T00:00:00Z"),
        expiration_dt: None,
    };
    assert_eq!(validate_can_save_user_stock(&stock), Ok(()));

    let no_ticker = UserStock {
        ticker: String::new(),
        ..stock.clone()
    };
    assert_eq!(
        validate_can_save_user_stock(&no_ticker).unwrap_err().field,
        "ticker"
    );

    let short = UserStock {
        quantity: -1.0,
        ..stock
    };
    assert_eq!(
        validate_can_save_user_stock(&short).unwrap_err().message,
        "quantity must be at least 0"
    );
}

#[test]
fn test_is_permitted() {
    assert!(is_permitted(UserId(1), UserId(1), false));
    assert!(!is_permitted(UserId(1), UserId(2), false));
    assert!(is_permitted(UserId(1), UserId(2), true));
}
