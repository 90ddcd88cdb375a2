//! Tests for income projection
//!
//! The fixed "now" is Tuesday 2024-01-23 and the default anchor is Friday
//! 2024-01-05.

use jiff::civil::{Weekday, date};

use super::{assert_close, ts};
use crate::date_math::utc_date;
use crate::error::IncomeError;
use crate::income::{next_pay_date, pays_in_month};
use crate::model::{Income, PayFrequency, PayType};

fn hourly(frequency: PayFrequency) -> Income {
    Income {
        name: "day job".into(),
        rate: 25.0,
        pay_type: Some(PayType::Hourly),
        frequency: Some(frequency),
        tax_percentage: 0.2,
        start_dt: Some(ts("2024-01-05T00:00:00Z")),
        ..Default::default()
    }
}

#[test]
fn test_weekly_next_pay() {
    let projected = hourly(PayFrequency::Weekly)
        .project(ts("2024-01-23T15:30:00Z"))
        .unwrap();

    assert_eq!(projected.next_dt, Some(ts("2024-01-26T00:00:00Z")));
    assert_eq!(projected.hours, 40.0);
    assert_eq!(projected.gross_pay, 1_000.0);
    assert_close(projected.taxes, 200.0, 1e-9);
    assert_close(projected.net_pay, 800.0, 1e-9);
}

#[test]
fn test_bi_weekly_next_pay() {
    let projected = hourly(PayFrequency::BiWeekly)
        .project(ts("2024-01-23T00:00:00Z"))
        .unwrap();

    assert_eq!(projected.next_dt, Some(ts("2024-02-02T00:00:00Z")));
    assert_eq!(projected.hours, 80.0);
    assert_eq!(projected.gross_pay, 2_000.0);
}

#[test]
fn test_monthly_next_pay_and_hours() {
    let projected = hourly(PayFrequency::Monthly)
        .project(ts("2024-01-23T00:00:00Z"))
        .unwrap();

    assert_eq!(projected.next_dt, Some(ts("2024-02-05T00:00:00Z")));
    // 21 weekdays in February 2024
    assert_eq!(projected.hours, 168.0);
    assert_eq!(projected.gross_pay, 25.0 * 168.0);
}

#[test]
fn test_payday_today_is_next_pay() {
    let today = date(2024, 1, 19);
    let start = date(2024, 1, 5);

    assert_eq!(next_pay_date(PayFrequency::Weekly, start, today).unwrap(), today);
    assert_eq!(next_pay_date(PayFrequency::BiWeekly, start, today).unwrap(), today);
    assert_eq!(
        next_pay_date(PayFrequency::Monthly, start, date(2024, 3, 5)).unwrap(),
        date(2024, 3, 5)
    );
}

#[test]
fn test_future_start_is_next_pay() {
    let start = date(2024, 6, 14);
    let today = date(2024, 1, 23);

    assert_eq!(next_pay_date(PayFrequency::BiWeekly, start, today).unwrap(), start);
    assert_eq!(next_pay_date(PayFrequency::Monthly, start, today).unwrap(), start);
}

#[test]
fn test_monthly_clamps_to_short_month() {
    let next = next_pay_date(PayFrequency::Monthly, date(2024, 1, 31), date(2024, 2, 10)).unwrap();
    assert_eq!(next, date(2024, 2, 29));
}

#[test]
fn test_weekly_next_pay_keeps_weekday() {
    let monday = date(2024, 4, 1);
    for offset in 0..14 {
        let today = crate::date_math::add_days(date(2024, 5, 1), offset).unwrap();
        let next = next_pay_date(PayFrequency::Weekly, monday, today).unwrap();
        assert_eq!(next.weekday(), Weekday::Monday);
        assert!(next >= today);
        assert!(crate::date_math::days_between(today, next).unwrap() < 7);
    }
}

#[test]
fn test_salary_uses_rate_as_gross() {
    let income = Income {
        pay_type: Some(PayType::Salary),
        rate: 3_000.0,
        ..hourly(PayFrequency::Monthly)
    };
    let projected = income.project(ts("2024-01-23T00:00:00Z")).unwrap();
    assert_eq!(projected.gross_pay, 3_000.0);
    assert_close(projected.net_pay, 2_400.0, 1e-9);
}

#[test]
fn test_supplied_values_are_kept() {
    let income = Income {
        hours: 30.0,
        gross_pay: 900.0,
        taxes: 100.0,
        net_pay: 800.0,
        ..hourly(PayFrequency::Weekly)
    };
    let projected = income.project(ts("2024-01-23T00:00:00Z")).unwrap();

    assert_eq!(projected.hours, 30.0);
    assert_eq!(projected.gross_pay, 900.0);
    assert_eq!(projected.taxes, 100.0);
    assert_eq!(projected.net_pay, 800.0);
}

#[test]
fn test_projection_errors() {
    let now = ts("2024-01-23T00:00:00Z");

    let no_rate = Income {
        rate: 0.0,
        ..hourly(PayFrequency::Weekly)
    };
    assert!(matches!(no_rate.project(now), Err(IncomeError::MissingRate)));

    let negative_tax = Income {
        tax_percentage: -0.1,
        ..hourly(PayFrequency::Weekly)
    };
    assert!(matches!(
        negative_tax.project(now),
        Err(IncomeError::NegativeTaxPercentage)
    ));

    let no_frequency = Income {
        frequency: None,
        ..hourly(PayFrequency::Weekly)
    };
    assert!(matches!(
        no_frequency.project(now),
        Err(IncomeError::MissingFrequency)
    ));

    let no_start = Income {
        start_dt: None,
        ..hourly(PayFrequency::Weekly)
    };
    assert!(matches!(no_start.project(now), Err(IncomeError::MissingStartDate)));

    let no_type = Income {
        pay_type: None,
        ..hourly(PayFrequency::Weekly)
    };
    assert!(matches!(no_type.project(now), Err(IncomeError::MissingPayType)));
}

#[test]
fn test_monthly_always_pays_once() {
    let income = hourly(PayFrequency::Monthly);
    for now in ["2024-01-23T00:00:00Z", "2023-06-01T00:00:00Z", "2030-12-31T23:59:59Z"] {
        assert_eq!(income.pays_this_month(ts(now)), 1);
    }
}

#[test]
fn test_weekly_pays_in_month() {
    let start = date(2024, 1, 5);

    assert_eq!(pays_in_month(PayFrequency::Weekly, start, date(2024, 1, 23)).unwrap(), 4);
    assert_eq!(pays_in_month(PayFrequency::Weekly, start, date(2024, 2, 10)).unwrap(), 4);
    // March 2024 opens on a Friday
    assert_eq!(pays_in_month(PayFrequency::Weekly, start, date(2024, 3, 10)).unwrap(), 5);
}

#[test]
fn test_weekly_pays_from_mid_month_start() {
    // Starts on Friday the 19th: only the 19th and 26th count in January
    assert_eq!(
        pays_in_month(PayFrequency::Weekly, date(2024, 1, 19), date(2024, 1, 23)).unwrap(),
        2
    );
}

#[test]
fn test_bi_weekly_pays_in_month() {
    let start = date(2024, 1, 5);

    assert_eq!(pays_in_month(PayFrequency::BiWeekly, start, date(2024, 1, 23)).unwrap(), 2);
    assert_eq!(pays_in_month(PayFrequency::BiWeekly, start, date(2024, 2, 1)).unwrap(), 2);
    // Mar 1, 15, 29
    assert_eq!(pays_in_month(PayFrequency::BiWeekly, start, date(2024, 3, 31)).unwrap(), 3);
}

#[test]
fn test_no_pays_before_start() {
    let start = date(2024, 2, 10);
    let today = date(2024, 1, 23);

    assert_eq!(pays_in_month(PayFrequency::Weekly, start, today).unwrap(), 0);
    assert_eq!(pays_in_month(PayFrequency::BiWeekly, start, today).unwrap(), 0);
}

#[test]
fn test_monthly_totals() {
    let now = ts("2024-01-23T00:00:00Z");
    let projected = hourly(PayFrequency::Weekly).project(now).unwrap();

    assert_eq!(projected.pays_this_month(now), 4);
    assert_eq!(projected.monthly_gross_pay(now), 4_000.0);
    assert_close(projected.monthly_taxes(now), 800.0, 1e-9);
    assert_close(projected.monthly_net_pay(now), 3_200.0, 1e-9);
}

#[test]
fn test_unknown_cycle_has_no_pays() {
    let income = Income {
        start_dt: None,
        ..hourly(PayFrequency::Weekly)
    };
    assert_eq!(income.pays_this_month(ts("2024-01-23T00:00:00Z")), 0);
}

#[test]
fn test_end_of_calendar_is_an_error() {
    let last_month = date(9999, 12, 15);
    let start = date(2024, 1, 5);

    assert!(pays_in_month(PayFrequency::Weekly, start, last_month).is_err());
    assert!(pays_in_month(PayFrequency::BiWeekly, start, last_month).is_err());
    assert_eq!(pays_in_month(PayFrequency::Monthly, start, last_month).unwrap(), 1);

    let now = ts("9999-12-30T00:00:00Z");
    for frequency in [PayFrequency::Weekly, PayFrequency::Monthly] {
        assert!(matches!(
            hourly(frequency).project(now),
            Err(IncomeError::Date(_))
        ));
    }
}

#[test]
fn test_end_of_calendar_counts_no_pays() {
    let now = ts("9999-12-15T00:00:00Z");
    let income = Income {
        gross_pay: 1_000.0,
        taxes: 200.0,
        net_pay: 800.0,
        ..hourly(PayFrequency::Weekly)
    };

    assert_eq!(income.pays_this_month(now), 0);
    assert_eq!(income.monthly_gross_pay(now), 0.0);
    assert_eq!(hourly(PayFrequency::Monthly).pays_this_month(now), 1);
}

#[test]
fn test_enum_strings() {
    let income: Income = serde_json::from_str(
        r#"{"name":"x","type":"salary","frequency":"bi-weekly","startDt":"2024-01-05T00:00:00Z"}"#,
    )
    .unwrap();
    assert_eq!(income.pay_type, Some(PayType::Salary));
    assert_eq!(income.frequency, Some(PayFrequency::BiWeekly));
    assert_eq!(utc_date(income.start_dt.unwrap()), date(2024, 1, 5));

    let json = serde_json::to_value(&income).unwrap();
    assert_eq!(json["frequency"], "bi-weekly");
    assert_eq!(json["type"], "salary");

    assert!(serde_json::from_str::<Income>(r#"{"frequency":"daily"}"#).is_err());
    assert!(serde_json::from_str::<Income>(r#"{"type":"commission"}"#).is_err());
    assert!("fortnightly".parse::<PayFrequency>().is_err());
}
