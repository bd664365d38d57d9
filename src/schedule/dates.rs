use chrono::{Datelike, Days, Months, NaiveDate};

use crate::errors::{Result, ScheduleError};
use crate::types::PaymentFrequency;

/// first due date, one period after the loan start
pub fn first_due_date(
    start_date: NaiveDate,
    payment_day: u32,
    frequency: PaymentFrequency,
) -> Result<NaiveDate> {
    advance(start_date, payment_day, frequency)
}

/// due date of the period following `current`
pub fn next_due_date(
    current: NaiveDate,
    payment_day: u32,
    frequency: PaymentFrequency,
) -> Result<NaiveDate> {
    advance(current, payment_day, frequency)
}

fn advance(date: NaiveDate, payment_day: u32, frequency: PaymentFrequency) -> Result<NaiveDate> {
    match frequency {
        PaymentFrequency::Monthly => {
            let next = date
                .checked_add_months(Months::new(1))
                .ok_or_else(|| date_overflow(date, "one month"))?;
            Ok(snap_to_payment_day(next, payment_day))
        }
        PaymentFrequency::Biweekly => date
            .checked_add_days(Days::new(15))
            .ok_or_else(|| date_overflow(date, "15 days")),
        PaymentFrequency::Weekly => date
            .checked_add_days(Days::new(7))
            .ok_or_else(|| date_overflow(date, "7 days")),
    }
}

/// move `date` to the payment day within its month, falling back to the
/// last day of the month when the payment day does not exist there
fn snap_to_payment_day(date: NaiveDate, payment_day: u32) -> NaiveDate {
    let day = payment_day.min(days_in_month(date.year(), date.month()));
    date.with_day(day).unwrap_or(date)
}

fn date_overflow(date: NaiveDate, step: &str) -> ScheduleError {
    ScheduleError::invalid_date(format!("cannot advance {} by {}", date, step))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
