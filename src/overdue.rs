use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::schedule::ScheduleEntry;
use crate::types::InstallmentStatus;

/// whether an entry is past due as of `today`
///
/// settled entries (paid or cancelled) are never overdue, regardless of date
pub fn is_overdue(entry: &ScheduleEntry, today: NaiveDate) -> bool {
    if entry.status.is_settled() {
        return false;
    }
    entry.due_date < today
}

/// whole days an entry has been past due as of `today`
pub fn days_overdue(entry: &ScheduleEntry, today: NaiveDate) -> i64 {
    if !is_overdue(entry, today) {
        return 0;
    }
    (today - entry.due_date).num_days()
}

/// interest considered accrued on an entry as of `today`
///
/// accrual happens in a single step at the due date, never pro-rated: zero
/// before the due date, the full scheduled interest at and after it. Paid
/// entries report the full scheduled interest regardless of date.
pub fn accrued_interest_to_date(entry: &ScheduleEntry, today: NaiveDate) -> Money {
    if entry.status == InstallmentStatus::Paid {
        return entry.scheduled_interest;
    }
    if today < entry.due_date {
        return Money::ZERO;
    }
    entry.scheduled_interest
}

/// simple-interest daily penalty on a late scheduled payment
///
/// `penalty_rate` is the percent of the scheduled payment charged per day
/// overdue; no compounding
pub fn late_payment_penalty(scheduled_payment: Money, days_overdue: i64, penalty_rate: Rate) -> Money {
    if days_overdue <= 0 || penalty_rate.is_zero() {
        return Money::ZERO;
    }
    Money::from_decimal(
        scheduled_payment.as_decimal() * penalty_rate.as_decimal() * Decimal::from(days_overdue),
    )
}

/// penalty owed on an entry as of `today`
pub fn entry_penalty(entry: &ScheduleEntry, today: NaiveDate, penalty_rate: Rate) -> Money {
    late_payment_penalty(
        entry.scheduled_payment,
        days_overdue(entry, today),
        penalty_rate,
    )
}
