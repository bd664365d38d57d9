use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{Result, ScheduleError};
use crate::interest::InterestMethod;
use crate::types::PaymentFrequency;

/// longest supported term
pub const MAX_TERM_MONTHS: u32 = 600;

/// immutable loan terms, range-validated before a schedule is generated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    /// annual rate as a percentage, 0-100
    pub annual_rate: Rate,
    pub term_months: u32,
    /// no schedule can be generated without a start date
    pub start_date: Option<NaiveDate>,
    /// day of month installments fall due, 1-31
    pub payment_day: u32,
    pub payment_frequency: PaymentFrequency,
    /// added to every installment
    pub insurance_monthly: Money,
    /// leading periods that charge interest and insurance only
    pub grace_period_months: u32,
    pub interest_method: InterestMethod,
    /// percent of the scheduled payment charged per day overdue
    pub late_penalty_rate: Rate,
}

impl LoanTerms {
    /// terms for a plain monthly 30/360 loan; callers adjust the rest
    pub fn new(principal: Money, annual_rate: Rate, term_months: u32, start_date: NaiveDate) -> Self {
        Self {
            principal,
            annual_rate,
            term_months,
            start_date: Some(start_date),
            payment_day: 1,
            payment_frequency: PaymentFrequency::Monthly,
            insurance_monthly: Money::ZERO,
            grace_period_months: 0,
            interest_method: InterestMethod::Thirty360,
            late_penalty_rate: Rate::ZERO,
        }
    }

    /// check every range precondition, failing fast on the first violation
    pub fn validate(&self) -> Result<()> {
        if !self.principal.is_positive() {
            return Err(ScheduleError::invalid_terms(format!(
                "principal must be positive, got {}",
                self.principal
            )));
        }
        if self.annual_rate.is_negative() {
            return Err(ScheduleError::invalid_terms(format!(
                "annual rate must not be negative, got {}",
                self.annual_rate
            )));
        }
        if self.annual_rate.as_percent() > rust_decimal::Decimal::from(100) {
            return Err(ScheduleError::invalid_terms(format!(
                "annual rate must not exceed 100%, got {}",
                self.annual_rate
            )));
        }
        if self.term_months == 0 || self.term_months > MAX_TERM_MONTHS {
            return Err(ScheduleError::invalid_terms(format!(
                "term must be between 1 and {} months, got {}",
                MAX_TERM_MONTHS, self.term_months
            )));
        }
        if self.payment_day < 1 || self.payment_day > 31 {
            return Err(ScheduleError::invalid_terms(format!(
                "payment day must be between 1 and 31, got {}",
                self.payment_day
            )));
        }
        if self.insurance_monthly.is_negative() {
            return Err(ScheduleError::invalid_terms(format!(
                "monthly insurance must not be negative, got {}",
                self.insurance_monthly
            )));
        }
        if self.grace_period_months >= self.term_months {
            return Err(ScheduleError::invalid_terms(format!(
                "grace period ({} months) must be strictly less than the term ({} months)",
                self.grace_period_months, self.term_months
            )));
        }
        if self.late_penalty_rate.is_negative() {
            return Err(ScheduleError::invalid_terms(format!(
                "late penalty rate must not be negative, got {}",
                self.late_penalty_rate
            )));
        }
        Ok(())
    }

    /// start date, or the error every schedule operation reports without one
    pub fn start_date_required(&self) -> Result<NaiveDate> {
        self.start_date
            .ok_or_else(|| ScheduleError::invalid_terms("start date is required to generate a schedule"))
    }
}
