pub mod dates;
pub mod generator;
pub mod payment;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::terms::LoanTerms;
use crate::types::{InstallmentStatus, LoanId};

pub use dates::{first_due_date, next_due_date};
pub use generator::generate_entries;
pub use payment::{level_payment, total_installment};

/// one installment of an amortization schedule, persisted verbatim by the
/// caller keyed on (loan id, payment number)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub payment_number: u32,
    pub due_date: NaiveDate,
    pub scheduled_payment: Money,
    pub scheduled_principal: Money,
    pub scheduled_interest: Money,
    pub insurance_amount: Money,
    pub remaining_balance: Money,
    pub is_grace_period: bool,
    pub status: InstallmentStatus,
}

/// full amortization schedule for a loan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub loan_id: LoanId,
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_months: u32,
    pub start_date: NaiveDate,
    pub entries: Vec<ScheduleEntry>,
    pub total_interest: Money,
    pub total_payment: Money,
}

impl AmortizationSchedule {
    /// generate the schedule for validated terms; all-or-nothing
    pub fn generate(loan_id: LoanId, terms: &LoanTerms) -> Result<Self> {
        let start_date = terms.start_date_required()?;
        let entries = generator::generate_entries(terms)?;

        let total_interest = entries
            .iter()
            .map(|e| e.scheduled_interest)
            .fold(Money::ZERO, |acc, x| acc + x);

        let total_payment = entries
            .iter()
            .map(|e| e.scheduled_payment)
            .fold(Money::ZERO, |acc, x| acc + x);

        Ok(Self {
            loan_id,
            principal: terms.principal,
            annual_rate: terms.annual_rate,
            term_months: terms.term_months,
            start_date,
            entries,
            total_interest,
            total_payment,
        })
    }

    /// entry for a specific period, 1-based
    pub fn entry(&self, payment_number: u32) -> Option<&ScheduleEntry> {
        self.entries.get(payment_number.checked_sub(1)? as usize)
    }

    /// balance outstanding after a given payment
    pub fn balance_after_payment(&self, payment_number: u32) -> Money {
        self.entry(payment_number)
            .map(|e| e.remaining_balance)
            .unwrap_or(self.principal)
    }
}
