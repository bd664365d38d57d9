use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::ScheduleError;

/// unique identifier for a loan
pub type LoanId = Uuid;

/// how often installments fall due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentFrequency {
    /// due each calendar month on a fixed day
    Monthly,
    /// due every 15 calendar days
    Biweekly,
    /// due every 7 calendar days
    Weekly,
}

impl PaymentFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "monthly",
            PaymentFrequency::Biweekly => "biweekly",
            PaymentFrequency::Weekly => "weekly",
        }
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentFrequency {
    type Err = ScheduleError;

    // unknown spellings are rejected, never defaulted to monthly
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(PaymentFrequency::Monthly),
            "biweekly" => Ok(PaymentFrequency::Biweekly),
            "weekly" => Ok(PaymentFrequency::Weekly),
            other => Err(ScheduleError::UnsupportedFrequency {
                value: other.to_string(),
            }),
        }
    }
}

/// lifecycle status of a schedule entry, owned by the persistence layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InstallmentStatus {
    /// not yet paid, not yet due
    #[default]
    Pending,
    /// partially covered by payments
    Partial,
    /// fully covered
    Paid,
    /// past due date with an open balance
    Overdue,
    /// voided, excluded from collection
    Cancelled,
}

impl InstallmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallmentStatus::Pending => "pending",
            InstallmentStatus::Partial => "partial",
            InstallmentStatus::Paid => "paid",
            InstallmentStatus::Overdue => "overdue",
            InstallmentStatus::Cancelled => "cancelled",
        }
    }

    /// settled statuses are never reported as overdue
    pub fn is_settled(&self) -> bool {
        matches!(self, InstallmentStatus::Paid | InstallmentStatus::Cancelled)
    }
}

impl fmt::Display for InstallmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
