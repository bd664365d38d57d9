use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::schedule::ScheduleEntry;
use crate::types::InstallmentStatus;

/// aggregate view of a schedule's progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_payments: u32,
    pub total_to_pay: Money,
    pub total_interest: Money,
    pub total_principal: Money,
    pub payments_made: u32,
    pub payments_pending: u32,
    pub amount_paid: Money,
    pub amount_pending: Money,
}

impl ScheduleSummary {
    /// fold a schedule into its totals and paid/pending splits
    ///
    /// paid counts only `paid` entries; pending counts `pending`, `partial`
    /// and `overdue`. Cancelled entries contribute to the overall totals but
    /// to neither split.
    pub fn for_entries(entries: &[ScheduleEntry]) -> Self {
        let mut summary = ScheduleSummary {
            total_payments: entries.len() as u32,
            total_to_pay: Money::ZERO,
            total_interest: Money::ZERO,
            total_principal: Money::ZERO,
            payments_made: 0,
            payments_pending: 0,
            amount_paid: Money::ZERO,
            amount_pending: Money::ZERO,
        };

        for entry in entries {
            summary.total_to_pay += entry.scheduled_payment;
            summary.total_interest += entry.scheduled_interest;
            summary.total_principal += entry.scheduled_principal;

            match entry.status {
                InstallmentStatus::Paid => {
                    summary.payments_made += 1;
                    summary.amount_paid += entry.scheduled_payment;
                }
                InstallmentStatus::Pending
                | InstallmentStatus::Partial
                | InstallmentStatus::Overdue => {
                    summary.payments_pending += 1;
                    summary.amount_pending += entry.scheduled_payment;
                }
                InstallmentStatus::Cancelled => {}
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use crate::schedule::generate_entries;
    use crate::terms::LoanTerms;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn generated_entries() -> Vec<ScheduleEntry> {
        let terms = LoanTerms::new(
            Money::from_major(12_000),
            Rate::from_percent(dec!(12)),
            12,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        generate_entries(&terms).unwrap()
    }

    #[test]
    fn test_fresh_schedule_is_fully_pending() {
        let entries = generated_entries();
        let summary = ScheduleSummary::for_entries(&entries);

        assert_eq!(summary.total_payments, 12);
        assert_eq!(summary.payments_made, 0);
        assert_eq!(summary.payments_pending, 12);
        assert_eq!(summary.amount_paid, Money::ZERO);
        assert_eq!(summary.amount_pending, summary.total_to_pay);
        assert_eq!(summary.total_principal, Money::from_major(12_000));
        assert_eq!(
            summary.total_to_pay,
            summary.total_principal + summary.total_interest
        );
    }

    #[test]
    fn test_mixed_statuses_split_correctly() {
        let mut entries = generated_entries();
        entries[0].status = InstallmentStatus::Paid;
        entries[1].status = InstallmentStatus::Paid;
        entries[2].status = InstallmentStatus::Partial;
        entries[3].status = InstallmentStatus::Overdue;
        entries[4].status = InstallmentStatus::Cancelled;

        let summary = ScheduleSummary::for_entries(&entries);

        assert_eq!(summary.payments_made, 2);
        // partial + overdue + 7 still pending
        assert_eq!(summary.payments_pending, 9);

        let paid = entries[0].scheduled_payment + entries[1].scheduled_payment;
        assert_eq!(summary.amount_paid, paid);

        // cancelled entry stays in the totals but in neither split
        assert_eq!(summary.total_payments, 12);
        assert!(summary.amount_paid + summary.amount_pending < summary.total_to_pay);
    }

    #[test]
    fn test_empty_schedule() {
        let summary = ScheduleSummary::for_entries(&[]);

        assert_eq!(summary.total_payments, 0);
        assert_eq!(summary.total_to_pay, Money::ZERO);
        assert_eq!(summary.amount_pending, Money::ZERO);
    }
}
