use crate::decimal::Money;
use crate::errors::Result;
use crate::schedule::{dates, payment, ScheduleEntry};
use crate::terms::LoanTerms;
use crate::types::InstallmentStatus;

/// walk the term period by period and emit one entry per installment
///
/// The base payment is computed over the full term; grace periods suppress
/// principal amortization and charge interest plus insurance only. The final
/// period overrides the formulaic principal with the exact remaining balance
/// so rounding drift never leaves a residual.
pub fn generate_entries(terms: &LoanTerms) -> Result<Vec<ScheduleEntry>> {
    terms.validate()?;
    let start_date = terms.start_date_required()?;

    let base_payment = payment::level_payment(terms.principal, terms.annual_rate, terms.term_months)?;
    let insurance = terms.insurance_monthly;

    let mut entries = Vec::with_capacity(terms.term_months as usize);
    let mut balance = terms.principal;
    let mut previous_date = start_date;
    let mut due_date = dates::first_due_date(start_date, terms.payment_day, terms.payment_frequency)?;

    for number in 1..=terms.term_months {
        let days = terms.interest_method.days_in_period(previous_date, due_date);
        let interest = terms
            .interest_method
            .period_interest(balance, terms.annual_rate, days);
        let in_grace = number <= terms.grace_period_months;

        let (principal_portion, total_payment) = if number == terms.term_months {
            // balloon correction: clear the balance exactly
            (balance, balance + interest + insurance)
        } else if in_grace {
            (Money::ZERO, interest + insurance)
        } else {
            (base_payment - interest, base_payment + insurance)
        };

        balance = balance - principal_portion;

        entries.push(ScheduleEntry {
            payment_number: number,
            due_date,
            scheduled_payment: total_payment,
            scheduled_principal: principal_portion,
            scheduled_interest: interest,
            insurance_amount: insurance,
            remaining_balance: balance.max(Money::ZERO),
            is_grace_period: in_grace,
            status: InstallmentStatus::Pending,
        });

        if number < terms.term_months {
            previous_date = due_date;
            due_date = dates::next_due_date(due_date, terms.payment_day, terms.payment_frequency)?;
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use crate::interest::InterestMethod;
    use crate::types::PaymentFrequency;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn money(s: &str) -> Money {
        Money::from_str_exact(s).unwrap()
    }

    fn mortgage_terms() -> LoanTerms {
        LoanTerms::new(
            Money::from_major(120_000),
            Rate::from_percent(dec!(6)),
            360,
            date(2024, 1, 1),
        )
    }

    #[test]
    fn test_mortgage_first_period_split() {
        let entries = generate_entries(&mortgage_terms()).unwrap();

        assert_eq!(entries.len(), 360);

        let first = &entries[0];
        assert_eq!(first.scheduled_interest, money("600.00"));
        assert_eq!(first.scheduled_principal, money("119.46"));
        assert_eq!(first.scheduled_payment, money("719.46"));
        assert_eq!(first.status, InstallmentStatus::Pending);
        assert!(!first.is_grace_period);
    }

    #[test]
    fn test_principal_conservation_and_zero_final_balance() {
        let entries = generate_entries(&mortgage_terms()).unwrap();

        let principal_sum = entries
            .iter()
            .map(|e| e.scheduled_principal)
            .fold(Money::ZERO, |acc, x| acc + x);
        assert_eq!(principal_sum, Money::from_major(120_000));
        assert_eq!(entries.last().unwrap().remaining_balance, Money::ZERO);
    }

    #[test]
    fn test_balance_is_non_increasing() {
        let entries = generate_entries(&mortgage_terms()).unwrap();

        let mut previous = Money::from_major(120_000);
        for entry in &entries {
            assert!(entry.remaining_balance <= previous);
            previous = entry.remaining_balance;
        }
    }

    #[test]
    fn test_zero_rate_straight_line() {
        let terms = LoanTerms::new(Money::from_major(12_000), Rate::ZERO, 12, date(2024, 1, 1));
        let entries = generate_entries(&terms).unwrap();

        for entry in &entries {
            assert_eq!(entry.scheduled_interest, Money::ZERO);
            assert_eq!(entry.scheduled_principal, Money::from_major(1_000));
        }
        assert_eq!(entries.last().unwrap().remaining_balance, Money::ZERO);
    }

    #[test]
    fn test_grace_periods_charge_interest_and_insurance_only() {
        let mut terms = LoanTerms::new(
            Money::from_major(12_000),
            Rate::from_percent(dec!(12)),
            12,
            date(2024, 1, 1),
        );
        terms.grace_period_months = 3;
        terms.insurance_monthly = money("10.00");

        let entries = generate_entries(&terms).unwrap();

        for entry in &entries[..3] {
            assert!(entry.is_grace_period);
            assert_eq!(entry.scheduled_principal, Money::ZERO);
            assert_eq!(
                entry.scheduled_payment,
                entry.scheduled_interest + entry.insurance_amount
            );
            // balance untouched while amortization is deferred
            assert_eq!(entry.remaining_balance, Money::from_major(12_000));
            // interest-only on the full balance at 1% monthly
            assert_eq!(entry.scheduled_interest, money("120.00"));
        }

        assert!(!entries[3].is_grace_period);
        assert!(entries[3].scheduled_principal.is_positive());

        let last = entries.last().unwrap();
        assert_eq!(last.remaining_balance, Money::ZERO);
        assert_eq!(
            last.scheduled_payment,
            last.scheduled_principal + last.scheduled_interest + last.insurance_amount
        );
    }

    #[test]
    fn test_maximum_grace_leaves_final_amortizer() {
        let mut terms = LoanTerms::new(
            Money::from_major(6_000),
            Rate::from_percent(dec!(10)),
            6,
            date(2024, 1, 1),
        );
        terms.grace_period_months = 5;

        let entries = generate_entries(&terms).unwrap();

        for entry in &entries[..5] {
            assert_eq!(entry.scheduled_principal, Money::ZERO);
        }
        let last = entries.last().unwrap();
        assert_eq!(last.scheduled_principal, Money::from_major(6_000));
        assert_eq!(last.remaining_balance, Money::ZERO);
    }

    #[test]
    fn test_balloon_absorbs_rounding_drift() {
        // 1000 over 3 months at 5%: per-period rounding never leaves dust
        let terms = LoanTerms::new(
            Money::from_major(1_000),
            Rate::from_percent(dec!(5)),
            3,
            date(2024, 1, 1),
        );
        let entries = generate_entries(&terms).unwrap();

        let principal_sum = entries
            .iter()
            .map(|e| e.scheduled_principal)
            .fold(Money::ZERO, |acc, x| acc + x);
        assert_eq!(principal_sum, Money::from_major(1_000));
        assert_eq!(entries[2].remaining_balance, Money::ZERO);
        assert_eq!(
            entries[2].scheduled_payment,
            entries[2].scheduled_principal + entries[2].scheduled_interest
        );
    }

    #[test]
    fn test_month_end_due_dates_fall_back() {
        let mut terms = mortgage_terms();
        terms.start_date = Some(date(2024, 1, 31));
        terms.payment_day = 31;

        let entries = generate_entries(&terms).unwrap();

        assert_eq!(entries[0].due_date, date(2024, 2, 29));
        assert_eq!(entries[1].due_date, date(2024, 3, 31));
        assert_eq!(entries[2].due_date, date(2024, 4, 30));
    }

    #[test]
    fn test_actual_365_uses_elapsed_days() {
        let mut terms = LoanTerms::new(
            Money::from_major(10_000),
            Rate::from_percent(dec!(5)),
            12,
            date(2024, 1, 1),
        );
        terms.interest_method = InterestMethod::Actual365;

        let entries = generate_entries(&terms).unwrap();

        // 31 days from start to the first due date on feb 1
        assert_eq!(entries[0].due_date, date(2024, 2, 1));
        assert_eq!(entries[0].scheduled_interest, money("42.47"));

        // leap-year february: 29 days on the reduced balance
        assert_eq!(entries[1].due_date, date(2024, 3, 1));
        let expected = InterestMethod::Actual365.period_interest(
            Money::from_major(10_000) - entries[0].scheduled_principal,
            Rate::from_percent(dec!(5)),
            29,
        );
        assert_eq!(entries[1].scheduled_interest, expected);
    }

    #[test]
    fn test_weekly_frequency_steps_and_counts_days() {
        let mut terms = LoanTerms::new(
            Money::from_major(5_200),
            Rate::from_percent(dec!(10)),
            12,
            date(2024, 1, 1),
        );
        terms.payment_frequency = PaymentFrequency::Weekly;
        terms.interest_method = InterestMethod::Actual360;

        let entries = generate_entries(&terms).unwrap();

        assert_eq!(entries[0].due_date, date(2024, 1, 8));
        assert_eq!(entries[1].due_date, date(2024, 1, 15));
        // 7 days at 10%/360 on the opening balance
        assert_eq!(entries[0].scheduled_interest, money("10.11"));
        assert_eq!(entries.last().unwrap().remaining_balance, Money::ZERO);
    }

    #[test]
    fn test_missing_start_date_is_rejected() {
        let mut terms = mortgage_terms();
        terms.start_date = None;
        assert!(generate_entries(&terms).is_err());
    }

    #[test]
    fn test_invalid_terms_produce_no_partial_schedule() {
        let mut terms = mortgage_terms();
        terms.grace_period_months = 360;
        assert!(generate_entries(&terms).is_err());
    }
}
