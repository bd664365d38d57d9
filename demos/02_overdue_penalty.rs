/// overdue and penalty - read-time derivations over an explicit date
use chrono::NaiveDate;
use loan_amortization_rs::{
    accrued_interest_to_date, days_overdue, entry_penalty, generate_entries, is_overdue,
    InstallmentStatus, LoanTerms, Money, Rate,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut terms = LoanTerms::new(
        Money::from_major(10_000),
        Rate::from_percent(dec!(9)),
        24,
        NaiveDate::from_ymd_opt(2024, 1, 10).ok_or("bad date")?,
    );
    terms.late_penalty_rate = Rate::from_percent(dec!(0.5));

    let mut entries = generate_entries(&terms)?;
    entries[0].status = InstallmentStatus::Paid;

    // the caller decides what "today" is; nothing reads the wall clock
    let today = NaiveDate::from_ymd_opt(2024, 3, 20).ok_or("bad date")?;

    println!("as of {today}:\n");
    for entry in entries.iter().take(4) {
        println!(
            "#{} due {}  status {}  overdue: {} ({} days)  accrued: {}  penalty: {}",
            entry.payment_number,
            entry.due_date,
            entry.status,
            is_overdue(entry, today),
            days_overdue(entry, today),
            accrued_interest_to_date(entry, today),
            entry_penalty(entry, today, terms.late_penalty_rate),
        );
    }

    Ok(())
}
