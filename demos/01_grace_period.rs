/// grace period - interest-only installments before amortization starts
use chrono::NaiveDate;
use loan_amortization_rs::{generate_entries, LoanTerms, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut terms = LoanTerms::new(
        Money::from_major(12_000),
        Rate::from_percent(dec!(12)),
        12,
        NaiveDate::from_ymd_opt(2024, 3, 15).ok_or("bad date")?,
    );
    terms.grace_period_months = 3;
    terms.insurance_monthly = Money::from_str_exact("15.00")?;
    terms.payment_day = 5;

    let entries = generate_entries(&terms)?;

    println!("=== 12-month loan, 3 months of grace ===\n");
    for entry in &entries {
        let marker = if entry.is_grace_period { " grace" } else { "" };
        println!(
            "{:>2}  {}  payment {:>8}  principal {:>8}  balance {:>9}{}",
            entry.payment_number,
            entry.due_date,
            entry.scheduled_payment.to_string(),
            entry.scheduled_principal.to_string(),
            entry.remaining_balance.to_string(),
            marker,
        );
    }

    Ok(())
}
