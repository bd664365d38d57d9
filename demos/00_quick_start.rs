/// quick start - generate a schedule for a 30-year mortgage
use chrono::NaiveDate;
use loan_amortization_rs::{AmortizationSchedule, LoanTerms, Money, Rate, Uuid};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 120,000 at 6% over 360 months
    let terms = LoanTerms::new(
        Money::from_major(120_000),
        Rate::from_percent(dec!(6)),
        360,
        NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?,
    );

    let schedule = AmortizationSchedule::generate(Uuid::new_v4(), &terms)?;

    println!("payment: {}", schedule.entries[0].scheduled_payment);
    println!("total interest over the term: {}", schedule.total_interest);
    println!();
    println!("  # | due date   |  payment |  principal |  interest |    balance");
    for entry in schedule.entries.iter().take(6) {
        println!(
            "{:>3} | {} | {:>8} | {:>10} | {:>9} | {:>10}",
            entry.payment_number,
            entry.due_date,
            entry.scheduled_payment.to_string(),
            entry.scheduled_principal.to_string(),
            entry.scheduled_interest.to_string(),
            entry.remaining_balance.to_string(),
        );
    }
    println!("... {} more", schedule.entries.len() - 6);

    Ok(())
}
