/// json schedule - serialization for persistence and api responses
use chrono::NaiveDate;
use loan_amortization_rs::{AmortizationSchedule, LoanTerms, Money, Rate, ScheduleSummary, Uuid};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let terms = LoanTerms::new(
        Money::from_major(5_000),
        Rate::from_percent(dec!(7.5)),
        6,
        NaiveDate::from_ymd_opt(2024, 6, 1).ok_or("bad date")?,
    );

    let schedule = AmortizationSchedule::generate(Uuid::new_v4(), &terms)?;

    println!("=== schedule as json ===");
    println!("{}\n", serde_json::to_string_pretty(&schedule)?);

    println!("=== summary as json ===");
    let summary = ScheduleSummary::for_entries(&schedule.entries);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
