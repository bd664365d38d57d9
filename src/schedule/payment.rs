use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{Result, ScheduleError};

/// fixed periodic payment that amortizes `principal` over `months`
///
/// standard annuity formula P * r * (1 + r)^n / ((1 + r)^n - 1); zero-rate
/// loans degrade to straight-line division. Rounded half-up to cents once.
pub fn level_payment(principal: Money, annual_rate: Rate, months: u32) -> Result<Money> {
    if !principal.is_positive() {
        return Err(ScheduleError::invalid_terms(format!(
            "principal must be positive, got {}",
            principal
        )));
    }
    if months == 0 {
        return Err(ScheduleError::invalid_terms("term must be at least one month"));
    }
    if annual_rate.is_negative() {
        return Err(ScheduleError::invalid_terms(format!(
            "annual rate must not be negative, got {}",
            annual_rate
        )));
    }

    let r = annual_rate.monthly();

    if r.is_zero() {
        return Ok(principal / Decimal::from(months));
    }

    let compound = compound_factor(r, months);
    let numerator = principal.as_decimal() * r * compound;
    let denominator = compound - Decimal::ONE;

    Ok(Money::from_decimal(numerator / denominator))
}

/// level payment plus monthly insurance, the installment a borrower sees
pub fn total_installment(
    principal: Money,
    annual_rate: Rate,
    months: u32,
    insurance_monthly: Money,
) -> Result<Money> {
    let base = level_payment(principal, annual_rate, months)?;
    Ok(base + insurance_monthly)
}

/// (1 + r)^n by iterated multiplication
fn compound_factor(r: Decimal, n: u32) -> Decimal {
    let base = Decimal::ONE + r;
    let mut factor = Decimal::ONE;
    for _ in 0..n {
        factor *= base;
    }
    factor
}
