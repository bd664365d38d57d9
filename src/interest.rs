use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::decimal::{Money, Rate};
use crate::errors::ScheduleError;

/// day count convention for periodic interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterestMethod {
    /// 30 days per month / 360 days per year
    #[serde(rename = "30/360")]
    Thirty360,
    /// actual elapsed days / 365
    #[serde(rename = "actual/365")]
    Actual365,
    /// actual elapsed days / 360
    #[serde(rename = "actual/360")]
    Actual360,
}

impl InterestMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterestMethod::Thirty360 => "30/360",
            InterestMethod::Actual365 => "actual/365",
            InterestMethod::Actual360 => "actual/360",
        }
    }

    /// days charged for the period ending at `due`, having started at `previous`
    pub fn days_in_period(&self, previous: NaiveDate, due: NaiveDate) -> i64 {
        match self {
            InterestMethod::Thirty360 => 30,
            InterestMethod::Actual365 | InterestMethod::Actual360 => {
                (due - previous).num_days()
            }
        }
    }

    /// interest charged on the outstanding balance for one period
    pub fn period_interest(&self, balance: Money, annual_rate: Rate, days: i64) -> Money {
        let interest = match self {
            InterestMethod::Thirty360 => balance.as_decimal() * annual_rate.monthly(),
            InterestMethod::Actual365 => {
                balance.as_decimal() * annual_rate.daily_365() * Decimal::from(days)
            }
            InterestMethod::Actual360 => {
                balance.as_decimal() * annual_rate.daily_360() * Decimal::from(days)
            }
        };
        Money::from_decimal(interest)
    }
}

impl fmt::Display for InterestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterestMethod {
    type Err = ScheduleError;

    // unknown spellings are rejected, never defaulted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "30/360" => Ok(InterestMethod::Thirty360),
            "actual/365" => Ok(InterestMethod::Actual365),
            "actual/360" => Ok(InterestMethod::Actual360),
            other => Err(ScheduleError::UnsupportedDayCountMethod {
                value: other.to_string(),
            }),
        }
    }
}
