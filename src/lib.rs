pub mod decimal;
pub mod errors;
pub mod interest;
pub mod overdue;
pub mod schedule;
pub mod summary;
pub mod terms;
pub mod types;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{Result, ScheduleError};
pub use interest::InterestMethod;
pub use overdue::{
    accrued_interest_to_date, days_overdue, entry_penalty, is_overdue, late_payment_penalty,
};
pub use schedule::{
    first_due_date, generate_entries, level_payment, next_due_date, total_installment,
    AmortizationSchedule, ScheduleEntry,
};
pub use summary::ScheduleSummary;
pub use terms::{LoanTerms, MAX_TERM_MONTHS};
pub use types::{InstallmentStatus, LoanId, PaymentFrequency};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
