use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("invalid loan terms: {message}")]
    InvalidTerms {
        message: String,
    },

    #[error("unsupported payment frequency: {value}")]
    UnsupportedFrequency {
        value: String,
    },

    #[error("unsupported day count method: {value}")]
    UnsupportedDayCountMethod {
        value: String,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },
}

impl ScheduleError {
    pub fn invalid_terms(message: impl Into<String>) -> Self {
        ScheduleError::InvalidTerms {
            message: message.into(),
        }
    }

    pub fn invalid_date(message: impl Into<String>) -> Self {
        ScheduleError::InvalidDate {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
