use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    #[error("invalid horizon: {periods} periods requested, at least 1 required")]
    InvalidHorizon {
        periods: i64,
    },

    #[error("invalid account: {field} must be non-negative, got {value}")]
    InvalidAccount {
        field: &'static str,
        value: rust_decimal::Decimal,
    },

    #[error("negative payment in period {period}: {amount}")]
    NegativePayment {
        period: u32,
        amount: Money,
    },

    #[error("payment schedule must contain at least one period")]
    EmptySchedule,

    #[error("period {period} is outside a schedule of {len} periods")]
    PeriodOutOfRange {
        period: u32,
        len: usize,
    },

    #[error("invalid cutoff day: {day}, expected 1 to 28")]
    InvalidCutoffDay {
        day: u32,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, PlannerError>;
