use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::errors::{PlannerError, Result};

/// statement month `due_day` is evaluated against (target month is Feb 2024)
pub const REFERENCE_YEAR: i32 = 2024;
pub const REFERENCE_MONTH: u32 = 1;

/// latest cutoff day valid in every month
pub const MAX_CUTOFF_DAY: u32 = 28;

/// statement cutoff day plus grace period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDateRule {
    cutoff_day: u32,
    grace_days: u32,
}

impl DueDateRule {
    pub fn new(cutoff_day: u32, grace_days: u32) -> Result<Self> {
        if !(1..=MAX_CUTOFF_DAY).contains(&cutoff_day) {
            return Err(PlannerError::InvalidCutoffDay { day: cutoff_day });
        }
        Ok(Self {
            cutoff_day,
            grace_days,
        })
    }

    pub fn cutoff_day(&self) -> u32 {
        self.cutoff_day
    }

    pub fn grace_days(&self) -> u32 {
        self.grace_days
    }

    /// due date for the statement cut in `year`/`month`
    ///
    /// One month after the cutoff plus the grace days, clamped to the end of
    /// that month, then pulled back to Friday if it lands on a weekend.
    pub fn due_date_for_statement(&self, year: i32, month: u32) -> Result<NaiveDate> {
        let cutoff = NaiveDate::from_ymd_opt(year, month, self.cutoff_day).ok_or_else(|| {
            PlannerError::InvalidDate {
                message: format!("no day {} in {}-{:02}", self.cutoff_day, year, month),
            }
        })?;

        let target = cutoff
            .checked_add_months(Months::new(1))
            .ok_or_else(|| PlannerError::InvalidDate {
                message: format!("{} has no following month", cutoff),
            })?;

        let last_day = days_in_month(target)?;
        let day = target.day().saturating_add(self.grace_days).min(last_day);
        let due = target.with_day(day).ok_or_else(|| PlannerError::InvalidDate {
            message: format!("no day {} in {}-{:02}", day, target.year(), target.month()),
        })?;

        Ok(skip_weekend(due))
    }

    /// day of month in the reference month
    pub fn due_day(&self) -> Result<u32> {
        self.due_date_for_statement(REFERENCE_YEAR, REFERENCE_MONTH)
            .map(|date| date.day())
    }

    /// earliest due date falling on or after today
    pub fn next_due_date(&self, time_provider: &SafeTimeProvider) -> Result<NaiveDate> {
        let today = time_provider.now().date_naive();
        let mut statement = today
            .checked_sub_months(Months::new(1))
            .ok_or_else(|| PlannerError::InvalidDate {
                message: format!("{} has no previous month", today),
            })?;

        // the previous statement may still be open; otherwise the current or next one
        for _ in 0..3 {
            let due = self.due_date_for_statement(statement.year(), statement.month())?;
            if due >= today {
                return Ok(due);
            }
            statement = statement
                .checked_add_months(Months::new(1))
                .ok_or_else(|| PlannerError::InvalidDate {
                    message: format!("{} has no following month", statement),
                })?;
        }

        Err(PlannerError::InvalidDate {
            message: format!("no due date found after {}", today),
        })
    }
}

/// due day for a cutoff and grace period in the reference month
pub fn due_day(cutoff_day: u32, grace_days: u32) -> Result<u32> {
    DueDateRule::new(cutoff_day, grace_days)?.due_day()
}

/// Saturday and Sunday move back to the preceding Friday
fn skip_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date - Duration::days(1),
        Weekday::Sun => date - Duration::days(2),
        _ => date,
    }
}

/// number of days in the month containing `date`
fn days_in_month(date: NaiveDate) -> Result<u32> {
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .ok_or_else(|| PlannerError::InvalidDate {
            message: format!("cannot find the end of {}-{:02}", date.year(), date.month()),
        })
}
