pub mod graduated;
pub mod milestones;
pub mod payoff;
pub mod projection;
pub mod quality;

use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{PlannerError, Result};

pub use graduated::{solve_graduated_plan, GraduatedPlan, GraduatedPlanSolver};
pub use milestones::milestones;
pub use payoff::{project_to_payoff, OpenEndedProjection, PayoffProjector};
pub use projection::{project, ProjectionRecord, ProjectionResult, ProjectionRunner};
pub use quality::{classify, PaymentClassifier};

/// ordered monthly payments, period 1 first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Money>", into = "Vec<Money>")]
pub struct PaymentSchedule {
    payments: Vec<Money>,
}

impl PaymentSchedule {
    /// create a schedule, rejecting empty or negative input
    pub fn new(payments: Vec<Money>) -> Result<Self> {
        if payments.is_empty() {
            return Err(PlannerError::EmptySchedule);
        }

        if let Some((index, amount)) = payments
            .iter()
            .enumerate()
            .find(|(_, amount)| amount.is_negative())
        {
            return Err(PlannerError::NegativePayment {
                period: index as u32 + 1,
                amount: *amount,
            });
        }

        Ok(Self { payments })
    }

    /// same payment in every period
    pub fn uniform(amount: Money, periods: usize) -> Result<Self> {
        Self::new(vec![amount; periods])
    }

    /// a schedule with nothing paid yet
    pub fn zeroed(periods: usize) -> Result<Self> {
        Self::uniform(Money::ZERO, periods)
    }

    pub fn len(&self) -> usize {
        self.payments.len()
    }

    /// never true for a constructed schedule
    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    /// payment for a 1-indexed period
    pub fn payment(&self, period: u32) -> Option<Money> {
        let index = (period as usize).checked_sub(1)?;
        self.payments.get(index).copied()
    }

    pub fn payments(&self) -> &[Money] {
        &self.payments
    }

    pub fn iter(&self) -> impl Iterator<Item = Money> + '_ {
        self.payments.iter().copied()
    }

    pub fn total(&self) -> Money {
        self.payments.iter().sum()
    }

    /// copy with one period's payment replaced
    pub fn with_payment(&self, period: u32, amount: Money) -> Result<Self> {
        let mut payments = self.payments.clone();
        match (period as usize).checked_sub(1).and_then(|i| payments.get_mut(i)) {
            Some(slot) => *slot = amount,
            None => {
                return Err(PlannerError::PeriodOutOfRange {
                    period,
                    len: self.payments.len(),
                })
            }
        }
        Self::new(payments)
    }
}

impl TryFrom<Vec<Money>> for PaymentSchedule {
    type Error = PlannerError;

    fn try_from(payments: Vec<Money>) -> Result<Self> {
        Self::new(payments)
    }
}

impl From<PaymentSchedule> for Vec<Money> {
    fn from(schedule: PaymentSchedule) -> Self {
        schedule.payments
    }
}
