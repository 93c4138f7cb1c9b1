use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::config::PlannerConfig;
use crate::decimal::Money;
use crate::errors::{PlannerError, Result};
use crate::interest::{step, StepResult};
use crate::payments::PaymentSchedule;

/// a solved plan together with how it was reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraduatedPlan {
    pub schedule: PaymentSchedule,
    /// balance left after simulating the final schedule
    pub final_balance: Money,
    /// true when the last payment had to be rewritten to force payoff
    pub corrected: bool,
}

/// derives a payment schedule that retires the balance in a fixed horizon
#[derive(Debug, Clone)]
pub struct GraduatedPlanSolver {
    config: PlannerConfig,
}

impl GraduatedPlanSolver {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn solve(&self, account: &Account, periods: i64) -> Result<PaymentSchedule> {
        self.solve_detailed(account, periods).map(|plan| plan.schedule)
    }

    /// even split of balance plus interest over the months left, floored at
    /// the minimum payment, then a correction pass on the final period
    pub fn solve_detailed(&self, account: &Account, periods: i64) -> Result<GraduatedPlan> {
        if periods <= 0 {
            return Err(PlannerError::InvalidHorizon { periods });
        }
        let periods = u32::try_from(periods).map_err(|_| PlannerError::InvalidHorizon { periods })?;

        let payments = self.first_pass(account, periods);
        let (payments, final_balance, corrected) = self.correct(account, payments);

        Ok(GraduatedPlan {
            schedule: PaymentSchedule::new(payments)?,
            final_balance,
            corrected,
        })
    }

    /// rewrite the final payment when the simulated residual is too large
    fn correct(&self, account: &Account, mut payments: Vec<Money>) -> (Vec<Money>, Money, bool) {
        let (balance_before_last, last) = simulate(account, &payments);
        if last.new_balance <= self.config.limits.payoff_tolerance {
            return (payments, last.new_balance, false);
        }

        debug!(
            "graduated plan leaves {} after {} periods, forcing final payment",
            last.new_balance,
            payments.len()
        );
        // the step never re-accrues on a zero balance, so this clears it
        if let Some(slot) = payments.last_mut() {
            *slot = balance_before_last + last.interest;
        }
        let final_balance = simulate(account, &payments).1.new_balance;
        (payments, final_balance, true)
    }

    fn first_pass(&self, account: &Account, periods: u32) -> Vec<Money> {
        let minimum_payment = account.minimum_payment(&self.config);
        let rate = account.monthly_rate();

        let mut remaining = account.balance();
        let mut payments = Vec::with_capacity(periods as usize);

        for period in 1..=periods {
            if !remaining.is_positive() {
                payments.push(Money::ZERO);
                continue;
            }

            let months_left = Decimal::from(periods - period + 1);
            let interest = remaining.interest_at(rate);
            let payoff = remaining + interest;

            // the floor may overshoot a small remainder, never pay past zero
            let payment = (payoff / months_left).max(minimum_payment).min(payoff);

            // a payment that only covers interest leaves the balance alone
            if payment > interest {
                remaining = (remaining - (payment - interest)).non_negative();
            }
            payments.push(payment);
        }

        payments
    }
}

impl Default for GraduatedPlanSolver {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

/// re-run payments through the step; returns the balance entering the last
/// period and the last period's step
fn simulate(account: &Account, payments: &[Money]) -> (Money, StepResult) {
    let rate = account.monthly_rate();
    let mut balance = account.balance();
    let mut before_last = balance;
    let mut last = StepResult::SETTLED;

    for payment in payments {
        before_last = balance;
        last = step(balance, rate, *payment);
        // stalled months keep their balance, as in the projection runner
        if last.is_amortizing() {
            balance = last.new_balance;
        } else if balance.is_positive() {
            last.new_balance = balance;
        }
    }

    (before_last, last)
}

/// solve with the standard configuration
pub fn solve_graduated_plan(account: &Account, periods: i64) -> Result<PaymentSchedule> {
    GraduatedPlanSolver::default().solve(account, periods)
}
