use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::config::PlannerConfig;
use crate::decimal::Money;
use crate::interest::step;
use crate::payments::quality::PaymentClassifier;
use crate::payments::PaymentSchedule;
use crate::types::QualityTag;

/// one period of a fixed-schedule projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionRecord {
    pub period: u32,
    pub ending_balance: Money,
    pub payment_applied: Money,
    pub interest_accrued: Money,
    pub cumulative_interest: Money,
    /// actual reduction of the balance in this period
    pub principal_applied: Money,
    /// false when the payment did not exceed the accrued interest
    pub amortizing: bool,
    /// interest the payment left uncovered on a stalled period, not added to the balance
    pub unpaid_interest: Money,
    pub quality: QualityTag,
}

impl ProjectionRecord {
    fn paid_off(period: u32, cumulative_interest: Money) -> Self {
        Self {
            period,
            ending_balance: Money::ZERO,
            payment_applied: Money::ZERO,
            interest_accrued: Money::ZERO,
            cumulative_interest,
            principal_applied: Money::ZERO,
            amortizing: true,
            unpaid_interest: Money::ZERO,
            quality: QualityTag::PaidOff,
        }
    }

    /// payment minus interest, with forgiven interest added back
    pub fn net_principal(&self) -> Money {
        self.payment_applied - self.interest_accrued + self.unpaid_interest
    }
}

/// ordered records of one projection run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub starting_balance: Money,
    pub records: Vec<ProjectionRecord>,
}

impl ProjectionResult {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectionRecord> {
        self.records.iter()
    }

    /// balance after the last period
    pub fn final_balance(&self) -> Money {
        self.records
            .last()
            .map(|r| r.ending_balance)
            .unwrap_or(self.starting_balance)
    }

    /// cumulative interest after the last period, including any seed
    pub fn total_interest(&self) -> Money {
        self.records
            .last()
            .map(|r| r.cumulative_interest)
            .unwrap_or(Money::ZERO)
    }

    pub fn total_paid(&self) -> Money {
        self.records.iter().map(|r| r.payment_applied).sum()
    }

    pub fn total_principal(&self) -> Money {
        self.records.iter().map(|r| r.principal_applied).sum()
    }

    /// interest accrued on stalled periods that no payment covered
    pub fn total_unpaid_interest(&self) -> Money {
        self.records.iter().map(|r| r.unpaid_interest).sum()
    }

    /// first period whose payment retired the balance
    pub fn payoff_period(&self) -> Option<u32> {
        if self.starting_balance.is_zero() {
            return None;
        }
        self.records
            .iter()
            .find(|r| r.quality != QualityTag::PaidOff && r.ending_balance.is_zero())
            .map(|r| r.period)
    }

    pub fn is_paid_off(&self) -> bool {
        self.final_balance().is_zero()
    }

    /// periods where the payment did not cover the interest
    pub fn stalled_periods(&self) -> Vec<u32> {
        self.records
            .iter()
            .filter(|r| !r.amortizing)
            .map(|r| r.period)
            .collect()
    }
}

/// runs a fixed payment schedule against an account
#[derive(Debug, Clone)]
pub struct ProjectionRunner {
    config: PlannerConfig,
    starting_interest: Money,
}

impl ProjectionRunner {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            starting_interest: Money::ZERO,
        }
    }

    /// seed the cumulative interest with interest already paid
    pub fn with_starting_interest(mut self, interest: Money) -> Self {
        self.starting_interest = interest.non_negative();
        self
    }

    /// project the schedule period by period
    ///
    /// Bounded by the schedule length. A payment that does not exceed the
    /// accrued interest leaves the balance where it was and marks the record
    /// as not amortizing; it is not treated as divergence here. The interest
    /// it leaves uncovered is recorded as `unpaid_interest` instead of being
    /// capitalized.
    pub fn project(&self, account: &Account, schedule: &PaymentSchedule) -> ProjectionResult {
        let classifier = PaymentClassifier::new(&self.config.quality);
        let minimum_payment = account.minimum_payment(&self.config);
        let rate = account.monthly_rate();

        let mut records = Vec::with_capacity(schedule.len());
        let mut balance = account.balance();
        let mut cumulative_interest = self.starting_interest;

        for (index, payment) in schedule.iter().enumerate() {
            let period = index as u32 + 1;

            if !balance.is_positive() {
                records.push(ProjectionRecord::paid_off(period, cumulative_interest));
                continue;
            }

            let result = step(balance, rate, payment);
            cumulative_interest += result.interest;

            let (ending_balance, unpaid_interest) = if result.is_amortizing() {
                (result.new_balance, Money::ZERO)
            } else {
                warn!(
                    "period {}: payment {} does not cover interest {}, balance stays at {}",
                    period, payment, result.interest, balance
                );
                (balance, result.interest - payment)
            };

            records.push(ProjectionRecord {
                period,
                ending_balance,
                payment_applied: payment,
                interest_accrued: result.interest,
                cumulative_interest,
                principal_applied: balance - ending_balance,
                amortizing: result.is_amortizing(),
                unpaid_interest,
                quality: classifier.classify(payment, minimum_payment, ending_balance),
            });

            balance = ending_balance;
        }

        debug!(
            "projected {} periods: balance {} -> {}, interest {}",
            records.len(),
            account.balance(),
            balance,
            cumulative_interest
        );

        ProjectionResult {
            starting_balance: account.balance(),
            records,
        }
    }
}

impl Default for ProjectionRunner {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

/// project a schedule with the standard configuration
pub fn project(account: &Account, schedule: &PaymentSchedule) -> ProjectionResult {
    ProjectionRunner::default().project(account, schedule)
}
