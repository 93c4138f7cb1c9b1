//! serializable summary of a payoff plan, the data an export is built from
use log::debug;
use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::calendar::DueDateRule;
use crate::config::PlannerConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{PlannerError, Result};
use crate::payments::milestones::milestones;
use crate::payments::payoff::{OpenEndedProjection, PayoffProjector};
use crate::payments::projection::{ProjectionResult, ProjectionRunner};
use crate::payments::PaymentSchedule;
use crate::types::{Milestone, UtilizationState};

/// months in the default editable plan
pub const DEFAULT_PLAN_MONTHS: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub account: AccountView,
    pub payments: PaymentView,
    pub scenarios: ScenarioView,
    pub due_date: Option<DueDateView>,
    pub plan: ProjectionResult,
    pub milestones: Vec<Milestone>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountView {
    pub balance: Money,
    pub credit_limit: Money,
    pub available_credit: Money,
    pub utilization_rate: Rate,
    pub utilization_state: UtilizationState,
    pub monthly_rate: Rate,
    pub annual_rate: Rate,
    pub over_limit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentView {
    pub minimum_payment: Money,
    pub recommended_payment: Money,
    pub interest_paid_to_date: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DueDateView {
    pub cutoff_day: u32,
    pub grace_days: u32,
    pub due_day: u32,
}

/// constant-payment scenarios compared against paying the minimum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioView {
    pub minimum: ScenarioOutcome,
    pub recommended: ScenarioOutcome,
    pub custom: Option<ScenarioOutcome>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    /// monthly payment including any additional amount
    pub monthly_payment: Money,
    pub projection: OpenEndedProjection,
    /// interest saved versus the minimum scenario, `None` when either is unbounded
    pub interest_savings: Option<Money>,
    /// interest savings spread over this scenario's months
    pub monthly_savings: Option<Money>,
}

impl ScenarioOutcome {
    fn compare(monthly_payment: Money, projection: OpenEndedProjection, minimum: &OpenEndedProjection) -> Self {
        let interest_savings = match (minimum.total_interest(), projection.total_interest()) {
            (Some(baseline), Some(interest)) => Some(baseline - interest),
            _ => None,
        };

        let monthly_savings = match (interest_savings, projection.months()) {
            (Some(savings), Some(months)) if months > 0 => {
                Some(savings / rust_decimal::Decimal::from(months))
            }
            _ => None,
        };

        Self {
            monthly_payment,
            projection,
            interest_savings,
            monthly_savings,
        }
    }
}

impl PlanSummary {
    pub fn builder() -> PlanSummaryBuilder {
        PlanSummaryBuilder::new()
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

pub struct PlanSummaryBuilder {
    account: Option<Account>,
    schedule: Option<PaymentSchedule>,
    custom_payment: Option<Money>,
    additional_payment: Money,
    interest_paid: Money,
    due_date_rule: Option<DueDateRule>,
    config: PlannerConfig,
}

impl PlanSummaryBuilder {
    pub fn new() -> Self {
        Self {
            account: None,
            schedule: None,
            custom_payment: None,
            additional_payment: Money::ZERO,
            interest_paid: Money::ZERO,
            due_date_rule: None,
            config: PlannerConfig::default(),
        }
    }

    pub fn account(mut self, account: Account) -> Self {
        self.account = Some(account);
        self
    }

    pub fn schedule(mut self, schedule: PaymentSchedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// constant payment to compare, plus an optional extra amount per month
    pub fn custom_payment(mut self, monthly: Money, additional: Money) -> Self {
        self.custom_payment = Some(monthly);
        self.additional_payment = additional;
        self
    }

    /// interest already paid, seeds the cumulative totals
    pub fn interest_paid(mut self, interest: Money) -> Self {
        self.interest_paid = interest;
        self
    }

    pub fn due_date_rule(mut self, rule: DueDateRule) -> Self {
        self.due_date_rule = Some(rule);
        self
    }

    pub fn config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<PlanSummary> {
        let account = self.account.ok_or_else(|| PlannerError::InvalidConfiguration {
            message: "account is required".to_string(),
        })?;
        self.config.validate()?;

        let schedule = match self.schedule {
            Some(schedule) => schedule,
            None => PaymentSchedule::zeroed(DEFAULT_PLAN_MONTHS)?,
        };

        let minimum_payment = account.minimum_payment(&self.config);
        let recommended_payment = account.recommended_payment(&self.config);

        let projector = PayoffProjector::new(self.config.clone()).with_starting_interest(self.interest_paid);
        let minimum = projector.project(&account, minimum_payment, Money::ZERO);
        let recommended = projector.project(&account, recommended_payment, Money::ZERO);

        // a non-positive custom payment has nothing to compare
        let custom = self
            .custom_payment
            .filter(|payment| payment.is_positive())
            .map(|payment| {
                let projection = projector.project(&account, payment, self.additional_payment);
                ScenarioOutcome::compare(payment + self.additional_payment, projection, &minimum)
            });

        let plan = ProjectionRunner::new(self.config.clone())
            .with_starting_interest(self.interest_paid)
            .project(&account, &schedule);

        let due_date = match self.due_date_rule {
            Some(rule) => Some(DueDateView {
                cutoff_day: rule.cutoff_day(),
                grace_days: rule.grace_days(),
                due_day: rule.due_day()?,
            }),
            None => None,
        };

        let reached = milestones(&account, &plan, &self.config);
        debug!(
            "summary for balance {}: minimum {:?}, recommended {:?}, {} milestones",
            account.balance(),
            minimum.months(),
            recommended.months(),
            reached.len()
        );

        Ok(PlanSummary {
            account: AccountView {
                balance: account.balance(),
                credit_limit: account.credit_limit(),
                available_credit: account.available_credit(),
                utilization_rate: account.utilization_rate(),
                utilization_state: account.utilization_state(),
                monthly_rate: account.monthly_rate(),
                annual_rate: account.annual_rate(),
                over_limit: account.is_over_limit(),
            },
            payments: PaymentView {
                minimum_payment,
                recommended_payment,
                interest_paid_to_date: self.interest_paid,
            },
            scenarios: ScenarioView {
                minimum: ScenarioOutcome::compare(minimum_payment, minimum, &minimum),
                recommended: ScenarioOutcome::compare(recommended_payment, recommended, &minimum),
                custom,
            },
            due_date,
            plan,
            milestones: reached,
        })
    }
}

impl Default for PlanSummaryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
