use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::PlannerConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{PlannerError, Result};
use crate::types::UtilizationState;

/// snapshot of a credit card account at the start of a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Account {
    balance: Money,
    credit_limit: Money,
    monthly_rate: Rate,
}

impl Account {
    /// create an account snapshot, rejecting negative inputs
    pub fn new(balance: Money, credit_limit: Money, monthly_rate: Rate) -> Result<Self> {
        if balance.is_negative() {
            return Err(PlannerError::InvalidAccount {
                field: "balance",
                value: balance.as_decimal(),
            });
        }
        if credit_limit.is_negative() {
            return Err(PlannerError::InvalidAccount {
                field: "credit_limit",
                value: credit_limit.as_decimal(),
            });
        }
        if monthly_rate.is_negative() {
            return Err(PlannerError::InvalidAccount {
                field: "monthly_rate",
                value: monthly_rate.as_decimal(),
            });
        }

        Ok(Self {
            balance,
            credit_limit,
            monthly_rate,
        })
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn credit_limit(&self) -> Money {
        self.credit_limit
    }

    pub fn monthly_rate(&self) -> Rate {
        self.monthly_rate
    }

    /// nominal annual rate shown to the user
    pub fn annual_rate(&self) -> Rate {
        self.monthly_rate.annualized()
    }

    /// max(balance * percentage, floor)
    pub fn minimum_payment(&self, config: &PlannerConfig) -> Money {
        let rule = &config.minimum_payment;
        (self.balance * rule.percentage).max(rule.floor)
    }

    /// max(minimum * multiplier, floor)
    pub fn recommended_payment(&self, config: &PlannerConfig) -> Money {
        let rule = &config.recommendation;
        (self.minimum_payment(config) * rule.multiplier).max(rule.floor)
    }

    /// interest the current balance accrues in one month
    pub fn monthly_interest(&self) -> Money {
        self.balance.interest_at(self.monthly_rate)
    }

    /// remaining credit, negative when over the limit
    pub fn available_credit(&self) -> Money {
        self.credit_limit - self.balance
    }

    pub fn is_over_limit(&self) -> bool {
        self.balance > self.credit_limit
    }

    /// balance as a fraction of the credit limit
    pub fn utilization_rate(&self) -> Rate {
        Rate::from_decimal(
            self.balance
                .ratio_to(self.credit_limit)
                .unwrap_or(Decimal::ZERO),
        )
    }

    pub fn utilization_state(&self) -> UtilizationState {
        if self.balance.is_zero() {
            return UtilizationState::Unused;
        }
        // any balance against a zero limit is over the limit
        if self.credit_limit.is_zero() {
            return UtilizationState::Overlimit;
        }

        let rate = self.utilization_rate();
        if rate < Rate::from_percentage(30) {
            UtilizationState::Low
        } else if rate < Rate::from_percentage(70) {
            UtilizationState::Moderate
        } else if rate < Rate::from_percentage(90) {
            UtilizationState::High
        } else if rate <= Rate::from_percentage(100) {
            UtilizationState::Maxed
        } else {
            UtilizationState::Overlimit
        }
    }
}
