use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{PlannerError, Result};

/// planner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub minimum_payment: MinimumPaymentRule,
    pub quality: QualityThresholds,
    pub limits: ProjectionLimits,
    pub recommendation: RecommendationRule,
    pub milestones: MilestoneRule,
}

/// how the card issuer derives the minimum payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimumPaymentRule {
    /// fraction of the balance, e.g. 0.05
    pub percentage: Decimal,
    /// absolute floor regardless of balance
    pub floor: Money,
}

/// thresholds used by the payment quality classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityThresholds {
    /// payments at or above `minimum * aggressive_multiplier` are aggressive
    pub aggressive_multiplier: Decimal,
}

/// bounds on iterative computations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionLimits {
    /// hard cap on open-ended projections (360 = 30 years)
    pub max_months: u32,
    /// residual balance a solved plan may leave at its final period
    pub payoff_tolerance: Money,
}

/// the "recommended payment" shown next to the minimum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRule {
    pub multiplier: Decimal,
    pub floor: Money,
}

/// parameters for milestone detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneRule {
    pub double_minimum_multiplier: Decimal,
    pub consistent_streak: u32,
}

impl PlannerConfig {
    /// standard card terms: 5% / 25 minimum, 30 year cap
    pub fn standard() -> Self {
        Self {
            minimum_payment: MinimumPaymentRule {
                percentage: dec!(0.05),
                floor: Money::from_major(25),
            },
            quality: QualityThresholds {
                aggressive_multiplier: dec!(1.5),
            },
            limits: ProjectionLimits {
                max_months: 360,
                payoff_tolerance: Money::from_decimal(dec!(0.10)),
            },
            recommendation: RecommendationRule {
                multiplier: dec!(1.5),
                floor: Money::from_major(50),
            },
            milestones: MilestoneRule {
                double_minimum_multiplier: dec!(2),
                consistent_streak: 3,
            },
        }
    }

    /// override the minimum payment rule
    pub fn with_minimum_payment(mut self, percentage: Decimal, floor: Money) -> Self {
        self.minimum_payment = MinimumPaymentRule { percentage, floor };
        self
    }

    /// override the open-ended projection cap
    pub fn with_max_months(mut self, max_months: u32) -> Self {
        self.limits.max_months = max_months;
        self
    }

    /// load from a json document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PlannerConfig = serde_json::from_str(json).map_err(|e| {
            PlannerError::InvalidConfiguration {
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// reject rules that would make projections meaningless
    pub fn validate(&self) -> Result<()> {
        if self.minimum_payment.percentage < Decimal::ZERO {
            return Err(invalid("minimum payment percentage must be non-negative"));
        }
        if self.minimum_payment.floor.is_negative() {
            return Err(invalid("minimum payment floor must be non-negative"));
        }
        if self.quality.aggressive_multiplier < Decimal::ONE {
            return Err(invalid("aggressive multiplier must be at least 1"));
        }
        if self.limits.max_months == 0 {
            return Err(invalid("projection cap must be at least one month"));
        }
        if self.limits.payoff_tolerance.is_negative() {
            return Err(invalid("payoff tolerance must be non-negative"));
        }
        if self.recommendation.multiplier < Decimal::ZERO || self.recommendation.floor.is_negative() {
            return Err(invalid("recommendation rule must be non-negative"));
        }
        if self.milestones.consistent_streak == 0 {
            return Err(invalid("consistent payment streak must be at least 1"));
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::standard()
    }
}

fn invalid(message: &str) -> PlannerError {
    PlannerError::InvalidConfiguration {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_config() {
        let config = PlannerConfig::default();
        assert_eq!(config.minimum_payment.percentage, dec!(0.05));
        assert_eq!(config.minimum_payment.floor, Money::from_major(25));
        assert_eq!(config.limits.max_months, 360);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let config = PlannerConfig::standard().with_max_months(120);
        let json = serde_json::to_string(&config).unwrap();
        let loaded = PlannerConfig::from_json(&json).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PlannerConfig::standard().with_max_months(0);
        assert!(matches!(
            config.validate(),
            Err(PlannerError::InvalidConfiguration { .. })
        ));

        let config = PlannerConfig::standard()
            .with_minimum_payment(dec!(0.05), Money::from_major(-1));
        assert!(config.validate().is_err());

        assert!(PlannerConfig::from_json("{ not json").is_err());
    }
}
