use rust_decimal::Decimal;

use crate::config::{PlannerConfig, QualityThresholds};
use crate::decimal::Money;
use crate::types::QualityTag;

/// maps a payment to a quality tag relative to the minimum payment
#[derive(Debug, Clone)]
pub struct PaymentClassifier {
    aggressive_multiplier: Decimal,
}

impl PaymentClassifier {
    pub fn new(thresholds: &QualityThresholds) -> Self {
        Self {
            aggressive_multiplier: thresholds.aggressive_multiplier,
        }
    }

    /// missed and payoff win over the ratio checks
    pub fn classify(&self, payment: Money, minimum_payment: Money, new_balance: Money) -> QualityTag {
        if payment.is_zero() {
            QualityTag::Missed
        } else if new_balance.is_zero() {
            QualityTag::Payoff
        } else if payment >= minimum_payment * self.aggressive_multiplier {
            QualityTag::Aggressive
        } else if payment >= minimum_payment {
            QualityTag::Adequate
        } else {
            QualityTag::Insufficient
        }
    }
}

impl Default for PaymentClassifier {
    fn default() -> Self {
        Self::new(&PlannerConfig::default().quality)
    }
}

/// classify with the standard 1.5x aggressive threshold
pub fn classify(payment: Money, minimum_payment: Money, new_balance: Money) -> QualityTag {
    PaymentClassifier::default().classify(payment, minimum_payment, new_balance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn m(amount: i64) -> Money {
        Money::from_major(amount)
    }

    #[test]
    fn test_ratio_bands() {
        let minimum = m(50);

        assert_eq!(classify(m(75), minimum, m(900)), QualityTag::Aggressive);
        assert_eq!(classify(m(200), minimum, m(900)), QualityTag::Aggressive);
        assert_eq!(classify(Money::from_decimal(dec!(74.99)), minimum, m(900)), QualityTag::Adequate);
        assert_eq!(classify(m(50), minimum, m(900)), QualityTag::Adequate);
        assert_eq!(classify(m(49), minimum, m(900)), QualityTag::Insufficient);
    }

    #[test]
    fn test_precedence() {
        let minimum = m(50);

        // a zero payment is missed even if the balance happens to be zero
        assert_eq!(classify(Money::ZERO, minimum, Money::ZERO), QualityTag::Missed);
        // a small payment that clears the balance is a payoff, not insufficient
        assert_eq!(classify(m(10), minimum, Money::ZERO), QualityTag::Payoff);
    }

    #[test]
    fn test_custom_threshold() {
        let classifier = PaymentClassifier::new(&QualityThresholds {
            aggressive_multiplier: dec!(3),
        });

        assert_eq!(classifier.classify(m(100), m(50), m(900)), QualityTag::Adequate);
        assert_eq!(classifier.classify(m(150), m(50), m(900)), QualityTag::Aggressive);
    }
}
