use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// outcome of applying one monthly payment to a balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    /// interest accrued on the prior balance, before the payment
    pub interest: Money,
    /// payment minus interest; zero or negative when the payment stalls
    pub principal: Money,
    /// max(prior - principal, 0)
    pub new_balance: Money,
}

impl StepResult {
    /// result for a period that starts with nothing owed
    pub const SETTLED: StepResult = StepResult {
        interest: Money::ZERO,
        principal: Money::ZERO,
        new_balance: Money::ZERO,
    };

    /// true when the payment covered more than the accrued interest
    pub fn is_amortizing(&self) -> bool {
        self.principal.is_positive()
    }
}

/// apply one month of simple interest and then the payment
///
/// A balance of zero or less is already settled: no interest accrues and the
/// payment is not consumed. The raw arithmetic is returned as-is; callers
/// decide what a non-amortizing step (`principal <= 0`) means for them.
///
/// Inputs are trusted: the balance and rate are expected to come from an
/// [`Account`](crate::account::Account), which rejects negative values, and
/// payments from a [`PaymentSchedule`](crate::payments::PaymentSchedule).
pub fn step(prior_balance: Money, monthly_rate: Rate, payment: Money) -> StepResult {
    if !prior_balance.is_positive() {
        return StepResult::SETTLED;
    }

    let interest = prior_balance.interest_at(monthly_rate);
    let principal = payment - interest;
    let new_balance = (prior_balance - principal).non_negative();

    StepResult {
        interest,
        principal,
        new_balance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_interest_before_payment() {
        let result = step(Money::from_major(1_000), Rate::from_percentage(5), Money::from_major(75));

        assert_eq!(result.interest, Money::from_major(50));
        assert_eq!(result.principal, Money::from_major(25));
        assert_eq!(result.new_balance, Money::from_major(975));
        assert!(result.is_amortizing());
    }

    #[test]
    fn test_payment_equal_to_interest_does_not_amortize() {
        let result = step(Money::from_major(1_000), Rate::from_percentage(5), Money::from_major(50));

        assert_eq!(result.principal, Money::ZERO);
        assert_eq!(result.new_balance, Money::from_major(1_000));
        assert!(!result.is_amortizing());
    }

    #[test]
    fn test_underpayment_reports_negative_principal() {
        let result = step(Money::from_major(1_000), Rate::from_percentage(5), Money::from_major(20));

        assert_eq!(result.principal, Money::from_major(-30));
        assert!(!result.is_amortizing());
    }

    #[test]
    fn test_overpayment_clamps_to_zero() {
        let result = step(Money::from_major(100), Rate::from_percentage(5), Money::from_major(500));

        assert_eq!(result.interest, Money::from_major(5));
        assert_eq!(result.new_balance, Money::ZERO);
    }

    #[test]
    fn test_zero_balance_is_settled() {
        let result = step(Money::ZERO, Rate::from_percentage(5), Money::from_major(100));
        assert_eq!(result, StepResult::SETTLED);

        let result = step(Money::from_major(-10), Rate::from_percentage(5), Money::from_major(100));
        assert_eq!(result, StepResult::SETTLED);
    }

    #[test]
    fn test_zero_rate() {
        let result = step(Money::from_major(300), Rate::ZERO, Money::from_decimal(dec!(99.99)));

        assert_eq!(result.interest, Money::ZERO);
        assert_eq!(result.new_balance, Money::from_decimal(dec!(200.01)));
    }
}
