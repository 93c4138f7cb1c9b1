use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::config::PlannerConfig;
use crate::decimal::Money;
use crate::interest::step;

/// summary of paying a constant amount until the balance is gone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum OpenEndedProjection {
    /// balance reached zero (zero months for the no-op case)
    Settled { months: u32, total_interest: Money },
    /// iteration cap hit while the balance was still shrinking
    CapReached {
        months: u32,
        total_interest: Money,
        remaining_balance: Money,
    },
    /// the payment never exceeds the interest: infinite months and interest
    Divergent,
}

impl OpenEndedProjection {
    pub const NO_OP: OpenEndedProjection = OpenEndedProjection::Settled {
        months: 0,
        total_interest: Money::ZERO,
    };

    /// months to payoff, `None` meaning never
    pub fn months(&self) -> Option<u32> {
        match self {
            OpenEndedProjection::Settled { months, .. } => Some(*months),
            OpenEndedProjection::CapReached { months, .. } => Some(*months),
            OpenEndedProjection::Divergent => None,
        }
    }

    /// interest paid until payoff, `None` meaning unbounded
    pub fn total_interest(&self) -> Option<Money> {
        match self {
            OpenEndedProjection::Settled { total_interest, .. } => Some(*total_interest),
            OpenEndedProjection::CapReached { total_interest, .. } => Some(*total_interest),
            OpenEndedProjection::Divergent => None,
        }
    }

    pub fn is_divergent(&self) -> bool {
        matches!(self, OpenEndedProjection::Divergent)
    }

    /// true only when the balance actually reached zero
    pub fn is_settled(&self) -> bool {
        matches!(self, OpenEndedProjection::Settled { .. })
    }
}

/// projects a constant monthly payment until payoff or the cap
#[derive(Debug, Clone)]
pub struct PayoffProjector {
    config: PlannerConfig,
    starting_interest: Money,
}

impl PayoffProjector {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            starting_interest: Money::ZERO,
        }
    }

    /// seed the interest total with interest already paid
    pub fn with_starting_interest(mut self, interest: Money) -> Self {
        self.starting_interest = interest.non_negative();
        self
    }

    /// pay `monthly_payment + additional` every month
    pub fn project(&self, account: &Account, monthly_payment: Money, additional: Money) -> OpenEndedProjection {
        if !monthly_payment.is_positive() || account.balance().is_zero() {
            return OpenEndedProjection::NO_OP;
        }

        let payment = monthly_payment + additional;
        let rate = account.monthly_rate();
        let max_months = self.config.limits.max_months;

        let mut balance = account.balance();
        let mut total_interest = self.starting_interest;
        let mut months = 0;

        while balance.is_positive() && months < max_months {
            let result = step(balance, rate, payment);

            // must be checked before the cap, or a stalled payment would
            // report a finite 360 months
            if !result.is_amortizing() {
                warn!(
                    "payment {} never exceeds interest {} on balance {}",
                    payment, result.interest, balance
                );
                return OpenEndedProjection::Divergent;
            }

            balance = result.new_balance;
            total_interest += result.interest;
            months += 1;
        }

        if balance.is_positive() {
            warn!(
                "payment {} leaves {} after the {} month cap",
                payment, balance, max_months
            );
            return OpenEndedProjection::CapReached {
                months,
                total_interest,
                remaining_balance: balance,
            };
        }

        debug!(
            "payment {} retires {} in {} months with {} interest",
            payment,
            account.balance(),
            months,
            total_interest
        );

        OpenEndedProjection::Settled {
            months,
            total_interest,
        }
    }
}

impl Default for PayoffProjector {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

/// open-ended projection with the standard configuration
pub fn project_to_payoff(account: &Account, monthly_payment: Money, additional: Money) -> OpenEndedProjection {
    PayoffProjector::default().project(account, monthly_payment, additional)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use rust_decimal_macros::dec;
    use test_log::test;

    fn account(balance: i64, rate: Rate) -> Account {
        Account::new(Money::from_major(balance), Money::from_major(1_000), rate).unwrap()
    }

    #[test]
    fn test_no_op_cases() {
        let card = account(1_000, Rate::from_percentage(5));
        assert_eq!(project_to_payoff(&card, Money::ZERO, Money::ZERO), OpenEndedProjection::NO_OP);
        assert_eq!(
            project_to_payoff(&card, Money::from_major(-10), Money::from_major(500)),
            OpenEndedProjection::NO_OP
        );

        let empty = account(0, Rate::from_percentage(5));
        assert_eq!(project_to_payoff(&empty, Money::from_major(50), Money::ZERO), OpenEndedProjection::NO_OP);
    }

    #[test]
    fn test_payment_equal_to_interest_diverges() {
        let card = account(1_000, Rate::from_percentage(5));
        let result = project_to_payoff(&card, Money::from_major(50), Money::ZERO);

        assert_eq!(result, OpenEndedProjection::Divergent);
        assert_eq!(result.months(), None);
        assert_eq!(result.total_interest(), None);
    }

    #[test]
    fn test_minimum_below_interest_diverges() {
        // 30% monthly makes interest 300 against a 50 minimum
        let card = account(1_000, Rate::from_percentage(30));
        let minimum = card.minimum_payment(&PlannerConfig::default());

        assert!(project_to_payoff(&card, minimum, Money::ZERO).is_divergent());
    }

    #[test]
    fn test_finite_payoff() {
        let card = account(1_000, Rate::from_percentage(5));
        let result = project_to_payoff(&card, Money::from_major(75), Money::ZERO);

        // n = ln(3) / ln(1.05) = 22.5, so the 23rd payment clears it
        assert_eq!(result.months(), Some(23));
        let interest = result.total_interest().unwrap();
        assert!(interest > Money::from_major(600));
        assert!(interest < Money::from_major(725));
        assert!(result.is_settled());
    }

    #[test]
    fn test_additional_payment_shortens_payoff() {
        let card = account(1_000, Rate::from_percentage(5));
        let base = project_to_payoff(&card, Money::from_major(75), Money::ZERO);
        let extra = project_to_payoff(&card, Money::from_major(75), Money::from_major(25));

        assert!(extra.months().unwrap() < base.months().unwrap());
        assert!(extra.total_interest().unwrap() < base.total_interest().unwrap());
    }

    #[test]
    fn test_additional_can_rescue_divergent_payment() {
        let card = account(1_000, Rate::from_percentage(5));
        let result = project_to_payoff(&card, Money::from_major(50), Money::from_major(10));
        assert!(result.is_settled());
    }

    #[test]
    fn test_cap_reached() {
        let card = account(1_000, Rate::from_decimal(dec!(0.01)));
        // 10.01 barely beats 10 of interest, payoff takes far longer than 12 months
        let projector = PayoffProjector::new(PlannerConfig::standard().with_max_months(12));
        let result = projector.project(&card, Money::from_decimal(dec!(10.01)), Money::ZERO);

        match result {
            OpenEndedProjection::CapReached { months, remaining_balance, .. } => {
                assert_eq!(months, 12);
                assert!(remaining_balance > Money::from_major(999));
            }
            other => panic!("expected cap, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_rate() {
        let card = account(1_000, Rate::ZERO);
        let result = project_to_payoff(&card, Money::from_major(100), Money::ZERO);

        assert_eq!(
            result,
            OpenEndedProjection::Settled {
                months: 10,
                total_interest: Money::ZERO,
            }
        );
    }

    #[test]
    fn test_starting_interest_seed() {
        let card = account(1_000, Rate::ZERO);
        let projector = PayoffProjector::default().with_starting_interest(Money::from_major(40));
        let result = projector.project(&card, Money::from_major(500), Money::ZERO);

        assert_eq!(result.total_interest(), Some(Money::from_major(40)));
    }
}
