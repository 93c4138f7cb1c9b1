use crate::account::Account;
use crate::config::PlannerConfig;
use crate::payments::projection::ProjectionResult;
use crate::types::{Milestone, QualityTag};

/// milestones reached by a projected plan, in declaration order
pub fn milestones(account: &Account, result: &ProjectionResult, config: &PlannerConfig) -> Vec<Milestone> {
    let minimum = account.minimum_payment(config);
    let rule = &config.milestones;
    let double_minimum = minimum * rule.double_minimum_multiplier;

    // periods after payoff carry no payment and do not count
    let paying = result.iter().filter(|r| r.quality != QualityTag::PaidOff);

    let mut reached = Vec::new();

    if paying.clone().any(|r| r.payment_applied >= double_minimum) {
        reached.push(Milestone::DoubleMinimum);
    }

    let mut streak = 0;
    let mut longest = 0;
    for record in paying {
        if record.payment_applied > minimum {
            streak += 1;
            longest = longest.max(streak);
        } else {
            streak = 0;
        }
    }
    if longest >= rule.consistent_streak {
        reached.push(Milestone::ConsistentPayer);
    }

    if result.payoff_period().is_some() {
        reached.push(Milestone::DebtFree);
    }

    reached
}
