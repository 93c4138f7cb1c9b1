use serde::{Deserialize, Serialize};

/// qualitative outcome of a single period's payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTag {
    /// nothing was paid while a balance was owed
    Missed,
    /// this payment retired the balance
    Payoff,
    /// at least the aggressive multiple of the minimum
    Aggressive,
    /// at least the minimum
    Adequate,
    /// something was paid, but below the minimum
    Insufficient,
    /// balance was already zero before the period started
    PaidOff,
}

/// utilization buckets for a revolving balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilizationState {
    Unused,      // 0%
    Low,         // < 30%
    Moderate,    // 30-70%
    High,        // 70-90%
    Maxed,       // 90-100%
    Overlimit,   // > 100%
}

/// achievements derived from a projected payment plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Milestone {
    /// some payment was at least double the minimum
    DoubleMinimum,
    /// a streak of consecutive payments above the minimum
    ConsistentPayer,
    /// the balance reached zero within the plan
    DebtFree,
}
