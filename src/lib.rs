pub mod account;
pub mod calendar;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod payments;
pub mod summary;
pub mod types;

// re-export key types
pub use account::Account;
pub use calendar::{due_day, DueDateRule};
pub use config::PlannerConfig;
pub use decimal::{Money, Rate};
pub use errors::{PlannerError, Result};
pub use interest::{step, StepResult};
pub use payments::{
    classify, milestones, project, project_to_payoff, solve_graduated_plan, GraduatedPlan,
    GraduatedPlanSolver, OpenEndedProjection, PaymentClassifier, PaymentSchedule,
    PayoffProjector, ProjectionRecord, ProjectionResult, ProjectionRunner,
};
pub use summary::{PlanSummary, PlanSummaryBuilder};
pub use types::{Milestone, QualityTag, UtilizationState};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
