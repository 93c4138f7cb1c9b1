pub mod step;

pub use step::{step, StepResult};
