pub mod due_date;

pub use due_date::{due_day, DueDateRule};
