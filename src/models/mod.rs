pub mod ledger;
pub mod scheduler;
pub mod task;
pub mod taskset;

pub use ledger::{CompletedEntry, GroupedReport, Ledger};
pub use task::Task;
pub use taskset::TaskSet;

pub type TimeStep = i64;

pub type Priority = i64;

pub type ID = u32;
