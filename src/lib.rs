//! Task-scheduling simulator: replays a set of tasks under FCFS, SJF,
//! priority and Round-Robin scheduling and keeps a ledger of completions.

pub mod models;
pub mod report;
pub mod shell;
pub mod simulation;
pub mod utils;

pub use models::{
    scheduler, CompletedEntry, GroupedReport, Ledger, Priority, Task, TaskSet, TimeStep, ID,
};
pub use simulation::TaskScheduler;
pub use utils::{constants, task_file, SchedulingError, TaskFileError};
