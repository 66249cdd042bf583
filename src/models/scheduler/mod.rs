pub mod scheduler;
pub mod fcfs_scheduler;
pub mod sjf_scheduler;
pub mod priority_scheduler;
pub mod rr_scheduler;

pub use scheduler::{Dispatch, Schedule, Scheduler};
pub use fcfs_scheduler::FirstComeFirstServed;
pub use sjf_scheduler::ShortestJobFirst;
pub use priority_scheduler::PriorityScheduling;
pub use rr_scheduler::RoundRobin;
