use super::scheduler::{Schedule, Scheduler};
use crate::constants::Algorithm;
use crate::Task;

/// Dispatches tasks strictly in registration order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstComeFirstServed;

impl Scheduler for FirstComeFirstServed {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn schedule(&self, tasks: &[Task]) -> Schedule {
        self.run_to_completion(tasks.iter().collect())
    }
}
