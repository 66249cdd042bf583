use super::scheduler::{Schedule, Scheduler};
use crate::constants::Algorithm;
use crate::Task;

/// Non-preemptive shortest job first.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShortestJobFirst;

impl Scheduler for ShortestJobFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
    }

    fn schedule(&self, tasks: &[Task]) -> Schedule {
        let mut order: Vec<&Task> = tasks.iter().collect();
        // sort_by_key is stable: equal times keep registration order
        order.sort_by_key(|task| task.execution_time());
        self.run_to_completion(order)
    }
}
