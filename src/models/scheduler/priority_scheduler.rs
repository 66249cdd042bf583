use super::scheduler::{Schedule, Scheduler};
use crate::constants::Algorithm;
use crate::Task;

/// Non-preemptive priority scheduling; a lower number dispatches first and
/// equal priorities fall back to registration order.
#[derive(Debug, Default, Clone, Copy)]
pub struct PriorityScheduling;

impl Scheduler for PriorityScheduling {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Priority
    }

    fn schedule(&self, tasks: &[Task]) -> Schedule {
        let mut order: Vec<&Task> = tasks.iter().collect();
        order.sort_by_key(|task| task.priority());
        self.run_to_completion(order)
    }
}
