use std::collections::VecDeque;

use tracing::debug;

use super::scheduler::{Dispatch, Schedule, Scheduler};
use crate::constants::Algorithm;
use crate::{SchedulingError, Task, TimeStep};

/// Preemptive time-sliced dispatch with a fixed quantum.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: TimeStep,
}

impl RoundRobin {
    pub fn new(quantum: TimeStep) -> Result<Self, SchedulingError> {
        if quantum <= 0 {
            return Err(SchedulingError::invalid(
                "quantum",
                format!("must be positive, got {quantum}"),
            ));
        }
        Ok(Self { quantum })
    }

    pub fn quantum(&self) -> TimeStep {
        self.quantum
    }
}

impl Scheduler for RoundRobin {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin
    }

    fn schedule(&self, tasks: &[Task]) -> Schedule {
        let mut schedule = Schedule::time_sliced(self.algorithm(), self.quantum);
        // Private working copy, the caller's tasks keep their execution time.
        let mut queue: VecDeque<Task> = tasks.iter().cloned().collect();

        while let Some(mut task) = queue.pop_front() {
            if task.execution_time() > self.quantum {
                let units = task.run_for(self.quantum);
                debug!(id = task.id(), units, remaining = task.execution_time(), "slice");
                schedule.push(Dispatch::Preempted {
                    task: task.clone(),
                    units,
                });
                queue.push_back(task);
            } else {
                debug!(id = task.id(), remaining = task.execution_time(), "completed");
                schedule.push(Dispatch::Completed(task));
            }
        }

        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<Task> {
        vec![
            Task::new(1, "A", 3, 5, "d1"),
            Task::new(2, "B", 1, 2, "d2"),
            Task::new(3, "C", 2, 8, "d3"),
        ]
    }

    #[test]
    fn rejects_non_positive_quantum() {
        assert_eq!(RoundRobin::new(0).unwrap_err().field(), "quantum");
        assert!(RoundRobin::new(-3).is_err());
        assert_eq!(RoundRobin::new(1).unwrap().quantum(), 1);
    }

    #[test]
    fn slices_in_circular_order() {
        let schedule = RoundRobin::new(3).unwrap().schedule(&abc());

        let trace: Vec<_> = schedule
            .dispatches()
            .iter()
            .map(|d| (d.task().id(), d.units(), d.is_completion()))
            .collect();
        assert_eq!(
            trace,
            vec![
                (1, 3, false),
                (2, 2, true),
                (3, 3, false),
                (1, 2, true),
                (3, 3, false),
                (3, 2, true),
            ]
        );
        assert_eq!(schedule.completion_order(), vec![2, 1, 3]);
        assert_eq!(schedule.quantum(), Some(3));
    }

    #[test]
    fn completion_snapshot_holds_leftover_time() {
        let schedule = RoundRobin::new(3).unwrap().schedule(&abc());
        for task in schedule.completed() {
            assert!((1..=3).contains(&task.execution_time()));
            assert_eq!(task.execution_time(), 2);
        }
    }

    #[test]
    fn dispatched_units_add_up_to_original_time() {
        let tasks = vec![
            Task::new(1, "A", 1, 1, "d"),
            Task::new(2, "B", 1, 10, "d"),
            Task::new(3, "C", 1, 7, "d"),
            Task::new(4, "D", 1, 4, "d"),
        ];
        for quantum in 1..=12 {
            let schedule = RoundRobin::new(quantum).unwrap().schedule(&tasks);
            assert_eq!(schedule.completed().count(), tasks.len());
            for task in &tasks {
                assert_eq!(schedule.units_dispatched(task.id()), task.original_time());
                let done = schedule.completed().find(|t| t.id() == task.id()).unwrap();
                assert!(done.execution_time() >= 1 && done.execution_time() <= quantum);
                assert_eq!(done.original_time(), task.original_time());
            }
        }
    }

    #[test]
    fn input_tasks_are_not_mutated() {
        let tasks = abc();
        RoundRobin::new(1).unwrap().schedule(&tasks);
        assert_eq!(tasks, abc());
    }

    #[test]
    fn short_task_completes_in_one_pass() {
        let tasks = vec![Task::new(1, "A", 1, 4, "d")];
        let schedule = RoundRobin::new(4).unwrap().schedule(&tasks);
        assert_eq!(schedule.dispatches().len(), 1);
        assert_eq!(schedule.completed().next().unwrap().execution_time(), 4);
    }
}
