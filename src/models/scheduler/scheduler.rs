use crate::constants::Algorithm;
use crate::{Task, TimeStep, ID};

/// One step handed out by a strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The task ran for `units` and still has work left; the snapshot carries
    /// the remaining time after the slice.
    Preempted { task: Task, units: TimeStep },
    /// The task finished; the snapshot is what the ledger records.
    Completed(Task),
}

impl Dispatch {
    pub fn task(&self) -> &Task {
        match self {
            Dispatch::Preempted { task, .. } | Dispatch::Completed(task) => task,
        }
    }

    /// Work units consumed by this step.
    pub fn units(&self) -> TimeStep {
        match self {
            Dispatch::Preempted { units, .. } => *units,
            Dispatch::Completed(task) => task.execution_time(),
        }
    }

    pub fn is_completion(&self) -> bool {
        matches!(self, Dispatch::Completed(_))
    }
}

/// Outcome of one strategy run over a task set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    algorithm: Algorithm,
    quantum: Option<TimeStep>,
    dispatches: Vec<Dispatch>,
}

impl Schedule {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            quantum: None,
            dispatches: Vec::new(),
        }
    }

    pub fn time_sliced(algorithm: Algorithm, quantum: TimeStep) -> Self {
        Self {
            quantum: Some(quantum),
            ..Self::new(algorithm)
        }
    }

    pub(crate) fn push(&mut self, dispatch: Dispatch) {
        self.dispatches.push(dispatch);
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Slice length, for time-sliced strategies.
    pub fn quantum(&self) -> Option<TimeStep> {
        self.quantum
    }

    pub fn dispatches(&self) -> &[Dispatch] {
        &self.dispatches
    }

    /// Finished tasks in completion order.
    pub fn completed(&self) -> impl Iterator<Item = &Task> {
        self.dispatches.iter().filter_map(|dispatch| match dispatch {
            Dispatch::Completed(task) => Some(task),
            Dispatch::Preempted { .. } => None,
        })
    }

    pub fn completion_order(&self) -> Vec<ID> {
        self.completed().map(Task::id).collect()
    }

    /// Total units handed to one task across the whole run.
    pub fn units_dispatched(&self, task_id: ID) -> TimeStep {
        self.dispatches
            .iter()
            .filter(|dispatch| dispatch.task().id() == task_id)
            .map(Dispatch::units)
            .sum()
    }
}

/// A scheduling discipline: turns the registered tasks into a completion order.
///
/// Implementations never mutate the input; anything that has to be consumed
/// is worked on through a private copy.
pub trait Scheduler {
    fn algorithm(&self) -> Algorithm;

    fn schedule(&self, tasks: &[Task]) -> Schedule;

    /// Non-preemptive helper: every task runs to completion in `order`.
    fn run_to_completion(&self, order: Vec<&Task>) -> Schedule {
        let mut schedule = Schedule::new(self.algorithm());
        for task in order {
            schedule.push(Dispatch::Completed(task.clone()));
        }
        schedule
    }
}
