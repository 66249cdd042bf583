use tracing::info;

use crate::scheduler::{
    FirstComeFirstServed, PriorityScheduling, RoundRobin, Schedule, Scheduler, ShortestJobFirst,
};
use crate::{GroupedReport, Ledger, Priority, SchedulingError, Task, TaskSet, TimeStep};

/// A simulation session: the task registry plus the ledger it fills.
#[derive(Debug, Default)]
pub struct TaskScheduler {
    task_set: TaskSet,
    ledger: Ledger,
}

impl TaskScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session that appends to an existing ledger.
    pub fn with_ledger(ledger: Ledger) -> Self {
        Self {
            task_set: TaskSet::new(),
            ledger,
        }
    }

    pub fn add_task(
        &mut self,
        name: &str,
        priority: Priority,
        execution_time: TimeStep,
        deadline: &str,
    ) -> Result<Task, SchedulingError> {
        self.task_set.add_task(name, priority, execution_time, deadline)
    }

    /// Runs one strategy over the registered tasks and records its completions.
    pub fn run(&mut self, scheduler: &dyn Scheduler) -> Schedule {
        let schedule = scheduler.schedule(self.task_set.get_tasks());
        info!(
            algorithm = schedule.algorithm().label(),
            dispatches = schedule.dispatches().len(),
            completed = schedule.completed().count(),
            "run finished"
        );
        for task in schedule.completed() {
            self.ledger.record(schedule.algorithm(), task.clone());
        }
        schedule
    }

    pub fn run_fcfs(&mut self) -> Schedule {
        self.run(&FirstComeFirstServed)
    }

    pub fn run_sjf(&mut self) -> Schedule {
        self.run(&ShortestJobFirst)
    }

    pub fn run_priority(&mut self) -> Schedule {
        self.run(&PriorityScheduling)
    }

    pub fn run_round_robin(&mut self, quantum: TimeStep) -> Result<Schedule, SchedulingError> {
        let round_robin = RoundRobin::new(quantum)?;
        Ok(self.run(&round_robin))
    }

    pub fn completed_report(&self) -> GroupedReport {
        self.ledger.grouped_by_algorithm()
    }

    pub fn task_set(&self) -> &TaskSet {
        &self.task_set
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }
}
