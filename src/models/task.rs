use super::{Priority, TimeStep, ID};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    id: ID,
    name: String,
    priority: Priority,        // Lower value dispatches first.
    execution_time: TimeStep,  // Remaining work units.
    original_time: TimeStep,   // Work units as registered, never modified.
    deadline: String,          // Carried through, never interpreted.
}

impl Task {
    pub fn new(
        id: ID,
        name: impl Into<String>,
        priority: Priority,
        execution_time: TimeStep,
        deadline: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            priority,
            execution_time,
            original_time: execution_time,
            deadline: deadline.into(),
        }
    }

    pub fn id(&self) -> ID {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn execution_time(&self) -> TimeStep {
        self.execution_time
    }

    pub fn original_time(&self) -> TimeStep {
        self.original_time
    }

    pub fn deadline(&self) -> &str {
        &self.deadline
    }

    /// Runs the task for at most `units` and returns how many were consumed.
    ///
    /// Only ever called on a strategy's private copy.
    pub(crate) fn run_for(&mut self, units: TimeStep) -> TimeStep {
        let consumed = units.min(self.execution_time);
        self.execution_time -= consumed;
        consumed
    }
}
