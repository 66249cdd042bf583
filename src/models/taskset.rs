use tracing::info;

use super::{Priority, Task, TimeStep, ID};
use crate::SchedulingError;

/// Registry of every task defined during a session, in registration order.
#[derive(Debug, Default, Clone)]
pub struct TaskSet {
    tasks: Vec<Task>,
    last_id: ID,
}

impl TaskSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a task under the next sequential id (starting at 1).
    ///
    /// The name must not be blank and the execution time must be positive.
    /// Priority and deadline are accepted as given.
    pub fn add_task(
        &mut self,
        name: &str,
        priority: Priority,
        execution_time: TimeStep,
        deadline: &str,
    ) -> Result<Task, SchedulingError> {
        if name.trim().is_empty() {
            return Err(SchedulingError::invalid("name", "must not be empty"));
        }
        if execution_time <= 0 {
            return Err(SchedulingError::invalid(
                "execution_time",
                format!("must be positive, got {execution_time}"),
            ));
        }

        self.last_id += 1;
        let task = Task::new(self.last_id, name, priority, execution_time, deadline);
        info!(id = task.id(), name = task.name(), priority, execution_time, "task added");
        self.tasks.push(task.clone());
        Ok(task)
    }

    pub fn get_tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Owned copy of every task, for strategies that need a private working set.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn get_task_by_id(&self, id: ID) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_from_one() {
        let mut taskset = TaskSet::new();
        let a = taskset.add_task("A", 3, 5, "2025-01-01").unwrap();
        let b = taskset.add_task("B", 1, 2, "2025-01-02").unwrap();
        let c = taskset.add_task("A", 2, 8, "2025-01-03").unwrap();

        assert_eq!((a.id(), b.id(), c.id()), (1, 2, 3));
        assert_eq!(taskset.len(), 3);
        assert_eq!(taskset.get_task_by_id(3).unwrap().name(), "A");
    }

    #[test]
    fn rejects_non_positive_execution_time() {
        let mut taskset = TaskSet::new();
        let err = taskset.add_task("A", 1, 0, "2025-01-01").unwrap_err();
        assert_eq!(err.field(), "execution_time");
        assert!(taskset.add_task("A", 1, -4, "2025-01-01").is_err());
        assert!(taskset.is_empty());
    }

    #[test]
    fn rejected_task_does_not_consume_an_id() {
        let mut taskset = TaskSet::new();
        assert!(taskset.add_task("  ", 1, 3, "2025-01-01").is_err());
        let task = taskset.add_task("A", 1, 3, "2025-01-01").unwrap();
        assert_eq!(task.id(), 1);
    }

    #[test]
    fn accepts_any_priority() {
        let mut taskset = TaskSet::new();
        let task = taskset.add_task("A", -7, 3, "whenever").unwrap();
        assert_eq!(task.priority(), -7);
        assert_eq!(task.deadline(), "whenever");
    }
}
