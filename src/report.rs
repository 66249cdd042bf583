//! Text rendering of strategy runs and of the grouped completion report.

use std::io::{self, Write};

use crate::constants::Algorithm;
use crate::scheduler::{Dispatch, Schedule};
use crate::{GroupedReport, Task};

fn header(schedule: &Schedule) -> String {
    match (schedule.algorithm(), schedule.quantum()) {
        (Algorithm::Fcfs, _) => "Executing Tasks (FCFS Order)".to_string(),
        (Algorithm::Sjf, _) => "Executing Tasks (Shortest Job First)".to_string(),
        (Algorithm::Priority, _) => "Executing Tasks (Priority Order)".to_string(),
        (Algorithm::RoundRobin, Some(quantum)) => {
            format!("Executing Tasks (Round Robin, Time Quantum = {quantum})")
        }
        (Algorithm::RoundRobin, None) => "Executing Tasks (Round Robin)".to_string(),
    }
}

fn completed_line(algorithm: Algorithm, task: &Task) -> String {
    match algorithm {
        Algorithm::Priority => format!(
            "[DONE] Completed: {} | Priority: {} | Deadline: {}",
            task.name(),
            task.priority(),
            task.deadline()
        ),
        Algorithm::RoundRobin => format!(
            "[DONE] Completed: {} | Execution Time: {} | Deadline: {}",
            task.name(),
            task.execution_time(),
            task.deadline()
        ),
        Algorithm::Fcfs | Algorithm::Sjf => format!(
            "[DONE] Completed: {} | Time: {} | Deadline: {}",
            task.name(),
            task.execution_time(),
            task.deadline()
        ),
    }
}

/// Writes the trace of one run, one line per dispatch.
pub fn write_schedule<W: Write>(out: &mut W, schedule: &Schedule) -> io::Result<()> {
    let title = header(schedule);
    writeln!(out, "\n[INFO] {title}")?;
    writeln!(out, "{}", "-".repeat(title.len() + 7))?;

    for dispatch in schedule.dispatches() {
        match dispatch {
            Dispatch::Preempted { task, units } => writeln!(
                out,
                "[IN-PROGRESS] Executing Task: {} for {} units",
                task.name(),
                units
            )?,
            Dispatch::Completed(task) => {
                writeln!(out, "{}", completed_line(schedule.algorithm(), task))?
            }
        }
    }
    Ok(())
}

/// Writes every completed task grouped by algorithm, with registered times.
pub fn write_completed<W: Write>(out: &mut W, report: &GroupedReport) -> io::Result<()> {
    writeln!(out, "\n[INFO] Completed Tasks (Grouped by Algorithm)")?;
    writeln!(out, "------------------------------------------------")?;

    if report.is_empty() {
        writeln!(out, "No tasks have been completed yet.")?;
        return Ok(());
    }

    for (label, tasks) in report {
        writeln!(out, "\n{label} Scheduling")?;
        writeln!(out, "--------------------------------")?;
        for task in tasks {
            writeln!(
                out,
                "ID: {} | Name: {} | Time: {} | Priority: {} | Deadline: {}",
                task.id(),
                task.name(),
                task.original_time(),
                task.priority(),
                task.deadline()
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaskScheduler;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn scheduler() -> TaskScheduler {
        let mut scheduler = TaskScheduler::new();
        scheduler.add_task("A", 3, 5, "2025-03-01").unwrap();
        scheduler.add_task("B", 1, 2, "2025-03-02").unwrap();
        scheduler
    }

    #[test]
    fn round_robin_trace_shows_slices() {
        let mut scheduler = scheduler();
        let schedule = scheduler.run_round_robin(3).unwrap();
        let text = render(|out| write_schedule(out, &schedule));

        assert!(text.contains("[INFO] Executing Tasks (Round Robin, Time Quantum = 3)"));
        let lines: Vec<_> = text.lines().filter(|l| l.starts_with('[') && !l.starts_with("[INFO]")).collect();
        assert_eq!(
            lines,
            vec![
                "[IN-PROGRESS] Executing Task: A for 3 units",
                "[DONE] Completed: B | Execution Time: 2 | Deadline: 2025-03-02",
                "[DONE] Completed: A | Execution Time: 2 | Deadline: 2025-03-01",
            ]
        );
    }

    #[test]
    fn priority_trace_shows_priority() {
        let mut scheduler = scheduler();
        let schedule = scheduler.run_priority();
        let text = render(|out| write_schedule(out, &schedule));
        assert!(text.contains("[DONE] Completed: B | Priority: 1 | Deadline: 2025-03-02"));
    }

    #[test]
    fn grouped_report_uses_original_time() {
        let mut scheduler = scheduler();
        scheduler.run_round_robin(3).unwrap();
        scheduler.run_fcfs();
        let text = render(|out| write_completed(out, &scheduler.completed_report()));

        let fcfs = text.find("FCFS Scheduling").unwrap();
        let rr = text.find("Round Robin Scheduling").unwrap();
        assert!(fcfs < rr);
        assert!(text.contains("ID: 1 | Name: A | Time: 5 | Priority: 3 | Deadline: 2025-03-01"));
    }

    #[test]
    fn empty_report_says_so() {
        let text = render(|out| write_completed(out, &GroupedReport::new()));
        assert!(text.contains("No tasks have been completed yet."));
    }
}
