//! CSV task files: `name, priority, execution_time, deadline`, no header.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use tracing::info;

use crate::{GroupedReport, Priority, TaskScheduler, TaskFileError, TimeStep};

fn column<'a>(
    record: &'a StringRecord,
    index: usize,
    name: &'static str,
    line: u64,
) -> Result<&'a str, TaskFileError> {
    record
        .get(index)
        .ok_or(TaskFileError::MissingColumn { line, column: name })
}

fn integer_column(
    record: &StringRecord,
    index: usize,
    name: &'static str,
    line: u64,
) -> Result<i64, TaskFileError> {
    let value = column(record, index, name, line)?;
    value.parse().map_err(|_| TaskFileError::NotAnInteger {
        line,
        column: name,
        value: value.to_string(),
    })
}

/// Registers every row of the file into `scheduler`; returns how many were added.
///
/// Stops at the first malformed or rejected row.
pub fn load_tasks<P: AsRef<Path>>(
    path: P,
    scheduler: &mut TaskScheduler,
) -> Result<usize, TaskFileError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_path(path.as_ref())?;

    let mut added = 0;
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let name = column(&record, 0, "name", line)?;
        let priority: Priority = integer_column(&record, 1, "priority", line)?;
        let execution_time: TimeStep = integer_column(&record, 2, "execution_time", line)?;
        let deadline = column(&record, 3, "deadline", line)?;

        scheduler
            .add_task(name, priority, execution_time, deadline)
            .map_err(|source| TaskFileError::Rejected { line, source })?;
        added += 1;
    }

    info!(path = %path.as_ref().display(), added, "task file loaded");
    Ok(added)
}

/// Writes the grouped report as CSV with a header row.
pub fn export_report<P: AsRef<Path>>(path: P, report: &GroupedReport) -> Result<(), TaskFileError> {
    let mut wtr = WriterBuilder::new().from_path(path.as_ref())?;
    wtr.write_record(["algorithm", "id", "name", "original_time", "priority", "deadline"])?;

    for (label, tasks) in report {
        for task in tasks {
            wtr.write_record([
                label.to_string(),
                task.id().to_string(),
                task.name().to_string(),
                task.original_time().to_string(),
                task.priority().to_string(),
                task.deadline().to_string(),
            ])?;
        }
    }
    wtr.flush()?;

    info!(path = %path.as_ref().display(), groups = report.len(), "report exported");
    Ok(())
}
