use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing::error;
use tracing_subscriber::EnvFilter;

use task_scheduler::constants::{Algorithm, ExitStatus, DEFAULT_QUANTUM};
use task_scheduler::report::{write_completed, write_schedule};
use task_scheduler::shell::Shell;
use task_scheduler::task_file::{export_report, load_tasks};
use task_scheduler::{TaskScheduler, TimeStep};

pub fn build_cli_command() -> Command {
    Command::new("task-scheduler")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Simulates FCFS, SJF, priority and Round-Robin scheduling of a task set")
        .arg(
            Arg::new("task_file")
                .help("CSV file of tasks to preload (name, priority, execution_time, deadline)"),
        )
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .action(ArgAction::Append)
                .value_parser(|s: &str| s.parse::<Algorithm>())
                .help("Run an algorithm (fcfs, sjf, priority, rr) without the menu; repeatable"),
        )
        .arg(
            Arg::new("quantum")
                .short('q')
                .long("quantum")
                .value_parser(value_parser!(TimeStep).range(1..))
                .default_value(DEFAULT_QUANTUM)
                .help("Time quantum for Round Robin in batch mode"),
        )
        .arg(
            Arg::new("export")
                .short('e')
                .long("export")
                .help("Write the grouped report to this CSV file before exiting"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log every dispatch (RUST_LOG overrides)"),
        )
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Runs `algorithms` in order, then prints the grouped report.
fn run_batch<W: Write>(
    scheduler: &mut TaskScheduler,
    algorithms: &[Algorithm],
    quantum: TimeStep,
    out: &mut W,
) -> Result<()> {
    for algorithm in algorithms {
        let schedule = match algorithm {
            Algorithm::Fcfs => scheduler.run_fcfs(),
            Algorithm::Sjf => scheduler.run_sjf(),
            Algorithm::Priority => scheduler.run_priority(),
            Algorithm::RoundRobin => scheduler.run_round_robin(quantum)?,
        };
        write_schedule(out, &schedule)?;
    }
    write_completed(out, &scheduler.completed_report())?;
    out.flush()?;
    Ok(())
}

fn run(matches: &ArgMatches, mut scheduler: TaskScheduler) -> Result<()> {
    let algorithms: Vec<Algorithm> = matches
        .get_many::<Algorithm>("algorithm")
        .map(|values| values.copied().collect())
        .unwrap_or_default();

    if algorithms.is_empty() {
        let stdin = io::stdin();
        let mut shell = Shell::new(scheduler, stdin.lock(), io::stdout());
        shell.run().context("interactive session failed")?;
        scheduler = shell.into_scheduler();
    } else {
        let quantum = *matches.get_one::<TimeStep>("quantum").context("missing quantum")?;
        run_batch(&mut scheduler, &algorithms, quantum, &mut io::stdout().lock())
            .context("batch run failed")?;
    }

    if let Some(path) = matches.get_one::<String>("export") {
        export_report(path, &scheduler.completed_report())
            .with_context(|| format!("cannot export report to {path}"))?;
    }
    Ok(())
}

fn main() {
    // cargo run [tasks.csv] [-a fcfs -a rr -q 3] [-e report.csv] [--verbose]
    let matches: ArgMatches = build_cli_command().get_matches();
    init_logging(matches.get_flag("verbose"));

    let mut scheduler = TaskScheduler::new();
    if let Some(path) = matches.get_one::<String>("task_file") {
        if let Err(e) = load_tasks(path, &mut scheduler) {
            eprintln!("Error reading task file: {e}");
            process::exit(ExitStatus::TaskFileError as i32);
        }
    }

    if let Err(e) = run(&matches, scheduler) {
        error!("{e:#}");
        eprintln!("Error: {e:#}");
        process::exit(ExitStatus::Failure as i32);
    }
    process::exit(ExitStatus::Success as i32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_arguments() {
        let matches = build_cli_command()
            .try_get_matches_from(vec![
                "task-scheduler",
                "tasks.csv",
                "-a",
                "priority",
                "--algorithm",
                "rr",
                "-q",
                "3",
                "-e",
                "out.csv",
            ])
            .unwrap();

        assert_eq!(matches.get_one::<String>("task_file").unwrap(), "tasks.csv");
        let algorithms: Vec<_> = matches.get_many::<Algorithm>("algorithm").unwrap().copied().collect();
        assert_eq!(algorithms, vec![Algorithm::Priority, Algorithm::RoundRobin]);
        assert_eq!(*matches.get_one::<TimeStep>("quantum").unwrap(), 3);
        assert_eq!(matches.get_one::<String>("export").unwrap(), "out.csv");
        assert!(!matches.get_flag("verbose"));
    }

    #[test]
    fn test_default_quantum() {
        let matches = build_cli_command().try_get_matches_from(vec!["task-scheduler"]).unwrap();
        assert_eq!(*matches.get_one::<TimeStep>("quantum").unwrap(), 2);
        assert!(matches.get_many::<Algorithm>("algorithm").is_none());
    }

    #[test]
    fn test_rejects_bad_arguments() {
        let cli = build_cli_command;
        assert!(cli().try_get_matches_from(vec!["task-scheduler", "-q", "0"]).is_err());
        assert!(cli().try_get_matches_from(vec!["task-scheduler", "-q", "x"]).is_err());
        assert!(cli().try_get_matches_from(vec!["task-scheduler", "-a", "edf"]).is_err());
    }

    #[test]
    fn test_run_batch() {
        let mut scheduler = TaskScheduler::new();
        scheduler.add_task("A", 3, 5, "2025-03-01").unwrap();
        scheduler.add_task("B", 1, 2, "2025-03-02").unwrap();

        let mut out = Vec::new();
        run_batch(&mut scheduler, &[Algorithm::Sjf, Algorithm::RoundRobin], 3, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("[INFO] Executing Tasks (Shortest Job First)"));
        assert!(text.contains("SJF Scheduling"));
        assert!(text.contains("Round Robin Scheduling"));
        assert_eq!(scheduler.ledger().len(), 4);
    }
}
