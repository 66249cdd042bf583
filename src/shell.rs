//! Interactive menu around a [`TaskScheduler`].
//!
//! Input is read as whitespace separated tokens. A token that does not parse
//! where a number is expected discards the rest of its line and re-prompts.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::report::{write_completed, write_schedule};
use crate::{TaskScheduler, TimeStep};

const MENU: &str = "
======================================
|        TASK SCHEDULER SYSTEM       |
======================================
| 1. Add Task                        |
| 2. Execute FCFS Scheduling         |
| 3. Execute Shortest Job First (SJF)|
| 4. Execute Priority Scheduling     |
| 5. Execute Round Robin Scheduling  |
| 6. Show Completed Tasks            |
| 7. Exit                            |
======================================";

pub struct Shell<R, W> {
    input: R,
    out: W,
    scheduler: TaskScheduler,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(scheduler: TaskScheduler, input: R, out: W) -> Self {
        Self {
            input,
            out,
            scheduler,
            pending: VecDeque::new(),
        }
    }

    pub fn into_scheduler(self) -> TaskScheduler {
        self.scheduler
    }

    /// Runs the menu until the exit choice or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.out, "{MENU}")?;
            self.prompt("[INPUT] Enter your choice: ")?;

            let Some(token) = self.next_token()? else {
                break;
            };
            let choice = match token.parse::<u32>() {
                Ok(choice) => choice,
                Err(_) => {
                    warn!(input = %token, "invalid menu choice");
                    writeln!(self.out, "[ERROR] Invalid input! Please enter a number between 1 and 7.")?;
                    self.pending.clear();
                    continue;
                }
            };

            let keep_going = match choice {
                1 => self.add_task()?,
                2 => {
                    let schedule = self.scheduler.run_fcfs();
                    write_schedule(&mut self.out, &schedule)?;
                    true
                }
                3 => {
                    let schedule = self.scheduler.run_sjf();
                    write_schedule(&mut self.out, &schedule)?;
                    true
                }
                4 => {
                    let schedule = self.scheduler.run_priority();
                    write_schedule(&mut self.out, &schedule)?;
                    true
                }
                5 => self.round_robin()?,
                6 => {
                    write_completed(&mut self.out, &self.scheduler.completed_report())?;
                    true
                }
                7 => break,
                _ => {
                    writeln!(self.out, "[ERROR] Invalid choice! Enter a number between 1 and 7.")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }

        writeln!(self.out, "[EXIT] Task Scheduler is shutting down...")?;
        self.out.flush()
    }

    fn add_task(&mut self) -> io::Result<bool> {
        self.prompt("[INPUT] Enter Task Name: ")?;
        let Some(name) = self.next_token()? else {
            return Ok(false);
        };

        self.prompt("[INPUT] Enter Priority (Lower number = Higher priority): ")?;
        let Some(priority) = self.read_integer("[ERROR] Invalid input! Enter a valid priority number: ")? else {
            return Ok(false);
        };

        self.prompt("[INPUT] Enter Execution Time: ")?;
        let Some(execution_time) = self.read_positive(
            "[ERROR] Invalid input! Enter a valid execution time: ",
            "[ERROR] Execution time must be positive! Enter a valid execution time: ",
        )?
        else {
            return Ok(false);
        };

        self.prompt("[INPUT] Enter Deadline (YYYY-MM-DD): ")?;
        let Some(deadline) = self.next_token()? else {
            return Ok(false);
        };

        match self.scheduler.add_task(&name, priority, execution_time, &deadline) {
            Ok(task) => writeln!(self.out, "\nTask Added: {} (ID: {})", task.name(), task.id())?,
            Err(e) => writeln!(self.out, "[ERROR] {e}")?,
        }
        Ok(true)
    }

    fn round_robin(&mut self) -> io::Result<bool> {
        self.prompt("[INPUT] Enter Time Quantum for Round Robin: ")?;
        let Some(quantum) = self.read_positive(
            "[ERROR] Invalid input! Enter a valid time quantum: ",
            "[ERROR] Time quantum must be positive! Enter a valid time quantum: ",
        )?
        else {
            return Ok(false);
        };

        match self.scheduler.run_round_robin(quantum) {
            Ok(schedule) => write_schedule(&mut self.out, &schedule)?,
            Err(e) => writeln!(self.out, "[ERROR] {e}")?,
        }
        Ok(true)
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    /// Next whitespace separated token, or `None` at end of input.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    fn read_integer(&mut self, retry: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(token) = self.next_token()? else {
                return Ok(None);
            };
            match token.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    warn!(input = %token, "expected an integer");
                    self.pending.clear();
                    self.prompt(retry)?;
                }
            }
        }
    }

    fn read_positive(&mut self, retry: &str, not_positive: &str) -> io::Result<Option<TimeStep>> {
        loop {
            match self.read_integer(retry)? {
                Some(value) if value <= 0 => {
                    warn!(value, "expected a positive integer");
                    self.pending.clear();
                    self.prompt(not_positive)?;
                }
                other => return Ok(other),
            }
        }
    }
}
