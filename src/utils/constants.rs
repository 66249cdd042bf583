use std::fmt;
use std::str::FromStr;

/// Process exit codes of the binary.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ExitStatus {
    Success = 0,
    Failure = 1,
    TaskFileError = 5,
}

/// The scheduling disciplines the simulator can replay.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Algorithm {
    Fcfs,
    Sjf,
    Priority,
    RoundRobin,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    /// Label under which completions are recorded in the ledger.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Priority => "Priority Scheduling",
            Algorithm::RoundRobin => "Round Robin",
        }
    }

    /// Short name accepted on the command line.
    pub fn cli_name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::Priority => "priority",
            Algorithm::RoundRobin => "rr",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.cli_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown algorithm '{s}' (expected fcfs, sjf, priority or rr)"))
    }
}

/// Round-Robin quantum used by batch mode when none is given.
pub const DEFAULT_QUANTUM: &str = "2";
