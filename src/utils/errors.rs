use thiserror::Error;

/// Rejections raised by the scheduling core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },
}

impl SchedulingError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SchedulingError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            SchedulingError::InvalidParameter { field, .. } => field,
        }
    }
}

/// Failures while loading or exporting task files.
#[derive(Debug, Error)]
pub enum TaskFileError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("line {line}: missing column `{column}`")]
    MissingColumn { line: u64, column: &'static str },

    #[error("line {line}: `{column}` is not an integer: {value:?}")]
    NotAnInteger {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("line {line}: {source}")]
    Rejected {
        line: u64,
        #[source]
        source: SchedulingError,
    },
}
