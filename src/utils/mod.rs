pub mod constants;
pub mod errors;
pub mod task_file;

pub use constants::{Algorithm, ExitStatus};
pub use errors::{SchedulingError, TaskFileError};
