//! Logging utilities.
//!
//! This module centralizes logger initialization and the reporting path for
//! non-fatal platform errors. It avoids imposing a specific logging backend
//! beyond the standard `log` facade.

mod init;
mod report;

pub use init::{init_logging, LoggingConfig};
pub use report::{report_error, report_warning};
