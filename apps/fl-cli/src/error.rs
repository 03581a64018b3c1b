//! Error type for the command-line front end.

use fl_cases::CaseError;
use fl_engine::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid input: {0}")]
    Domain(#[from] DomainError),

    #[error("Case file error: {0}")]
    Cases(#[from] CaseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{failed} of {total} cases failed")]
    BatchFailures { failed: usize, total: usize },

    #[error("{count} case(s) have invalid inputs")]
    InvalidCases { count: usize },
}

pub type CliResult<T> = Result<T, CliError>;
