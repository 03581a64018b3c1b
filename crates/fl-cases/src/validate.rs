//! Case file validation logic.

use crate::schema::{CaseFile, SolverDef};
use fl_engine::DomainError;
use std::collections::HashSet;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate case ID: {id}")]
    DuplicateId { id: String },

    #[error("Empty case ID at position {index}")]
    EmptyId { index: usize },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// Structural checks: version, case IDs and solver settings.
///
/// Physical inputs are not checked here; an out-of-range case is reported
/// by itself when the batch is evaluated.
pub fn validate_case_file(file: &CaseFile) -> Result<(), ValidationError> {
    if file.version == 0 || file.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    let mut ids = HashSet::new();
    for (index, case) in file.cases.iter().enumerate() {
        if case.id.trim().is_empty() {
            return Err(ValidationError::EmptyId { index });
        }
        if !ids.insert(case.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: case.id.clone(),
            });
        }
    }

    validate_solver(&file.solver)
}

fn validate_solver(solver: &SolverDef) -> Result<(), ValidationError> {
    if let SolverDef::Colebrook {
        tolerance,
        max_iterations,
        ..
    } = *solver
    {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ValidationError::InvalidValue {
                field: "solver.tolerance".to_string(),
                value: tolerance.to_string(),
                reason: "must be a finite, non-negative number".to_string(),
            });
        }
        if max_iterations == 0 {
            return Err(ValidationError::InvalidValue {
                field: "solver.max_iterations".to_string(),
                value: max_iterations.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
    }
    Ok(())
}

/// Cases whose inputs violate the engine's domain bounds.
pub fn input_problems(file: &CaseFile) -> Vec<(String, DomainError)> {
    file.cases
        .iter()
        .filter_map(|case| {
            case.inputs
                .validate()
                .err()
                .map(|err| (case.id.clone(), err))
        })
        .collect()
}
