//! fl-cases: batch case files for the friction engine.

pub mod evaluate;
pub mod schema;
pub mod validate;

pub use evaluate::{BatchReport, CaseOutcome, evaluate};
pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, input_problems, validate_case_file};

use std::path::Path;

pub type CaseResult<T> = Result<T, CaseError>;

#[derive(thiserror::Error, Debug)]
pub enum CaseError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> CaseResult<CaseFile> {
    let content = std::fs::read_to_string(path)?;
    let file: CaseFile = serde_yaml::from_str(&content)?;
    validate_case_file(&file)?;
    Ok(file)
}

pub fn save_yaml(path: &Path, file: &CaseFile) -> CaseResult<()> {
    validate_case_file(file)?;
    let content = serde_yaml::to_string(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> CaseResult<CaseFile> {
    let content = std::fs::read_to_string(path)?;
    let file: CaseFile = serde_json::from_str(&content)?;
    validate_case_file(&file)?;
    Ok(file)
}

pub fn save_json(path: &Path, file: &CaseFile) -> CaseResult<()> {
    validate_case_file(file)?;
    let content = serde_json::to_string_pretty(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` as JSON, anything else as YAML.
pub fn load(path: &Path) -> CaseResult<CaseFile> {
    if is_json(path) {
        load_json(path)
    } else {
        load_yaml(path)
    }
}

/// Write a batch report by extension: `.json` as JSON, anything else as YAML.
pub fn save_report(path: &Path, report: &BatchReport) -> CaseResult<()> {
    let content = if is_json(path) {
        serde_json::to_string_pretty(report)?
    } else {
        serde_yaml::to_string(report)?
    };
    std::fs::write(path, content)?;
    Ok(())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
