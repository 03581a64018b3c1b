//! Batch evaluation of case files.

use crate::schema::{CaseFile, SolverDef};
use fl_engine::{CalculationResult, FrictionEngine, PhysicalInputs};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Result of one case; exactly one of `result` and `error` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseOutcome {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub inputs: PhysicalInputs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<CalculationResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CaseOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchReport {
    pub name: String,
    pub solver: SolverDef,
    pub outcomes: Vec<CaseOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn find(&self, id: &str) -> Option<&CaseOutcome> {
        self.outcomes.iter().find(|o| o.id == id)
    }
}

/// Evaluate every case with the file's solver settings.
///
/// Cases run in parallel; outcomes keep the file order. A case that fails
/// its domain checks is recorded with its error and does not stop the batch.
pub fn evaluate(file: &CaseFile) -> BatchReport {
    let engine = FrictionEngine::new(file.solver.to_model());
    info!(
        name = %file.name,
        cases = file.cases.len(),
        "evaluating case file"
    );

    let outcomes: Vec<CaseOutcome> = file
        .cases
        .par_iter()
        .map(|case| {
            let (result, error) = match engine.compute(&case.inputs) {
                Ok(r) => (Some(r), None),
                Err(e) => {
                    warn!(case = %case.id, error = %e, "case failed");
                    (None, Some(e.to_string()))
                }
            };
            CaseOutcome {
                id: case.id.clone(),
                name: case.name.clone(),
                inputs: case.inputs,
                result,
                error,
            }
        })
        .collect();

    let report = BatchReport {
        name: file.name.clone(),
        solver: SolverDef::from(*engine.model()),
        outcomes,
    };
    info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        "case file evaluated"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::CaseDef;
    use crate::validate::LATEST_VERSION;

    fn case(id: &str, q: f64, d: f64) -> CaseDef {
        CaseDef {
            id: id.to_string(),
            name: None,
            inputs: PhysicalInputs::new(q, d, 998.0, 0.001, 0.045, 50.0),
        }
    }

    #[test]
    fn keeps_order_and_isolates_failures() {
        let file = CaseFile {
            version: LATEST_VERSION,
            name: "mixed".to_string(),
            solver: SolverDef::default(),
            cases: (0..32)
                .map(|i| {
                    let d = if i == 7 { 0.0 } else { 150.0 };
                    case(&format!("c{i}"), 10.0 + i as f64, d)
                })
                .collect(),
        };

        let report = evaluate(&file);
        assert_eq!(report.outcomes.len(), 32);
        for (i, outcome) in report.outcomes.iter().enumerate() {
            assert_eq!(outcome.id, format!("c{i}"));
        }
        assert_eq!(report.failed(), 1);
        let bad = report.find("c7").unwrap();
        assert!(bad.result.is_none());
        assert!(bad.error.as_deref().unwrap().contains("diameter"));
    }

    #[test]
    fn uses_file_solver() {
        let file = CaseFile {
            version: LATEST_VERSION,
            name: "explicit".to_string(),
            solver: SolverDef::SwameeJain,
            cases: vec![case("a", 100.0, 150.0)],
        };
        let report = evaluate(&file);
        let solution = report.outcomes[0].result.unwrap().solution.unwrap();
        assert_eq!(solution.method, fl_engine::FrictionMethod::SwameeJain);
        assert_eq!(report.solver, file.solver);
    }
}
