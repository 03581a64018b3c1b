//! Case file schema definitions.

use fl_engine::{ColebrookConfig, ExplicitCorrelation, FrictionModel, PhysicalInputs};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseFile {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub solver: SolverDef,
    #[serde(default)]
    pub cases: Vec<CaseDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub inputs: PhysicalInputs,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum SolverDef {
    Colebrook {
        #[serde(default = "default_tolerance")]
        tolerance: f64,
        #[serde(default = "default_max_iterations")]
        max_iterations: usize,
        #[serde(default = "default_seed")]
        seed: ExplicitCorrelation,
    },
    SwameeJain,
    Haaland,
}

fn default_tolerance() -> f64 {
    ColebrookConfig::default().tolerance
}

fn default_max_iterations() -> usize {
    ColebrookConfig::default().max_iterations
}

fn default_seed() -> ExplicitCorrelation {
    ColebrookConfig::default().seed
}

impl Default for SolverDef {
    fn default() -> Self {
        SolverDef::Colebrook {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            seed: default_seed(),
        }
    }
}

impl SolverDef {
    pub fn to_model(&self) -> FrictionModel {
        match *self {
            SolverDef::Colebrook {
                tolerance,
                max_iterations,
                seed,
            } => FrictionModel::Colebrook(ColebrookConfig {
                tolerance,
                max_iterations,
                seed,
            }),
            SolverDef::SwameeJain => FrictionModel::SwameeJain,
            SolverDef::Haaland => FrictionModel::Haaland,
        }
    }
}

impl From<FrictionModel> for SolverDef {
    fn from(model: FrictionModel) -> Self {
        match model {
            FrictionModel::Colebrook(c) => SolverDef::Colebrook {
                tolerance: c.tolerance,
                max_iterations: c.max_iterations,
                seed: c.seed,
            },
            FrictionModel::SwameeJain => SolverDef::SwameeJain,
            FrictionModel::Haaland => SolverDef::Haaland,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solver_defaults_fill_missing_keys() {
        let solver: SolverDef = serde_yaml::from_str("model: colebrook\n").unwrap();
        assert_eq!(solver, SolverDef::default());
        assert_eq!(solver.to_model(), FrictionModel::default());
    }

    #[test]
    fn explicit_solver_parses() {
        let solver: SolverDef = serde_yaml::from_str("model: swamee_jain\n").unwrap();
        assert_eq!(solver.to_model(), FrictionModel::SwameeJain);
    }

    #[test]
    fn haaland_seed_parses() {
        let yaml = "model: colebrook\nseed: haaland\nmax_iterations: 10\n";
        let solver: SolverDef = serde_yaml::from_str(yaml).unwrap();
        match solver.to_model() {
            FrictionModel::Colebrook(c) => {
                assert_eq!(c.seed, ExplicitCorrelation::Haaland);
                assert_eq!(c.max_iterations, 10);
            }
            other => panic!("unexpected model {other:?}"),
        }
    }

    #[test]
    fn model_round_trips_through_def() {
        let model = FrictionModel::Haaland;
        assert_eq!(SolverDef::from(model).to_model(), model);
    }
}
