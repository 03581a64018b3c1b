//! Darcy friction-factor correlations.
//!
//! Laminar flow uses the Hagen–Poiseuille closed form. Turbulent flow is
//! governed by the implicit Colebrook–White relation
//!
//! ```text
//! 1/√f = −2·log10( (ε/D)/3.7 + 2.51/(Re·√f) )
//! ```
//!
//! which is solved by Newton iteration on `x = 1/√f`, seeded by one of the
//! explicit approximations (Swamee–Jain or Haaland). The explicit forms are
//! also available as stand-alone models.

use fl_core::numeric::relative_difference;
use serde::{Deserialize, Serialize};
use std::f64::consts::LN_10;
use tracing::{debug, warn};

/// Explicit approximations of Colebrook–White.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplicitCorrelation {
    SwameeJain,
    Haaland,
}

impl ExplicitCorrelation {
    pub fn evaluate(self, reynolds: f64, relative_roughness: f64) -> f64 {
        match self {
            ExplicitCorrelation::SwameeJain => swamee_jain(reynolds, relative_roughness),
            ExplicitCorrelation::Haaland => haaland(reynolds, relative_roughness),
        }
    }

    pub fn method(self) -> FrictionMethod {
        match self {
            ExplicitCorrelation::SwameeJain => FrictionMethod::SwameeJain,
            ExplicitCorrelation::Haaland => FrictionMethod::Haaland,
        }
    }
}

/// Colebrook–White iteration settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColebrookConfig {
    /// Stop once the relative change in f is at most this
    pub tolerance: f64,
    /// Iteration cap; the best estimate is returned when it is reached
    pub max_iterations: usize,
    /// Explicit correlation used as the starting guess
    pub seed: ExplicitCorrelation,
}

impl Default for ColebrookConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 30,
            seed: ExplicitCorrelation::SwameeJain,
        }
    }
}

/// How turbulent friction factors are obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrictionModel {
    Colebrook(ColebrookConfig),
    SwameeJain,
    Haaland,
}

impl Default for FrictionModel {
    fn default() -> Self {
        FrictionModel::Colebrook(ColebrookConfig::default())
    }
}

/// Law that produced a friction factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrictionMethod {
    Laminar,
    SwameeJain,
    Haaland,
    Colebrook,
}

/// A friction factor together with how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrictionSolution {
    pub factor: f64,
    pub method: FrictionMethod,
    /// Newton steps taken (0 for closed-form and explicit laws)
    pub iterations: usize,
    /// False only when the Colebrook iteration hit its cap
    pub converged: bool,
}

impl FrictionSolution {
    fn exact(factor: f64, method: FrictionMethod) -> Self {
        Self {
            factor,
            method,
            iterations: 0,
            converged: true,
        }
    }
}

impl FrictionModel {
    /// Turbulent friction factor under this model.
    pub fn turbulent(&self, reynolds: f64, relative_roughness: f64) -> FrictionSolution {
        match self {
            FrictionModel::Colebrook(config) => {
                solve_colebrook(reynolds, relative_roughness, config)
            }
            FrictionModel::SwameeJain => {
                explicit(ExplicitCorrelation::SwameeJain, reynolds, relative_roughness)
            }
            FrictionModel::Haaland => {
                explicit(ExplicitCorrelation::Haaland, reynolds, relative_roughness)
            }
        }
    }

    /// Laminar closed form.
    pub fn laminar(&self, reynolds: f64) -> FrictionSolution {
        FrictionSolution::exact(laminar_friction_factor(reynolds), FrictionMethod::Laminar)
    }
}

fn explicit(
    correlation: ExplicitCorrelation,
    reynolds: f64,
    relative_roughness: f64,
) -> FrictionSolution {
    FrictionSolution::exact(
        correlation.evaluate(reynolds, relative_roughness),
        correlation.method(),
    )
}

/// Hagen–Poiseuille: f = 64 / Re.
#[inline]
pub fn laminar_friction_factor(reynolds: f64) -> f64 {
    64.0 / reynolds
}

/// Swamee–Jain explicit approximation.
pub fn swamee_jain(reynolds: f64, relative_roughness: f64) -> f64 {
    let a = relative_roughness / 3.7;
    let b = 5.74 / reynolds.powf(0.9);
    0.25 / (a + b).log10().powi(2)
}

/// Haaland explicit approximation.
pub fn haaland(reynolds: f64, relative_roughness: f64) -> f64 {
    let a = (relative_roughness / 3.7).powf(1.11);
    let b = 6.9 / reynolds;
    let inv_sqrt_f = -1.8 * (a + b).log10();
    1.0 / (inv_sqrt_f * inv_sqrt_f)
}

/// Colebrook–White residual `1/√f + 2·log10((ε/D)/3.7 + 2.51/(Re·√f))`.
///
/// Zero at the exact solution.
pub fn colebrook_residual(friction_factor: f64, reynolds: f64, relative_roughness: f64) -> f64 {
    let x = 1.0 / friction_factor.sqrt();
    x + 2.0 * (relative_roughness / 3.7 + 2.51 * x / reynolds).log10()
}

/// Solve Colebrook–White by Newton iteration on `x = 1/√f`.
///
/// `g(x) = x + 2·log10(a + b·x)` is increasing and concave, so after the
/// first step the iterates approach the root monotonically. If the cap is
/// reached the last finite iterate is returned with `converged == false`.
///
/// For ε/D ≥ 3.7 the equation has no positive root; the seed is returned
/// unrefined and flagged as not converged.
pub fn solve_colebrook(
    reynolds: f64,
    relative_roughness: f64,
    config: &ColebrookConfig,
) -> FrictionSolution {
    let a = relative_roughness / 3.7;
    let b = 2.51 / reynolds;

    let mut f = config.seed.evaluate(reynolds, relative_roughness);

    if a >= 1.0 {
        warn!(
            reynolds,
            relative_roughness, f, "Colebrook has no root for this roughness; using seed"
        );
        return FrictionSolution {
            factor: f,
            method: FrictionMethod::Colebrook,
            iterations: 0,
            converged: false,
        };
    }

    let mut x = 1.0 / f.sqrt();

    for iter in 1..=config.max_iterations {
        let arg = a + b * x;
        let g = x + 2.0 * arg.log10();
        let dg = 1.0 + 2.0 * b / (arg * LN_10);
        let x_next = x - g / dg;

        if !x_next.is_finite() || x_next <= 0.0 {
            warn!(
                reynolds,
                relative_roughness, iter, "Colebrook step left the domain; keeping last estimate"
            );
            return FrictionSolution {
                factor: f,
                method: FrictionMethod::Colebrook,
                iterations: iter,
                converged: false,
            };
        }

        let f_next = 1.0 / (x_next * x_next);
        let delta = relative_difference(f_next, f);
        x = x_next;
        f = f_next;

        if delta <= config.tolerance {
            debug!(reynolds, relative_roughness, iter, f, "Colebrook converged");
            return FrictionSolution {
                factor: f,
                method: FrictionMethod::Colebrook,
                iterations: iter,
                converged: true,
            };
        }
    }

    warn!(
        reynolds,
        relative_roughness,
        max_iterations = config.max_iterations,
        f,
        "Colebrook iteration cap reached; returning best estimate"
    );
    FrictionSolution {
        factor: f,
        method: FrictionMethod::Colebrook,
        iterations: config.max_iterations,
        converged: false,
    }
}
