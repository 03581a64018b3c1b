//! The friction engine: Reynolds number, regime, friction factor, head loss.

use crate::common::{check_finite, check_positive};
use crate::error::EngineResult;
use crate::friction::{FrictionModel, FrictionSolution};
use crate::inputs::PhysicalInputs;
use crate::regime::FlowRegime;
use fl_core::units::{circle_area, constants::G0_MPS2};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of one head-loss calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub reynolds_number: f64,
    pub flow_regime: FlowRegime,
    pub friction_factor: f64,
    /// Darcy–Weisbach head loss [m]
    pub head_loss_m: f64,
    /// Mean velocity [m/s]
    pub velocity_m_per_s: f64,
    /// ε/D
    pub relative_roughness: f64,
    /// How the friction factor was obtained; `None` when there is no flow
    pub solution: Option<FrictionSolution>,
}

impl CalculationResult {
    /// True when the Colebrook iteration stopped at its cap.
    pub fn is_approximate(&self) -> bool {
        self.solution.is_some_and(|s| !s.converged)
    }

    /// Static pressure equivalent of the head loss, ρ·g·h_f [Pa].
    pub fn pressure_drop_pa(&self, density_kg_per_m3: f64) -> f64 {
        density_kg_per_m3 * G0_MPS2 * self.head_loss_m
    }
}

/// Re = ρ·v·D / μ, all SI.
#[inline]
pub fn reynolds_number(density: f64, velocity: f64, diameter: f64, viscosity: f64) -> f64 {
    density * velocity * diameter / viscosity
}

/// h_f = f · (L/D) · v² / (2·g) [m].
#[inline]
pub fn darcy_weisbach_head_loss(
    friction_factor: f64,
    length: f64,
    diameter: f64,
    velocity: f64,
) -> f64 {
    friction_factor * (length / diameter) * velocity * velocity / (2.0 * G0_MPS2)
}

/// Stateless head-loss calculator parameterized by a friction model.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrictionEngine {
    model: FrictionModel,
}

impl FrictionEngine {
    pub fn new(model: FrictionModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &FrictionModel {
        &self.model
    }

    /// Run the full chain for one set of inputs.
    ///
    /// Inputs are validated before any arithmetic. Zero flow yields a
    /// no-flow result (Re = 0, f = 0, h_f = 0) without evaluating 64/Re.
    pub fn compute(&self, inputs: &PhysicalInputs) -> EngineResult<CalculationResult> {
        let n = inputs.normalize()?;

        let area = check_positive(circle_area(n.diameter).value, "flow area")?;
        let velocity = check_finite(n.flowrate.value / area, "velocity")?;
        let relative_roughness = check_finite(n.relative_roughness(), "relative roughness")?;

        if velocity == 0.0 {
            debug!(?inputs, "no flow; head loss is zero");
            return Ok(CalculationResult {
                reynolds_number: 0.0,
                flow_regime: FlowRegime::Laminar,
                friction_factor: 0.0,
                head_loss_m: 0.0,
                velocity_m_per_s: 0.0,
                relative_roughness,
                solution: None,
            });
        }

        let reynolds = check_positive(
            reynolds_number(
                n.density.value,
                velocity,
                n.diameter.value,
                n.viscosity.value,
            ),
            "Reynolds number",
        )?;

        let flow_regime = FlowRegime::classify(reynolds);
        let solution = match flow_regime {
            FlowRegime::Laminar => self.model.laminar(reynolds),
            FlowRegime::TransitionalTurbulent => {
                self.model.turbulent(reynolds, relative_roughness)
            }
        };
        let friction_factor = check_positive(solution.factor, "friction factor")?;

        let head_loss_m = check_finite(
            darcy_weisbach_head_loss(friction_factor, n.length.value, n.diameter.value, velocity),
            "head loss",
        )?;

        debug!(
            reynolds,
            regime = %flow_regime,
            friction_factor,
            head_loss_m,
            "head loss computed"
        );

        Ok(CalculationResult {
            reynolds_number: reynolds,
            flow_regime,
            friction_factor,
            head_loss_m,
            velocity_m_per_s: velocity,
            relative_roughness,
            solution: Some(solution),
        })
    }
}
