//! fl-engine: Darcy–Weisbach head loss in full circular pipes.
//!
//! The evaluation chain is
//! Reynolds number → flow regime → friction factor → head loss.
//! Laminar flow (Re < 2300) uses f = 64/Re; otherwise the friction factor
//! comes from Colebrook–White (iterated) or one of its explicit
//! approximations.
//!
//! The engine holds no mutable state and performs no I/O, so one
//! [`FrictionEngine`] may be shared freely across threads.
//!
//! # Example
//!
//! ```
//! use fl_engine::{FlowRegime, PhysicalInputs, compute};
//!
//! // 100 m³/h of water through 50 m of 150 mm commercial steel
//! let inputs = PhysicalInputs::new(100.0, 150.0, 998.0, 0.001, 0.045, 50.0);
//! let result = compute(&inputs).unwrap();
//!
//! assert_eq!(result.flow_regime, FlowRegime::TransitionalTurbulent);
//! println!("h_f = {:.4} m", result.head_loss_m);
//! ```

pub mod common;
pub mod engine;
pub mod error;
pub mod friction;
pub mod inputs;
pub mod regime;

// Re-exports
pub use engine::{CalculationResult, FrictionEngine, darcy_weisbach_head_loss, reynolds_number};
pub use error::{Bound, DomainError, EngineResult, InputField};
pub use friction::{
    ColebrookConfig, ExplicitCorrelation, FrictionMethod, FrictionModel, FrictionSolution,
    colebrook_residual, haaland, laminar_friction_factor, solve_colebrook, swamee_jain,
};
pub use inputs::{NormalizedInputs, PhysicalInputs};
pub use regime::{FlowRegime, LAMINAR_LIMIT_RE};

/// Compute with the default engine (Colebrook–White, Swamee–Jain seed).
pub fn compute(inputs: &PhysicalInputs) -> EngineResult<CalculationResult> {
    FrictionEngine::default().compute(inputs)
}

/// Compute from the six raw values in their fixed units:
/// Q [m³/h], D [mm], ρ [kg/m³], μ [Pa·s], ε [mm], L [m].
pub fn compute_head_loss(
    flowrate_m3_per_h: f64,
    diameter_mm: f64,
    density_kg_per_m3: f64,
    dynamic_viscosity_pa_s: f64,
    roughness_mm: f64,
    length_m: f64,
) -> EngineResult<CalculationResult> {
    compute(&PhysicalInputs::new(
        flowrate_m3_per_h,
        diameter_mm,
        density_kg_per_m3,
        dynamic_viscosity_pa_s,
        roughness_mm,
        length_m,
    ))
}
