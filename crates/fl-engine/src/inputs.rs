//! Calculator inputs in their fixed entry units, and their SI normalization.

use crate::error::{Bound, DomainError, EngineResult, InputField};
use fl_core::units::{Density, DynVisc, Length, VolumeRate, kg_per_m3, m, m3ph, mm, pa_s};
use serde::{Deserialize, Serialize};

/// The six physical quantities describing a full circular pipe run.
///
/// Units are fixed: flow in m³/h, diameter and roughness in mm, density in
/// kg/m³, viscosity in Pa·s and length in m.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalInputs {
    pub flowrate_m3_per_h: f64,
    pub diameter_mm: f64,
    pub density_kg_per_m3: f64,
    pub dynamic_viscosity_pa_s: f64,
    pub roughness_mm: f64,
    pub length_m: f64,
}

impl PhysicalInputs {
    pub fn new(
        flowrate_m3_per_h: f64,
        diameter_mm: f64,
        density_kg_per_m3: f64,
        dynamic_viscosity_pa_s: f64,
        roughness_mm: f64,
        length_m: f64,
    ) -> Self {
        Self {
            flowrate_m3_per_h,
            diameter_mm,
            density_kg_per_m3,
            dynamic_viscosity_pa_s,
            roughness_mm,
            length_m,
        }
    }

    /// Raw value of one field, in its entry unit.
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::Flowrate => self.flowrate_m3_per_h,
            InputField::Diameter => self.diameter_mm,
            InputField::Density => self.density_kg_per_m3,
            InputField::DynamicViscosity => self.dynamic_viscosity_pa_s,
            InputField::PipeRoughness => self.roughness_mm,
            InputField::PipeLength => self.length_m,
        }
    }

    /// Check every field against its bound, in declaration order.
    ///
    /// Non-finite values are reported as [`Bound::Finite`] violations before
    /// the sign bound is considered.
    pub fn validate(&self) -> EngineResult<()> {
        for field in InputField::ALL {
            let value = self.get(field);
            let bound = if value.is_finite() {
                field.bound()
            } else {
                Bound::Finite
            };
            if !bound.admits(value) {
                return Err(DomainError::OutOfBounds {
                    field,
                    bound,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Validate and convert to SI quantities.
    pub fn normalize(&self) -> EngineResult<NormalizedInputs> {
        self.validate()?;
        Ok(NormalizedInputs {
            flowrate: m3ph(self.flowrate_m3_per_h),
            diameter: mm(self.diameter_mm),
            density: kg_per_m3(self.density_kg_per_m3),
            viscosity: pa_s(self.dynamic_viscosity_pa_s),
            roughness: mm(self.roughness_mm),
            length: m(self.length_m),
        })
    }
}

/// Validated inputs held as SI quantities.
#[derive(Debug, Clone, Copy)]
pub struct NormalizedInputs {
    pub flowrate: VolumeRate,
    pub diameter: Length,
    pub density: Density,
    pub viscosity: DynVisc,
    pub roughness: Length,
    pub length: Length,
}

impl NormalizedInputs {
    /// Roughness over diameter, both in metres.
    pub fn relative_roughness(&self) -> f64 {
        self.roughness.value / self.diameter.value
    }
}
