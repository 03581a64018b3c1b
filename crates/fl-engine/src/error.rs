//! Error types for friction and head-loss calculations.

use fl_core::error::CoreError;
use std::fmt;
use thiserror::Error;

/// One of the six physical inputs of a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    Flowrate,
    Diameter,
    Density,
    DynamicViscosity,
    PipeRoughness,
    PipeLength,
}

impl InputField {
    pub const ALL: [InputField; 6] = [
        InputField::Flowrate,
        InputField::Diameter,
        InputField::Density,
        InputField::DynamicViscosity,
        InputField::PipeRoughness,
        InputField::PipeLength,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InputField::Flowrate => "flowrate",
            InputField::Diameter => "diameter",
            InputField::Density => "density",
            InputField::DynamicViscosity => "dynamic viscosity",
            InputField::PipeRoughness => "pipe roughness",
            InputField::PipeLength => "pipe length",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            InputField::Flowrate => "m³/h",
            InputField::Diameter => "mm",
            InputField::Density => "kg/m³",
            InputField::DynamicViscosity => "Pa·s",
            InputField::PipeRoughness => "mm",
            InputField::PipeLength => "m",
        }
    }

    /// Bound the field must satisfy in addition to being finite.
    pub fn bound(self) -> Bound {
        match self {
            InputField::Diameter | InputField::Density | InputField::DynamicViscosity => {
                Bound::Positive
            }
            InputField::Flowrate | InputField::PipeRoughness | InputField::PipeLength => {
                Bound::NonNegative
            }
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Admissible range for an input value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Finite,
    Positive,
    NonNegative,
}

impl Bound {
    pub fn admits(self, value: f64) -> bool {
        match self {
            Bound::Finite => value.is_finite(),
            Bound::Positive => value.is_finite() && value > 0.0,
            Bound::NonNegative => value.is_finite() && value >= 0.0,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Finite => f.write_str("must be a finite number"),
            Bound::Positive => f.write_str("must be greater than zero"),
            Bound::NonNegative => f.write_str("must not be negative"),
        }
    }
}

/// Precondition violations. A calculation that returns this produced no result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{field} = {value} {} {bound}", .field.unit())]
    OutOfBounds {
        field: InputField,
        bound: Bound,
        value: f64,
    },

    #[error("Non-finite intermediate value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Non-physical intermediate value for {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },
}

impl DomainError {
    /// The offending input, if the error stems from one.
    pub fn field(&self) -> Option<InputField> {
        match self {
            DomainError::OutOfBounds { field, .. } => Some(*field),
            DomainError::NonFinite { .. } | DomainError::NonPhysical { .. } => None,
        }
    }
}

pub type EngineResult<T> = Result<T, DomainError>;

impl From<CoreError> for DomainError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::NonFinite { what, value } => DomainError::NonFinite { what, value },
        }
    }
}
