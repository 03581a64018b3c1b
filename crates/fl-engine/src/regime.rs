//! Flow-regime classification by Reynolds number.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reynolds number at and above which flow is treated as turbulent.
pub const LAMINAR_LIMIT_RE: f64 = 2300.0;

/// Binary regime used to pick the friction-factor law.
///
/// `TransitionalTurbulent` covers both the transitional band and fully
/// turbulent flow; both use the Colebrook family of correlations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowRegime {
    Laminar,
    #[serde(rename = "Transitional/Turbulent")]
    TransitionalTurbulent,
}

impl FlowRegime {
    pub fn classify(reynolds: f64) -> Self {
        if reynolds < LAMINAR_LIMIT_RE {
            FlowRegime::Laminar
        } else {
            FlowRegime::TransitionalTurbulent
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FlowRegime::Laminar => "Laminar",
            FlowRegime::TransitionalTurbulent => "Transitional/Turbulent",
        }
    }

    pub fn is_laminar(self) -> bool {
        self == FlowRegime::Laminar
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_turbulent() {
        assert_eq!(FlowRegime::classify(2299.999), FlowRegime::Laminar);
        assert_eq!(
            FlowRegime::classify(LAMINAR_LIMIT_RE),
            FlowRegime::TransitionalTurbulent
        );
        assert_eq!(FlowRegime::classify(0.0), FlowRegime::Laminar);
    }

    #[test]
    fn labels() {
        assert_eq!(FlowRegime::Laminar.to_string(), "Laminar");
        assert_eq!(
            FlowRegime::TransitionalTurbulent.to_string(),
            "Transitional/Turbulent"
        );
    }
}
