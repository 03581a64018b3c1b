//! Human-readable rendering of engine results.

use fl_engine::CalculationResult;

/// Round to an integer and group digits in threes: 235313.5 -> "235,314".
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn friction_factor(value: f64) -> String {
    format!("{value:.5}")
}

pub fn head_loss(value: f64) -> String {
    format!("{value:.4} m")
}

/// Multi-line summary for a single calculation.
pub fn result_summary(result: &CalculationResult) -> String {
    let mut lines = vec![
        format!(
            "Reynolds number (Re): {}",
            group_thousands(result.reynolds_number)
        ),
        format!("Flow regime:          {}", result.flow_regime),
        format!(
            "Friction factor (f):  {}",
            friction_factor(result.friction_factor)
        ),
        format!("Head loss (h_f):      {}", head_loss(result.head_loss_m)),
        format!("Velocity:             {:.3} m/s", result.velocity_m_per_s),
    ];
    if result.is_approximate() {
        lines.push("Note: Colebrook iteration did not converge; result is approximate".to_string());
    }
    lines.join("\n")
}

/// One row of the batch table.
pub fn table_row(id: &str, result: &CalculationResult) -> String {
    let marker = if result.is_approximate() {
        " (approximate)"
    } else {
        ""
    };
    format!(
        "{:<20} {:>12}  {:<24} {:>9}  {:>12}{}",
        id,
        group_thousands(result.reynolds_number),
        result.flow_regime.label(),
        friction_factor(result.friction_factor),
        head_loss(result.head_loss_m),
        marker
    )
}

pub fn table_header() -> String {
    format!(
        "{:<20} {:>12}  {:<24} {:>9}  {:>12}",
        "Case", "Re", "Regime", "f", "h_f"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fl_engine::compute_head_loss;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.4), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(235_313.5), "235,314");
        assert_eq!(group_thousands(1_234_567.0), "1,234,567");
    }

    #[test]
    fn fixed_decimals() {
        assert_eq!(friction_factor(0.017_398_75), "0.01740");
        assert_eq!(head_loss(0.730_628), "0.7306 m");
    }

    #[test]
    fn summary_mentions_all_fields() {
        let r = compute_head_loss(100.0, 150.0, 998.0, 0.001, 0.045, 50.0).unwrap();
        let text = result_summary(&r);
        assert!(text.contains("235,314"));
        assert!(text.contains("Transitional/Turbulent"));
        assert!(text.contains("0.01740"));
        assert!(text.contains("0.7306 m"));
        assert!(!text.contains("approximate"));
    }
}
