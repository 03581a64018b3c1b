mod error;
mod format;

use clap::{Parser, Subcommand, ValueEnum};
use error::{CliError, CliResult};
use fl_engine::{
    ColebrookConfig, ExplicitCorrelation, FrictionEngine, FrictionModel, PhysicalInputs,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(name = "fl-cli")]
#[command(about = "Darcy–Weisbach friction loss calculator", long_about = None)]
struct Cli {
    /// Log solver diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute head loss for a single pipe
    Compute {
        /// Volumetric flow rate [m³/h]
        #[arg(long)]
        flowrate: f64,
        /// Internal diameter [mm]
        #[arg(long)]
        diameter: f64,
        /// Fluid density [kg/m³]
        #[arg(long)]
        density: f64,
        /// Dynamic viscosity [Pa·s]
        #[arg(long)]
        viscosity: f64,
        /// Absolute wall roughness [mm]
        #[arg(long)]
        roughness: f64,
        /// Pipe length [m]
        #[arg(long)]
        length: f64,

        #[command(flatten)]
        solver: SolverArgs,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate every case in a YAML or JSON case file
    Batch {
        /// Path to the case file
        path: PathBuf,
        /// Write the batch report here (.json for JSON, otherwise YAML)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a case file without evaluating it
    Check {
        /// Path to the case file
        path: PathBuf,
    },
}

#[derive(clap::Args)]
struct SolverArgs {
    /// Turbulent friction model
    #[arg(long, value_enum, default_value_t = ModelArg::Colebrook)]
    model: ModelArg,
    /// Relative convergence tolerance for Colebrook
    #[arg(long, default_value_t = ColebrookConfig::default().tolerance, value_parser = parse_tolerance)]
    tolerance: f64,
    /// Iteration cap for Colebrook
    #[arg(
        long,
        default_value_t = ColebrookConfig::default().max_iterations as u32,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_iterations: u32,
    /// Starting estimate for Colebrook
    #[arg(long, value_enum, default_value_t = SeedArg::SwameeJain)]
    seed: SeedArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModelArg {
    Colebrook,
    SwameeJain,
    Haaland,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SeedArg {
    SwameeJain,
    Haaland,
}

impl From<SeedArg> for ExplicitCorrelation {
    fn from(seed: SeedArg) -> Self {
        match seed {
            SeedArg::SwameeJain => ExplicitCorrelation::SwameeJain,
            SeedArg::Haaland => ExplicitCorrelation::Haaland,
        }
    }
}

impl SolverArgs {
    fn to_model(&self) -> FrictionModel {
        match self.model {
            ModelArg::Colebrook => FrictionModel::Colebrook(ColebrookConfig {
                tolerance: self.tolerance,
                max_iterations: self.max_iterations as usize,
                seed: self.seed.into(),
            }),
            ModelArg::SwameeJain => FrictionModel::SwameeJain,
            ModelArg::Haaland => FrictionModel::Haaland,
        }
    }
}

fn parse_tolerance(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err("tolerance must be a finite, non-negative number".to_string())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> CliResult<()> {
    match command {
        Commands::Compute {
            flowrate,
            diameter,
            density,
            viscosity,
            roughness,
            length,
            solver,
            json,
        } => {
            let inputs =
                PhysicalInputs::new(flowrate, diameter, density, viscosity, roughness, length);
            cmd_compute(&inputs, solver.to_model(), json)
        }
        Commands::Batch { path, output } => cmd_batch(&path, output.as_deref()),
        Commands::Check { path } => cmd_check(&path),
    }
}

fn cmd_compute(inputs: &PhysicalInputs, model: FrictionModel, json: bool) -> CliResult<()> {
    let result = FrictionEngine::new(model).compute(inputs)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", format::result_summary(&result));
    }
    Ok(())
}

fn cmd_batch(path: &Path, output: Option<&Path>) -> CliResult<()> {
    let file = fl_cases::load(path)?;
    println!("✓ Loaded '{}' ({} cases)", file.name, file.cases.len());
    println!();

    let report = fl_cases::evaluate(&file);

    println!("{}", format::table_header());
    for outcome in &report.outcomes {
        match (&outcome.result, &outcome.error) {
            (Some(result), _) => println!("{}", format::table_row(&outcome.id, result)),
            (None, Some(err)) => println!("{:<20} error: {}", outcome.id, err),
            (None, None) => println!("{:<20} error: no result", outcome.id),
        }
    }
    println!();
    println!(
        "{} succeeded, {} failed",
        report.succeeded(),
        report.failed()
    );

    if let Some(out) = output {
        fl_cases::save_report(out, &report)?;
        println!("✓ Report written to {}", out.display());
    }

    let failed = report.failed();
    if failed > 0 {
        return Err(CliError::BatchFailures {
            failed,
            total: report.outcomes.len(),
        });
    }
    Ok(())
}

fn cmd_check(path: &Path) -> CliResult<()> {
    let file = fl_cases::load(path)?;
    println!("✓ Case file structure is valid");
    println!("  Name: {}", file.name);
    println!("  Version: {}", file.version);
    println!("  Cases: {}", file.cases.len());

    let problems = fl_cases::input_problems(&file);
    if problems.is_empty() {
        println!("✓ All case inputs are within their physical bounds");
        return Ok(());
    }

    for (id, err) in &problems {
        eprintln!("  ✗ {id}: {err}");
    }
    Err(CliError::InvalidCases {
        count: problems.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_compute_with_defaults() {
        let cli = Cli::try_parse_from([
            "fl-cli",
            "compute",
            "--flowrate",
            "100",
            "--diameter",
            "150",
            "--density",
            "998",
            "--viscosity",
            "0.001",
            "--roughness",
            "0.045",
            "--length",
            "50",
        ])
        .unwrap();
        let Commands::Compute { solver, json, .. } = cli.command else {
            panic!("expected compute");
        };
        assert!(!json);
        assert_eq!(solver.to_model(), FrictionModel::default());
    }

    #[test]
    fn explicit_model_flag() {
        let cli = Cli::try_parse_from([
            "fl-cli",
            "compute",
            "--flowrate=1",
            "--diameter=50",
            "--density=1000",
            "--viscosity=0.001",
            "--roughness=0",
            "--length=1",
            "--model",
            "haaland",
        ])
        .unwrap();
        let Commands::Compute { solver, .. } = cli.command else {
            panic!("expected compute");
        };
        assert_eq!(solver.to_model(), FrictionModel::Haaland);
    }

    #[test]
    fn rejects_bad_solver_options() {
        let base = [
            "fl-cli",
            "compute",
            "--flowrate=1",
            "--diameter=50",
            "--density=1000",
            "--viscosity=0.001",
            "--roughness=0",
            "--length=1",
        ];
        let with = |extra: &[&'static str]| {
            let mut args: Vec<&str> = base.to_vec();
            args.extend_from_slice(extra);
            Cli::try_parse_from(args)
        };

        assert!(with(&["--tolerance=-1"]).is_err());
        assert!(with(&["--max-iterations=0"]).is_err());
        assert!(with(&["--seed=colebrook"]).is_err());

        let cli = with(&["--seed=haaland", "--max-iterations=5"]).unwrap();
        let Commands::Compute { solver, .. } = cli.command else {
            panic!("expected compute");
        };
        let FrictionModel::Colebrook(config) = solver.to_model() else {
            panic!("expected colebrook");
        };
        assert_eq!(config.seed, ExplicitCorrelation::Haaland);
        assert_eq!(config.max_iterations, 5);
    }

    fn sample_cases() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../cases/water_mains.yaml")
    }

    fn write_case_file(file_name: &str) -> PathBuf {
        let yaml = "version: 1
name: one bad case
cases:
  - id: good
    inputs:
      flowrate_m3_per_h: 100.0
      diameter_mm: 150.0
      density_kg_per_m3: 998.0
      dynamic_viscosity_pa_s: 0.001
      roughness_mm: 0.045
      length_m: 50.0
  - id: bad
    inputs:
      flowrate_m3_per_h: 100.0
      diameter_mm: 0.0
      density_kg_per_m3: 998.0
      dynamic_viscosity_pa_s: 0.001
      roughness_mm: 0.045
      length_m: 50.0
";
        let path = std::env::temp_dir().join(file_name);
        std::fs::write(&path, yaml).unwrap();
        path
    }

    #[test]
    fn solver_defaults_follow_engine() {
        let cli = Cli::try_parse_from([
            "fl-cli",
            "compute",
            "--flowrate=1",
            "--diameter=50",
            "--density=1000",
            "--viscosity=0.001",
            "--roughness=0",
            "--length=1",
        ])
        .unwrap();
        let Commands::Compute { solver, .. } = cli.command else {
            panic!("expected compute");
        };
        let defaults = ColebrookConfig::default();
        assert_eq!(solver.max_iterations as usize, defaults.max_iterations);
        assert_eq!(solver.tolerance, defaults.tolerance);
    }

    #[test]
    fn batch_succeeds_on_sample_cases() {
        cmd_batch(&sample_cases(), None).unwrap();
    }

    #[test]
    fn batch_fails_but_still_writes_report() {
        let input = write_case_file("fl_cli_batch_bad.yaml");
        let output = std::env::temp_dir().join("fl_cli_batch_bad_report.json");
        let _ = std::fs::remove_file(&output);

        let err = cmd_batch(&input, Some(&output)).unwrap_err();
        assert!(matches!(
            err,
            CliError::BatchFailures { failed: 1, total: 2 }
        ));

        let report: fl_cases::BatchReport =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(report.failed(), 1);
        assert!(report.find("good").unwrap().is_ok());
        assert!(!report.find("bad").unwrap().is_ok());

        std::fs::remove_file(&input).ok();
        std::fs::remove_file(&output).ok();
    }

    #[test]
    fn check_succeeds_on_sample_cases() {
        cmd_check(&sample_cases()).unwrap();
    }

    #[test]
    fn check_lists_invalid_cases() {
        let input = write_case_file("fl_cli_check_bad.yaml");
        let err = cmd_check(&input).unwrap_err();
        assert!(matches!(err, CliError::InvalidCases { count: 1 }));
        std::fs::remove_file(&input).ok();
    }

    #[test]
    fn domain_errors_surface_from_compute() {
        let inputs = PhysicalInputs::new(100.0, 0.0, 998.0, 0.001, 0.045, 50.0);
        let err = cmd_compute(&inputs, FrictionModel::default(), false).unwrap_err();
        assert!(matches!(err, CliError::Domain(_)));
    }
}
