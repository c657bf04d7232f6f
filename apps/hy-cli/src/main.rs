use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use hy_app::{AppError, AppResult, ErrorBody, ErrorClass, Settings, scheme_service, solve_service};
use hy_solver::HydraulicsReport;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hy-cli")]
#[command(about = "Hydraulic circuit calculator for mobile machinery", long_about = None)]
struct Cli {
    /// Constants file (YAML or JSON); defaults are used when omitted
    #[arg(long, global = true)]
    constants: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a scheme for document and structural errors
    Validate {
        /// Path to the scheme file
        scheme_path: PathBuf,
    },
    /// Show the suction, pressure and drain lines of every branch
    Paths {
        /// Path to the scheme file
        scheme_path: PathBuf,
    },
    /// Calculate losses, efficiencies and the thermal balance
    Solve {
        /// Path to the scheme file
        scheme_path: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Solve several schemes in parallel
    Batch {
        /// Paths to the scheme files
        #[arg(required = true)]
        scheme_paths: Vec<PathBuf>,
    },
    /// Print the physical constants in effect
    Constants,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = load_settings(cli.constants.as_deref()).and_then(|settings| match cli.command {
        Commands::Validate { scheme_path } => cmd_validate(&scheme_path, &settings),
        Commands::Paths { scheme_path } => cmd_paths(&scheme_path, &settings),
        Commands::Solve {
            scheme_path,
            format,
        } => cmd_solve(&scheme_path, &settings, format),
        Commands::Batch { scheme_paths } => cmd_batch(scheme_paths, &settings),
        Commands::Constants => cmd_constants(&settings),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(exit_code(&e))
        }
    }
}

fn load_settings(path: Option<&Path>) -> AppResult<Settings> {
    match path {
        Some(p) => {
            info!(path = %p.display(), "loading constants");
            Settings::from_constants_file(p)
        }
        None => Ok(Settings::default()),
    }
}

fn exit_code(err: &AppError) -> u8 {
    match err.class() {
        ErrorClass::Client => 2,
        ErrorClass::Server => 1,
    }
}

fn cmd_validate(scheme_path: &Path, settings: &Settings) -> AppResult<()> {
    println!("Validating scheme: {}", scheme_path.display());
    let scheme = scheme_service::load_scheme(scheme_path)?;
    let graph = scheme_service::validate_scheme(&scheme, settings)?;
    let summary = scheme_service::summarize(&scheme, &graph);
    debug!(?summary, "scheme summary");

    println!("✓ Scheme is valid: {}", summary.name);
    println!(
        "  {} modules, {} connections, {} pumps",
        summary.module_count, summary.connection_count, summary.pump_count
    );
    let ports = &summary.ports;
    if !ports.is_clean() {
        println!("  Port warnings:");
        for id in &ports.fan_out {
            println!("    module {id}: output carries more than one connection");
        }
        for id in &ports.fan_in {
            println!("    module {id}: input carries more than one connection");
        }
        for c in &ports.dangling {
            println!("    connection {c}: endpoint missing");
        }
        for id in &ports.unknown_systems {
            println!("    module {id}: unknown system");
        }
    }
    Ok(())
}

fn cmd_paths(scheme_path: &Path, settings: &Settings) -> AppResult<()> {
    let scheme = scheme_service::load_scheme(scheme_path)?;
    let graph = scheme_service::validate_scheme(&scheme, settings)?;
    let branches = scheme_service::describe_branches(&graph, settings)?;
    debug!(branches = branches.len(), "branch lines extracted");

    for b in branches {
        println!("{} [{}]", b.pump, b.system.unwrap_or("-"));
        println!(
            "  cylinder: {}",
            b.cylinder.as_deref().unwrap_or("(none)")
        );
        print_line("suction", b.suction.as_deref());
        print_line("pressure", b.pressure.as_deref());
        print_line("drain", b.drain.as_deref());
    }
    Ok(())
}

fn print_line(name: &str, modules: Option<&[String]>) {
    match modules {
        Some([]) => println!("  {name}: direct"),
        Some(m) => println!("  {name}: {}", m.join(" -> ")),
        None => println!("  {name}: not found"),
    }
}

fn cmd_solve(scheme_path: &Path, settings: &Settings, format: Format) -> AppResult<()> {
    let scheme = scheme_service::load_scheme(scheme_path)?;
    info!(scheme = %scheme.name, path = %scheme_path.display(), "solving scheme");
    match format {
        Format::Json => match solve_service::calculate(scheme.data, settings) {
            Ok(report) => {
                println!("{}", pretty(&report)?);
                Ok(())
            }
            Err(e) => {
                println!("{}", pretty(&ErrorBody { error: e.to_string() })?);
                Err(e)
            }
        },
        Format::Text => {
            let report = solve_service::calculate(scheme.data, settings)?;
            print_report(&report);
            Ok(())
        }
    }
}

fn cmd_batch(scheme_paths: Vec<PathBuf>, settings: &Settings) -> AppResult<()> {
    let mut defs = Vec::with_capacity(scheme_paths.len());
    for path in &scheme_paths {
        defs.push(scheme_service::load_scheme(path)?.data);
    }

    info!(schemes = defs.len(), "solving batch");
    let results = solve_service::solve_batch(defs, settings);
    let mut failed = 0;
    for (path, result) in scheme_paths.iter().zip(results) {
        match result {
            Ok(report) => println!(
                "✓ {}: {} branches, {}",
                path.display(),
                report.details.len(),
                report.conclusion
            ),
            Err(e) => {
                failed += 1;
                println!("✗ {}: {e}", path.display());
            }
        }
    }
    if failed > 0 {
        return Err(AppError::Solver(format!(
            "{failed} of {} schemes failed",
            scheme_paths.len()
        )));
    }
    Ok(())
}

fn cmd_constants(settings: &Settings) -> AppResult<()> {
    print!("{}", settings.constants_yaml()?);
    Ok(())
}

fn print_report(report: &HydraulicsReport) {
    for (key, b) in &report.details {
        println!("Branch {key} (pump {})", b.pump_instance_id);
        println!(
            "  Flow: {:.2} L/min at {:.0} rpm, drain {:.2} L/min",
            b.flow_lpm, b.engine_rpm, b.drain_flow_lpm
        );
        println!(
            "  Velocity [m/s]: suction {:.2}, pressure {:.2}, drain {:.2}",
            b.velocities.suction, b.velocities.pressure, b.velocities.drain
        );
        println!(
            "  Losses [MPa]: lines {:.3}, components {:.3}, total {:.3}",
            b.losses.total - b.losses.pressure_components - b.losses.drain_components,
            b.losses.pressure_components + b.losses.drain_components,
            b.losses.total
        );
        for c in &b.components {
            println!(
                "    {} {} ({}): {:.4} MPa{}",
                c.catalog_id,
                c.instance_id,
                c.line,
                c.loss_mpa,
                if c.scaled { "" } else { " (unscaled)" }
            );
        }
        println!(
            "  Cylinder: {:.2} MPa, pump must deliver {:.2} MPa",
            b.cylinder_pressure_mpa, b.required_pump_pressure_mpa
        );
        println!(
            "  Efficiency: hydraulic {:.3}, mechanical {:.3}, volumetric {:.3}, overall {:.3}",
            b.efficiencies.hydraulic,
            b.efficiencies.mechanical,
            b.efficiencies.volumetric,
            b.efficiencies.overall
        );
        println!(
            "  Power: {:.2} kW, heat {:.2} kW",
            b.pump_power_kw, b.heat_generated_kw
        );
    }

    println!();
    println!("Tank area: {:.3} m²", report.current_tank_area);
    match report.calculated_steady_state_temp_c {
        Some(t) => println!("Steady-state oil temperature: {t:.1} °C"),
        None => println!("Steady-state oil temperature: unbounded"),
    }
    match report.required_tank_area {
        Some(a) => println!("Required tank area: {a:.3} m²"),
        None => println!("Required tank area: unreachable"),
    }
    println!("{}", report.conclusion);
}

fn pretty<T: serde::Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Internal(format!("Failed to encode JSON: {e}")))
}
