//! pkexposure - drug exposure and elimination from the command line
//!
//! ## Commands
//!
//! - `simulate`: simulate one regimen, print its summary and a thinned table,
//!   optionally export the full series as CSV and draw it as SVG
//! - `compare`: simulate several regimens side by side

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{info, Level};

use pkexposure::data::series::DEFAULT_ROW_STRIDE;
use pkexposure::logging::init_tracing;
use pkexposure::plot::{plot_series, PlotConfig};
use pkexposure::{
    simulate_many, try_simulate, AUCMethod, DoseOnset, DosingRegimen, Route, Simulation,
    SimulationOptions,
};

const EQUATIONS: &str = "\
C_iv(t)   = C0 · e^(−k·t)
C_oral(t) = D·ka / (Vd·(ka − k)) · (e^(−k·t) − e^(−ka·t))
AUC       ≈ ∫₀ᵀ C(t) dt

Where:
  C0 = initial concentration (mg/L)
  D  = dose (mg)
  Vd = volume of distribution (L)
  k  = elimination rate constant (1/hr)
  ka = absorption rate constant (1/hr)
  τ  = dosing interval (hr)";

#[derive(Parser)]
#[command(name = "pkexposure")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Simulate drug concentration over time with one-compartment models", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a single regimen
    Simulate {
        #[command(flatten)]
        regimen: RegimenArgs,

        #[command(flatten)]
        options: OptionArgs,

        /// Write the full series to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Show every N-th row in the table
        #[arg(long, default_value_t = DEFAULT_ROW_STRIDE)]
        every: usize,

        /// Draw the concentration-time curve to this SVG file
        #[arg(long)]
        plot: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also print the model equations
        #[arg(long)]
        equations: bool,
    },

    /// Simulate several regimens (JSON files) in parallel
    Compare {
        /// Regimen files, one per scenario
        #[arg(long = "regimen", required = true)]
        regimens: Vec<PathBuf>,

        #[command(flatten)]
        options: OptionArgs,
    },
}

#[derive(Args)]
struct RegimenArgs {
    /// Load the regimen from a JSON file instead of the flags below
    #[arg(long, conflicts_with_all = ["route", "dose", "vd", "k", "ka", "tau", "doses"])]
    regimen: Option<PathBuf>,

    /// Dosing route
    #[arg(long, value_enum, default_value_t = RouteArg::Iv)]
    route: RouteArg,

    /// Dose (mg)
    #[arg(long, default_value_t = 500.0)]
    dose: f64,

    /// Volume of distribution Vd (L)
    #[arg(long, default_value_t = 50.0)]
    vd: f64,

    /// Elimination rate constant k (1/hr)
    #[arg(short, default_value_t = 0.2)]
    k: f64,

    /// Absorption rate constant ka (1/hr), oral route only
    #[arg(long)]
    ka: Option<f64>,

    /// Dosing interval τ (hr); enables multiple dosing together with --doses
    #[arg(long)]
    tau: Option<f64>,

    /// Number of doses
    #[arg(long)]
    doses: Option<usize>,
}

#[derive(Args)]
struct OptionArgs {
    /// Number of grid points
    #[arg(long, default_value_t = pkexposure::simulator::options::DEFAULT_SAMPLES)]
    samples: usize,

    /// Hours simulated after the last dose
    #[arg(long, default_value_t = pkexposure::simulator::options::DEFAULT_TAIL_HOURS)]
    tail: f64,

    /// Contribution of a dose before it is given
    #[arg(long, value_enum, default_value_t = OnsetArg::Mask)]
    onset: OnsetArg,

    /// AUC integration method
    #[arg(long, value_enum, default_value_t = AucArg::Linear)]
    auc: AucArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum RouteArg {
    Iv,
    Oral,
}

#[derive(Clone, Copy, ValueEnum)]
enum OnsetArg {
    Mask,
    Clamp,
}

#[derive(Clone, Copy, ValueEnum)]
enum AucArg {
    Linear,
    LinUpLogDown,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl RegimenArgs {
    fn to_regimen(&self) -> Result<DosingRegimen> {
        if let Some(path) = &self.regimen {
            return load_regimen(path);
        }

        let route = match (self.route, self.ka) {
            (RouteArg::Iv, None) => Route::IVBolus,
            (RouteArg::Iv, Some(_)) => bail!("--ka only applies to the oral route"),
            (RouteArg::Oral, Some(ka)) => Route::Oral { ka },
            (RouteArg::Oral, None) => bail!("--ka is required for the oral route"),
        };

        let mut builder = DosingRegimen::builder(route, self.dose, self.vd, self.k);
        match (self.tau, self.doses) {
            (None, None) => {}
            (tau, doses) => {
                builder = builder.multiple(
                    tau.unwrap_or(pkexposure::data::regimen::DEFAULT_TAU),
                    doses.unwrap_or(1),
                )
            }
        }
        builder.build().context("Invalid regimen")
    }
}

impl OptionArgs {
    fn to_options(&self) -> SimulationOptions {
        SimulationOptions::default()
            .with_samples(self.samples)
            .with_tail_hours(self.tail)
            .with_onset(match self.onset {
                OnsetArg::Mask => DoseOnset::Mask,
                OnsetArg::Clamp => DoseOnset::Clamp,
            })
            .with_auc_method(match self.auc {
                AucArg::Linear => AUCMethod::Linear,
                AucArg::LinUpLogDown => AUCMethod::LinUpLogDown,
            })
    }
}

fn load_regimen(path: &Path) -> Result<DosingRegimen> {
    let file =
        File::open(path).with_context(|| format!("Failed to open regimen {}", path.display()))?;
    let regimen: DosingRegimen = serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse regimen {}", path.display()))?;
    regimen
        .validate()
        .with_context(|| format!("Invalid regimen in {}", path.display()))?;
    Ok(regimen)
}

fn describe(regimen: &DosingRegimen) -> String {
    let mut text = format!(
        "{}: dose {} mg, Vd {} L, k {} 1/hr",
        regimen.route(),
        regimen.dose(),
        regimen.vd(),
        regimen.k()
    );
    if let Some(ka) = regimen.route().ka() {
        text.push_str(&format!(", ka {} 1/hr", ka));
    }
    if regimen.is_multiple() {
        text.push_str(&format!(
            ", {} doses every {} hr",
            regimen.doses(),
            regimen.tau()
        ));
    }
    text
}

/// Write the CSV and SVG outputs that were requested
fn write_exports(simulation: &Simulation, csv: Option<&Path>, plot: Option<&Path>) -> Result<()> {
    if let Some(path) = csv {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        simulation
            .series
            .write_csv(file)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(
            "Wrote {} rows to {}",
            simulation.series.len(),
            path.display()
        );
    }

    if let Some(path) = plot {
        plot_series(&simulation.series, path, &PlotConfig::default())
            .with_context(|| format!("Failed to plot {}", path.display()))?;
        info!("Wrote concentration-time plot to {}", path.display());
    }

    Ok(())
}

fn print_table(simulation: &Simulation, every: usize) {
    println!("{:>10}  {:>20}", "Time (hr)", "Concentration (mg/L)");
    for (time, conc) in simulation.series.every_nth(every) {
        println!("{:>10.3}  {:>20.4}", time, conc);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    init_tracing(cli.json, level);

    match cli.command {
        Commands::Simulate {
            regimen,
            options,
            csv,
            every,
            format,
            equations,
            plot,
        } => {
            let regimen = regimen.to_regimen()?;
            let options = options.to_options();
            let simulation = try_simulate(&regimen, &options).context("Simulation failed")?;

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&simulation)?);
                }
                OutputFormat::Text => {
                    println!("{}", describe(&regimen));
                    println!();
                    println!("{}", simulation.summary);
                    println!();
                    print_table(&simulation, every);
                    if equations {
                        println!();
                        println!("{}", EQUATIONS);
                    }
                }
            }

            write_exports(&simulation, csv.as_deref(), plot.as_deref())?;
        }

        Commands::Compare { regimens, options } => {
            let loaded = regimens
                .iter()
                .map(|path| load_regimen(path))
                .collect::<Result<Vec<_>>>()?;
            let options = options.to_options();
            options.validate().context("Invalid simulation options")?;

            let simulations = simulate_many(&loaded, &options);
            for (path, simulation) in regimens.iter().zip(simulations.iter()) {
                let summary = &simulation.summary;
                let peak = match (summary.c0, summary.cmax, summary.tmax) {
                    (Some(c0), _, _) => format!("C0 {:.2} mg/L", c0),
                    (None, Some(cmax), Some(tmax)) => {
                        format!("Cmax {:.2} mg/L at {:.1} hr", cmax, tmax)
                    }
                    _ => "-".to_string(),
                };
                println!(
                    "{}\t{}\t{}\tAUC0-{} {:.2} mg·hr/L",
                    path.display(),
                    describe(&simulation.regimen),
                    peak,
                    summary.horizon,
                    summary.auc
                );
            }
        }
    }

    Ok(())
}
