//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - installs the log subscriber
//! - parses CLI arguments
//! - runs the demo pipeline
//! - prints the summary/plot or JSON

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, DemoArgs};
use crate::domain::{CovarianceScaling, DemoConfig};
use crate::error::AppError;
use crate::report::RunReport;

pub mod pipeline;

/// Entry point for the `meff` binary.
pub fn run() -> Result<(), AppError> {
    init_tracing();

    let cli = crate::cli::Cli::parse();
    match cli.command {
        Command::Demo(args) => handle_demo(args),
    }
}

/// Log to stderr so `--json` output on stdout stays parseable.
fn init_tracing() {
    let filter = env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log filter from a `RUST_LOG`-style directive string, `info` when unset.
fn env_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn handle_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = demo_config_from_args(&args);
    let run = pipeline::run_demo(&config)?;

    if config.json {
        let report = RunReport::new(&run.correlator, &run.curve, [run.window.start, run.window.end], run.fit);
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::new(4, format!("Failed to serialize run report: {e}")))?;
        println!("{json}");
        return Ok(());
    }

    let window = run.plateau()?;
    println!(
        "{}",
        crate::report::format_run_summary(&config, &run.curve, &window, &run.fit)
    );

    if config.plot {
        let plot = crate::plot::render_mass_plot(&window, Some(&run.fit), config.plot_width, config.plot_height);
        println!("{plot}");
    }

    Ok(())
}

pub fn demo_config_from_args(args: &DemoArgs) -> DemoConfig {
    DemoConfig {
        extent: args.extent,
        amplitude: args.amplitude,
        mass: args.mass,
        noise: args.noise,
        seed: args.seed,
        strategy: args.strategy.clone(),
        window: args.window_start..args.window_end,
        rel_uncertainty: args.rel_uncertainty,
        scaling: if args.absolute_sigma {
            CovarianceScaling::Absolute
        } else {
            CovarianceScaling::ReducedChiSquare
        },
        plot: !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        json: args.json,
    }
}
