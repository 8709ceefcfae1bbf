//! Command-line parsing for the demo binary.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the numeric code.

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "meff", version, about = "Effective mass and plateau fit for lattice correlators")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Synthesize a noisy exponential correlator, compute its effective mass and fit a plateau.
    Demo(DemoArgs),
}

/// Options for the demo run.
#[derive(Debug, Parser, Clone)]
pub struct DemoArgs {
    /// Temporal extent T of the correlator.
    #[arg(short = 'T', long, default_value_t = 24)]
    pub extent: usize,

    /// Correlator amplitude A.
    #[arg(long, default_value_t = 1.0)]
    pub amplitude: f64,

    /// Mass m of the exponential decay.
    #[arg(short = 'm', long, default_value_t = 0.15)]
    pub mass: f64,

    /// Relative Gaussian noise on each correlator sample.
    #[arg(long, default_value_t = 0.001)]
    pub noise: f64,

    /// Random seed for the synthetic correlator.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Effective-mass strategy (supported: log).
    #[arg(short = 's', long, default_value = "log")]
    pub strategy: String,

    /// First effective-mass index of the plateau window.
    #[arg(long, default_value_t = 4)]
    pub window_start: usize,

    /// One past the last effective-mass index of the plateau window.
    #[arg(long, default_value_t = 16)]
    pub window_end: usize,

    /// Per-point uncertainty as a fraction of |m_eff|.
    #[arg(long, default_value_t = 0.01)]
    pub rel_uncertainty: f64,

    /// Treat uncertainties as absolute (do not rescale by chi2/dof).
    #[arg(long)]
    pub absolute_sigma: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 15)]
    pub height: usize,

    /// Print the run as JSON instead of the text summary.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_defaults() {
        let cli = Cli::parse_from(["meff", "demo"]);
        let Command::Demo(args) = cli.command;
        assert_eq!(args.extent, 24);
        assert_eq!(args.strategy, "log");
        assert_eq!((args.window_start, args.window_end), (4, 16));
        assert!(!args.absolute_sigma && !args.no_plot && !args.json);
    }

    #[test]
    fn demo_flags() {
        let cli = Cli::parse_from(["meff", "demo", "-T", "32", "-s", "cosh", "--absolute-sigma", "--json"]);
        let Command::Demo(args) = cli.command;
        assert_eq!(args.extent, 32);
        assert_eq!(args.strategy, "cosh");
        assert!(args.absolute_sigma && args.json);
    }
}
