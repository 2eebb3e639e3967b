//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::json_holdings::JsonHoldingsAdapter;
use crate::adapters::json_report::JsonReportAdapter;
use crate::adapters::text_report::TextReportAdapter;
use crate::domain::error::FoliostatError;
use crate::domain::holding::Holding;
use crate::domain::metrics::compute_holding_metrics;
use crate::domain::rebalance::{RebalancePreset, generate_rebalance_plan};
use crate::domain::scoring::{Rubric, score_portfolio};
use crate::domain::stress::{Scenario, run_stress_test};
use crate::ports::holdings_port::HoldingsPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "foliostat", about = "Portfolio analytics calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Concentration metrics (weights, HHI, effective holdings)
    Metrics {
        /// Holdings JSON file; stdin when omitted
        #[arg(long)]
        holdings: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Composite 0-100 portfolio score
    Score {
        #[arg(long)]
        holdings: Option<PathBuf>,
        /// Scoring rubric: strict or lenient
        #[arg(long, default_value = "strict")]
        rubric: String,
        #[arg(long)]
        json: bool,
    },
    /// Hypothetical stress-test impact
    Stress {
        #[arg(long)]
        holdings: Option<PathBuf>,
        /// Scenario name; all built-in scenarios when omitted
        #[arg(long)]
        scenario: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Buy/trim suggestions against a target allocation
    Rebalance {
        #[arg(long)]
        holdings: Option<PathBuf>,
        /// Preset name, e.g. "Balanced Growth"
        #[arg(long)]
        preset: String,
        /// Preserve band declaration order instead of listing buys first
        #[arg(long)]
        keep_order: bool,
        #[arg(long)]
        json: bool,
    },
    /// List the built-in stress scenarios
    Scenarios,
    /// List the built-in rebalance presets and their bands
    Presets,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Metrics { holdings, json } => run_metrics(holdings.as_ref(), json),
        Command::Score {
            holdings,
            rubric,
            json,
        } => run_score(holdings.as_ref(), &rubric, json),
        Command::Stress {
            holdings,
            scenario,
            json,
        } => run_stress(holdings.as_ref(), scenario.as_deref(), json),
        Command::Rebalance {
            holdings,
            preset,
            keep_order,
            json,
        } => run_rebalance(holdings.as_ref(), &preset, keep_order, json),
        Command::Scenarios => run_scenarios(),
        Command::Presets => run_presets(),
    }
}

pub fn load_holdings(path: Option<&PathBuf>) -> Result<Vec<Holding>, FoliostatError> {
    let adapter = match path {
        Some(path) => JsonHoldingsAdapter::from_file(path),
        None => JsonHoldingsAdapter::from_stdin(),
    };
    adapter.load_holdings()
}

fn report_adapter(json: bool) -> Box<dyn ReportPort> {
    if json {
        Box::new(JsonReportAdapter)
    } else {
        Box::new(TextReportAdapter)
    }
}

fn finish(result: Result<String, FoliostatError>) -> ExitCode {
    match result {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(&err)
        }
    }
}

pub fn metrics_report(path: Option<&PathBuf>, json: bool) -> Result<String, FoliostatError> {
    let holdings = load_holdings(path)?;
    let metrics = compute_holding_metrics(&holdings);
    report_adapter(json).render_metrics(&metrics)
}

pub fn score_report(
    path: Option<&PathBuf>,
    rubric: &str,
    json: bool,
) -> Result<String, FoliostatError> {
    let rubric = rubric.parse::<Rubric>()?;
    let holdings = load_holdings(path)?;
    let score = score_portfolio(&holdings, rubric);
    report_adapter(json).render_score(&score)
}

pub fn stress_report(
    path: Option<&PathBuf>,
    scenario: Option<&str>,
    json: bool,
) -> Result<String, FoliostatError> {
    let scenarios = match scenario {
        Some(name) => vec![name.parse::<Scenario>()?],
        None => Scenario::ALL.to_vec(),
    };
    let holdings = load_holdings(path)?;
    let results: Vec<_> = scenarios
        .iter()
        .map(|scenario| run_stress_test(&holdings, *scenario))
        .collect();
    report_adapter(json).render_stress(&results)
}

pub fn rebalance_report(
    path: Option<&PathBuf>,
    preset: &str,
    keep_order: bool,
    json: bool,
) -> Result<String, FoliostatError> {
    let preset = preset.parse::<RebalancePreset>()?;
    let holdings = load_holdings(path)?;
    let plan = generate_rebalance_plan(&holdings, preset, !keep_order);
    report_adapter(json).render_rebalance(&plan)
}

fn run_metrics(path: Option<&PathBuf>, json: bool) -> ExitCode {
    finish(metrics_report(path, json))
}

fn run_score(path: Option<&PathBuf>, rubric: &str, json: bool) -> ExitCode {
    finish(score_report(path, rubric, json))
}

fn run_stress(path: Option<&PathBuf>, scenario: Option<&str>, json: bool) -> ExitCode {
    finish(stress_report(path, scenario, json))
}

fn run_rebalance(path: Option<&PathBuf>, preset: &str, keep_order: bool, json: bool) -> ExitCode {
    finish(rebalance_report(path, preset, keep_order, json))
}

fn run_scenarios() -> ExitCode {
    for scenario in Scenario::ALL {
        println!("{} - {}", scenario.name(), scenario.description());
        for shock in scenario.shocks() {
            println!("  {}", shock.label);
        }
    }
    ExitCode::SUCCESS
}

fn run_presets() -> ExitCode {
    for preset in RebalancePreset::ALL {
        println!("{}", preset.name());
        for (asset_class, band) in preset.bands() {
            println!(
                "  {:<14} {:.0}% - {:.0}%",
                asset_class.label(),
                band.min * 100.0,
                band.max * 100.0
            );
        }
    }
    ExitCode::SUCCESS
}
