//! Composite portfolio score.
//!
//! Five independently clamped sub-scores summed into a 0-100 total:
//! - diversification (0-25): rewards low HHI
//! - concentration (0-25): penalizes the largest single weight
//! - resilience (0-25): rewards effective holdings
//! - fit (0-15): heuristic on top-5 weight, independent of `concentration`
//! - hygiene (0-10): penalizes many sub-0.5% fragments
//!
//! The rubric scales only the diversification and concentration penalties;
//! there is no other behavioral difference between strict and lenient.

use super::error::FoliostatError;
use super::holding::Holding;
use super::metrics::compute_holding_metrics;
use serde::Serialize;
use std::str::FromStr;

/// Scoring rubric. Strict applies harsher concentration multipliers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rubric {
    #[default]
    Strict,
    Lenient,
}

impl Rubric {
    fn hhi_multiplier(&self) -> f64 {
        match self {
            Rubric::Strict => 1.2,
            Rubric::Lenient => 0.9,
        }
    }

    fn top1_multiplier(&self) -> f64 {
        match self {
            Rubric::Strict => 0.5,
            Rubric::Lenient => 0.35,
        }
    }
}

impl FromStr for Rubric {
    type Err = FoliostatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(Rubric::Strict),
            "lenient" => Ok(Rubric::Lenient),
            _ => Err(FoliostatError::UnknownRubric {
                name: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub diversification: f64,
    pub concentration: f64,
    pub resilience: f64,
    pub fit: f64,
    pub hygiene: f64,
    pub total: f64,
    pub notes: Vec<String>,
    pub improvements: Vec<String>,
}

fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

pub fn score_portfolio(holdings: &[Holding], rubric: Rubric) -> ScoreBreakdown {
    let metrics = compute_holding_metrics(holdings);

    let diversification = clamp(25.0 - metrics.hhi * 100.0 * rubric.hhi_multiplier(), 0.0, 25.0);
    let concentration_penalty = metrics.top_weights.top1 * 100.0;
    let concentration = clamp(25.0 - concentration_penalty * rubric.top1_multiplier(), 0.0, 25.0);
    let resilience = clamp(15.0 + metrics.effective_holdings * 1.5, 0.0, 25.0);
    let fit = clamp(10.0 + metrics.top_weights.top5 * 25.0, 0.0, 15.0);
    let hygiene = clamp(10.0 - metrics.tiny_positions as f64 * 0.75, 0.0, 10.0);

    let total = clamp(
        diversification + concentration + resilience + fit + hygiene,
        0.0,
        100.0,
    );

    let notes = vec![
        format!("HHI concentration: {:.1}%", metrics.hhi * 100.0),
        format!("Top holding weight: {:.1}%", metrics.top_weights.top1 * 100.0),
        format!("Effective holdings: {:.1}", metrics.effective_holdings),
    ];

    let improvements = vec![
        if metrics.top_weights.top1 > 0.15 {
            "Consider reducing the largest holding to improve concentration risk.".to_string()
        } else {
            "Largest holding is within a diversified range.".to_string()
        },
        if metrics.tiny_positions > 3 {
            "Consider consolidating tiny positions to reduce fragmentation.".to_string()
        } else {
            "Position sizing looks consistent.".to_string()
        },
    ];

    ScoreBreakdown {
        diversification,
        concentration,
        resilience,
        fit,
        hygiene,
        total,
        notes,
        improvements,
    }
}
