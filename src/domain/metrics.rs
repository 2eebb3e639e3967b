//! Concentration metrics over a set of holdings.
//!
//! Everything downstream (scoring, rebalancing) is derived from the numbers
//! computed here. Pure function of its input; empty portfolios produce an
//! all-zero result rather than an error.

use super::holding::Holding;
use serde::Serialize;
use std::collections::HashMap;

/// Largest-position weight sums over the ticker-keyed weight mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TopWeights {
    pub top1: f64,
    pub top5: f64,
    pub top10: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingMetrics {
    pub total_value: f64,
    /// Weight per distinct ticker. Duplicate tickers collapse to a single
    /// entry, last occurrence wins; their values still count toward
    /// `total_value`.
    pub weights: HashMap<String, f64>,
    pub top_weights: TopWeights,
    /// Herfindahl-Hirschman Index: sum of squared mapped weights, in [0, 1].
    pub hhi: f64,
    /// 1/HHI: the equal-weight position count with equivalent concentration.
    pub effective_holdings: f64,
    /// Mapped weights strictly below 0.5% of the portfolio.
    pub tiny_positions: usize,
}

const TINY_WEIGHT: f64 = 0.005;

fn safe_number(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

pub fn compute_holding_metrics(holdings: &[Holding]) -> HoldingMetrics {
    let values: Vec<f64> = holdings.iter().map(Holding::market_value).collect();
    let total_value: f64 = values.iter().sum();

    let mut weights: HashMap<String, f64> = HashMap::new();
    for (holding, value) in holdings.iter().zip(&values) {
        let weight = if total_value > 0.0 {
            value / total_value
        } else {
            0.0
        };
        weights.insert(holding.ticker.clone(), weight);
    }

    let mut sorted: Vec<f64> = weights.values().copied().collect();
    sorted.sort_by(|a, b| b.total_cmp(a));

    let top1 = sorted.first().copied().unwrap_or(0.0);
    let top5: f64 = sorted.iter().take(5).sum();
    let top10: f64 = sorted.iter().take(10).sum();

    let hhi: f64 = weights.values().map(|w| w * w).sum();
    let effective_holdings = if hhi > 0.0 { 1.0 / hhi } else { 0.0 };
    let tiny_positions = weights.values().filter(|w| **w < TINY_WEIGHT).count();

    HoldingMetrics {
        total_value: safe_number(total_value),
        weights,
        top_weights: TopWeights { top1, top5, top10 },
        hhi,
        effective_holdings,
        tiny_positions,
    }
}
