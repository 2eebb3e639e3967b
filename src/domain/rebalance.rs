//! Rule-based rebalancing against preset target allocations.
//!
//! Each preset defines a [min, max] weight band per asset class. Actual
//! asset-class weights outside a band produce a buy or trim suggestion sized
//! to bring the class back to the nearest band edge. `Other` carries no band
//! in any preset and is never evaluated.

use super::error::FoliostatError;
use super::holding::{AssetClass, Holding};
use super::metrics::compute_holding_metrics;
use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;

/// Target weight band for one asset class, as fractions of total value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

/// Built-in target allocations. Band values are fixed product configuration
/// and must not drift; downstream consumers compare against them numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RebalancePreset {
    BalancedGrowth,
    GrowthIncome,
    ConservativeIncome,
    AggressiveGrowth,
}

impl RebalancePreset {
    pub const ALL: [RebalancePreset; 4] = [
        RebalancePreset::BalancedGrowth,
        RebalancePreset::GrowthIncome,
        RebalancePreset::ConservativeIncome,
        RebalancePreset::AggressiveGrowth,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RebalancePreset::BalancedGrowth => "Balanced Growth",
            RebalancePreset::GrowthIncome => "Growth + Income",
            RebalancePreset::ConservativeIncome => "Conservative Income",
            RebalancePreset::AggressiveGrowth => "Aggressive Growth",
        }
    }

    /// Band table in evaluation order. Order is observable when
    /// `prefer_adds` is off.
    pub fn bands(&self) -> &'static [(AssetClass, Band)] {
        match self {
            RebalancePreset::BalancedGrowth => &[
                (AssetClass::Equity, Band { min: 0.45, max: 0.65 }),
                (AssetClass::Etf, Band { min: 0.2, max: 0.4 }),
                (AssetClass::Crypto, Band { min: 0.0, max: 0.05 }),
                (AssetClass::FixedIncome, Band { min: 0.05, max: 0.2 }),
                (AssetClass::Cash, Band { min: 0.02, max: 0.08 }),
            ],
            RebalancePreset::GrowthIncome => &[
                (AssetClass::Equity, Band { min: 0.4, max: 0.6 }),
                (AssetClass::Etf, Band { min: 0.15, max: 0.35 }),
                (AssetClass::Crypto, Band { min: 0.0, max: 0.04 }),
                (AssetClass::FixedIncome, Band { min: 0.1, max: 0.25 }),
                (AssetClass::Cash, Band { min: 0.03, max: 0.1 }),
            ],
            RebalancePreset::ConservativeIncome => &[
                (AssetClass::Equity, Band { min: 0.2, max: 0.4 }),
                (AssetClass::Etf, Band { min: 0.2, max: 0.3 }),
                (AssetClass::Crypto, Band { min: 0.0, max: 0.02 }),
                (AssetClass::FixedIncome, Band { min: 0.25, max: 0.45 }),
                (AssetClass::Cash, Band { min: 0.05, max: 0.15 }),
            ],
            RebalancePreset::AggressiveGrowth => &[
                (AssetClass::Equity, Band { min: 0.55, max: 0.75 }),
                (AssetClass::Etf, Band { min: 0.15, max: 0.3 }),
                (AssetClass::Crypto, Band { min: 0.0, max: 0.08 }),
                (AssetClass::FixedIncome, Band { min: 0.0, max: 0.1 }),
                (AssetClass::Cash, Band { min: 0.02, max: 0.06 }),
            ],
        }
    }
}

impl FromStr for RebalancePreset {
    type Err = FoliostatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RebalancePreset::ALL
            .iter()
            .copied()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FoliostatError::UnknownPreset {
                name: s.to_string(),
                available: RebalancePreset::ALL
                    .iter()
                    .map(|p| p.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ConsiderBuy,
    ConsiderTrim,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Asset-class label, uppercased; recommendations target classes, not
    /// individual tickers.
    pub ticker: String,
    pub action: Action,
    pub dollars: f64,
    pub rationale: String,
    pub confidence: f64,
}

pub fn generate_rebalance_plan(
    holdings: &[Holding],
    preset: RebalancePreset,
    prefer_adds: bool,
) -> Vec<Recommendation> {
    let metrics = compute_holding_metrics(holdings);
    // Fallback to 1 keeps the division defined; with zero total every class
    // sits at weight 0 and below-minimum classes surface as buys.
    let total_value = if metrics.total_value > 0.0 {
        metrics.total_value
    } else {
        1.0
    };

    let mut class_weights: HashMap<AssetClass, f64> = HashMap::new();
    for holding in holdings {
        *class_weights.entry(holding.asset_class).or_insert(0.0) +=
            holding.market_value() / total_value;
    }

    let mut recommendations = Vec::new();
    for (asset_class, band) in preset.bands() {
        let weight = class_weights.get(asset_class).copied().unwrap_or(0.0);
        let label = asset_class.label();

        if weight > band.max {
            recommendations.push(Recommendation {
                ticker: label.to_uppercase(),
                action: Action::ConsiderTrim,
                dollars: total_value * (weight - band.max),
                rationale: format!("{label} weight above target band."),
                confidence: 0.6,
            });
        } else if weight < band.min {
            recommendations.push(Recommendation {
                ticker: label.to_uppercase(),
                action: Action::ConsiderBuy,
                dollars: total_value * (band.min - weight),
                rationale: format!("{label} weight below target band."),
                confidence: 0.65,
            });
        }
    }

    if prefer_adds {
        // Stable: buys first, emission order preserved within each group.
        recommendations.sort_by_key(|rec| rec.action == Action::ConsiderTrim);
    }

    recommendations
}
