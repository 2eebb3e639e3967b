//! Hypothetical stress testing against built-in shock scenarios.
//!
//! Shocks target buckets, each bucket covering one or more asset classes.
//! A holding accumulates every matching shock in a scenario; under the
//! default tables an equity position hit by both "US Growth" and "EM" takes
//! the summed shock.

use super::error::FoliostatError;
use super::holding::{AssetClass, Holding};
use serde::Serialize;
use std::str::FromStr;

/// Named grouping of asset classes that a shock targets.
///
/// `Largest` is the odd one out: it maps to no asset class, so a shock
/// against it is inert on the bucket-matching path. It exists only to label
/// the "Single Stock Shock" entry, whose effect comes from the positional
/// special case in [`run_stress_test`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Bucket {
    UsGrowth,
    EmergingMarkets,
    Income,
    Crypto,
    Cash,
    Largest,
}

impl Bucket {
    /// Fixed bucket to asset-class mapping shared by all scenarios.
    pub fn asset_classes(&self) -> &'static [AssetClass] {
        match self {
            Bucket::UsGrowth => &[AssetClass::Equity, AssetClass::Etf],
            Bucket::EmergingMarkets => &[AssetClass::Equity],
            Bucket::Income => &[AssetClass::FixedIncome],
            Bucket::Crypto => &[AssetClass::Crypto],
            Bucket::Cash => &[AssetClass::Cash],
            Bucket::Largest => &[],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Bucket::UsGrowth => "US Growth",
            Bucket::EmergingMarkets => "EM",
            Bucket::Income => "Income",
            Bucket::Crypto => "Crypto",
            Bucket::Cash => "Cash",
            Bucket::Largest => "Largest",
        }
    }
}

/// One signed percentage shock against a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shock {
    pub bucket: Bucket,
    pub shock_pct: f64,
    pub label: &'static str,
}

/// Built-in stress scenarios. Closed set; callers select by variant, so an
/// unknown scenario cannot reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Scenario {
    RateShock2022,
    SingleStockShock,
    GlobalRecession,
}

const SINGLE_STOCK_SHOCK_PCT: f64 = -0.4;

impl Scenario {
    pub const ALL: [Scenario; 3] = [
        Scenario::RateShock2022,
        Scenario::SingleStockShock,
        Scenario::GlobalRecession,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::RateShock2022 => "2022 Rate Shock",
            Scenario::SingleStockShock => "Single Stock Shock",
            Scenario::GlobalRecession => "Global Recession",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Scenario::RateShock2022 => "Rates up, growth down, crypto hit harder.",
            Scenario::SingleStockShock => "Largest holding drops 40%.",
            Scenario::GlobalRecession => "Broad drawdown with defensives holding up.",
        }
    }

    pub fn shocks(&self) -> &'static [Shock] {
        match self {
            Scenario::RateShock2022 => &[
                Shock {
                    bucket: Bucket::UsGrowth,
                    shock_pct: -0.18,
                    label: "US Growth -18%",
                },
                Shock {
                    bucket: Bucket::EmergingMarkets,
                    shock_pct: -0.12,
                    label: "EM -12%",
                },
                Shock {
                    bucket: Bucket::Crypto,
                    shock_pct: -0.45,
                    label: "Crypto -45%",
                },
            ],
            Scenario::SingleStockShock => &[Shock {
                bucket: Bucket::Largest,
                shock_pct: SINGLE_STOCK_SHOCK_PCT,
                label: "Largest holding -40%",
            }],
            Scenario::GlobalRecession => &[
                Shock {
                    bucket: Bucket::UsGrowth,
                    shock_pct: -0.22,
                    label: "Broad -22%",
                },
                Shock {
                    bucket: Bucket::Income,
                    shock_pct: -0.08,
                    label: "Income -8%",
                },
            ],
        }
    }
}

impl FromStr for Scenario {
    type Err = FoliostatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .iter()
            .copied()
            .find(|scenario| scenario.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FoliostatError::UnknownScenario {
                name: s.to_string(),
                available: Scenario::ALL
                    .iter()
                    .map(|s| s.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contributor {
    pub ticker: String,
    pub impact: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StressResult {
    pub scenario: String,
    pub impact_pct: f64,
    pub impact_dollars: f64,
    /// The 3 most negative per-holding impacts, most negative first.
    pub top_contributors: Vec<Contributor>,
}

pub fn run_stress_test(holdings: &[Holding], scenario: Scenario) -> StressResult {
    let total_value: f64 = holdings.iter().map(Holding::market_value).sum();

    let impacts: Vec<Contributor> = holdings
        .iter()
        .enumerate()
        .map(|(index, holding)| {
            let value = holding.market_value();

            // Inherited quirk: "Single Stock Shock" hits whichever holding is
            // first in input order, not the largest by value. Callers that
            // want "largest" must sort before calling.
            if scenario == Scenario::SingleStockShock {
                let impact = if index == 0 {
                    value * SINGLE_STOCK_SHOCK_PCT
                } else {
                    0.0
                };
                return Contributor {
                    ticker: holding.ticker.clone(),
                    impact,
                };
            }

            let shock: f64 = scenario
                .shocks()
                .iter()
                .filter(|shock| shock.bucket.asset_classes().contains(&holding.asset_class))
                .map(|shock| shock.shock_pct)
                .sum();

            Contributor {
                ticker: holding.ticker.clone(),
                impact: value * shock,
            }
        })
        .collect();

    let impact_dollars: f64 = impacts.iter().map(|c| c.impact).sum();
    let impact_pct = if total_value > 0.0 {
        impact_dollars / total_value
    } else {
        0.0
    };

    let mut top_contributors = impacts;
    top_contributors.sort_by(|a, b| a.impact.total_cmp(&b.impact));
    top_contributors.truncate(3);

    StressResult {
        scenario: scenario.name().to_string(),
        impact_pct,
        impact_dollars,
        top_contributors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_holding(ticker: &str, asset_class: AssetClass, value: f64) -> Holding {
        Holding {
            ticker: ticker.to_string(),
            asset_class,
            quantity: 1.0,
            avg_cost: None,
            last_price: None,
            value: Some(value),
        }
    }

    #[test]
    fn empty_portfolio_has_zero_impact() {
        let result = run_stress_test(&[], Scenario::RateShock2022);
        assert!((result.impact_dollars - 0.0).abs() < f64::EPSILON);
        assert!((result.impact_pct - 0.0).abs() < f64::EPSILON);
        assert!(result.top_contributors.is_empty());
    }

    #[test]
    fn rate_shock_accumulates_overlapping_buckets() {
        // Equity matches both "US Growth" (-18%) and "EM" (-12%).
        let holdings = vec![
            make_holding("AAA", AssetClass::Equity, 1000.0),
            make_holding("BTC", AssetClass::Crypto, 20000.0),
        ];
        let result = run_stress_test(&holdings, Scenario::RateShock2022);

        assert!((result.impact_dollars - (-9300.0)).abs() < 1e-9);
        assert!((result.impact_pct - (-9300.0 / 21000.0)).abs() < 1e-9);
        assert_eq!(result.top_contributors[0].ticker, "BTC");
        assert!((result.top_contributors[0].impact - (-9000.0)).abs() < 1e-9);
        assert!((result.top_contributors[1].impact - (-300.0)).abs() < 1e-9);
    }

    #[test]
    fn etf_takes_only_the_us_growth_shock() {
        let holdings = vec![make_holding("VTI", AssetClass::Etf, 10000.0)];
        let result = run_stress_test(&holdings, Scenario::RateShock2022);

        assert!((result.impact_dollars - (-1800.0)).abs() < 1e-9);
    }

    #[test]
    fn cash_is_untouched_by_every_default_scenario() {
        let holdings = vec![make_holding("USD", AssetClass::Cash, 5000.0)];
        for scenario in [Scenario::RateShock2022, Scenario::GlobalRecession] {
            let result = run_stress_test(&holdings, scenario);
            assert!((result.impact_dollars - 0.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn single_stock_shock_hits_first_holding_only() {
        // Positional, not largest-by-value: SMALL is first and takes the hit.
        let holdings = vec![
            make_holding("SMALL", AssetClass::Equity, 1000.0),
            make_holding("HUGE", AssetClass::Equity, 100_000.0),
        ];
        let result = run_stress_test(&holdings, Scenario::SingleStockShock);

        assert!((result.impact_dollars - (-400.0)).abs() < 1e-9);
        assert_eq!(result.top_contributors[0].ticker, "SMALL");
        assert!((result.top_contributors[1].impact - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn global_recession_spares_crypto() {
        let holdings = vec![
            make_holding("AAA", AssetClass::Equity, 1000.0),
            make_holding("BND", AssetClass::FixedIncome, 1000.0),
            make_holding("BTC", AssetClass::Crypto, 1000.0),
        ];
        let result = run_stress_test(&holdings, Scenario::GlobalRecession);

        assert!((result.impact_dollars - (-220.0 - 80.0)).abs() < 1e-9);
        let btc = result
            .top_contributors
            .iter()
            .find(|c| c.ticker == "BTC")
            .unwrap();
        assert!((btc.impact - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn top_contributors_capped_at_three_most_negative() {
        let holdings = vec![
            make_holding("A", AssetClass::Equity, 100.0),
            make_holding("B", AssetClass::Equity, 200.0),
            make_holding("C", AssetClass::Equity, 300.0),
            make_holding("D", AssetClass::Equity, 400.0),
        ];
        let result = run_stress_test(&holdings, Scenario::RateShock2022);

        assert_eq!(result.top_contributors.len(), 3);
        assert_eq!(result.top_contributors[0].ticker, "D");
        assert_eq!(result.top_contributors[1].ticker, "C");
        assert_eq!(result.top_contributors[2].ticker, "B");
    }

    #[test]
    fn largest_bucket_is_inert_on_the_matching_path() {
        let shocks = Scenario::SingleStockShock.shocks();
        assert_eq!(shocks.len(), 1);
        assert_eq!(shocks[0].bucket, Bucket::Largest);
        assert_eq!(shocks[0].bucket.label(), "Largest");
        assert!(shocks[0].bucket.asset_classes().is_empty());

        // no asset class matches, so the whole scenario effect is the
        // positional special case
        for class in [
            AssetClass::Equity,
            AssetClass::Etf,
            AssetClass::Crypto,
            AssetClass::Cash,
            AssetClass::FixedIncome,
            AssetClass::Other,
        ] {
            assert!(!shocks[0].bucket.asset_classes().contains(&class));
        }
    }

    #[test]
    fn scenario_parses_by_name() {
        assert_eq!(
            "2022 Rate Shock".parse::<Scenario>().unwrap(),
            Scenario::RateShock2022
        );
        assert_eq!(
            "single stock shock".parse::<Scenario>().unwrap(),
            Scenario::SingleStockShock
        );
        assert!("Flash Crash".parse::<Scenario>().is_err());
    }
}
