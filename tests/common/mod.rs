#![allow(dead_code)]

use foliostat::domain::holding::{AssetClass, Holding};

pub fn make_holding(ticker: &str, asset_class: AssetClass, value: f64) -> Holding {
    Holding {
        ticker: ticker.to_string(),
        asset_class,
        quantity: 1.0,
        avg_cost: None,
        last_price: None,
        value: Some(value),
    }
}

pub fn priced_holding(ticker: &str, asset_class: AssetClass, quantity: f64, price: f64) -> Holding {
    Holding {
        ticker: ticker.to_string(),
        asset_class,
        quantity,
        avg_cost: None,
        last_price: Some(price),
        value: None,
    }
}

pub fn costed_holding(ticker: &str, asset_class: AssetClass, quantity: f64, cost: f64) -> Holding {
    Holding {
        ticker: ticker.to_string(),
        asset_class,
        quantity,
        avg_cost: Some(cost),
        last_price: None,
        value: None,
    }
}

/// A mixed portfolio exercising all three valuation tiers.
pub fn sample_portfolio() -> Vec<Holding> {
    vec![
        make_holding("VTI", AssetClass::Etf, 30_000.0),
        priced_holding("AAPL", AssetClass::Equity, 100.0, 190.0),
        costed_holding("MSFT", AssetClass::Equity, 50.0, 300.0),
        priced_holding("BTC", AssetClass::Crypto, 0.5, 40_000.0),
        make_holding("BND", AssetClass::FixedIncome, 8_000.0),
        make_holding("USD", AssetClass::Cash, 4_000.0),
    ]
}
