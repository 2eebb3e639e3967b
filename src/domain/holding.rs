//! Portfolio positions and the valuation fallback shared by every engine.

use serde::{Deserialize, Serialize};

/// Asset class of a holding. Closed set; importers must normalize into one
/// of these six values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetClass {
    Equity,
    Etf,
    Crypto,
    Cash,
    FixedIncome,
    Other,
}

impl AssetClass {
    pub fn label(&self) -> &'static str {
        match self {
            AssetClass::Equity => "equity",
            AssetClass::Etf => "etf",
            AssetClass::Crypto => "crypto",
            AssetClass::Cash => "cash",
            AssetClass::FixedIncome => "fixed-income",
            AssetClass::Other => "other",
        }
    }
}

/// One position as supplied by an importer. Tickers are uppercase but not
/// guaranteed unique within a portfolio; engines handle duplicates additively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub ticker: String,
    pub asset_class: AssetClass,
    pub quantity: f64,
    #[serde(default)]
    pub avg_cost: Option<f64>,
    #[serde(default)]
    pub last_price: Option<f64>,
    #[serde(default)]
    pub value: Option<f64>,
}

impl Holding {
    /// Current market value of the position.
    ///
    /// Fallback order: explicit `value` when present and positive (it is the
    /// precomputed position total, not a per-unit figure), else
    /// `last_price * quantity`, else `avg_cost * quantity`, else 0.
    pub fn market_value(&self) -> f64 {
        if let Some(value) = self.value {
            if value > 0.0 {
                return value;
            }
        }
        if let Some(price) = self.last_price {
            return price * self.quantity;
        }
        if let Some(cost) = self.avg_cost {
            return cost * self.quantity;
        }
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holding(value: Option<f64>, last_price: Option<f64>, avg_cost: Option<f64>) -> Holding {
        Holding {
            ticker: "AAA".into(),
            asset_class: AssetClass::Equity,
            quantity: 10.0,
            avg_cost,
            last_price,
            value,
        }
    }

    #[test]
    fn explicit_value_wins() {
        let h = holding(Some(1500.0), Some(90.0), Some(80.0));
        assert!((h.market_value() - 1500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_value_falls_through_to_price() {
        let h = holding(Some(0.0), Some(90.0), Some(80.0));
        assert!((h.market_value() - 900.0).abs() < f64::EPSILON);
    }

    #[test]
    fn price_before_cost() {
        let h = holding(None, Some(90.0), Some(80.0));
        assert!((h.market_value() - 900.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cost_as_last_resort() {
        let h = holding(None, None, Some(80.0));
        assert!((h.market_value() - 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_pricing_information_is_zero() {
        let h = holding(None, None, None);
        assert!((h.market_value() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn deserializes_wire_shape() {
        let json = r#"{
            "ticker": "BTC",
            "name": "Bitcoin",
            "assetClass": "crypto",
            "quantity": 0.5,
            "lastPrice": 40000,
            "source": "manual"
        }"#;
        let h: Holding = serde_json::from_str(json).unwrap();
        assert_eq!(h.ticker, "BTC");
        assert_eq!(h.asset_class, AssetClass::Crypto);
        assert!((h.market_value() - 20000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn fixed_income_kebab_case() {
        let h: Holding = serde_json::from_str(
            r#"{"ticker": "BND", "assetClass": "fixed-income", "quantity": 1, "value": 100}"#,
        )
        .unwrap();
        assert_eq!(h.asset_class, AssetClass::FixedIncome);
    }
}
