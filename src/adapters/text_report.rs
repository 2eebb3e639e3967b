//! Plain-text report adapter implementing ReportPort.
//!
//! Fixed-width sections suitable for a terminal; one section per engine
//! result.

use crate::domain::error::FoliostatError;
use crate::domain::metrics::HoldingMetrics;
use crate::domain::rebalance::{Action, Recommendation};
use crate::domain::scoring::ScoreBreakdown;
use crate::domain::stress::StressResult;
use crate::ports::report_port::ReportPort;

pub struct TextReportAdapter;

fn format_dollars(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", value.abs())
    } else {
        format!("${value:.2}")
    }
}

impl ReportPort for TextReportAdapter {
    fn render_metrics(&self, metrics: &HoldingMetrics) -> Result<String, FoliostatError> {
        let mut out = String::new();
        out.push_str("Portfolio metrics\n");
        out.push_str(&format!(
            "  total value        {}\n",
            format_dollars(metrics.total_value)
        ));
        out.push_str(&format!(
            "  top 1 / 5 / 10     {:.1}% / {:.1}% / {:.1}%\n",
            metrics.top_weights.top1 * 100.0,
            metrics.top_weights.top5 * 100.0,
            metrics.top_weights.top10 * 100.0
        ));
        out.push_str(&format!("  HHI                {:.4}\n", metrics.hhi));
        out.push_str(&format!(
            "  effective holdings {:.1}\n",
            metrics.effective_holdings
        ));
        out.push_str(&format!(
            "  tiny positions     {}\n",
            metrics.tiny_positions
        ));

        let mut weights: Vec<(&String, &f64)> = metrics.weights.iter().collect();
        weights.sort_by(|a, b| b.1.total_cmp(a.1));
        for (ticker, weight) in weights {
            out.push_str(&format!("  {ticker:<12} {:>6.2}%\n", weight * 100.0));
        }
        Ok(out)
    }

    fn render_score(&self, score: &ScoreBreakdown) -> Result<String, FoliostatError> {
        let mut out = String::new();
        out.push_str(&format!("Portfolio score: {:.1} / 100\n", score.total));
        out.push_str(&format!(
            "  diversification {:>5.1} / 25\n",
            score.diversification
        ));
        out.push_str(&format!(
            "  concentration   {:>5.1} / 25\n",
            score.concentration
        ));
        out.push_str(&format!("  resilience      {:>5.1} / 25\n", score.resilience));
        out.push_str(&format!("  fit             {:>5.1} / 15\n", score.fit));
        out.push_str(&format!("  hygiene         {:>5.1} / 10\n", score.hygiene));
        out.push_str("Notes:\n");
        for note in &score.notes {
            out.push_str(&format!("  - {note}\n"));
        }
        out.push_str("Improvements:\n");
        for improvement in &score.improvements {
            out.push_str(&format!("  - {improvement}\n"));
        }
        Ok(out)
    }

    fn render_stress(&self, results: &[StressResult]) -> Result<String, FoliostatError> {
        let mut out = String::new();
        for result in results {
            out.push_str(&format!("Scenario: {}\n", result.scenario));
            out.push_str(&format!(
                "  impact {} ({:.2}%)\n",
                format_dollars(result.impact_dollars),
                result.impact_pct * 100.0
            ));
            if !result.top_contributors.is_empty() {
                out.push_str("  top contributors:\n");
                for contributor in &result.top_contributors {
                    out.push_str(&format!(
                        "    {:<12} {}\n",
                        contributor.ticker,
                        format_dollars(contributor.impact)
                    ));
                }
            }
        }
        Ok(out)
    }

    fn render_rebalance(&self, plan: &[Recommendation]) -> Result<String, FoliostatError> {
        if plan.is_empty() {
            return Ok("All asset classes are within their target bands.\n".to_string());
        }
        let mut out = String::new();
        out.push_str("Rebalance suggestions:\n");
        for rec in plan {
            let action = match rec.action {
                Action::ConsiderBuy => "buy ",
                Action::ConsiderTrim => "trim",
            };
            out.push_str(&format!(
                "  {action} {:<14} {:>14}  {} (confidence {:.2})\n",
                rec.ticker,
                format_dollars(rec.dollars),
                rec.rationale,
                rec.confidence
            ));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::holding::{AssetClass, Holding};
    use crate::domain::metrics::compute_holding_metrics;
    use crate::domain::rebalance::{RebalancePreset, generate_rebalance_plan};
    use crate::domain::scoring::{Rubric, score_portfolio};
    use crate::domain::stress::{Scenario, run_stress_test};

    fn sample_holdings() -> Vec<Holding> {
        vec![
            Holding {
                ticker: "AAA".into(),
                asset_class: AssetClass::Equity,
                quantity: 10.0,
                avg_cost: Some(100.0),
                last_price: None,
                value: None,
            },
            Holding {
                ticker: "BTC".into(),
                asset_class: AssetClass::Crypto,
                quantity: 1.0,
                avg_cost: Some(20000.0),
                last_price: None,
                value: None,
            },
        ]
    }

    #[test]
    fn metrics_report_lists_weights_descending() {
        let metrics = compute_holding_metrics(&sample_holdings());
        let report = TextReportAdapter.render_metrics(&metrics).unwrap();

        assert!(report.contains("total value        $21000.00"));
        let btc = report.find("BTC").unwrap();
        let aaa = report.find("AAA").unwrap();
        assert!(btc < aaa);
    }

    #[test]
    fn score_report_contains_total_and_notes() {
        let score = score_portfolio(&sample_holdings(), Rubric::Strict);
        let report = TextReportAdapter.render_score(&score).unwrap();

        assert!(report.starts_with("Portfolio score:"));
        assert!(report.contains("Effective holdings"));
    }

    #[test]
    fn stress_report_shows_negative_impact() {
        let result = run_stress_test(&sample_holdings(), Scenario::RateShock2022);
        let report = TextReportAdapter.render_stress(&[result]).unwrap();

        assert!(report.contains("Scenario: 2022 Rate Shock"));
        assert!(report.contains("-$9300.00"));
    }

    #[test]
    fn rebalance_report_handles_empty_plan() {
        let plan = generate_rebalance_plan(&[], RebalancePreset::BalancedGrowth, true);
        assert!(!plan.is_empty());

        let report = TextReportAdapter.render_rebalance(&[]).unwrap();
        assert!(report.contains("within their target bands"));
    }
}
