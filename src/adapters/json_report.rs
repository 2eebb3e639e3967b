//! JSON report adapter implementing ReportPort, for machine consumers.

use serde::Serialize;

use crate::domain::error::FoliostatError;
use crate::domain::metrics::HoldingMetrics;
use crate::domain::rebalance::Recommendation;
use crate::domain::scoring::ScoreBreakdown;
use crate::domain::stress::StressResult;
use crate::ports::report_port::ReportPort;

pub struct JsonReportAdapter;

fn to_json<T: Serialize>(value: &T) -> Result<String, FoliostatError> {
    serde_json::to_string_pretty(value).map_err(|e| FoliostatError::Render {
        reason: e.to_string(),
    })
}

impl ReportPort for JsonReportAdapter {
    fn render_metrics(&self, metrics: &HoldingMetrics) -> Result<String, FoliostatError> {
        to_json(metrics)
    }

    fn render_score(&self, score: &ScoreBreakdown) -> Result<String, FoliostatError> {
        to_json(score)
    }

    fn render_stress(&self, results: &[StressResult]) -> Result<String, FoliostatError> {
        to_json(&results)
    }

    fn render_rebalance(&self, plan: &[Recommendation]) -> Result<String, FoliostatError> {
        to_json(&plan)
    }
}
