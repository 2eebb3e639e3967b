//! Report rendering port trait.

use crate::domain::error::FoliostatError;
use crate::domain::metrics::HoldingMetrics;
use crate::domain::rebalance::Recommendation;
use crate::domain::scoring::ScoreBreakdown;
use crate::domain::stress::StressResult;

/// Port for rendering engine results to a consumer (terminal, report
/// generator, UI).
pub trait ReportPort {
    fn render_metrics(&self, metrics: &HoldingMetrics) -> Result<String, FoliostatError>;

    fn render_score(&self, score: &ScoreBreakdown) -> Result<String, FoliostatError>;

    fn render_stress(&self, results: &[StressResult]) -> Result<String, FoliostatError>;

    fn render_rebalance(&self, plan: &[Recommendation]) -> Result<String, FoliostatError>;
}
