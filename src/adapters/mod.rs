pub mod json_holdings;
pub mod json_report;
pub mod text_report;
