pub mod holdings_port;
pub mod report_port;
