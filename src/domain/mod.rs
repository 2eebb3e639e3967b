//! Core analytics types and engines.

pub mod holding;
pub mod metrics;
pub mod scoring;
pub mod stress;
pub mod rebalance;
pub mod error;
