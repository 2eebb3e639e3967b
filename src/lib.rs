//! foliostat — portfolio analytics calculator.
//!
//! Hexagonal architecture: analytics engines in [`domain`], port traits in
//! [`ports`], concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
