//! Holdings source port trait.

use crate::domain::error::FoliostatError;
use crate::domain::holding::Holding;

/// Port for supplying holdings to the engines. Implementations are expected
/// to deliver normalized positions (uppercase tickers, one of the six asset
/// classes); the engines do not re-validate.
pub trait HoldingsPort {
    fn load_holdings(&self) -> Result<Vec<Holding>, FoliostatError>;
}
