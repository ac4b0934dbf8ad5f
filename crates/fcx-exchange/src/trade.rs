//! The trade record emitted after matching.

use fcx_core::{AgentId, Commodity};

/// One committed trade: `qty` units of `commodity` from `bidder` to
/// `requester`.
///
/// Trades are what the simulator executes — acquiring or producing the
/// actual resource object is the supplying facility's responsibility, not
/// the exchange's.
#[derive(Clone, PartialEq, Debug)]
pub struct Trade {
    pub requester: AgentId,
    pub bidder: AgentId,
    pub commodity: Commodity,
    pub qty: f64,
}
