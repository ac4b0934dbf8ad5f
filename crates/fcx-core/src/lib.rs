//! `fcx-core` — foundational types for the fcx fuel-cycle simulator.
//!
//! This crate is a dependency of every other `fcx-*` crate.  It intentionally
//! has no `fcx-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `AgentId`, `NodeId`, `SetId`, `RequestId`               |
//! | [`commodity`] | `Commodity` — interned-by-name traded good              |
//! | [`num`]       | `EPS` and the signed-epsilon comparison predicates      |
//! | [`time`]      | `Tick`, `SimClock`, `SimConfig`, `DecayMode`            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod commodity;
pub mod ids;
pub mod num;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use commodity::Commodity;
pub use ids::{AgentId, NodeId, RequestId, SetId};
pub use num::{is_neg, is_pos, is_zero, EPS};
pub use time::{DecayMode, SimClock, SimConfig, Tick};
