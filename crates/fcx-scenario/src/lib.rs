//! `fcx-scenario` — XML scenario input.
//!
//! A scenario document describes one `simulation`:
//!
//! ```xml
//! <simulation>
//!   <control>
//!     <duration>24</duration>
//!     <startmonth>1</startmonth>
//!     <startyear>2030</startyear>
//!   </control>
//!   <commodity><name>fuel</name><solution_priority>2.0</solution_priority></commodity>
//!   <archetypes>
//!     <spec><name>Source</name></spec>
//!     <spec><name>Sink</name><alias>Repository</alias></spec>
//!   </archetypes>
//!   <prototype>
//!     <name>mine</name>
//!     <config><Source>
//!       <commodity>fuel</commodity>
//!       <recipe>nat_u</recipe>
//!       <throughput>3.0</throughput>
//!     </Source></config>
//!   </prototype>
//!   <agent><name>mine_a</name><prototype>mine</prototype><parent>inst</parent></agent>
//!   <recipe>
//!     <name>nat_u</name>
//!     <basis>mass</basis>
//!     <nuclide><id>922350000</id><comp>0.007</comp></nuclide>
//!     <nuclide><id>922380000</id><comp>0.993</comp></nuclide>
//!   </recipe>
//! </simulation>
//! ```
//!
//! [`parse_str`] turns the document into a [`Scenario`]; [`build_sim`] wires
//! it into a runnable [`fcx_sim::Sim`] through an [`ArchetypeRegistry`].
//!
//! The legacy `solution_order` commodity form is rejected with a dedicated
//! parse error rather than silently translated.

pub mod build;
pub mod error;
pub mod model;
pub mod parse;
pub mod registry;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use build::build_sim;
pub use error::{ScenarioError, ScenarioResult};
pub use model::{
    AgentDecl, ArchetypeSpec, CommodityDecl, Control, Prototype, Recipe, Scenario,
};
pub use parse::parse_str;
pub use registry::{ArchetypeRegistry, BuildContext};
