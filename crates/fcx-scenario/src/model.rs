//! Parsed scenario structure.
//!
//! These are plain data mirrors of the XML document, in document order.
//! Resolution (recipes to compositions, prototypes to traders, agent names
//! to roster IDs) happens later, in [`build_sim`][crate::build_sim].

use std::collections::HashMap;

use fcx_core::DecayMode;
use fcx_resource::Basis;

/// A full scenario document.
#[derive(Debug)]
pub struct Scenario {
    pub control: Control,
    pub commodities: Vec<CommodityDecl>,
    pub archetypes: Vec<ArchetypeSpec>,
    pub prototypes: Vec<Prototype>,
    pub agents: Vec<AgentDecl>,
    pub recipes: Vec<Recipe>,
}

/// The `control` block.
#[derive(Debug, Clone)]
pub struct Control {
    pub duration: u64,
    pub start_month: u32,
    pub start_year: i32,
    pub handle: Option<String>,
    pub decay: DecayMode,
}

/// One `commodity` declaration.
#[derive(Debug, Clone)]
pub struct CommodityDecl {
    pub name: String,
    pub solution_priority: f64,
}

/// One `spec` entry of the `archetypes` block.
#[derive(Debug, Clone)]
pub struct ArchetypeSpec {
    pub path: Option<String>,
    pub lib: Option<String>,
    pub name: String,
    pub alias: Option<String>,
}

/// One `prototype` block: a named, configured archetype instantiation.
///
/// The archetype is named by the single child element of `config`; its
/// children become the flat `params` map handed to the archetype factory.
#[derive(Debug, Clone)]
pub struct Prototype {
    pub name: String,
    pub lifetime: Option<u64>,
    pub archetype: String,
    pub params: HashMap<String, String>,
}

/// One `agent` deployment.
#[derive(Debug, Clone)]
pub struct AgentDecl {
    pub name: String,
    pub prototype: String,
    pub parent: Option<String>,
}

/// One `recipe` block, kept in raw `(id, comp)` form until build time.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub name: String,
    pub basis: Basis,
    pub nuclides: Vec<(u32, f64)>,
}
