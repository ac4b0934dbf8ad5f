//! Scenario → runnable simulation.

use std::collections::HashMap;

use fcx_agent::{AgentMeta, AgentRoster};
use fcx_core::{AgentId, Commodity, SimConfig, Tick};
use fcx_resource::{Composition, Nuclide};
use fcx_sim::{Sim, SimBuilder};

use crate::model::Scenario;
use crate::registry::{ArchetypeRegistry, BuildContext};
use crate::{ScenarioError, ScenarioResult};

/// Assemble a ready-to-run [`Sim`] from a parsed scenario.
///
/// Resolution order matters: recipes first (factories need them), then
/// prototypes through the registry, then agents in declaration order —
/// parents must be declared before their children, which the roster's
/// hierarchy validation enforces anyway.
pub fn build_sim(scenario: &Scenario, registry: &ArchetypeRegistry) -> ScenarioResult<Sim> {
    // ── Recipes ───────────────────────────────────────────────────────────
    let mut recipes: HashMap<String, Composition> = HashMap::new();
    for recipe in &scenario.recipes {
        let entries = recipe
            .nuclides
            .iter()
            .map(|&(id, comp)| (Nuclide(id), comp))
            .collect();
        recipes.insert(
            recipe.name.clone(),
            Composition::new(recipe.basis, entries)?,
        );
    }
    let ctx = BuildContext { recipes: &recipes };

    // ── Archetype aliases ─────────────────────────────────────────────────
    //
    // A prototype may name an archetype by its spec name or its alias.
    let mut alias_to_name: HashMap<&str, &str> = HashMap::new();
    for spec in &scenario.archetypes {
        alias_to_name.insert(&spec.name, &spec.name);
        if let Some(alias) = &spec.alias {
            alias_to_name.insert(alias, &spec.name);
        }
    }

    // ── Prototypes ────────────────────────────────────────────────────────
    let prototypes: HashMap<&str, &crate::model::Prototype> = scenario
        .prototypes
        .iter()
        .map(|p| (p.name.as_str(), p))
        .collect();

    // ── Agents ────────────────────────────────────────────────────────────
    let mut roster = AgentRoster::new();
    let mut ids_by_name: HashMap<&str, AgentId> = HashMap::new();

    for decl in &scenario.agents {
        let proto = prototypes
            .get(decl.prototype.as_str())
            .ok_or_else(|| {
                ScenarioError::UnknownPrototype(decl.name.clone(), decl.prototype.clone())
            })?;

        // Resolve an alias to the spec name when the archetypes block maps
        // it; otherwise try the registry under the literal name.
        let mut resolved = (*proto).clone();
        if let Some(&name) = alias_to_name.get(resolved.archetype.as_str()) {
            resolved.archetype = name.to_owned();
        }
        let (kind, trader) = registry.build(&resolved, &ctx)?;

        let parent = match &decl.parent {
            None => None,
            Some(name) => Some(*ids_by_name.get(name.as_str()).ok_or_else(|| {
                ScenarioError::UnknownParent {
                    agent: decl.name.clone(),
                    parent: name.clone(),
                }
            })?),
        };

        let id = roster.register(
            AgentMeta {
                name: decl.name.clone(),
                prototype: decl.prototype.clone(),
                kind,
                parent,
                enter_tick: Tick::ZERO,
                lifetime: proto.lifetime,
            },
            trader,
        )?;
        ids_by_name.insert(&decl.name, id);
    }

    // ── Config and priorities ─────────────────────────────────────────────
    let config = SimConfig {
        duration: scenario.control.duration,
        start_month: scenario.control.start_month,
        start_year: scenario.control.start_year,
        handle: scenario.control.handle.clone(),
        decay: scenario.control.decay,
        output_interval_ticks: 1,
    };

    let priorities: HashMap<Commodity, f64> = scenario
        .commodities
        .iter()
        .map(|c| (Commodity::new(&c.name), c.solution_priority))
        .collect();

    Ok(SimBuilder::new(config, roster).priorities(priorities).build()?)
}
