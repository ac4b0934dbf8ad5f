//! The archetype registry: prototype configs → traders.

use std::collections::HashMap;

use fcx_agent::{AgentKind, NullTrader, Sink, Source, Trader};
use fcx_resource::Composition;

use crate::model::Prototype;
use crate::{ScenarioError, ScenarioResult};

/// Resolution context handed to archetype factories.
pub struct BuildContext<'a> {
    /// Recipes by name, already normalized.
    pub recipes: &'a HashMap<String, Composition>,
}

type Factory = Box<dyn Fn(&Prototype, &BuildContext<'_>) -> ScenarioResult<Box<dyn Trader>>>;

/// Maps archetype names to the factories that instantiate them.
///
/// [`with_defaults`][Self::with_defaults] registers the built-in archetypes;
/// applications add their own with [`register`][Self::register].
pub struct ArchetypeRegistry {
    factories: HashMap<String, (AgentKind, Factory)>,
}

impl ArchetypeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// A registry with the built-in archetypes:
    ///
    /// | Name         | Kind        | Behavior                  |
    /// |--------------|-------------|---------------------------|
    /// | `NullRegion` | Region      | inert                     |
    /// | `NullInst`   | Institution | inert                     |
    /// | `Source`     | Facility    | [`Source`]                |
    /// | `Sink`       | Facility    | [`Sink`]                  |
    pub fn with_defaults() -> Self {
        let mut reg = Self::new();
        reg.register("NullRegion", AgentKind::Region, |_, _| {
            Ok(Box::new(NullTrader) as Box<dyn Trader>)
        });
        reg.register("NullInst", AgentKind::Institution, |_, _| {
            Ok(Box::new(NullTrader) as Box<dyn Trader>)
        });
        reg.register("Source", AgentKind::Facility, build_source);
        reg.register("Sink", AgentKind::Facility, build_sink);
        reg
    }

    /// Register (or replace) an archetype factory.
    pub fn register<F>(&mut self, name: &str, kind: AgentKind, factory: F)
    where
        F: Fn(&Prototype, &BuildContext<'_>) -> ScenarioResult<Box<dyn Trader>> + 'static,
    {
        self.factories
            .insert(name.to_owned(), (kind, Box::new(factory)));
    }

    /// The agent kind an archetype instantiates, if registered.
    pub fn kind_of(&self, name: &str) -> Option<AgentKind> {
        self.factories.get(name).map(|(kind, _)| *kind)
    }

    /// Instantiate `prototype` through the archetype it names.
    pub fn build(
        &self,
        prototype: &Prototype,
        ctx: &BuildContext<'_>,
    ) -> ScenarioResult<(AgentKind, Box<dyn Trader>)> {
        let (kind, factory) =
            self.factories
                .get(&prototype.archetype)
                .ok_or_else(|| ScenarioError::UnknownArchetype {
                    prototype: prototype.name.clone(),
                    archetype: prototype.archetype.clone(),
                })?;
        Ok((*kind, factory(prototype, ctx)?))
    }
}

impl Default for ArchetypeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ── Built-in factories ────────────────────────────────────────────────────────

fn build_source(proto: &Prototype, ctx: &BuildContext<'_>) -> ScenarioResult<Box<dyn Trader>> {
    let commodity = require_param(proto, "commodity")?;
    let recipe_name = require_param(proto, "recipe")?;
    let recipe = ctx
        .recipes
        .get(recipe_name)
        .cloned()
        .ok_or_else(|| ScenarioError::UnknownRecipe(recipe_name.to_owned()))?;
    let throughput = parse_param::<f64>(proto, "throughput")?;
    Ok(Box::new(Source::new(commodity, recipe, throughput)))
}

fn build_sink(proto: &Prototype, ctx: &BuildContext<'_>) -> ScenarioResult<Box<dyn Trader>> {
    let commodity = require_param(proto, "commodity")?;
    let capacity = parse_param::<f64>(proto, "capacity")?;
    let recipe = match proto.params.get("recipe") {
        None => None,
        Some(name) => Some(
            ctx.recipes
                .get(name)
                .cloned()
                .ok_or_else(|| ScenarioError::UnknownRecipe(name.clone()))?,
        ),
    };
    Ok(Box::new(Sink::new(commodity, recipe, capacity)))
}

// ── Param helpers ─────────────────────────────────────────────────────────────

fn require_param<'a>(proto: &'a Prototype, param: &'static str) -> ScenarioResult<&'a str> {
    proto
        .params
        .get(param)
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(ScenarioError::MissingParam {
            prototype: proto.name.clone(),
            param,
        })
}

fn parse_param<T>(proto: &Prototype, param: &'static str) -> ScenarioResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let text = require_param(proto, param)?;
    text.parse().map_err(|e: T::Err| ScenarioError::InvalidValue {
        element: param,
        value: text.to_owned(),
        message: e.to_string(),
    })
}
