//! XML document walking.

use std::collections::HashMap;
use std::str::FromStr;

use fcx_resource::Basis;
use roxmltree::{Document, Node};

use crate::model::{
    AgentDecl, ArchetypeSpec, CommodityDecl, Control, Prototype, Recipe, Scenario,
};
use crate::{ScenarioError, ScenarioResult};

/// Parse a scenario document from XML text.
pub fn parse_str(xml: &str) -> ScenarioResult<Scenario> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();
    if root.tag_name().name() != "simulation" {
        return Err(ScenarioError::BadRoot("simulation".to_owned()));
    }

    let mut control = None;
    let mut commodities = Vec::new();
    let mut archetypes = Vec::new();
    let mut prototypes = Vec::new();
    let mut agents = Vec::new();
    let mut recipes = Vec::new();

    for child in root.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "control" => control = Some(parse_control(child)?),
            "commodity" => commodities.push(parse_commodity(child)?),
            "archetypes" => archetypes.extend(parse_archetypes(child)?),
            "prototype" => prototypes.push(parse_prototype(child)?),
            "agent" => agents.push(parse_agent(child)?),
            "recipe" => recipes.push(parse_recipe(child)?),
            _ => {} // unknown blocks are ignored, not fatal
        }
    }

    Ok(Scenario {
        control: control.ok_or(ScenarioError::MissingElement {
            parent: "simulation",
            element: "control",
        })?,
        commodities,
        archetypes,
        prototypes,
        agents,
        recipes,
    })
}

// ── Block parsers ─────────────────────────────────────────────────────────────

fn parse_control(node: Node) -> ScenarioResult<Control> {
    Ok(Control {
        duration: require_parsed(node, "control", "duration")?,
        start_month: require_parsed(node, "control", "startmonth")?,
        start_year: require_parsed(node, "control", "startyear")?,
        handle: child_text(node, "simhandle").map(str::to_owned),
        decay: optional_parsed(node, "decay")?.unwrap_or_default(),
    })
}

fn parse_commodity(node: Node) -> ScenarioResult<CommodityDecl> {
    let name = require_text(node, "commodity", "name")?.to_owned();
    if child(node, "solution_order").is_some() {
        return Err(ScenarioError::LegacySolutionOrder(name));
    }
    Ok(CommodityDecl {
        solution_priority: require_parsed(node, "commodity", "solution_priority")?,
        name,
    })
}

fn parse_archetypes(node: Node) -> ScenarioResult<Vec<ArchetypeSpec>> {
    node.children()
        .filter(Node::is_element)
        .filter(|n| n.tag_name().name() == "spec")
        .map(|spec| {
            Ok(ArchetypeSpec {
                path: child_text(spec, "path").map(str::to_owned),
                lib: child_text(spec, "lib").map(str::to_owned),
                name: require_text(spec, "spec", "name")?.to_owned(),
                alias: child_text(spec, "alias").map(str::to_owned),
            })
        })
        .collect()
}

fn parse_prototype(node: Node) -> ScenarioResult<Prototype> {
    let name = require_text(node, "prototype", "name")?.to_owned();
    let lifetime = optional_parsed(node, "lifetime")?;

    let config = child(node, "config").ok_or(ScenarioError::MissingElement {
        parent: "prototype",
        element: "config",
    })?;
    let body = config
        .children()
        .find(Node::is_element)
        .ok_or(ScenarioError::MissingElement {
            parent: "config",
            element: "<archetype choice>",
        })?;

    let params: HashMap<String, String> = body
        .children()
        .filter(Node::is_element)
        .map(|p| {
            (
                p.tag_name().name().to_owned(),
                p.text().unwrap_or("").trim().to_owned(),
            )
        })
        .collect();

    Ok(Prototype {
        name,
        lifetime,
        archetype: body.tag_name().name().to_owned(),
        params,
    })
}

fn parse_agent(node: Node) -> ScenarioResult<AgentDecl> {
    Ok(AgentDecl {
        name: require_text(node, "agent", "name")?.to_owned(),
        prototype: require_text(node, "agent", "prototype")?.to_owned(),
        parent: child_text(node, "parent").map(str::to_owned),
    })
}

fn parse_recipe(node: Node) -> ScenarioResult<Recipe> {
    let basis_text = require_text(node, "recipe", "basis")?;
    let basis = match basis_text {
        "mass" => Basis::Mass,
        "atom" => Basis::Atom,
        other => {
            return Err(ScenarioError::InvalidValue {
                element: "basis",
                value: other.to_owned(),
                message: "expected \"mass\" or \"atom\"".to_owned(),
            })
        }
    };

    let nuclides = node
        .children()
        .filter(Node::is_element)
        .filter(|n| n.tag_name().name() == "nuclide")
        .map(|n| {
            Ok((
                require_parsed::<u32>(n, "nuclide", "id")?,
                require_parsed::<f64>(n, "nuclide", "comp")?,
            ))
        })
        .collect::<ScenarioResult<Vec<_>>>()?;

    Ok(Recipe {
        name: require_text(node, "recipe", "name")?.to_owned(),
        basis,
        nuclides,
    })
}

// ── Element helpers ───────────────────────────────────────────────────────────

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .filter(Node::is_element)
        .find(|n| n.tag_name().name() == name)
}

fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    child(node, name).and_then(|n| n.text()).map(str::trim)
}

fn require_text<'a>(
    node: Node<'a, '_>,
    parent: &'static str,
    name: &'static str,
) -> ScenarioResult<&'a str> {
    child_text(node, name)
        .filter(|s| !s.is_empty())
        .ok_or(ScenarioError::MissingElement {
            parent,
            element: name,
        })
}

fn require_parsed<T>(node: Node, parent: &'static str, name: &'static str) -> ScenarioResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let text = require_text(node, parent, name)?;
    text.parse().map_err(|e: T::Err| ScenarioError::InvalidValue {
        element: name,
        value: text.to_owned(),
        message: e.to_string(),
    })
}

fn optional_parsed<T>(node: Node, name: &'static str) -> ScenarioResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match child_text(node, name) {
        None => Ok(None),
        Some(text) => text
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ScenarioError::InvalidValue {
                element: name,
                value: text.to_owned(),
                message: e.to_string(),
            }),
    }
}
