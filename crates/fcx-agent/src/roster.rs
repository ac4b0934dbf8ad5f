//! The agent roster: an arena of agent metadata plus their traders.
//!
//! # Hierarchy rules
//!
//! Registration is parent-before-child and nesting is fixed:
//! regions have no parent, institutions sit under regions, facilities under
//! institutions.  Violations are construction errors — the tree can never be
//! malformed at runtime.
//!
//! # Lifecycle
//!
//! An agent is *active* from its enter tick until its lifetime (if any)
//! expires.  Activity is a pure function of the tick, so decommissioning
//! needs no mutation and replaying a tick is side-effect free.

use fcx_core::{AgentId, Tick};

use crate::{AgentError, AgentResult, Trader};

// ── AgentKind ─────────────────────────────────────────────────────────────────

/// Level of an agent in the region → institution → facility tree.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum AgentKind {
    Region,
    Institution,
    Facility,
}

impl AgentKind {
    /// The kind a parent of this kind must have, if one is required.
    fn required_parent(self) -> Option<AgentKind> {
        match self {
            AgentKind::Region => None,
            AgentKind::Institution => Some(AgentKind::Region),
            AgentKind::Facility => Some(AgentKind::Institution),
        }
    }
}

// ── AgentMeta ─────────────────────────────────────────────────────────────────

/// Static description of one agent.
#[derive(Clone, Debug)]
pub struct AgentMeta {
    pub name: String,
    pub prototype: String,
    pub kind: AgentKind,
    pub parent: Option<AgentId>,
    /// First tick at which the agent participates.
    pub enter_tick: Tick,
    /// Ticks of operation before decommissioning; `None` = forever.
    pub lifetime: Option<u64>,
}

// ── AgentRoster ───────────────────────────────────────────────────────────────

/// Arena of all agents in a simulation, indexed by [`AgentId`].
#[derive(Default)]
pub struct AgentRoster {
    metas: Vec<AgentMeta>,
    traders: Vec<Box<dyn Trader>>,
}

impl std::fmt::Debug for AgentRoster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentRoster")
            .field("metas", &self.metas)
            .field("traders", &self.traders.len())
            .finish()
    }
}

impl AgentRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent, validating its place in the hierarchy.
    pub fn register(&mut self, meta: AgentMeta, trader: Box<dyn Trader>) -> AgentResult<AgentId> {
        match (meta.kind.required_parent(), meta.parent) {
            (None, _) => {}
            (Some(kind), None) => return Err(AgentError::MissingParent(kind)),
            (Some(expected), Some(parent)) => {
                let parent_meta = self
                    .metas
                    .get(parent.index())
                    .ok_or(AgentError::UnknownParent(parent))?;
                if parent_meta.kind != expected {
                    return Err(AgentError::BadNesting {
                        parent: parent_meta.kind,
                        child: meta.kind,
                    });
                }
            }
        }

        let id = AgentId(self.metas.len() as u32);
        self.metas.push(meta);
        self.traders.push(trader);
        Ok(id)
    }

    pub fn meta(&self, id: AgentId) -> AgentResult<&AgentMeta> {
        self.metas
            .get(id.index())
            .ok_or(AgentError::UnknownAgent(id))
    }

    pub fn trader_mut(&mut self, id: AgentId) -> AgentResult<&mut (dyn Trader + '_)> {
        self.traders
            .get_mut(id.index())
            .map(|t| -> &mut (dyn Trader + '_) { t.as_mut() })
            .ok_or(AgentError::UnknownAgent(id))
    }

    /// `true` if `id` has entered and not yet outlived its lifetime at `tick`.
    pub fn is_active(&self, id: AgentId, tick: Tick) -> bool {
        let Some(meta) = self.metas.get(id.index()) else {
            return false;
        };
        if tick < meta.enter_tick {
            return false;
        }
        match meta.lifetime {
            Some(life) => tick.since(meta.enter_tick) < life,
            None => true,
        }
    }

    /// IDs of all agents active at `tick`, in registration order.
    pub fn active_at(&self, tick: Tick) -> Vec<AgentId> {
        (0..self.metas.len() as u32)
            .map(AgentId)
            .filter(|&id| self.is_active(id, tick))
            .collect()
    }

    /// IDs of active *facilities* at `tick` — the trading population.
    pub fn active_facilities(&self, tick: Tick) -> Vec<AgentId> {
        self.active_at(tick)
            .into_iter()
            .filter(|&id| self.metas[id.index()].kind == AgentKind::Facility)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.metas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metas.is_empty()
    }
}
