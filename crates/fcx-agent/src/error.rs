use fcx_core::AgentId;
use thiserror::Error;

use crate::AgentKind;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent {0} not found in roster")]
    UnknownAgent(AgentId),

    #[error("parent {0} is not registered (parents must be registered before children)")]
    UnknownParent(AgentId),

    #[error("a {child:?} cannot be parented to a {parent:?}")]
    BadNesting { parent: AgentKind, child: AgentKind },

    #[error("a {0:?} requires a parent")]
    MissingParent(AgentKind),
}

pub type AgentResult<T> = Result<T, AgentError>;
