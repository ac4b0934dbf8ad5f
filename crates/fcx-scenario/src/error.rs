use fcx_agent::AgentError;
use fcx_resource::ResourceError;
use fcx_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("expected a <{0}> document root")]
    BadRoot(String),

    #[error("missing <{element}> in <{parent}>")]
    MissingElement {
        parent: &'static str,
        element: &'static str,
    },

    #[error("invalid <{element}> value {value:?}: {message}")]
    InvalidValue {
        element: &'static str,
        value: String,
        message: String,
    },

    #[error(
        "commodity {0:?} declares <solution_order>, which is no longer \
         supported; declare <solution_priority> instead"
    )]
    LegacySolutionOrder(String),

    #[error("prototype {prototype:?} uses unknown archetype {archetype:?}")]
    UnknownArchetype {
        prototype: String,
        archetype: String,
    },

    #[error("prototype {prototype:?} is missing parameter {param:?}")]
    MissingParam {
        prototype: String,
        param: &'static str,
    },

    #[error("agent {0:?} references unknown prototype {1:?}")]
    UnknownPrototype(String, String),

    #[error("agent {agent:?} references unknown parent {parent:?}")]
    UnknownParent { agent: String, parent: String },

    #[error("unknown recipe {0:?}")]
    UnknownRecipe(String),

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Sim(#[from] SimError),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
