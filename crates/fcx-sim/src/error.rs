use fcx_agent::AgentError;
use fcx_exchange::ExchangeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("exchange error: {0}")]
    Exchange(#[from] ExchangeError),
}

pub type SimResult<T> = Result<T, SimError>;
