/// Errors raised by the engine. Every computation past input validation
/// clamps or guards instead of failing, so the taxonomy has a single kind.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("{0}")]
    InvalidInput(String),
}

impl EngineError {
    pub fn invalid(message: impl Into<String>) -> Self {
        EngineError::InvalidInput(message.into())
    }
}
