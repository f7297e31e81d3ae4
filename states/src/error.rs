use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("State not found: {name}, context: {context}")]
    StateNotFound {
        name: &'static str,
        context: String,
    },
    #[error("No async runtime available to run {task}")]
    NoRuntime { task: &'static str },
}

impl Error {
    pub fn state_not_found(name: &'static str, context: impl Into<String>) -> Self {
        Self::StateNotFound {
            name,
            context: context.into(),
        }
    }
}
