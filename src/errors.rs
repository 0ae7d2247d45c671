use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("{0}")] Validation(String),
    #[error("{0}")] Upstream(String),
}

impl PromptError {
    /// HTTP-equivalent status for the wire contract: 400 for rejected
    /// input, 500 for upstream/model failures.
    pub fn status(&self) -> u16 {
        match self {
            PromptError::Validation(_) => 400,
            PromptError::Upstream(_) => 500,
        }
    }
}
