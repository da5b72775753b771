use thiserror::Error;

pub type HelpResult<T> = Result<T, HelpError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HelpError {
    /// `topic` keeps the caller's spelling, not the normalized form.
    #[error("no help available for topic '{topic}'")]
    TopicNotFound { topic: String },
}
