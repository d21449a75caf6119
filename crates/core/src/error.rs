/// Failure to parse one of the engine's closed tag enumerations from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("Unknown subject: '{0}'")]
    UnknownSubject(String),
    #[error("Unknown learning style: '{0}'")]
    UnknownLearningStyle(String),
}
