/// The one thing that can go wrong when a command runs: its effect could not
/// be completed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("{command} failed: {reason}")]
    ExecutionFailure {
        command: &'static str,
        reason: String,
    },
}

impl CommandError {
    pub fn failure(command: &'static str, reason: impl Into<String>) -> Self {
        Self::ExecutionFailure {
            command,
            reason: reason.into(),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonError {
    #[error("a button must be bound to a command before it can be built")]
    Unbound,
}
