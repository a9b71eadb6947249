use crate::error::CommandError;

#[derive(Debug, Clone, PartialEq, Eq, strum_macros::Display)]
pub enum Event {
    /// Emitted every event loop iteration to give components (eg. the status
    /// bar) an opportunity to expire time-based state
    Tick,

    FocusChanged,
    ScreenResized,

    /// carries the name of the command that ran
    CommandExecuted(&'static str),
    CommandFailed(CommandError),
    ButtonReset,

    StatusMessageCleared,
}
