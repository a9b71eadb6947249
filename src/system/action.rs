#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, strum_macros::EnumIter)]
pub enum Action {
    FocusNext,
    FocusPrev,
    Activate,
    Reset,
    Quit,
}

impl TryFrom<&str> for Action {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "focus_next" => Ok(Self::FocusNext),
            "focus_prev" => Ok(Self::FocusPrev),
            "activate" => Ok(Self::Activate),
            "reset" => Ok(Self::Reset),
            "quit" => Ok(Self::Quit),
            _ => anyhow::bail!("Action not recognized: \"{value}\""),
        }
    }
}

/// A set of actions that are shown together as a single hint in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionGroup {
    pub actions: Vec<Action>,
    pub name: &'static str,
}

impl ActionGroup {
    pub const fn new(actions: Vec<Action>, name: &'static str) -> Self {
        Self { actions, name }
    }
}
