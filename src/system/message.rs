#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum AppAction {
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
enum Action {
    AppAction(AppAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message(Action);

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Message {
    pub const fn to_app(action: AppAction) -> Self {
        Self(Action::AppAction(action))
    }

    pub const fn read_as_app(&self) -> Option<&AppAction> {
        let Action::AppAction(action) = &self.0;
        Some(action)
    }
}
