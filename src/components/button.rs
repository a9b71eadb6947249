use crate::{
    command::Command,
    components::Component,
    error::ButtonError,
    system::{
        action::{Action, ActionGroup},
        event::Event,
        Signal,
    },
};
use crossterm::event::{Event as CrosstermEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Padding, Paragraph},
};
use std::rc::Rc;

pub const DEFAULT_LABEL: &str = "Executar";
pub const BUTTON_HEIGHT: u16 = 3;

const HORIZONTAL_PADDING: u16 = 2;
const FAILED_PREFIX: &str = "✗ ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum ButtonState {
    #[default]
    Ready,
    Failed(String),
}

/// A clickable control bound to exactly one command. Each activation runs the
/// command once; the button itself does nothing else.
#[derive(Debug)]
pub struct Button {
    command: Rc<dyn Command>,
    label: String,
    state: ButtonState,
    focused: bool,

    // set on render, used to hit-test mouse clicks
    area: Option<Rect>,
}

impl Button {
    pub fn new(command: Rc<dyn Command>) -> Self {
        Self {
            command,
            label: DEFAULT_LABEL.to_string(),
            state: ButtonState::default(),
            focused: false,
            area: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn builder() -> ButtonBuilder {
        ButtonBuilder::default()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub const fn command(&self) -> &Rc<dyn Command> {
        &self.command
    }

    pub const fn is_failed(&self) -> bool {
        matches!(self.state, ButtonState::Failed(_))
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// The number of columns needed to render this button without truncation.
    pub fn width(&self) -> u16 {
        let text_width = Line::from(self.display_label()).width();
        u16::try_from(text_width)
            .unwrap_or(u16::MAX)
            .saturating_add(2 * HORIZONTAL_PADDING + 2)
    }

    fn display_label(&self) -> String {
        if self.is_failed() {
            format!("{FAILED_PREFIX}{}", self.label)
        } else {
            self.label.clone()
        }
    }

    pub fn is_clicked(&self, event: &CrosstermEvent) -> bool {
        let CrosstermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) = event
        else {
            return false;
        };

        self.area
            .is_some_and(|area| area.contains(Position::new(*column, *row)))
    }

    /// Runs the bound command once. A failure puts the button in a failed
    /// state, in which further activations are ignored until it is reset.
    pub fn activate(&mut self) -> Vec<Signal> {
        let name = self.command.name();

        if let ButtonState::Failed(reason) = &self.state {
            tracing::warn!(command = name, "Ignoring activation of failed button: {reason}");
            return vec![];
        }

        tracing::debug!(command = name, label = %self.label, "Button activated");
        match self.command.execute() {
            Ok(()) => vec![Event::CommandExecuted(name).into()],
            Err(err) => {
                tracing::error!(command = name, "{err}");
                self.state = ButtonState::Failed(err.to_string());
                vec![Event::CommandFailed(err).into()]
            }
        }
    }

    fn reset(&mut self) -> Vec<Signal> {
        if !self.is_failed() {
            return vec![];
        }

        tracing::debug!(command = self.command.name(), "Button reset");
        self.state = ButtonState::Ready;
        vec![Event::ButtonReset.into()]
    }
}

impl Component for Button {
    fn actions(&self) -> Vec<ActionGroup> {
        if self.is_failed() {
            vec![ActionGroup::new(vec![Action::Reset], "reset")]
        } else {
            vec![ActionGroup::new(vec![Action::Activate], self.command.name())]
        }
    }

    fn handle_action(&mut self, action: &Action) -> Vec<Signal> {
        match action {
            Action::Activate => self.activate(),
            Action::Reset => self.reset(),
            _ => vec![],
        }
    }

    fn handle_raw_event(&mut self, event: &CrosstermEvent) -> Vec<Signal> {
        if self.is_clicked(event) {
            self.activate()
        } else {
            vec![]
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.area = Some(area);

        let (border_type, border_color) = match (&self.state, self.focused) {
            (ButtonState::Failed(_), _) => (BorderType::Thick, Color::Red),
            (ButtonState::Ready, true) => (BorderType::Thick, Color::White),
            (ButtonState::Ready, false) => (BorderType::Rounded, Color::Blue),
        };

        let block = Block::bordered()
            .border_type(border_type)
            .border_style(Style::default().fg(border_color))
            .padding(Padding::horizontal(HORIZONTAL_PADDING))
            .bg(Color::Blue);

        let content = Paragraph::new(self.display_label())
            .centered()
            .fg(Color::White)
            .block(block);

        frame.render_widget(content, area);
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}

#[derive(Debug, Default)]
pub struct ButtonBuilder {
    command: Option<Rc<dyn Command>>,
    label: Option<String>,
}

impl ButtonBuilder {
    #[must_use]
    pub fn command(mut self, command: Rc<dyn Command>) -> Self {
        self.command = Some(command);
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// # Errors
    ///
    /// Returns `ButtonError::Unbound` if no command was supplied.
    pub fn build(self) -> Result<Button, ButtonError> {
        let command = self.command.ok_or(ButtonError::Unbound)?;
        let button = Button::new(command);

        Ok(match self.label {
            Some(label) => button.with_label(label),
            None => button,
        })
    }
}
