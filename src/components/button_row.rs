use super::{
    button::{Button, BUTTON_HEIGHT},
    Component,
};
use crate::system::{
    action::{Action, ActionGroup},
    event::Event,
    Signal,
};
use crossterm::event::Event as CrosstermEvent;
use ratatui::{layout::Flex, prelude::*};

const BUTTON_SPACING: u16 = 2;

/// A horizontal group of buttons, one of which has keyboard focus.
#[derive(Debug, Default)]
pub struct ButtonRow {
    buttons: Vec<Button>,
    focused_idx: usize,
}

impl ButtonRow {
    pub fn new(buttons: Vec<Button>) -> Self {
        let mut row = Self {
            buttons,
            focused_idx: 0,
        };
        row.sync_focus();
        row
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub const fn focused_idx(&self) -> usize {
        self.focused_idx
    }

    fn focused_mut(&mut self) -> Option<&mut Button> {
        self.buttons.get_mut(self.focused_idx)
    }

    fn sync_focus(&mut self) {
        for (idx, button) in self.buttons.iter_mut().enumerate() {
            button.set_focused(idx == self.focused_idx);
        }
    }

    fn set_focus(&mut self, idx: usize) -> Vec<Signal> {
        if idx == self.focused_idx || idx >= self.buttons.len() {
            return vec![];
        }

        self.focused_idx = idx;
        self.sync_focus();
        vec![Event::FocusChanged.into()]
    }

    fn focus_next(&mut self) -> Vec<Signal> {
        if self.buttons.is_empty() {
            return vec![];
        }
        self.set_focus((self.focused_idx + 1) % self.buttons.len())
    }

    fn focus_prev(&mut self) -> Vec<Signal> {
        if self.buttons.is_empty() {
            return vec![];
        }
        let len = self.buttons.len();
        self.set_focus((self.focused_idx + len - 1) % len)
    }
}

impl Component for ButtonRow {
    fn actions(&self) -> Vec<ActionGroup> {
        let mut out = vec![];

        if self.buttons.len() > 1 {
            out.push(ActionGroup::new(
                vec![Action::FocusPrev, Action::FocusNext],
                "focus",
            ));
        }

        if let Some(button) = self.buttons.get(self.focused_idx) {
            out.append(&mut button.actions());
        }

        out
    }

    fn handle_action(&mut self, action: &Action) -> Vec<Signal> {
        match action {
            Action::FocusNext => self.focus_next(),
            Action::FocusPrev => self.focus_prev(),
            Action::Activate | Action::Reset => self
                .focused_mut()
                .map(|button| button.handle_action(action))
                .unwrap_or_default(),
            Action::Quit => vec![],
        }
    }

    fn handle_raw_event(&mut self, event: &CrosstermEvent) -> Vec<Signal> {
        let Some(idx) = self.buttons.iter().position(|b| b.is_clicked(event)) else {
            return vec![];
        };

        // clicking a button also focuses it
        let mut out = self.set_focus(idx);
        out.append(&mut self.buttons[idx].handle_raw_event(event));
        out
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [row_area] = Layout::vertical([Constraint::Length(BUTTON_HEIGHT)])
            .flex(Flex::Center)
            .areas(area);

        let constraints = self.buttons.iter().map(|b| Constraint::Length(b.width()));
        let button_areas = Layout::horizontal(constraints)
            .flex(Flex::Center)
            .spacing(BUTTON_SPACING)
            .split(row_area);

        for (button, button_area) in self.buttons.iter_mut().zip(button_areas.iter()) {
            button.render(frame, *button_area);
        }
    }
}
