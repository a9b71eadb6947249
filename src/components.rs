use crate::system::{
    action::{Action, ActionGroup},
    event::Event,
    message::Message,
    Signal,
};
use crossterm::event::Event as CrosstermEvent;
use ratatui::{layout::Rect, Frame};

pub mod button;
pub mod button_row;
pub mod status_bar;

pub trait Component {
    fn actions(&self) -> Vec<ActionGroup> {
        vec![]
    }

    fn handle_action(&mut self, _action: &Action) -> Vec<Signal> {
        vec![]
    }

    fn handle_raw_event(&mut self, _event: &CrosstermEvent) -> Vec<Signal> {
        vec![]
    }

    fn handle_event(&mut self, _event: &Event) -> Vec<Signal> {
        vec![]
    }

    fn handle_message(&mut self, _message: &Message) -> Vec<Signal> {
        vec![]
    }

    fn render(&mut self, _frame: &mut Frame, _area: Rect) {}

    fn is_focused(&self) -> bool {
        false
    }
}
