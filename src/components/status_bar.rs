use std::{
    rc::Rc,
    time::{Duration, Instant},
};

use crate::{
    components::Component,
    config::key_map::KeyMap,
    system::{action::ActionGroup, event::Event, Signal},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph, Wrap},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessageKind {
    Error,
    Info,
    Success,
}

impl MessageKind {
    /// How long a message of this kind stays up before the key hints return.
    const fn duration(self) -> Duration {
        match self {
            Self::Error => Duration::from_secs(5),
            Self::Info | Self::Success => Duration::from_secs(4),
        }
    }

    const fn prefix(self) -> (&'static str, Color) {
        match self {
            Self::Error => ("● Error: ", Color::Red),
            Self::Info => ("● ", Color::Blue),
            Self::Success => ("● Success: ", Color::Green),
        }
    }
}

/// A transient result shown in place of the key hints.
#[derive(Debug)]
struct Message {
    kind: MessageKind,
    content: String,
    shown_at: Instant,
    duration: Duration,
}

impl Message {
    fn new(kind: MessageKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            shown_at: Instant::now(),
            duration: kind.duration(),
        }
    }

    fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.duration
    }

    fn to_line(&self) -> Line<'_> {
        let (prefix, color) = self.kind.prefix();
        Line::from(vec![
            Span::styled(prefix, Style::default().fg(color)),
            Span::from(self.content.as_str()),
        ])
    }
}

#[derive(Debug, Default)]
pub struct StatusBar {
    pub actions: Vec<ActionGroup>,
    message: Option<Message>,

    key_map: Rc<KeyMap>,
}

impl StatusBar {
    pub fn new(key_map: Rc<KeyMap>) -> Self {
        Self {
            key_map,
            ..Default::default()
        }
    }

    fn hints(&self) -> Line<'_> {
        self.actions
            .iter()
            .flat_map(|group| self.key_map.action_group_to_spans(group))
            .collect::<Vec<Span>>()
            .into()
    }

    #[cfg(test)]
    fn message_content(&self) -> Option<(MessageKind, &str)> {
        self.message
            .as_ref()
            .map(|m| (m.kind, m.content.as_str()))
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content = self.message.as_ref().map_or_else(
            || self.hints(),
            Message::to_line,
        );

        let content = Paragraph::new(content)
            .wrap(Wrap::default())
            .block(Block::default().padding(Padding::horizontal(1)));

        frame.render_widget(content, area);
    }

    fn handle_event(&mut self, event: &Event) -> Vec<Signal> {
        let shown = match event {
            Event::CommandExecuted(name) => Some(Message::new(
                MessageKind::Success,
                format!("Ran the {name} command."),
            )),
            Event::CommandFailed(error) => {
                Some(Message::new(MessageKind::Error, error.to_string()))
            }
            Event::ButtonReset => Some(Message::new(MessageKind::Info, "Button re-enabled.")),
            _ => None,
        };
        if let Some(message) = shown {
            self.message = Some(message);
        }

        if self.message.as_ref().is_some_and(Message::is_expired) {
            self.message = None;
            return vec![Event::StatusMessageCleared.into()];
        }

        vec![]
    }
}
