use std::collections::VecDeque;

use super::{event::Event, message::Message};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    Event(Event),
    Message(Message),
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Event(event) => write!(f, "{event}"),
            Self::Message(message) => write!(f, "{message}"),
        }
    }
}

impl From<Event> for Signal {
    fn from(e: Event) -> Self {
        Self::Event(e)
    }
}

impl From<Message> for Signal {
    fn from(m: Message) -> Self {
        Self::Message(m)
    }
}

#[derive(Debug, Default)]
pub struct SignalQueue {
    queue: VecDeque<Signal>,
}

impl SignalQueue {
    pub fn push(&mut self, signal: impl Into<Signal>) {
        self.queue.push_back(signal.into());
    }

    pub fn pop(&mut self) -> Option<Signal> {
        self.queue.pop_front()
    }
}

impl Extend<Signal> for SignalQueue {
    fn extend<T: IntoIterator<Item = Signal>>(&mut self, iter: T) {
        self.queue.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::message::AppAction;

    #[test]
    fn queue_is_first_in_first_out() {
        let mut queue = SignalQueue::default();
        queue.push(Event::CommandExecuted("save"));
        queue.push(Message::to_app(AppAction::Exit));
        queue.extend(vec![Event::CommandExecuted("delete").into()]);

        assert_eq!(queue.pop(), Some(Event::CommandExecuted("save").into()));
        assert_eq!(queue.pop(), Some(Message::to_app(AppAction::Exit).into()));
        assert_eq!(queue.pop(), Some(Event::CommandExecuted("delete").into()));
        assert_eq!(queue.pop(), None);
    }
}
