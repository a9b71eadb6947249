use crate::{
    command::Command,
    components::Component,
    error::CommandError,
    system::{
        action::Action,
        event::Event,
        message::Message,
        signal::{Signal, SignalQueue},
    },
};
use crossterm::event::{
    Event as CrosstermEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use itertools::Itertools;
use ratatui::{backend::TestBackend, buffer::Cell as BufferCell, Terminal};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

pub struct ComponentTestHarness<C: Component> {
    component: C,
    events: Vec<Event>,
    messages: Vec<Message>,
}

impl<C: Component> ComponentTestHarness<C> {
    pub const fn new(component: C) -> Self {
        Self {
            component,
            events: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub const fn component(&self) -> &C {
        &self.component
    }

    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    pub fn given_action(&mut self, action: Action) {
        let signals = self.component.handle_action(&action);
        self.process_signals(signals);
    }

    pub fn given_raw_event(&mut self, event: &CrosstermEvent) {
        let signals = self.component.handle_raw_event(event);
        self.process_signals(signals);
    }

    pub fn given_event(&mut self, event: Event) {
        self.process_signals(vec![event.into()]);
    }

    fn process_signals(&mut self, signals: Vec<Signal>) {
        let mut queue = SignalQueue::default();
        queue.extend(signals);

        while let Some(signal) = queue.pop() {
            let new_signals = match &signal {
                Signal::Event(event) => self.component.handle_event(event),
                Signal::Message(message) => self.component.handle_message(message),
            };

            // Add any new signals back to the main queue for processing
            queue.extend(new_signals);

            // Store the processed signal for test assertions
            match signal {
                Signal::Event(event) => self.events.push(event),
                Signal::Message(message) => self.messages.push(message),
            }
        }
    }

    pub fn expect_event<P: FnMut(&&Event) -> bool>(&self, predicate: P) {
        let event = self.events.iter().find(predicate);
        assert!(
            event.is_some(),
            "Matching event not found. These events were recorded:\n{:?}",
            self.events
        );
    }

    pub fn expect_event_count<P: FnMut(&&Event) -> bool>(&self, count: usize, predicate: P) {
        let found = self.events.iter().filter(predicate).count();
        assert_eq!(
            found, count,
            "Wrong number of matching events. These events were recorded:\n{:?}",
            self.events
        );
    }

    pub fn expect_no_events(&self) {
        assert!(
            self.events.is_empty(),
            "Event list not empty. These events were recorded:\n{:?}",
            self.events
        );
    }

    pub fn expect_message<P: FnMut(&&Message) -> bool>(&self, predicate: P) {
        let message = self.messages.iter().find(predicate);
        assert!(
            message.is_some(),
            "Matching message not found. These message were recorded:\n{:?}",
            self.messages
        );
    }

    pub fn expect_no_messages(&self) {
        assert!(
            self.messages.is_empty(),
            "Message list not empty. These message were recorded:\n{:?}",
            self.messages
        );
    }
}

/// Renders a component into an in-memory terminal and returns the screen
/// contents, one line per row.
pub fn render_to_string<C: Component>(component: &mut C, width: u16, height: u16) -> String {
    let mut terminal =
        Terminal::new(TestBackend::new(width, height)).expect("test backend should not fail");
    terminal
        .draw(|frame| {
            let area = frame.area();
            component.render(frame, area);
        })
        .expect("test backend should not fail");

    terminal
        .backend()
        .buffer()
        .content()
        .chunks(usize::from(width))
        .map(|row| row.iter().map(BufferCell::symbol).collect::<String>())
        .join("\n")
}

/// A left mouse button press at the given terminal cell.
pub fn click(column: u16, row: u16) -> CrosstermEvent {
    CrosstermEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}

/// A shared, ordered record of which commands ran.
pub type Journal = Rc<RefCell<Vec<&'static str>>>;

/// A command that counts its executions, optionally records them in a shared
/// journal, and optionally fails every time.
#[derive(Debug)]
pub struct RecordingCommand {
    name: &'static str,
    calls: Cell<usize>,
    journal: Option<Journal>,
    failure: Option<String>,
}

impl RecordingCommand {
    pub fn new(name: &'static str) -> Rc<Self> {
        Rc::new(Self {
            name,
            calls: Cell::new(0),
            journal: None,
            failure: None,
        })
    }

    pub fn with_journal(name: &'static str, journal: &Journal) -> Rc<Self> {
        Rc::new(Self {
            name,
            calls: Cell::new(0),
            journal: Some(journal.clone()),
            failure: None,
        })
    }

    pub fn failing(name: &'static str, reason: &str) -> Rc<Self> {
        Rc::new(Self {
            name,
            calls: Cell::new(0),
            journal: None,
            failure: Some(reason.to_string()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Command for RecordingCommand {
    fn name(&self) -> &'static str {
        self.name
    }

    fn execute(&self) -> Result<(), CommandError> {
        self.calls.set(self.calls.get() + 1);
        if let Some(journal) = &self.journal {
            journal.borrow_mut().push(self.name);
        }

        match &self.failure {
            Some(reason) => Err(CommandError::failure(self.name, reason.clone())),
            None => Ok(()),
        }
    }
}
