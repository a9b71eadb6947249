use crate::{
    command::{DeleteCommand, SaveCommand},
    components::{button::Button, button_row::ButtonRow, status_bar::StatusBar, Component},
    config::{key_map::KeyMap, Config},
    system::{
        action::{Action, ActionGroup},
        event::Event,
        message::{AppAction, Message},
        signal::SignalQueue,
        Signal,
    },
};
use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::{rc::Rc, time::Duration};

const TITLE: &str = "Command Pattern Demo";
const DEBOUNCE: Duration = Duration::from_millis(20); // 50 FPS

/// The root component. Creates the commands, binds each one to a button, and
/// runs the event loop that feeds user input to those buttons.
#[derive(Debug)]
pub struct App {
    button_row: ButtonRow,
    status_bar: StatusBar,
    key_map: Rc<KeyMap>,
    exiting: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl App {
    pub fn new(config: Config) -> Self {
        let key_map = Rc::new(config.key_map);

        let button_row = ButtonRow::new(vec![
            Button::new(Rc::new(SaveCommand)).with_label("Salvar"),
            Button::new(Rc::new(DeleteCommand)).with_label("Deletar"),
        ]);
        let status_bar = StatusBar::new(key_map.clone());

        let mut app = Self {
            button_row,
            status_bar,
            key_map,
            exiting: false,
        };
        app.status_bar.actions = app.actions();
        app
    }

    pub const fn is_exiting(&self) -> bool {
        self.exiting
    }

    /// Runs the event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if reading terminal events or drawing to the terminal fails.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        // initial draw call
        terminal.draw(|frame| self.draw(frame))?;

        loop {
            let mut signals: Vec<Signal> = vec![Event::Tick.into()];

            if crossterm::event::poll(DEBOUNCE)? {
                let event = crossterm::event::read()?;
                signals.append(&mut self.handle_raw_event(&event));
            }

            let should_render = self.process_signals(signals);

            if self.exiting {
                tracing::info!("Exiting");
                return Ok(());
            }

            if should_render {
                self.status_bar.actions = self.actions();
                terminal.draw(|frame| self.draw(frame))?;
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.render(frame, area);
    }

    /// Dispatches signals (and any signals they cause) in the order they were
    /// emitted. Returns `true` if anything besides a tick was processed.
    fn process_signals(&mut self, signals: Vec<Signal>) -> bool {
        let mut queue = SignalQueue::default();
        queue.extend(signals);

        let mut changed = false;
        while let Some(signal) = queue.pop() {
            if !matches!(signal, Signal::Event(Event::Tick)) {
                tracing::debug!("Processing signal: {signal}");
                changed = true;
            }

            let new_signals = match &signal {
                Signal::Event(event) => self.handle_event(event),
                Signal::Message(message) => self.handle_message(message),
            };
            queue.extend(new_signals);
        }

        changed
    }
}

impl Component for App {
    fn actions(&self) -> Vec<ActionGroup> {
        let mut out = self.button_row.actions();
        out.push(ActionGroup::new(vec![Action::Quit], "quit"));
        out
    }

    fn handle_action(&mut self, action: &Action) -> Vec<Signal> {
        match action {
            Action::Quit => vec![Message::to_app(AppAction::Exit).into()],
            _ => self.button_row.handle_action(action),
        }
    }

    fn handle_raw_event(&mut self, event: &CrosstermEvent) -> Vec<Signal> {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return vec![Message::to_app(AppAction::Exit).into()];
                }

                let Some(action) = self
                    .key_map
                    .action_for_key_filtered((*key).into(), &self.actions())
                else {
                    return vec![];
                };
                self.handle_action(&action)
            }
            CrosstermEvent::Mouse(_) => self.button_row.handle_raw_event(event),
            CrosstermEvent::Resize(..) => vec![Event::ScreenResized.into()],
            _ => vec![],
        }
    }

    fn handle_event(&mut self, event: &Event) -> Vec<Signal> {
        let mut out = self.button_row.handle_event(event);
        out.append(&mut self.status_bar.handle_event(event));
        out
    }

    fn handle_message(&mut self, message: &Message) -> Vec<Signal> {
        if let Some(AppAction::Exit) = message.read_as_app() {
            self.exiting = true;
        }
        vec![]
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [_, title_area, _, buttons_area, _, status_bar_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(crate::components::button::BUTTON_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let title = Line::from(TITLE).bold().centered();
        frame.render_widget(title, title_area);

        self.button_row.render(frame, buttons_area);
        self.status_bar.render(frame, status_bar_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{render_to_string, ComponentTestHarness};
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    fn composes_save_and_delete_buttons() {
        let app = App::default();
        let buttons = app.button_row.buttons();

        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].label(), "Salvar");
        assert_eq!(buttons[0].command().name(), "save");
        assert_eq!(buttons[1].label(), "Deletar");
        assert_eq!(buttons[1].command().name(), "delete");
    }

    #[test]
    fn fresh_commands_per_composition() {
        let first = App::default();
        let second = App::default();

        assert!(!Rc::ptr_eq(
            first.button_row.buttons()[0].command(),
            second.button_row.buttons()[0].command()
        ));
    }

    #[test]
    fn enter_runs_focused_command() {
        let mut test = ComponentTestHarness::new(App::default());

        test.given_raw_event(&key(KeyCode::Enter));
        test.expect_event_count(1, |e| matches!(e, Event::CommandExecuted("save")));

        test.given_raw_event(&key(KeyCode::Tab));
        test.given_raw_event(&key(KeyCode::Enter));
        test.given_raw_event(&key(KeyCode::Char(' ')));
        test.expect_event_count(2, |e| matches!(e, Event::CommandExecuted("delete")));
        test.expect_event_count(1, |e| matches!(e, Event::CommandExecuted("save")));
    }

    #[test]
    fn unmapped_keys_do_nothing() {
        let mut test = ComponentTestHarness::new(App::default());

        test.given_raw_event(&key(KeyCode::Char('z')));
        // reset is not available while no button has failed
        test.given_raw_event(&key(KeyCode::Char('R')));

        test.expect_no_events();
        test.expect_no_messages();
    }

    #[test]
    fn quit_key_exits() {
        let mut test = ComponentTestHarness::new(App::default());

        test.given_raw_event(&key(KeyCode::Char('q')));

        test.expect_message(|m| m.read_as_app() == Some(&AppAction::Exit));
        assert!(test.component().is_exiting());
    }

    #[test]
    fn ctrl_c_exits() {
        let mut test = ComponentTestHarness::new(App::default());

        test.given_raw_event(&CrosstermEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));

        assert!(test.component().is_exiting());
    }

    #[test]
    fn configured_keys_are_used() {
        let config = Config::read_from_string("[keys]\nactivate = \"x\"\n")
            .expect("config should be valid");
        let mut test = ComponentTestHarness::new(App::new(config));

        test.given_raw_event(&key(KeyCode::Enter));
        test.expect_no_events();

        test.given_raw_event(&key(KeyCode::Char('x')));
        test.expect_event(|e| matches!(e, Event::CommandExecuted("save")));
    }

    #[test]
    fn process_signals_reports_changes() {
        let mut app = App::default();

        assert!(!app.process_signals(vec![Event::Tick.into()]));
        assert!(app.process_signals(vec![Event::ScreenResized.into()]));

        let signals = app.handle_action(&Action::Quit);
        app.process_signals(signals);
        assert!(app.is_exiting());
    }

    #[test]
    fn renders_page() {
        let mut app = App::default();
        let screen = render_to_string(&mut app, 60, 12);

        assert!(screen.contains(TITLE), "{screen}");
        assert!(screen.contains("Salvar"), "{screen}");
        assert!(screen.contains("Deletar"), "{screen}");
        assert!(screen.contains("q: quit"), "{screen}");
    }
}
