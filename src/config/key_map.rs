use anyhow::{anyhow, bail, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use itertools::Itertools;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};
use std::{collections::HashMap, ops::Not};
use strum::IntoEnumIterator;

use crate::system::action::{Action, ActionGroup};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event
                .modifiers
                .intersection(KeyModifiers::not(KeyModifiers::SHIFT)),
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code_str = match self.code {
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Tab => "tab".to_string(),
            KeyCode::BackTab => "bktab".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Char(' ') => "space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            _ => "?".to_string(),
        };

        let alt_str = if self.modifiers.contains(KeyModifiers::ALT) {
            "A-"
        } else {
            ""
        };

        let ctrl_str = if self.modifiers.contains(KeyModifiers::CONTROL) {
            "C-"
        } else {
            ""
        };

        write!(f, "{ctrl_str}{alt_str}{code_str}")
    }
}

impl TryFrom<&str> for Key {
    type Error = anyhow::Error;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        let parts: Vec<&str> = s.split('-').collect();
        let key_str = parts
            .last()
            .ok_or_else(|| anyhow!("Key not recognized: \"{s}\""))?;
        let mut modifiers = KeyModifiers::empty();

        for part in &parts[..parts.len() - 1] {
            match *part {
                "C" | "c" => modifiers.extend(KeyModifiers::CONTROL),
                "A" | "a" => modifiers.extend(KeyModifiers::ALT),
                _ => bail!("Modifier \"{part}\" in key \"{s}\" not recognized"),
            }
        }

        let code = match *key_str {
            "enter" | "Enter" | "return" | "Return" => KeyCode::Enter,
            "esc" | "Esc" => KeyCode::Esc,
            "up" | "Up" => KeyCode::Up,
            "down" | "Down" => KeyCode::Down,
            "left" | "Left" => KeyCode::Left,
            "right" | "Right" => KeyCode::Right,
            "space" | "Space" => KeyCode::Char(' '),
            "tab" | "Tab" => KeyCode::Tab,
            "backtab" | "BackTab" => KeyCode::BackTab,

            // just assume that any string of length 1 should refer to that character
            s if s.chars().count() == 1 => KeyCode::Char(
                s.chars()
                    .next()
                    .ok_or_else(|| anyhow!("Key not recognized: \"{s}\""))?,
            ),
            _ => bail!("Key not recognized: \"{s}\""),
        };

        Ok(Self { code, modifiers })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    map: HashMap<Key, Action>,

    // the key shown for each action in hints
    primary: HashMap<Action, Key>,
}

impl KeyMap {
    fn bind(&mut self, action: Action, keys: &[Key]) {
        self.map.retain(|_, a| *a != action);
        self.primary.remove(&action);

        for key in keys {
            self.map.insert(*key, action);
        }
        if let Some(first) = keys.first() {
            self.primary.insert(action, *first);
        }
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut key_map = Self {
            map: HashMap::default(),
            primary: HashMap::default(),
        };

        // NOTE: creating the default map by iterating and matching like this
        // guarantees that every action is mapped to a key
        for action in Action::iter() {
            let key_codes: &[KeyCode] = match action {
                Action::FocusNext => &[KeyCode::Right, KeyCode::Tab],
                Action::FocusPrev => &[KeyCode::Left, KeyCode::BackTab],
                Action::Activate => &[KeyCode::Enter, KeyCode::Char(' ')],
                Action::Reset => &[KeyCode::Char('R')],
                Action::Quit => &[KeyCode::Char('q'), KeyCode::Esc],
            };

            let keys = key_codes.iter().map(|c| Key::from(*c)).collect_vec();
            key_map.bind(action, &keys);
        }

        key_map
    }
}

impl TryFrom<HashMap<String, String>> for KeyMap {
    type Error = anyhow::Error;

    /// Values are whitespace-separated lists of keys, so an action may be
    /// bound to more than one key. The first key listed is the one shown in hints.
    /// A key may only be bound to one action, counting the default bindings of
    /// actions the config leaves alone.
    fn try_from(map: HashMap<String, String>) -> Result<Self, Self::Error> {
        let mut key_map = Self::default();

        let mut overrides = vec![];
        for (action_str, keys_str) in map.iter().sorted() {
            let action = Action::try_from(action_str.as_str())?;
            let keys = keys_str
                .split_whitespace()
                .map(Key::try_from)
                .collect::<Result<Vec<_>>>()?;
            if keys.is_empty() {
                bail!("No keys given for action \"{action_str}\"");
            }
            overrides.push((action_str, action, keys));
        }

        // clear every overridden action first so that keys can move between them
        for (_, action, _) in &overrides {
            key_map.bind(*action, &[]);
        }

        for (action_str, action, keys) in &overrides {
            if let Some(key) = keys
                .iter()
                .find(|k| key_map.map.get(*k).is_some_and(|a| a != action))
            {
                let other = key_map.map[key];
                bail!(
                    "Key \"{key}\" for action \"{action_str}\" is already bound to {other:?}"
                );
            }
            key_map.bind(*action, keys);
        }

        Ok(key_map)
    }
}

impl KeyMap {
    #[must_use]
    pub fn action_for_key(&self, key: Key) -> Option<Action> {
        self.map.get(&key).copied()
    }

    /// Gets the action corresponding to a key, but only if that action is one
    /// that the currently-visible components will respond to
    #[must_use]
    pub fn action_for_key_filtered(
        &self,
        key: Key,
        available_actions: &[ActionGroup],
    ) -> Option<Action> {
        let action = self.action_for_key(key)?;

        available_actions
            .iter()
            .flat_map(|group| &group.actions)
            .contains(&action)
            .then_some(action)
    }

    #[must_use]
    pub fn key_for_action(&self, action: Action) -> Option<Key> {
        self.primary.get(&action).copied()
    }

    /// Uses the current key configuration to build a hint from an action group.
    /// Used for displaying key hints in the status bar.
    pub fn action_group_to_spans<'a>(&self, group: &'a ActionGroup) -> Vec<Span<'a>> {
        let hint_style = Style::default();
        let key_hint = group
            .actions
            .iter()
            .map(|a| {
                self.key_for_action(*a)
                    .map_or_else(|| "?".to_string(), |k| k.to_string())
            })
            .join("/");

        vec![
            Span::styled(key_hint, hint_style.add_modifier(Modifier::BOLD)),
            Span::styled(": ", hint_style),
            Span::styled(group.name, hint_style.fg(Color::Gray)),
            Span::raw("  "),
        ]
    }
}
