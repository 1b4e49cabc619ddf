//! Keyboard-driven command palette.
//!
//! `Closed` ⇄ `Open`. While open, the palette owns a query, the commands matching it and a
//! selection that is always a valid index into them (or 0 when nothing matches).

use crate::palette::command::{Command, CommandRegistry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Escape,
    Enter,
    ArrowUp,
    ArrowDown,
    Other,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        meta: false,
        alt: false,
        shift: false,
    };
    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };
    pub const META: Self = Self {
        meta: true,
        ..Self::NONE
    };

    /// Ctrl on most platforms, Cmd on macOS.
    pub fn is_command(self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    fn is_palette_shortcut(&self) -> bool {
        self.modifiers.is_command() && matches!(self.key, Key::Char('k') | Key::Char('K'))
    }
}

/// Result of feeding a key to the palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaletteOutcome {
    /// Not for the palette; let the page handle it.
    Ignored,
    Handled,
    Dismissed,
    /// The palette closed; run this command.
    Execute(Command),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct PaletteState {
    pub is_open: bool,
    pub query: String,
    pub selected_index: usize,
    pub filtered: Vec<Command>,
}

#[derive(Clone, Debug)]
pub struct CommandPalette {
    registry: CommandRegistry,
    state: PaletteState,
    focus_requested: bool,
}

impl CommandPalette {
    pub fn new(registry: CommandRegistry) -> Self {
        Self {
            registry,
            state: PaletteState::default(),
            focus_requested: false,
        }
    }

    pub fn state(&self) -> &PaletteState {
        &self.state
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn selected(&self) -> Option<&Command> {
        self.state.filtered.get(self.state.selected_index)
    }

    /// Consume a pending request to focus the search input.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    pub fn open(&mut self) {
        self.state = PaletteState {
            is_open: true,
            query: String::new(),
            selected_index: 0,
            filtered: self.registry.filter(""),
        };
        self.focus_requested = true;
        tracing::debug!("command palette opened");
    }

    pub fn close(&mut self) {
        if !self.state.is_open {
            return;
        }
        self.state = PaletteState::default();
        self.focus_requested = false;
        tracing::debug!("command palette closed");
    }

    pub fn toggle(&mut self) {
        if self.state.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Click outside the dialog.
    pub fn dismiss_backdrop(&mut self) -> PaletteOutcome {
        if !self.state.is_open {
            return PaletteOutcome::Ignored;
        }
        self.close();
        PaletteOutcome::Dismissed
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        if !self.state.is_open {
            return;
        }
        self.state.query = query.into();
        self.state.filtered = self.registry.filter(&self.state.query);
        self.state.selected_index = 0;
    }

    pub fn select_next(&mut self) {
        let n = self.state.filtered.len();
        if n == 0 {
            return;
        }
        self.state.selected_index = (self.state.selected_index + 1) % n;
    }

    pub fn select_prev(&mut self) {
        let n = self.state.filtered.len();
        if n == 0 {
            return;
        }
        self.state.selected_index = (self.state.selected_index + n - 1) % n;
    }

    /// Close and hand back the selected command. With nothing selected this only closes.
    pub fn confirm(&mut self) -> PaletteOutcome {
        let command = self.selected().cloned();
        self.close();
        match command {
            Some(command) => PaletteOutcome::Execute(command),
            None => PaletteOutcome::Dismissed,
        }
    }

    pub fn handle_key(&mut self, event: KeyEvent) -> PaletteOutcome {
        if event.is_palette_shortcut() {
            self.toggle();
            return PaletteOutcome::Handled;
        }
        if !self.state.is_open {
            return PaletteOutcome::Ignored;
        }

        match event.key {
            Key::Escape => {
                self.close();
                PaletteOutcome::Dismissed
            }
            Key::Enter => self.confirm(),
            Key::ArrowDown => {
                self.select_next();
                PaletteOutcome::Handled
            }
            Key::ArrowUp => {
                self.select_prev();
                PaletteOutcome::Handled
            }
            Key::Backspace => {
                let mut q = self.state.query.clone();
                if q.pop().is_some() {
                    self.set_query(q);
                }
                PaletteOutcome::Handled
            }
            Key::Char(c) if !event.modifiers.is_command() && !c.is_control() => {
                let mut q = self.state.query.clone();
                q.push(c);
                self.set_query(q);
                PaletteOutcome::Handled
            }
            Key::Char(_) | Key::Other => PaletteOutcome::Handled,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/state.rs"]
mod tests;
