//! Keyboard and paste handling as plain state transitions.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::Input as TAInput;

use super::{App, AppCommand, Screen};
use crate::core::constants::MODEL_URL;

/// Lines moved per PageUp/PageDown in the transcript.
const PAGE_SCROLL: u16 = 10;

impl App {
    /// Apply one key press; `width` is the current terminal width.
    pub fn handle_key(&mut self, key: KeyEvent, width: u16) -> AppCommand {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => return self.request_exit(),
            KeyCode::Char('b') if ctrl => {
                self.toggle_drawer(width);
                return AppCommand::None;
            }
            KeyCode::F(2) => {
                self.toggle_drawer(width);
                return AppCommand::None;
            }
            _ => {}
        }

        if self.drawer.is_focused() {
            self.handle_drawer_key(key);
            return AppCommand::None;
        }

        match self.screen {
            Screen::Chat => self.handle_chat_key(key),
            Screen::About => match key.code {
                KeyCode::Char('o') | KeyCode::Enter => AppCommand::OpenUrl(MODEL_URL.to_string()),
                _ => AppCommand::None,
            },
            _ => AppCommand::None,
        }
    }

    fn handle_drawer_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.drawer.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.drawer.move_down(),
            KeyCode::Enter => self.select_drawer_entry(),
            KeyCode::Esc => self.drawer.close(),
            _ => {}
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) -> AppCommand {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let newline = key
            .modifiers
            .intersects(KeyModifiers::ALT | KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Enter if newline => {
                self.chat.edit_input(|textarea| textarea.insert_newline());
                AppCommand::None
            }
            KeyCode::Enter => self.submit_chat(),
            KeyCode::Tab => {
                self.chat.select_next_preset();
                AppCommand::None
            }
            KeyCode::BackTab => {
                self.chat.select_previous_preset();
                AppCommand::None
            }
            KeyCode::PageUp => {
                self.chat.scroll_up(PAGE_SCROLL);
                AppCommand::None
            }
            KeyCode::PageDown => {
                self.chat.scroll_down(PAGE_SCROLL);
                AppCommand::None
            }
            KeyCode::Up if ctrl => {
                self.chat.scroll_up(1);
                AppCommand::None
            }
            KeyCode::Down if ctrl => {
                self.chat.scroll_down(1);
                AppCommand::None
            }
            KeyCode::End if ctrl => {
                self.chat.scroll_to_bottom();
                AppCommand::None
            }
            _ => {
                self.chat.edit_input(|textarea| {
                    textarea.input(TAInput::from(key));
                });
                AppCommand::None
            }
        }
    }

    /// Bracketed paste goes straight into the compose box on the chat screen.
    pub fn handle_paste(&mut self, text: &str) {
        if self.screen != Screen::Chat || self.drawer.is_focused() {
            return;
        }
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        self.chat.edit_input(|textarea| {
            textarea.insert_str(&text);
        });
    }
}
