use crate::app::state::{App, MAX_TARGET_DIGITS};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => self.running = false,
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Enter | KeyCode::Char('e') => {
                if self.is_ready() {
                    self.start_world()?;
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.target_input.len() < MAX_TARGET_DIGITS {
                    self.target_input.push(c);
                }
            }
            KeyCode::Backspace => {
                self.target_input.pop();
            }
            KeyCode::Up => self.words_scroll = self.words_scroll.saturating_sub(1),
            KeyCode::Down => self.words_scroll = self.words_scroll.saturating_add(1),
            KeyCode::PageUp => self.words_scroll = self.words_scroll.saturating_sub(10),
            KeyCode::PageDown => self.words_scroll = self.words_scroll.saturating_add(10),
            KeyCode::Home => self.words_scroll = 0,
            _ => {}
        }
        Ok(())
    }
}
