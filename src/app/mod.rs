pub mod input;
pub mod render;
pub mod state;

pub use state::{load_config, App};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use evolve_words_tui::Tui;
use std::time::Duration;

impl App {
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let tick_rate = Duration::from_millis(self.config.ui.tick_rate_ms);

        while self.running {
            self.drain_messages();
            tui.draw(|f| self.draw(f))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key)?;
                    }
                }
            }
        }

        self.shutdown();
        Ok(())
    }
}
