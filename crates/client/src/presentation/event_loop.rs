//! Event loop driving keyboard input, delayed notices and rendering.
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEventKind};
use tokio::time::{self, Duration};

use crate::{
    app::{DuelApp, Flow},
    input,
    presentation::{terminal::Tui, theme::RatatuiTheme, ui},
};

const FRAME_INTERVAL_MS: u64 = 16;

pub struct EventLoop {
    app: DuelApp,
    theme: RatatuiTheme,
}

impl EventLoop {
    pub fn new(app: DuelApp) -> Self {
        Self {
            app,
            theme: RatatuiTheme::new(),
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<DuelApp> {
        ui::render(terminal, &self.app, &self.theme)?;

        loop {
            tokio::select! {
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_tick(terminal)? == Flow::Quit {
                        break;
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Interrupted");
                    break;
                }
            }
        }

        Ok(self.app)
    }

    fn handle_tick(&mut self, terminal: &mut Tui) -> Result<Flow> {
        let now = Instant::now();
        let mut redraw = self.app.tick(now);

        while term_event::poll(Duration::from_millis(0))? {
            match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    let action = input::handle_key(key, self.app.mode());
                    if self.app.handle(action, now) == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                    redraw = true;
                }
                TermEvent::Resize(_, _) => redraw = true,
                _ => {}
            }
        }

        if redraw {
            ui::render(terminal, &self.app, &self.theme)?;
        }
        Ok(Flow::Continue)
    }
}
