//! Terminal presentation components used by the duel client.
pub mod event_loop;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

use anyhow::Result;

pub use event_loop::EventLoop;

use crate::app::DuelApp;

/// Takes over the terminal and runs the duel until the players quit.
pub async fn run(app: DuelApp) -> Result<()> {
    let mut terminal = terminal::init()?;
    let _guard = terminal::TerminalGuard;

    let app = EventLoop::new(app).run(&mut terminal).await?;

    if let Some(battle) = app.battle() {
        tracing::info!("Session ended on turn {}", battle.turn());
    }
    Ok(())
}
