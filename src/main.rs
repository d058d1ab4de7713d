//! Terminal gridfall runner (default binary).
//!
//! Owns everything the core treats as a collaborator: pacing between ticks,
//! rendering snapshots, the quit keys, and the controlled exit on game over.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use gridfall::core::{GameSnapshot, GameState};
use gridfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use gridfall::types::STEP_MS;

/// How long the final GAME OVER frame stays up before the process exits.
const GAME_OVER_LINGER: Duration = Duration::from_secs(3);

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(time_seed());
    game.start();

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let step = Duration::from_millis(STEP_MS as u64);
    let mut last_step = Instant::now();

    loop {
        // Render the between-tick snapshot.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if game.game_over() {
            // Leave the final frame up; any key (or the timeout) exits.
            let _ = event::poll(GAME_OVER_LINGER)?;
            return Ok(());
        }

        // Wait out the rest of the step, but react to quit keys immediately.
        let timeout = step
            .checked_sub(last_step.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && should_quit(key) {
                    return Ok(());
                }
            }
        }

        if last_step.elapsed() >= step {
            last_step = Instant::now();
            game.tick();
        }
    }
}

fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
