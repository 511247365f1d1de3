//! Interactive driver fed by raw keyboard input.

use super::{Action, DirectionSource};
use crate::direction::Direction;
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Reads one key per action from the terminal.
///
/// Key table: w/a/s/d (arrow keys accepted as aliases) map to directions;
/// `q`, Esc and Ctrl+C quit. Anything else is ignored and the read repeats,
/// so unmapped keys never reach the session loop.
///
/// Ctrl+C is handled two ways. During a raw-mode read it arrives as a key
/// event and maps to [`Action::Quit`]. Outside the read — raw mode is
/// released while the session awaits a publish — it arrives as SIGINT, which
/// a watcher task records so the next `next_action` call returns
/// [`Action::Quit`]. Either way the in-flight publish finishes or fails
/// before the session stops.
pub struct KeyboardSource {
    interrupted: Arc<AtomicBool>,
}

impl KeyboardSource {
    /// Creates a keyboard source and installs the interrupt watcher.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new() -> Self {
        let interrupted = Arc::new(AtomicBool::new(false));

        let flag = interrupted.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                debug!("interrupt received, quitting on next action");
                flag.store(true, Ordering::SeqCst);
            }
        });

        Self { interrupted }
    }
}

#[async_trait::async_trait]
impl DirectionSource for KeyboardSource {
    async fn next_action(&mut self, _last: Option<Direction>) -> Result<Action> {
        loop {
            if self.interrupted.load(Ordering::SeqCst) {
                return Ok(Action::Quit);
            }

            let key = tokio::task::spawn_blocking(read_key)
                .await
                .context("keyboard reader task failed")??;

            match map_key(&key) {
                Some(action) => return Ok(action),
                None => debug!(?key, "unmapped key ignored"),
            }
        }
    }

    fn name(&self) -> &str {
        "keyboard"
    }
}

/// Raw mode is held only for the duration of one read so that ordinary
/// terminal output keeps working between keystrokes.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Blocks until one key press arrives.
fn read_key() -> Result<KeyEvent> {
    let _guard = RawModeGuard::enable()?;
    loop {
        if let Event::Key(key) = event::read().context("failed to read terminal event")? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}

/// Maps one key press to an action, or `None` for unmapped keys.
fn map_key(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Up => Some(Action::Move(Direction::Up)),
        KeyCode::Down => Some(Action::Move(Direction::Down)),
        KeyCode::Left => Some(Action::Move(Direction::Left)),
        KeyCode::Right => Some(Action::Move(Direction::Right)),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'q' => Some(Action::Quit),
            'w' => Some(Action::Move(Direction::Up)),
            's' => Some(Action::Move(Direction::Down)),
            'a' => Some(Action::Move(Direction::Left)),
            'd' => Some(Action::Move(Direction::Right)),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_wasd_maps_to_directions() {
        assert_eq!(
            map_key(&press(KeyCode::Char('w'))),
            Some(Action::Move(Direction::Up))
        );
        assert_eq!(
            map_key(&press(KeyCode::Char('a'))),
            Some(Action::Move(Direction::Left))
        );
        assert_eq!(
            map_key(&press(KeyCode::Char('s'))),
            Some(Action::Move(Direction::Down))
        );
        assert_eq!(
            map_key(&press(KeyCode::Char('d'))),
            Some(Action::Move(Direction::Right))
        );
    }

    #[test]
    fn test_uppercase_and_arrows_alias() {
        assert_eq!(
            map_key(&press(KeyCode::Char('W'))),
            Some(Action::Move(Direction::Up))
        );
        assert_eq!(
            map_key(&press(KeyCode::Up)),
            Some(Action::Move(Direction::Up))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(&press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_key(&press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        assert_eq!(map_key(&press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(&press(KeyCode::Enter)), None);
    }

    #[tokio::test]
    async fn test_interrupt_flag_quits_without_reading() {
        let mut source = KeyboardSource {
            interrupted: Arc::new(AtomicBool::new(true)),
        };

        let action = source.next_action(None).await.unwrap();
        assert_eq!(action, Action::Quit);
    }
}
