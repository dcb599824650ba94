//! Input handling for the nncalc TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use nncalc_engine::{App, Digit, Operation};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

enum InputMsg {
    Event(Event),
    Error(String),
}

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Submit(Operation),
    Quit,
    Ignore,
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so the input thread unblocks if it is
        // backpressured on a send.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(SHUTDOWN_TIMEOUT, join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of dropping keystrokes.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drains queued terminal events into `app`. Returns `true` when the app should quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, &ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Applies one terminal event. Returns `true` when the app should quit.
pub fn apply_event(app: &mut App, event: &Event) -> bool {
    if let Event::Key(key) = event {
        match key_action(key) {
            KeyAction::Submit(op) => {
                debug!(%op, "Key submitted");
                app.submit(op);
            }
            KeyAction::Quit => app.request_quit(),
            KeyAction::Ignore => {}
        }
    }
    app.should_quit()
}

#[must_use]
pub fn key_action(key: &KeyEvent) -> KeyAction {
    // Handle press + repeat events (ignore releases)
    if matches!(key.kind, KeyEventKind::Release) {
        return KeyAction::Ignore;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => KeyAction::Quit,
            _ => KeyAction::Ignore,
        };
    }

    let op = match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => match Digit::try_from(c) {
            Ok(digit) => Operation::AppendDigit(digit),
            Err(_) => return KeyAction::Ignore,
        },
        KeyCode::Char('q') | KeyCode::Esc => return KeyAction::Quit,
        KeyCode::Char('+') => Operation::Add,
        KeyCode::Char('-') => Operation::Subtract,
        KeyCode::Char('*' | 'x') => Operation::Multiply,
        KeyCode::Char('/') => Operation::Divide,
        KeyCode::Char('^') => Operation::Power,
        KeyCode::Char('r') => Operation::Root,
        KeyCode::Enter | KeyCode::Char('e') => Operation::Enter,
        KeyCode::Tab | KeyCode::Char('s') => Operation::Swap,
        KeyCode::Backspace | KeyCode::Delete | KeyCode::Char('c') => Operation::Clear,
        _ => return KeyAction::Ignore,
    };
    KeyAction::Submit(op)
}
