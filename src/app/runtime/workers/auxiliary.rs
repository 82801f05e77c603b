//! Auxiliary workers: terminal input reader and tick timer.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::events::AppEvent;

/// Interval between [`AppEvent::Tick`] events.
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// What: Translate a terminal event into an [`AppEvent`].
///
/// Output:
/// - `KeyInput` for keys, `WindowResize` for resizes, `None` for everything else.
#[must_use]
pub fn translate_terminal_event(ev: &CEvent) -> Option<AppEvent> {
    match *ev {
        CEvent::Key(ke) => Some(AppEvent::KeyInput(ke)),
        CEvent::Resize(width, height) => Some(AppEvent::WindowResize { width, height }),
        _ => None,
    }
}

/// What: Spawn the blocking terminal input reader thread.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started
/// - `event_tx`: Sink for translated events
/// - `cancelled`: Flag checked between polls so the thread exits promptly on shutdown
///
/// Details:
/// - Polls with a 50 ms timeout; read errors are ignored and the loop continues.
pub fn spawn_input_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => {
                    let Ok(ev) = crossterm::event::read() else {
                        continue;
                    };
                    if cancelled.load(Ordering::Relaxed) {
                        break;
                    }
                    if let Some(app_ev) = translate_terminal_event(&ev)
                        && event_tx.send(app_ev).is_err()
                    {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}

/// What: Spawn the tick worker sending [`AppEvent::Tick`] every [`TICK_INTERVAL`].
pub fn spawn_tick_worker(event_tx: mpsc::UnboundedSender<AppEvent>, cancel: CancellationToken) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            tokio::select! {
                biased;
                () = cancel.cancelled() => break,
                _ = interval.tick() => {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                }
            }
        }
    });
}
