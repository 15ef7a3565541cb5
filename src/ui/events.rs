use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Upper bound on one poll, so the shutdown flag is seen quickly.
const SHUTDOWN_CHECK_INTERVAL: Duration = Duration::from_millis(50);

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Resize(u16, u16),
    /// SIGTERM or SIGINT received.
    Shutdown,
}

/// Polls terminal events on a background thread.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(poll_interval: Duration) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();

        let shutdown = Arc::new(AtomicBool::new(false));
        for signal in [signal_hook::consts::SIGTERM, signal_hook::consts::SIGINT] {
            if let Err(err) = signal_hook::flag::register(signal, Arc::clone(&shutdown)) {
                tracing::warn!(signal, error = %err, "failed to register signal handler");
            }
        }

        spawn_reader(poll_timeout(poll_interval), shutdown, tx)?;

        Ok(Self { rx })
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Start the reader thread. Exits on shutdown, read errors, or a dropped receiver.
fn spawn_reader(
    timeout: Duration,
    shutdown: Arc<AtomicBool>,
    tx: Sender<AppEvent>,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("tally-events".to_string())
        .spawn(move || loop {
            if shutdown.load(Ordering::Relaxed) {
                let _ = tx.send(AppEvent::Shutdown);
                break;
            }

            let sent = match event::poll(timeout) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                    Ok(Event::Paste(text)) => tx.send(AppEvent::Paste(text)),
                    Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
                    Ok(_) => Ok(()),
                    Err(err) => {
                        tracing::error!(error = %err, "terminal read failed");
                        break;
                    }
                },
                Ok(false) => Ok(()),
                Err(err) => {
                    tracing::error!(error = %err, "terminal poll failed");
                    break;
                }
            };
            // Receiver dropped: the UI loop is gone
            if sent.is_err() {
                break;
            }
        })
}

fn poll_timeout(poll_interval: Duration) -> Duration {
    poll_interval.min(SHUTDOWN_CHECK_INTERVAL)
}
