use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent};

/// Unified event type consumed by the app loop.
#[derive(Clone, Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait EventSource: Send + 'static {
    /// Block for up to `timeout` waiting for an event.
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError>;
}

/// Production event source backed by a crossterm reader thread.
pub struct CrosstermEvents {
    rx: Receiver<AppEvent>,
}

impl CrosstermEvents {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            match event::read() {
                Ok(CtEvent::Key(key)) => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(CtEvent::Resize(_, _)) => {
                    if tx.send(AppEvent::Resize).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for CrosstermEvents {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Channel-fed event source for headless tests.
pub struct TestEvents {
    rx: Receiver<AppEvent>,
}

impl TestEvents {
    pub fn new(rx: Receiver<AppEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEvents {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Advances the application one event at a time, synthesizing Tick when the
/// tick interval passes without input.
pub struct Runner<E: EventSource> {
    events: E,
    tick_every: Duration,
}

impl<E: EventSource> Runner<E> {
    pub fn new(events: E, tick_every: Duration) -> Self {
        Self { events, tick_every }
    }

    /// Blocks up to the tick interval and returns the next event, or Tick
    /// on timeout.
    pub fn step(&self) -> AppEvent {
        match self.events.recv_timeout(self.tick_every) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => AppEvent::Tick,
        }
    }

    /// Discard everything queued so far. Keys pressed while a rest countdown
    /// blocked the view are dropped here instead of firing afterwards.
    pub fn drain(&self) {
        while self.events.recv_timeout(Duration::ZERO).is_ok() {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::mpsc;

    #[test]
    fn step_returns_tick_on_timeout() {
        let (_tx, rx) = mpsc::channel();
        let runner = Runner::new(TestEvents::new(rx), Duration::from_millis(1));

        match runner.step() {
            AppEvent::Tick => {}
            _ => panic!("expected Tick on timeout"),
        }
    }

    #[test]
    fn step_passes_through_events() {
        let (tx, rx) = mpsc::channel();
        tx.send(AppEvent::Resize).unwrap();
        let runner = Runner::new(TestEvents::new(rx), Duration::from_millis(10));

        match runner.step() {
            AppEvent::Resize => {}
            _ => panic!("expected Resize event"),
        }
    }

    #[test]
    fn drain_discards_queued_events() {
        let (tx, rx) = mpsc::channel();
        for _ in 0..5 {
            tx.send(AppEvent::Key(KeyEvent::new(
                KeyCode::Char('x'),
                KeyModifiers::NONE,
            )))
            .unwrap();
        }
        let runner = Runner::new(TestEvents::new(rx), Duration::from_millis(1));

        runner.drain();

        // Nothing left: the next step times out into a Tick.
        match runner.step() {
            AppEvent::Tick => {}
            _ => panic!("queued keys should have been drained"),
        }
    }
}
