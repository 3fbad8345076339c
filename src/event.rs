use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, KeyEvent, KeyEventKind};

/// Authoritative tick plus key presses, delivered over one channel so the
/// main loop stays single-threaded.
pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Deadline bookkeeping for the fixed tick. The poll timeout is always
/// the remainder of the current period, never a fresh one, so a stream
/// of key events (terminal autorepeat fires every few tens of
/// milliseconds) cannot starve the tick.
pub struct TickClock {
    last: Instant,
    rate: Duration,
}

impl TickClock {
    pub fn new(rate: Duration) -> Self {
        Self {
            last: Instant::now(),
            rate,
        }
    }

    /// Time left in the current period; zero once the deadline passed.
    pub fn timeout(&self) -> Duration {
        self.rate.saturating_sub(self.last.elapsed())
    }

    /// True when the period has elapsed. Starts the next period.
    pub fn due(&mut self) -> bool {
        if self.last.elapsed() >= self.rate {
            self.last = Instant::now();
            true
        } else {
            false
        }
    }
}

pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(tick_rate_ms);

        thread::spawn(move || {
            let mut clock = TickClock::new(tick_rate);
            loop {
                if event::poll(clock.timeout()).unwrap_or(false) {
                    if let Ok(crossterm::event::Event::Key(key)) = event::read() {
                        if key.kind == KeyEventKind::Press && tx.send(Event::Key(key)).is_err() {
                            return;
                        }
                    }
                }
                if clock.due() && tx.send(Event::Tick).is_err() {
                    return;
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx
            .recv()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backdated(rate_ms: u64, elapsed_ms: u64) -> TickClock {
        let mut clock = TickClock::new(Duration::from_millis(rate_ms));
        clock.last = Instant::now()
            .checked_sub(Duration::from_millis(elapsed_ms))
            .unwrap();
        clock
    }

    #[test]
    fn timeout_is_the_remainder_of_the_period() {
        let clock = backdated(100, 60);
        assert!(clock.timeout() <= Duration::from_millis(40));
        assert!(clock.timeout() > Duration::ZERO);
    }

    #[test]
    fn repeated_polls_never_grow_the_window() {
        // a key event mid-period re-enters the loop; the next timeout
        // must shrink, not restart at the full rate
        let clock = backdated(100, 30);
        let first = clock.timeout();
        let second = clock.timeout();
        assert!(second <= first);
        assert!(first < Duration::from_millis(100));
    }

    #[test]
    fn tick_fires_once_the_deadline_passes() {
        let mut clock = backdated(100, 150);
        assert_eq!(clock.timeout(), Duration::ZERO);
        assert!(clock.due());
        // the next period just started
        assert!(!clock.due());
        assert!(clock.timeout() > Duration::ZERO);
    }

    #[test]
    fn mid_period_clock_is_not_due() {
        let mut clock = backdated(100, 30);
        assert!(!clock.due());
    }
}
