use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

pub enum ControlFlow {
    Continue,
    Quit,
}

/// The synchronous pump that drives the whole program.
///
/// One iteration does two things:
/// 1. Calls the handler with `None`, the per-iteration tick the renderer
///    redraws on, whether or not state changed.
/// 2. Polls the input driver and, when events are ready, feeds them to the
///    handler as `Some(event)`, draining the queue so key bursts don't lag
///    behind the redraw cadence.
///
/// A read failure is passed through as `None`: the loop advances without
/// mutating anything, the same as a poll timeout with no key waiting.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(None)? {
                break;
            }

            if self.driver.poll(self.poll_interval)? {
                loop {
                    let event = self.driver.read().ok();
                    if let ControlFlow::Quit = handler(event)? {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::ZERO)? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::collections::VecDeque;

    struct Scripted {
        queue: VecDeque<io::Result<Event>>,
    }

    impl Scripted {
        fn new(events: Vec<io::Result<Event>>) -> Self {
            Self {
                queue: events.into(),
            }
        }
    }

    impl InputDriver for Scripted {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            Ok(!self.queue.is_empty())
        }

        fn read(&mut self) -> io::Result<Event> {
            self.queue
                .pop_front()
                .unwrap_or_else(|| Err(io::Error::other("empty script")))
        }
    }

    fn key_event(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn delivers_events_and_ticks() {
        let driver = Scripted::new(vec![Ok(key_event('1')), Ok(key_event('q'))]);
        let mut seen = Vec::new();
        let mut pump = EventLoop::new(driver, Duration::ZERO);
        pump
            .run(|event| {
                match event {
                    None => {
                        seen.push('.');
                        Ok(ControlFlow::Continue)
                    }
                    Some(Event::Key(k)) => {
                        if let KeyCode::Char(c) = k.code {
                            seen.push(c);
                        }
                        Ok(if matches!(k.code, KeyCode::Char('q')) {
                            ControlFlow::Quit
                        } else {
                            ControlFlow::Continue
                        })
                    }
                    Some(_) => Ok(ControlFlow::Continue),
                }
            })
            .unwrap();
        // one tick, then the drained burst of both keys
        assert_eq!(seen, vec!['.', '1', 'q']);
    }

    #[test]
    fn read_failure_is_a_neutral_event() {
        let driver = Scripted::new(vec![
            Err(io::Error::other("tty gone")),
            Ok(key_event('q')),
        ]);
        let mut neutral = 0;
        let mut pump = EventLoop::new(driver, Duration::ZERO);
        pump
            .run(|event| match event {
                None => {
                    neutral += 1;
                    Ok(ControlFlow::Continue)
                }
                Some(_) => Ok(ControlFlow::Quit),
            })
            .unwrap();
        // the failed read surfaced as an extra None alongside the ticks
        assert!(neutral >= 2);
    }
}
