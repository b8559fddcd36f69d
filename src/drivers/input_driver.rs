use crossterm::event::Event;
use std::io;
use std::time::Duration;

pub trait InputDriver {
    /// Wait up to `timeout` for an event to become available.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    /// Read the next event; blocks until one arrives.
    fn read(&mut self) -> io::Result<Event>;
}

impl<T: InputDriver + ?Sized> InputDriver for &mut T {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        (**self).poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        (**self).read()
    }
}
