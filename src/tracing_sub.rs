use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::{env, path::PathBuf};

use tracing::Level;

/// Environment variable naming the log file. Unset means diagnostics are
/// discarded; the terminal is in raw mode, so writing them to stderr would
/// scramble the screen.
pub const LOG_ENV: &str = "LIGHTSWITCH_LOG";

pub struct DelegatingWriter {
    inner: DelegatingInner,
}

enum DelegatingInner {
    File(File),
    Sink(io::Sink),
}

impl DelegatingWriter {
    fn new() -> Self {
        let file = env::var_os(LOG_ENV)
            .map(PathBuf::from)
            .and_then(|path| OpenOptions::new().create(true).append(true).open(path).ok());
        match file {
            Some(file) => DelegatingWriter {
                inner: DelegatingInner::File(file),
            },
            None => DelegatingWriter {
                inner: DelegatingInner::Sink(io::sink()),
            },
        }
    }
}

impl Write for DelegatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.inner {
            DelegatingInner::File(f) => f.write(buf),
            DelegatingInner::Sink(s) => s.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.inner {
            DelegatingInner::File(f) => f.flush(),
            DelegatingInner::Sink(s) => s.flush(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SubscriberMakeWriter;

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SubscriberMakeWriter {
    type Writer = DelegatingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        DelegatingWriter::new()
    }
}

/// Initialize the tracing subscriber. Safe to call multiple times; only the
/// first call installs the global subscriber.
pub fn init_default() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(SubscriberMakeWriter)
        .with_target(false)
        .with_thread_names(false)
        .with_ansi(false)
        .try_init();
}
