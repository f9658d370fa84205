//! Console logging for layout diagnostics.
//!
//! The layout crates only emit `tracing` events: `debug` when a stack sizes
//! itself from its children, `trace` for every chained pair and updated
//! constant, and `warn` when content overflows its stack. Nothing is printed
//! until a subscriber is installed, which [`install_tracing`] does for
//! applications and tests that want to see them.

use std::io::{self, Write};
use std::sync::Once;

use tracing_subscriber::fmt::writer::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const TRACING_PREFIX: &str = "[anchorage]";
const DEFAULT_FILTER: &str = "info";

static TRACING_INSTALLED: Once = Once::new();

/// Install a stderr subscriber for layout events (idempotent).
///
/// The filter is read from `RUST_LOG` and falls back to `info`, so stack
/// overflow warnings show by default while per-constraint tracing needs
/// `RUST_LOG=anchorage_layout=trace`. If another subscriber is already the
/// global default, it is left in place.
pub fn install_tracing() {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let console = fmt::layer()
            .with_writer(PrefixedWriter)
            .with_target(true)
            .with_ansi(false)
            .with_filter(filter);

        if tracing_subscriber::registry().with(console).try_init().is_err() {
            tracing::debug!("a global subscriber is already installed");
        }
    });
}

/// Whether [`install_tracing`] has run in this process.
#[must_use]
pub fn is_installed() -> bool {
    TRACING_INSTALLED.is_completed()
}

// ============================================================================
// Console Writer
// ============================================================================

#[derive(Clone, Copy, Debug, Default)]
struct PrefixedWriter;

impl<'a> MakeWriter<'a> for PrefixedWriter {
    type Writer = PrefixedWriterInner<io::Stderr>;

    fn make_writer(&'a self) -> Self::Writer {
        PrefixedWriterInner {
            inner: io::stderr(),
            wrote_prefix: false,
        }
    }
}

/// Writes [`TRACING_PREFIX`] once in front of each formatted event.
#[derive(Debug)]
struct PrefixedWriterInner<W> {
    inner: W,
    wrote_prefix: bool,
}

impl<W: Write> Write for PrefixedWriterInner<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.wrote_prefix {
            self.inner.write_all(TRACING_PREFIX.as_bytes())?;
            self.inner.write_all(b" ")?;
            self.wrote_prefix = true;
        }
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_written_once_per_event() {
        let mut writer = PrefixedWriterInner {
            inner: Vec::new(),
            wrote_prefix: false,
        };
        writer.write_all(b"WARN ").unwrap();
        writer.write_all(b"overflow\n").unwrap();

        assert_eq!(writer.inner, b"[anchorage] WARN overflow\n");
    }

    #[test]
    fn install_is_idempotent() {
        install_tracing();
        install_tracing();
        assert!(is_installed());
    }
}
