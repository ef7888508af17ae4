//! Logging setup.
//!
//! One global `tracing` subscriber with a reloadable `EnvFilter`, so the
//! deck config can raise or lower verbosity after start-up. On wasm the fmt
//! layer writes to the browser console instead of stdout.

use once_cell::sync::OnceCell;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

pub type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

static RELOAD_HANDLE: OnceCell<ReloadHandle> = OnceCell::new();

/// Install the subscriber once; later calls return the existing handle.
pub fn init_tracing() -> &'static ReloadHandle {
    RELOAD_HANDLE.get_or_init(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let (filter_layer, handle) = reload::Layer::new(env_filter);
        let layer = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        #[cfg(all(target_arch = "wasm32", feature = "web"))]
        let layer = layer
            .without_time()
            .with_ansi(false)
            .with_writer(console::ConsoleWriter::default);

        if tracing_subscriber::registry()
            .with(layer.with_filter(filter_layer))
            .try_init()
            .is_ok()
        {
            info!("Logging initialized; override level with logging.log_level or RUST_LOG");
        }
        handle
    })
}

pub fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod console {
    use std::io;

    /// Buffers one formatted event and flushes it to `console.log`.
    #[derive(Default)]
    pub(super) struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.buffer.is_empty() {
                return Ok(());
            }
            let line = String::from_utf8_lossy(&self.buffer);
            web_sys::console::log_1(&line.trim_end().into());
            self.buffer.clear();
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let _ = io::Write::flush(self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let first = init_tracing() as *const ReloadHandle;
        let second = init_tracing() as *const ReloadHandle;
        assert_eq!(first, second);
        set_log_level(init_tracing(), "debug");
    }
}
