use std::io::{self, Write};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "playground_app=info";

/// Buffers one formatted event and hands it to the browser console on drop.
struct ConsoleWriter {
    buf: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end();
        if line.is_empty() {
            return;
        }

        let msg = wasm_bindgen::JsValue::from_str(line);
        if line.contains(" ERROR ") {
            web_sys::console::error_1(&msg);
        } else if line.contains(" WARN ") {
            web_sys::console::warn_1(&msg);
        } else {
            web_sys::console::log_1(&msg);
        }
    }
}

#[derive(Clone, Copy)]
struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            buf: Vec::with_capacity(256),
        }
    }
}

fn env_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Route `tracing` events to the browser console.
///
/// Safe to call more than once; later calls are no-ops.
pub(crate) fn init(directive: Option<&str>) {
    // No wall clock on wasm32-unknown-unknown; the console stamps lines itself.
    let subscriber = tracing_subscriber::registry().with(env_filter(directive)).with(
        tracing_subscriber::fmt::layer()
            .with_writer(ConsoleMakeWriter)
            .with_ansi(false)
            .with_target(true)
            .without_time(),
    );

    if subscriber.try_init().is_ok() {
        tracing::debug!(filter = directive.unwrap_or(DEFAULT_FILTER), "tracing initialized");
    }
}
