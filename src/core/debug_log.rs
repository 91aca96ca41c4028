//! Debug trace written to the optional sink

use tracing::debug;

use crate::core::config::DebugSink;

const PREFIX: &str = "[MSTrans]\t";

/// Line logger bound to the configured debug sink.
///
/// Every line is also emitted as a `tracing` debug event. Without a sink
/// only the tracing event is produced.
#[derive(Clone, Default)]
pub struct DebugLog {
    sink: Option<DebugSink>,
}

impl DebugLog {
    pub fn new(sink: Option<DebugSink>) -> Self {
        Self { sink }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn log(&self, message: impl AsRef<str>) {
        let message = message.as_ref();
        debug!(target: "mstranslator", "{}", message);

        let Some(sink) = &self.sink else {
            return;
        };
        let stamp = chrono::Local::now().format("%Y/%m/%d %H:%M:%S");
        // A poisoned or failing sink must not affect the call.
        if let Ok(mut writer) = sink.lock() {
            let _ = writeln!(writer, "{}{} {}", PREFIX, stamp, message);
        }
    }
}

impl std::fmt::Debug for DebugLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebugLog")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
