//! Application telemetry events and sinks.
//!
//! issuedeck keeps telemetry local: events are either dropped or written to
//! stderr as JSON lines for debugging request timing and response ordering.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by the repository view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// The joined repository and first-page requests both resolved.
    InitialLoadCompleted {
        /// Wall-clock time for the joined requests.
        latency_ms: u64,
        /// Number of issues on the first page.
        issue_count: usize,
    },
    /// An issue refetch resolved.
    IssuesFetched {
        /// Sequence number of the request.
        request_id: u64,
        /// State filter the request was made with.
        filter: String,
        /// Page the request was made for.
        page: u32,
        /// Number of issues returned.
        issue_count: usize,
        /// Wall-clock time for the request.
        latency_ms: u64,
    },
    /// A refetch resolved after a newer one was issued and was dropped.
    StaleResponseDiscarded {
        /// Sequence number of the discarded request.
        request_id: u64,
        /// Sequence number of the newest issued request.
        latest_request_id: u64,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Sinks for asserting on emitted telemetry in tests.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns and clears the recorded events.
        #[must_use]
        pub fn take(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|mut events| events.drain(..).collect())
                .unwrap_or_default()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }
    }
}
