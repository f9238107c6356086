
use sbm_core::{ApplicationMessage, Encoding};

use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};
use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};

// =========================================================================
// Test Messages
// =========================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct TestMessage {
    pub queue: String,
    pub contents: Option<String>,
    pub sequence_id: u64,
    #[serde(skip)]
    pub legacy: bool,
}

impl TestMessage {
    pub(crate) fn new(contents: &str) -> Self {
        Self {
            queue: String::from("queue"),
            contents: Some(contents.to_string()),
            sequence_id: 1,
            legacy: false,
        }
    }

    pub(crate) fn legacy(contents: &str) -> Self {
        Self {
            legacy: true,
            ..Self::new(contents)
        }
    }
}

impl ApplicationMessage for TestMessage {
    fn queue(&self) -> &str {
        &self.queue
    }

    fn encoding(&self) -> Encoding {
        Encoding::from_legacy_flag(self.legacy)
    }
}

/// Web convention view of [`TestMessage`]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StandardView {
    pub queue: String,
    pub contents: Option<String>,
    pub sequence_id: u64,
}

/// Legacy convention view of [`TestMessage`]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct LegacyView {
    pub queue: String,
    pub contents: Option<String>,
    pub sequence_id: u64,
}

/// Serializes to `null`
#[derive(Serialize)]
pub(crate) struct EmptyMessage;

impl ApplicationMessage for EmptyMessage {
    fn queue(&self) -> &str {
        "queue"
    }
}

/// Serializer always reports an error
pub(crate) struct FailingMessage;

impl Serialize for FailingMessage {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(S::Error::custom("refusing to serialize"))
    }
}

impl ApplicationMessage for FailingMessage {
    fn queue(&self) -> &str {
        "queue"
    }
}

/// Serializer panics
pub(crate) struct PanickingMessage;

impl Serialize for PanickingMessage {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        panic!("serializer exploded")
    }
}

impl ApplicationMessage for PanickingMessage {
    fn queue(&self) -> &str {
        "queue"
    }
}

// =========================================================================
// Log Capture
// =========================================================================

#[derive(Debug, Clone)]
pub(crate) struct CapturedRecord {
    pub level: Level,
    pub target: String,
    pub message: String,
}

pub(crate) struct CaptureLogger {
    records: Mutex<Vec<CapturedRecord>>,
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

static INIT: Once = Once::new();

impl CaptureLogger {
    /// Records mentioning `needle`. Tests use unique discriminators so records
    /// from tests running in parallel do not interfere.
    pub(crate) fn records_mentioning(&self, needle: &str) -> Vec<CapturedRecord> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|record| record.message.contains(needle))
            .cloned()
            .collect()
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let captured = CapturedRecord {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };

        if let Ok(mut records) = self.records.lock() {
            records.push(captured);
        }
    }

    fn flush(&self) {}
}

/// Install the capturing logger for this test binary
pub(crate) fn capture_logs() -> &'static CaptureLogger {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    &LOGGER
}
