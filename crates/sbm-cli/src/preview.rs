use crate::error::{CliError, CliErrorResult};

use sbm_builder::{SharedMessageBuilder, build_async};
use sbm_config::{Config, LogLevel};
use sbm_core::{ApplicationMessage, BrokerMessage, Encoding, TypeDiscriminator};

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use log::{LevelFilter, info};
use serde::Serialize;
use serde_json::{Map, Value};

/// Input path meaning "read stdin"
pub const STDIN_INPUT: &str = "-";

/// Free-form JSON object sent as an application message.
///
/// The object is a map, so its keys go out exactly as written under either
/// encoding. Only struct fields are respelled by a convention.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewMessage {
    #[serde(skip)]
    queue: String,
    #[serde(skip)]
    encoding: Encoding,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

impl PreviewMessage {
    pub fn new(queue: impl Into<String>, encoding: Encoding, payload: Map<String, Value>) -> Self {
        Self {
            queue: queue.into(),
            encoding,
            payload,
        }
    }

    /// Parse a JSON document. Only objects are accepted.
    pub fn parse(input: &str, queue: &str, encoding: Encoding) -> CliErrorResult<Self> {
        match serde_json::from_str::<Value>(input).map_err(CliError::from_json)? {
            Value::Object(payload) => Ok(Self::new(queue, encoding, payload)),
            other => Err(CliError::input(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

impl ApplicationMessage for PreviewMessage {
    fn queue(&self) -> &str {
        &self.queue
    }

    fn encoding(&self) -> Encoding {
        self.encoding
    }
}

/// What `sbm build` prints on success.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewReport {
    #[serde(rename = "type")]
    pub message_type: String,
    pub queue: String,
    pub size_bytes: usize,
    pub encoding: Encoding,
    pub properties: BTreeMap<String, String>,
    pub body: Value,
}

impl PreviewReport {
    pub fn new(queue: &str, encoding: Encoding, built: &BrokerMessage) -> Self {
        // Bodies are JSON; keep them nested in the report rather than as an escaped string
        let body = serde_json::from_slice(built.body())
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(built.body()).into_owned()));

        Self {
            message_type: built.message_type().unwrap_or_default().to_string(),
            queue: queue.to_string(),
            size_bytes: built.len(),
            encoding,
            properties: built.application_properties().clone(),
            body,
        }
    }
}

/// Build `message` with the shared builder and summarize the result.
pub async fn run_build(
    builder: SharedMessageBuilder,
    message: PreviewMessage,
    discriminator: TypeDiscriminator,
) -> CliErrorResult<PreviewReport> {
    let queue = message.queue.clone();
    let encoding = message.encoding;

    let built = build_async(builder, message, discriminator).await?;

    info!(
        "Built message: type={}, queue={}, size={} bytes, encoding={}",
        built.message_type().unwrap_or_default(),
        queue,
        built.len(),
        encoding
    );

    Ok(PreviewReport::new(&queue, encoding, &built))
}

/// Read the JSON input from a file, or from stdin for [`STDIN_INPUT`].
pub fn read_input(input: &str) -> CliErrorResult<String> {
    if input == STDIN_INPUT {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| CliError::io("<stdin>", e))?;
        return Ok(buffer);
    }

    let path = Path::new(input);
    std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))
}

/// `--verbose` turns on broker payload logging and makes sure debug records
/// are not filtered out by the configured level.
pub fn apply_verbose(config: &mut Config) {
    config.broker.log = true;

    if *config.logging.level < LevelFilter::Debug {
        config.logging.level = LogLevel(LevelFilter::Debug);
    }
}

pub fn render_report(report: &PreviewReport, pretty: bool) -> CliErrorResult<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };

    rendered.map_err(CliError::from_json)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
