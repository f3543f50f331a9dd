use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

/// One discrete unit of content within a message.
///
/// Stored as `<root>/part/<messageID>/<partID>.json`. Parts under one message
/// keep storage order; they carry no reliable independent ordering key.
#[derive(Debug, Clone)]
pub struct Part {
    pub id: String,
    pub payload: PartPayload,
}

/// Closed tag set for part payloads, plus an `Unknown` fallback that retains
/// the raw record so future tags still render instead of failing.
///
/// The payload shape is determined solely by the `type` tag; consumers must
/// never inspect fields outside the matched variant.
#[derive(Debug, Clone)]
pub enum PartPayload {
    Text(TextPart),
    Tool(ToolPart),
    Reasoning(ReasoningPart),
    File(FilePart),
    StepStart(StepStartPart),
    StepFinish(StepFinishPart),
    Patch(PatchPart),
    Compaction(CompactionPart),
    Retry(RetryPart),
    Agent(AgentPart),
    Subtask(SubtaskPart),
    Snapshot(SnapshotPart),
    Unknown { tag: String, raw: Value },
}

impl PartPayload {
    /// Wire tag for this payload
    pub fn tag(&self) -> &str {
        match self {
            PartPayload::Text(_) => "text",
            PartPayload::Tool(_) => "tool",
            PartPayload::Reasoning(_) => "reasoning",
            PartPayload::File(_) => "file",
            PartPayload::StepStart(_) => "step-start",
            PartPayload::StepFinish(_) => "step-finish",
            PartPayload::Patch(_) => "patch",
            PartPayload::Compaction(_) => "compaction",
            PartPayload::Retry(_) => "retry",
            PartPayload::Agent(_) => "agent",
            PartPayload::Subtask(_) => "subtask",
            PartPayload::Snapshot(_) => "snapshot",
            PartPayload::Unknown { tag, .. } => tag,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextPart {
    #[serde(default)]
    pub text: String,
    /// Suppresses display in every mode
    #[serde(default)]
    pub ignored: bool,
    #[serde(default)]
    pub synthetic: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolPart {
    pub tool: String,
    #[serde(rename = "callID", default)]
    pub call_id: Option<String>,
    #[serde(default)]
    pub state: Option<ToolState>,
}

/// Execution state of a tool call.
///
/// The stored record also carries an `output` field which may be arbitrarily
/// large; it is deliberately not modeled here, so parsing drops it and no
/// rendering path can ever surface it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolState {
    #[serde(default)]
    pub status: ToolStatus,
    #[serde(default)]
    pub input: Map<String, Value>,
    #[serde(default)]
    pub metadata: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ToolState {
    /// First scalar value in the input map, in insertion order
    pub fn first_input_value(&self) -> Option<String> {
        self.input.values().find_map(|v| match v {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    #[default]
    Pending,
    Running,
    Completed,
    Error,
    #[serde(other)]
    Unknown,
}

impl ToolStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolStatus::Pending => "pending",
            ToolStatus::Running => "running",
            ToolStatus::Completed => "completed",
            ToolStatus::Error => "error",
            ToolStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReasoningPart {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilePart {
    #[serde(default)]
    pub mime: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StepStartPart {
    #[serde(default)]
    pub snapshot: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StepFinishPart {
    #[serde(default)]
    pub reason: Option<String>,
    /// Monetary cost in dollars
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub tokens: Option<TokenUsage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub input: u64,
    #[serde(default)]
    pub output: u64,
    #[serde(default)]
    pub reasoning: u64,
    #[serde(default)]
    pub cache: Option<CacheUsage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheUsage {
    #[serde(default)]
    pub read: u64,
    #[serde(default)]
    pub write: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchPart {
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompactionPart {
    #[serde(default)]
    pub auto: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RetryPart {
    #[serde(default)]
    pub attempt: u32,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentPart {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubtaskPart {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotPart {
    /// Opaque runner state, never rendered
    #[serde(default)]
    pub snapshot: Option<Value>,
}

// Decoding is two-stage: raw Value first, then tag dispatch. A derived
// internally-tagged enum would reject unknown tags outright, but the renderer
// needs the raw record for its fallback arm.
impl<'de> Deserialize<'de> for Part {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        let id = value
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        fn typed<'a, T, D>(value: &Value) -> Result<T, D::Error>
        where
            T: serde::de::DeserializeOwned,
            D: Deserializer<'a>,
        {
            serde_json::from_value(value.clone()).map_err(de::Error::custom)
        }

        let payload = match tag.as_str() {
            "text" => PartPayload::Text(typed::<_, D>(&value)?),
            "tool" => PartPayload::Tool(typed::<_, D>(&value)?),
            "reasoning" => PartPayload::Reasoning(typed::<_, D>(&value)?),
            "file" => PartPayload::File(typed::<_, D>(&value)?),
            "step-start" => PartPayload::StepStart(typed::<_, D>(&value)?),
            "step-finish" => PartPayload::StepFinish(typed::<_, D>(&value)?),
            "patch" => PartPayload::Patch(typed::<_, D>(&value)?),
            "compaction" => PartPayload::Compaction(typed::<_, D>(&value)?),
            "retry" => PartPayload::Retry(typed::<_, D>(&value)?),
            "agent" => PartPayload::Agent(typed::<_, D>(&value)?),
            "subtask" => PartPayload::Subtask(typed::<_, D>(&value)?),
            "snapshot" => PartPayload::Snapshot(typed::<_, D>(&value)?),
            _ => PartPayload::Unknown { tag, raw: value },
        };

        Ok(Part { id, payload })
    }
}
