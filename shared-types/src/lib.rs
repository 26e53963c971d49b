//! Shared types between the document core and the UI
//!
//! These types are used by both:
//! - `document-core` (parser, projector, editor state machine)
//! - Dioxus components (WASM)
//!
//! Serializable with serde for JSON snapshots of the agent state.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

// ============================================================================
// Document
// ============================================================================

/// The authored artifact: a heading plus a markdown body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[ts(export, export_to = "../../document-ui/bindings/generated.ts")]
pub struct Document {
    pub title: String,
    /// Markdown source, may be empty
    pub content: String,
}

impl Document {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// True when the title has at least one non-whitespace character.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

// ============================================================================
// Agent State
// ============================================================================

/// Message exchanged with the agent, as mirrored in its state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../document-ui/bindings/generated.ts")]
pub struct AgentMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub id: String,
}

/// Web search results the agent attached to its state
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../document-ui/bindings/generated.ts")]
pub struct SearchResults {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub results: Vec<String>,
}

/// Opaque snapshot of the external agent state.
///
/// The agent is loosely typed, so the snapshot is kept as raw JSON and every
/// accessor validates the field it reads instead of trusting the shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct AgentState(pub Value);

impl AgentState {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse a snapshot from JSON text.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw).map(Self)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Top-level field lookup; `None` when the snapshot is not an object.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.as_object().and_then(|obj| obj.get(key))
    }

    /// First present field among `keys`.
    pub fn first_field(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter().find_map(|key| self.field(key))
    }

    /// Top-level field, only if it is a string.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.field(key).and_then(Value::as_str)
    }

    /// Messages that decode cleanly; malformed entries are skipped.
    pub fn messages(&self) -> Vec<AgentMessage> {
        self.field("messages")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| serde_json::from_value(item.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn route(&self) -> Option<&str> {
        self.str_field("route")
    }

    pub fn search_results(&self) -> Option<SearchResults> {
        self.field("search_results")
            .filter(|value| value.is_object())
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Indented JSON dump for diagnostic display.
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

impl From<Value> for AgentState {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

// ============================================================================
// Tests
// ============================================================================
