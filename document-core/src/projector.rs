//! State projector: agent snapshot → optional document plus diagnostics.

use serde_json::Value;
use shared_types::{AgentState, Document};

use crate::representation;

/// Keys the agent may use for its document field, in lookup order.
pub const DOCUMENT_KEYS: [&str; 2] = ["document", "blog_post"];
/// Keys that may carry the representation string inside the document field.
pub const REPRESENTATION_KEYS: [&str; 2] = ["representation", "repr"];
/// Keys that may carry the name of the node the agent is executing.
pub const ACTIVE_NODE_KEYS: [&str; 2] = ["active_node", "node_name"];

/// What the snapshot holds where a document is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSlot<'a> {
    Absent,
    Malformed(&'static str),
    Representation(&'a str),
}

/// Result of projecting one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    pub document: Option<Document>,
    pub status: Option<String>,
    pub active_node: Option<String>,
    /// Set by the host from the live editor mode
    pub editing: bool,
}

impl Projection {
    pub fn with_editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }
}

/// Find the representation string, validating each level of the shape.
pub fn locate_document(state: &AgentState) -> DocumentSlot<'_> {
    let field = match state.first_field(&DOCUMENT_KEYS) {
        None | Some(Value::Null) => return DocumentSlot::Absent,
        Some(field) => field,
    };

    let Some(object) = field.as_object() else {
        return DocumentSlot::Malformed("document field is not an object");
    };

    match REPRESENTATION_KEYS.iter().find_map(|key| object.get(*key)) {
        Some(Value::String(repr)) => DocumentSlot::Representation(repr),
        Some(_) => DocumentSlot::Malformed("representation is not a string"),
        None => DocumentSlot::Malformed("document field has no representation"),
    }
}

pub fn project(state: &AgentState) -> Projection {
    let document = match locate_document(state) {
        DocumentSlot::Representation(repr) => representation::parse(repr),
        DocumentSlot::Malformed(reason) => {
            tracing::debug!(reason, "Agent state carries no usable document");
            None
        }
        DocumentSlot::Absent => None,
    };

    Projection {
        document,
        status: state.str_field("status").map(ToString::to_string),
        active_node: ACTIVE_NODE_KEYS
            .iter()
            .find_map(|key| state.str_field(key))
            .map(ToString::to_string),
        editing: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state(value: Value) -> AgentState {
        AgentState::new(value)
    }

    #[test]
    fn projects_agent_blog_post() {
        let snapshot = state(json!({
            "messages": [],
            "blog_post": {
                "lc": 1,
                "type": "constructor",
                "id": ["schema", "BlogPost"],
                "repr": "BlogPost(title='Intro', content=\"Line1\\nLine2\")"
            },
            "route": null
        }));

        let projection = project(&snapshot);
        assert_eq!(projection.document, Some(Document::new("Intro", "Line1\nLine2")));
        assert!(!projection.editing);
    }

    #[test]
    fn projects_document_key_with_representation() {
        let snapshot = state(json!({
            "document": {
                "lineage-count": 3,
                "type-tag": "constructor",
                "id-path": ["a", "b"],
                "representation": "Doc(title='T', content=\"C\")"
            }
        }));
        assert_eq!(project(&snapshot).document, Some(Document::new("T", "C")));
    }

    #[test]
    fn absent_document_is_none() {
        assert_eq!(locate_document(&state(json!({}))), DocumentSlot::Absent);
        assert_eq!(locate_document(&state(json!({"blog_post": null}))), DocumentSlot::Absent);
        assert_eq!(locate_document(&state(json!("not an object"))), DocumentSlot::Absent);
        assert_eq!(project(&state(json!({}))).document, None);
    }

    #[test]
    fn non_string_representation_is_none() {
        let snapshot = state(json!({"blog_post": {"repr": 42}}));
        assert_eq!(
            locate_document(&snapshot),
            DocumentSlot::Malformed("representation is not a string")
        );
        assert_eq!(project(&snapshot).document, None);

        let snapshot = state(json!({"blog_post": "BlogPost(title='a', content=\"b\")"}));
        assert!(matches!(locate_document(&snapshot), DocumentSlot::Malformed(_)));
        assert_eq!(project(&snapshot).document, None);
    }

    #[test]
    fn unparseable_representation_is_none() {
        let snapshot = state(json!({"blog_post": {"repr": "garbage"}}));
        let projection = project(&snapshot);
        assert_eq!(projection.document, None);
        assert!(!projection.has_document());
    }

    #[test]
    fn passes_diagnostics_through() {
        let snapshot = state(json!({
            "status": "running",
            "node_name": "generate_blog_node",
            "blog_post": null
        }));
        let projection = project(&snapshot).with_editing(true);
        assert_eq!(projection.status.as_deref(), Some("running"));
        assert_eq!(projection.active_node.as_deref(), Some("generate_blog_node"));
        assert!(projection.editing);
    }

    #[test]
    fn ignores_non_string_diagnostics() {
        let snapshot = state(json!({"status": {"code": 1}, "active_node": 7, "node_name": "chat"}));
        let projection = project(&snapshot);
        assert_eq!(projection.status, None);
        assert_eq!(projection.active_node.as_deref(), Some("chat"));
    }
}
