//! UI configuration
//!
//! Resolved once per page load from defaults plus URL query overrides, e.g.
//! `?notice_ms=2000&state_panel=off&max_markdown_bytes=65536`.

use std::sync::OnceLock;

use document_core::MarkdownConfig;
use shared_types::AgentState;

const INITIAL_STATE: &str = include_str!("../assets/initial-state.json");

pub const DEFAULT_NOTICE_DURATION_MS: u32 = 4000;
pub const DEFAULT_NOTICE_CAP: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// How long a notice stays up before it dismisses itself
    pub notice_duration_ms: u32,
    /// Oldest notices are dropped past this many
    pub notice_cap: usize,
    pub show_state_panel: bool,
    pub markdown: MarkdownConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notice_duration_ms: DEFAULT_NOTICE_DURATION_MS,
            notice_cap: DEFAULT_NOTICE_CAP,
            show_state_panel: true,
            markdown: MarkdownConfig::secure(),
        }
    }
}

/// Apply `key=value` overrides from a URL query string. Unknown keys and
/// unparsable values are skipped.
pub fn parse_config_query(query: &str, mut config: UiConfig) -> UiConfig {
    let pairs = query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='));

    for (key, value) in pairs {
        match key {
            "notice_ms" => {
                if let Ok(ms) = value.parse() {
                    config.notice_duration_ms = ms;
                }
            }
            "notice_cap" => {
                if let Ok(cap) = value.parse::<usize>() {
                    config.notice_cap = cap.max(1);
                }
            }
            "state_panel" => {
                if let Some(flag) = parse_flag(value) {
                    config.show_state_panel = flag;
                }
            }
            "max_markdown_bytes" => {
                if let Ok(limit) = value.parse() {
                    config.markdown.max_input_bytes = limit;
                }
            }
            _ => {
                dioxus_logger::tracing::debug!("Ignoring unknown config key: {}", key);
            }
        }
    }
    config
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "1" | "true" | "on" => Some(true),
        "0" | "false" | "off" => Some(false),
        _ => None,
    }
}

fn get_ui_config() -> UiConfig {
    let query = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_config_query(&query, UiConfig::default())
}

static UI_CONFIG: OnceLock<UiConfig> = OnceLock::new();

/// Get the cached UI configuration
pub fn ui_config() -> &'static UiConfig {
    UI_CONFIG.get_or_init(get_ui_config)
}

/// Agent state shown before the agent sends its first snapshot.
pub fn initial_state() -> AgentState {
    match AgentState::from_json(INITIAL_STATE) {
        Ok(state) => state,
        Err(e) => {
            dioxus_logger::tracing::warn!("Bundled initial state is invalid: {}", e);
            AgentState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use document_core::project;

    #[test]
    fn empty_query_keeps_defaults() {
        assert_eq!(parse_config_query("", UiConfig::default()), UiConfig::default());
        assert_eq!(parse_config_query("?", UiConfig::default()), UiConfig::default());
    }

    #[test]
    fn query_overrides_known_keys() {
        let config = parse_config_query(
            "?notice_ms=1500&state_panel=off&max_markdown_bytes=2048&notice_cap=3",
            UiConfig::default(),
        );
        assert_eq!(config.notice_duration_ms, 1500);
        assert!(!config.show_state_panel);
        assert_eq!(config.markdown.max_input_bytes, 2048);
        assert_eq!(config.notice_cap, 3);
        assert!(config.markdown.sanitize_html);
    }

    #[test]
    fn bad_values_are_skipped() {
        let config = parse_config_query(
            "notice_ms=soon&state_panel=maybe&notice_cap=0&theme=dark",
            UiConfig::default(),
        );
        assert_eq!(config.notice_duration_ms, DEFAULT_NOTICE_DURATION_MS);
        assert!(config.show_state_panel);
        assert_eq!(config.notice_cap, 1);
    }

    #[test]
    fn bundled_state_projects_a_document() {
        let projection = project(&initial_state());
        let document = projection.document.expect("bundled state has a document");
        assert_eq!(document.title, "Welcome to the studio");
        assert!(document.content.contains("\n## Editing\n"));
        assert_eq!(projection.active_node.as_deref(), Some("chat_node"));
        assert_eq!(projection.status.as_deref(), Some("idle"));
    }
}
