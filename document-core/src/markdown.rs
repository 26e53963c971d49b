//! Markdown rendering pipeline
//!
//! Renders document bodies (committed or draft) to HTML for the viewer and
//! the editor preview. Uses pulldown-cmark for CommonMark parsing.
//!
//! ## Features
//! - Code blocks with `language-*` classes for the syntax highlighter
//! - Tables, strikethrough and task lists (GitHub-flavored)
//! - Raw HTML escaped to text when sanitizing, and `javascript:`,
//!   `vbscript:` and `data:` link targets replaced with `#`
//! - Input size limit so one oversized body fails its own subtree only

use once_cell::sync::Lazy;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use regex::Regex;

/// Error type for markdown operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error("Markdown input is {len} bytes, limit is {limit}")]
    TooLarge { len: usize, limit: usize },
}

/// Result type for markdown operations
pub type Result<T> = std::result::Result<T, MarkdownError>;

/// Default cap on markdown input size (1 MiB)
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Configuration for markdown rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownConfig {
    /// Enable GitHub-flavored markdown (tables, strikethrough, task lists)
    pub gfm: bool,
    /// Enable HTML sanitization
    pub sanitize_html: bool,
    /// Tag fenced code blocks with `language-*` classes
    pub code_syntax_highlighting: bool,
    /// Inputs longer than this fail with [`MarkdownError::TooLarge`]
    pub max_input_bytes: usize,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self::secure()
    }
}

impl MarkdownConfig {
    /// Create a new config with security-focused defaults
    pub fn secure() -> Self {
        Self {
            gfm: true,
            sanitize_html: true,
            code_syntax_highlighting: true,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }

    /// Create a config for testing (raw HTML kept)
    pub fn test() -> Self {
        Self {
            sanitize_html: false,
            ..Self::secure()
        }
    }
}

/// Parsed markdown result containing structured content
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMarkdown {
    /// Rendered HTML
    pub html: String,
    /// Fenced code blocks found (language, content)
    pub code_blocks: Vec<(Option<String>, String)>,
    /// Whether the rendered HTML contained potentially unsafe markup
    pub has_unsafe_html: bool,
}

/// Parse markdown and render to HTML
pub fn render_markdown(input: &str, config: &MarkdownConfig) -> Result<ParsedMarkdown> {
    if input.len() > config.max_input_bytes {
        return Err(MarkdownError::TooLarge {
            len: input.len(),
            limit: config.max_input_bytes,
        });
    }

    let options = build_options(config);
    let mut code_blocks = Vec::new();
    let mut open_block: Option<(Option<String>, String)> = None;
    let mut has_unsafe_html = false;

    let events = Parser::new_ext(input, options).map(|event| match event {
        Event::Start(Tag::CodeBlock(kind)) => {
            let language = match &kind {
                CodeBlockKind::Fenced(info) => info
                    .split_whitespace()
                    .next()
                    .map(ToString::to_string),
                CodeBlockKind::Indented => None,
            };
            open_block = Some((language, String::new()));
            if config.code_syntax_highlighting {
                Event::Start(Tag::CodeBlock(kind))
            } else {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Indented))
            }
        }
        Event::Text(text) => {
            if let Some((_, body)) = open_block.as_mut() {
                body.push_str(&text);
            }
            Event::Text(text)
        }
        Event::End(TagEnd::CodeBlock) => {
            if let Some((language, body)) = open_block.take() {
                code_blocks.push((language, body.trim_end().to_string()));
            }
            Event::End(TagEnd::CodeBlock)
        }
        // Raw HTML is shown as text when sanitizing, so no attribute or
        // tag spelling can reach the DOM.
        Event::Html(raw) => {
            has_unsafe_html |= contains_unsafe_html(&raw);
            if config.sanitize_html {
                Event::Text(raw)
            } else {
                Event::Html(raw)
            }
        }
        Event::InlineHtml(raw) => {
            has_unsafe_html |= contains_unsafe_html(&raw);
            if config.sanitize_html {
                Event::Text(raw)
            } else {
                Event::InlineHtml(raw)
            }
        }
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => {
            let dest_url = neutralize_url(dest_url, config, &mut has_unsafe_html);
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            })
        }
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => {
            let dest_url = neutralize_url(dest_url, config, &mut has_unsafe_html);
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            })
        }
        other => other,
    });

    let mut html_output = String::with_capacity(input.len() * 2);
    html::push_html(&mut html_output, events);

    Ok(ParsedMarkdown {
        html: html_output,
        code_blocks,
        has_unsafe_html,
    })
}

/// Render markdown to HTML string, falling back to escaped source on error
pub fn render_to_html(input: &str, config: &MarkdownConfig) -> String {
    match render_markdown(input, config) {
        Ok(parsed) => parsed.html,
        Err(err) => {
            tracing::warn!(error = %err, "Markdown render failed, showing escaped source");
            format!("<pre>{}</pre>", escape_html(input))
        }
    }
}

fn build_options(config: &MarkdownConfig) -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    if config.gfm {
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
    }

    options
}

/// URL schemes that execute or embed content instead of navigating
const BLOCKED_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Browsers ignore whitespace and control characters inside a scheme, so
/// they are dropped before comparing.
fn is_script_url(url: &str) -> bool {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    BLOCKED_SCHEMES
        .iter()
        .any(|scheme| normalized.starts_with(scheme))
}

fn neutralize_url<'a>(
    url: CowStr<'a>,
    config: &MarkdownConfig,
    has_unsafe_html: &mut bool,
) -> CowStr<'a> {
    if !is_script_url(&url) {
        return url;
    }
    *has_unsafe_html = true;
    if config.sanitize_html {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

static UNSAFE_MARKUP: Lazy<std::result::Result<Regex, regex::Error>> = Lazy::new(|| {
    Regex::new(
        r"(?i)<\s*/?\s*(script|iframe|object|embed|style|link|meta|base|form)\b|\bon[a-z]+\s*=|(javascript|vbscript)\s*:",
    )
});

/// Whether raw HTML from the input could run script or load content.
fn contains_unsafe_html(raw: &str) -> bool {
    match &*UNSAFE_MARKUP {
        Ok(pattern) => pattern.is_match(raw),
        Err(_) => true,
    }
}

/// Escape HTML special characters
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Extract plain text from markdown (formatting removed)
pub fn extract_plain_text(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, build_options(&MarkdownConfig::default()));

    let mut text = String::new();
    for event in parser {
        match event {
            Event::Text(content) | Event::Code(content) => text.push_str(&content),
            Event::SoftBreak | Event::HardBreak => text.push('\n'),
            Event::End(TagEnd::Paragraph) | Event::End(TagEnd::Heading(_)) => text.push('\n'),
            _ => {}
        }
    }

    text
}

/// Word count of the rendered text
pub fn word_count(markdown: &str) -> usize {
    extract_plain_text(markdown).split_whitespace().count()
}
