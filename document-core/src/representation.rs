//! Representation parser
//!
//! The agent mirrors its document as a constructor-style text dump such as
//! `BlogPost(title='Intro', content="Line1\nLine2")`. This module recovers a
//! [`Document`] from that dump on a best-effort basis. Nothing else in the
//! crate depends on the grammar, so it can be replaced by a structured
//! payload without touching the editor.
//!
//! Known limitation: a title cannot contain `'` and content cannot contain
//! `"`, because those quotes delimit the values. Such values are cut at the
//! first delimiter rather than rejected.

use once_cell::sync::Lazy;
use regex::Regex;
use shared_types::Document;

const TITLE_PATTERN: &str = r"title='([^']*)'";
const CONTENT_PATTERN: &str = r#"content="([^"]*)""#;

static TITLE_RE: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| Regex::new(TITLE_PATTERN));
static CONTENT_RE: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| Regex::new(CONTENT_PATTERN));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepresentationError {
    #[error("no {0} field in representation")]
    MissingField(&'static str),

    #[error("{field} pattern is unusable: {message}")]
    Pattern {
        field: &'static str,
        message: String,
    },
}

/// Strict decode: tells the caller why no document could be recovered.
pub fn decode(representation: &str) -> Result<Document, RepresentationError> {
    let title = capture(&TITLE_RE, "title", representation)?;
    let content = capture(&CONTENT_RE, "content", representation)?;

    Ok(Document {
        title: title.to_string(),
        content: unescape_newlines(content),
    })
}

/// Best-effort decode. An unparseable representation is an expected state
/// and yields `None`; internal failures are logged and also yield `None`.
pub fn parse(representation: &str) -> Option<Document> {
    match decode(representation) {
        Ok(document) => Some(document),
        Err(RepresentationError::MissingField(field)) => {
            tracing::debug!(field, len = representation.len(), "No document in representation");
            None
        }
        Err(err) => {
            tracing::error!(error = %err, "Error parsing document representation");
            None
        }
    }
}

/// Turn every literal `\n` (backslash, `n`) into a newline.
pub fn unescape_newlines(raw: &str) -> String {
    raw.replace("\\n", "\n")
}

fn capture<'a>(
    pattern: &Lazy<Result<Regex, regex::Error>>,
    field: &'static str,
    haystack: &'a str,
) -> Result<&'a str, RepresentationError> {
    let regex = match &**pattern {
        Ok(regex) => regex,
        Err(err) => {
            return Err(RepresentationError::Pattern {
                field,
                message: err.to_string(),
            })
        }
    };

    regex
        .captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(RepresentationError::MissingField(field))
}
