//! Field metadata for the settings UI
//!
//! All string fields are 'static: categories are compile-time constants.

/// How a setting is edited and serialized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line URL input, submitted as a string
    Url,
    /// Single-line text input, submitted as a string
    Text,
    /// Masked input with reveal/revert affordances; the server reports
    /// a set value as the encrypted sentinel
    Secret,
    /// JSON object edited as raw text, submitted as a parsed structure
    /// or null
    Map,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Text => "text",
            Self::Secret => "secret",
            Self::Map => "map",
        }
    }
}

/// Metadata for one setting within a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMeta {
    /// Setting name as known to the API
    pub name: &'static str,
    /// Stable human-readable label the control is matched by
    pub label: &'static str,
    pub help_text: &'static str,
    pub kind: FieldKind,
    /// Read-only fields are shown on detail screens but excluded from
    /// edit payloads
    pub read_only: bool,
}
