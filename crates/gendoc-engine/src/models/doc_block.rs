use serde::Serialize;

/// One documented entry of the reference page: a declaration line and the
/// prose that follows it inside a `/*- ... -*/` comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocBlock {
    declaration: String,
    description: String,
}

impl DocBlock {
    /// Build a block from already-trimmed parts.
    ///
    /// Returns `None` when the declaration is empty, so every `DocBlock` in
    /// circulation has something to show in the left-hand column.
    pub fn new(declaration: impl Into<String>, description: impl Into<String>) -> Option<Self> {
        let declaration = declaration.into();
        if declaration.is_empty() {
            return None;
        }

        Some(Self {
            declaration,
            description: description.into(),
        })
    }

    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    /// Remaining comment lines joined by single spaces; may be empty.
    pub fn description(&self) -> &str {
        &self.description
    }
}
