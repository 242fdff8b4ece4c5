//! Scrollback line types.
//!
//! A scrollback is an append-only sequence of role-tagged text lines. Roles
//! are styling hints for the host; they carry no behavioral meaning to the
//! interpreter itself.

use serde::{Deserialize, Serialize};

/// Styling role attached to a scrollback line.
///
/// `Command` tags the echoed input line, `Output` a plain result, `Error` a
/// failure message. The remaining roles are cosmetic refinements a handler
/// may choose for its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineRole {
    Prompt,
    Command,
    Output,
    Success,
    Error,
    Warning,
    Info,
    Directory,
    File,
    Executable,
}

impl LineRole {
    /// The CSS-style class name hosts use for this role.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Prompt => "prompt",
            Self::Command => "command",
            Self::Output => "output",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Directory => "directory",
            Self::File => "file",
            Self::Executable => "executable",
        }
    }
}

/// One rendered line in the scrollback.
///
/// `text` may contain embedded newlines; a multi-line help listing is still a
/// single appended line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollbackLine {
    pub role: LineRole,
    pub text: String,
}

impl ScrollbackLine {
    pub fn new(role: LineRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names_match_roles() {
        assert_eq!(LineRole::Command.class_name(), "command");
        assert_eq!(LineRole::Error.class_name(), "error");
        assert_eq!(LineRole::Directory.class_name(), "directory");
        assert_eq!(LineRole::Executable.class_name(), "executable");
    }

    #[test]
    fn all_class_names_distinct() {
        use std::collections::HashSet;
        let roles = [
            LineRole::Prompt,
            LineRole::Command,
            LineRole::Output,
            LineRole::Success,
            LineRole::Error,
            LineRole::Warning,
            LineRole::Info,
            LineRole::Directory,
            LineRole::File,
            LineRole::Executable,
        ];
        let names: HashSet<&str> = roles.iter().map(|r| r.class_name()).collect();
        assert_eq!(names.len(), roles.len());
    }

    #[test]
    fn line_construction() {
        let l = ScrollbackLine::new(LineRole::Output, "hello");
        assert_eq!(l.role, LineRole::Output);
        assert_eq!(l.text, "hello");
    }

    #[test]
    fn line_allows_embedded_newlines() {
        let l = ScrollbackLine::new(LineRole::Info, "a\nb\nc");
        assert_eq!(l.text.lines().count(), 3);
    }

    #[test]
    fn role_serde_uses_lowercase() {
        let json = serde_json::to_string(&LineRole::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }

    #[test]
    fn line_serde_roundtrip() {
        let l = ScrollbackLine::new(LineRole::Success, "done");
        let json = serde_json::to_string(&l).unwrap();
        let l2: ScrollbackLine = serde_json::from_str(&json).unwrap();
        assert_eq!(l, l2);
    }
}
