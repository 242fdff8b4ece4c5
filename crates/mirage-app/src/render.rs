//! ANSI rendering of role-tagged scrollback lines.
//!
//! The role-to-color mapping is this host's styling choice; other hosts map
//! the same roles to CSS classes instead.

use mirage_types::line::{LineRole, ScrollbackLine};

const RESET: &str = "\x1b[0m";

/// ANSI prefix for a role. Empty means unstyled.
pub fn ansi_prefix(role: LineRole) -> &'static str {
    match role {
        LineRole::Prompt => "\x1b[32m",
        LineRole::Command => "\x1b[1m",
        LineRole::Output => "",
        LineRole::Success => "\x1b[32m",
        LineRole::Error => "\x1b[31m",
        LineRole::Warning => "\x1b[33m",
        LineRole::Info => "\x1b[36m",
        LineRole::Directory => "\x1b[34m",
        LineRole::File => "",
        LineRole::Executable => "\x1b[32m",
    }
}

/// Render one scrollback line for a color terminal.
pub fn render_line(line: &ScrollbackLine) -> String {
    let prefix = ansi_prefix(line.role);
    if prefix.is_empty() {
        line.text.clone()
    } else {
        format!("{prefix}{}{RESET}", line.text)
    }
}
