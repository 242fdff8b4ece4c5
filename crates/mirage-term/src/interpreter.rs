//! Command trait, registry, and output types.
//!
//! Commands are pure functions from an argument list (plus the read-only
//! environment) to a `CommandOutput`. Anything that looks like a side effect
//! -- clearing the screen, scheduling a navigation -- is expressed as an
//! output variant the dispatcher acts on, never performed by the handler.

use std::collections::HashMap;

use mirage_platform::Clock;
use mirage_types::error::Result;
use mirage_types::line::LineRole;

use crate::config::TermConfig;

/// Kind of a canned listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Executable,
}

impl EntryKind {
    /// The cosmetic role hosts style this entry with.
    pub fn role(&self) -> LineRole {
        match self {
            Self::Directory => LineRole::Directory,
            Self::File => LineRole::File,
            Self::Executable => LineRole::Executable,
        }
    }

    /// Suffix appended in plain-text renderings (`/` and `*`, as in `ls -F`).
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Directory => "/",
            Self::File => "",
            Self::Executable => "*",
        }
    }
}

/// One entry in a canned directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl ListEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Plain text, appended as one output line.
    Text(String),
    /// Text with an explicit styling role.
    Styled { role: LineRole, text: String },
    /// A directory listing; hosts may style entries individually, the
    /// dispatcher renders it as one line.
    Listing(Vec<ListEntry>),
    /// Command produced no visible output.
    None,
    /// Signal to clear the scrollback.
    Clear,
    /// Signal to schedule a navigation after a fixed delay. The farewell is
    /// appended as a warning line; the navigation itself is recorded for the
    /// host, never performed.
    Navigate {
        url: String,
        delay_ms: u64,
        farewell: String,
    },
}

/// Shared read-only environment passed to every command.
pub struct Environment<'a> {
    /// Host wall clock, if the host provides one.
    pub clock: Option<&'a dyn Clock>,
    /// Submitted lines so far, oldest first.
    pub history: &'a [String],
    /// Sorted (name, description) pairs of every registered command.
    pub commands: &'a [(String, String)],
    /// The deployment configuration.
    pub config: &'a TermConfig,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "cat <file>").
    fn usage(&self) -> &str;

    /// Execute the command with the given arguments and environment.
    ///
    /// Handlers are total: malformed input is reported through `Err` with a
    /// presentational message, never by panicking.
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput>;
}

/// Registry of available commands.
///
/// Built once at session construction and immutable afterwards; lookup is
/// exact-match and case-sensitive.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    /// Exact-match, case-sensitive lookup.
    pub fn lookup(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// Return a sorted list of (name, description) pairs.
    pub fn list_commands(&self) -> Vec<(String, String)> {
        let mut cmds: Vec<(String, String)> = self
            .commands
            .values()
            .map(|c| (c.name().to_string(), c.description().to_string()))
            .collect();
        cmds.sort();
        cmds
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a canned listing as a single `ls -F`-style line.
pub(crate) fn render_listing(entries: &[ListEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{}{}", e.name, e.kind.suffix()))
        .collect::<Vec<_>>()
        .join("  ")
}
