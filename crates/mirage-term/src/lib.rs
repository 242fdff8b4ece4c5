//! Command interpreter for MIRAGE_TERM.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name according to the deployment
//! profile. A `TerminalSession` owns the registry together with the history,
//! recall cursor, scrollback, and line buffer, consumes key-chord events, and
//! dispatches submitted lines.

mod commands;
pub mod config;
mod interpreter;
mod session;

/// Register the command set selected by a profile into a registry.
pub use commands::register_profile;
/// Deployment profile selecting which commands are registered.
pub use config::CommandProfile;
/// Per-deployment terminal configuration.
pub use config::TermConfig;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (text, listing, signals).
pub use interpreter::CommandOutput;
/// Registry of available commands.
pub use interpreter::CommandRegistry;
/// Shared read-only environment passed to every command.
pub use interpreter::Environment;
/// Kind of a canned listing entry.
pub use interpreter::EntryKind;
/// One entry in a canned directory listing.
pub use interpreter::ListEntry;
/// Whether a key chord was consumed or left to the host.
pub use session::KeyDisposition;
/// Host capabilities handed to the session per event.
pub use session::Services;
/// One terminal instance: registry, history, cursor, scrollback, input.
pub use session::TerminalSession;
