//! Host-agnostic key-chord event types.
//!
//! Every host maps its native keyboard input to these types. The interpreter
//! never sees raw host events.

use serde::{Deserialize, Serialize};

/// A key identifier, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Submit the current line.
    Enter,
    /// Recall the previous history entry.
    ArrowUp,
    /// Recall the next history entry (or leave recall mode).
    ArrowDown,
    /// Delete-left in the line buffer.
    Backspace,
    /// A printable character.
    Char(char),
    /// Any key the interpreter has no use for.
    Other,
}

/// A key press together with its modifier flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyChord {
    pub key: Key,
    /// Whether Ctrl was held when the key was pressed.
    pub ctrl: bool,
}

impl KeyChord {
    /// A chord with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self { key, ctrl: false }
    }

    /// A chord with Ctrl held.
    pub fn ctrl(key: Key) -> Self {
        Self { key, ctrl: true }
    }
}
