//! Terminal session: line buffer, history, recall cursor, scrollback, and
//! the dispatcher.
//!
//! One `TerminalSession` is one terminal instance. Everything that was ever
//! "global" lives here, so independent sessions (and tests) can coexist. All
//! methods run synchronously to completion on the caller's thread; events are
//! processed strictly in the order the host delivers them.

use mirage_platform::{Clock, ScheduledNavigation};
use mirage_types::input::{Key, KeyChord};
use mirage_types::line::{LineRole, ScrollbackLine};

use crate::commands::register_profile;
use crate::config::TermConfig;
use crate::interpreter::{CommandOutput, CommandRegistry, Environment, render_listing};

/// Whether a key chord was consumed by the session or left to the host.
///
/// `Handled` chords must have their host default action suppressed (e.g. no
/// page scroll on the arrow keys); `Default` leaves the host's native
/// text-editing behavior authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    Handled,
    Default,
}

/// Host capabilities handed to the session per event.
pub struct Services<'a> {
    /// Wall clock for the `date` command; the command degrades without one.
    pub clock: Option<&'a dyn Clock>,
}

impl<'a> Services<'a> {
    /// No host services at all.
    pub fn none() -> Self {
        Self { clock: None }
    }

    pub fn with_clock(clock: &'a dyn Clock) -> Self {
        Self { clock: Some(clock) }
    }
}

/// One terminal instance.
pub struct TerminalSession {
    registry: CommandRegistry,
    /// Sorted (name, description) pairs, frozen at construction.
    command_index: Vec<(String, String)>,
    config: TermConfig,
    /// Submitted lines, oldest first. Append-only; duplicates kept.
    history: Vec<String>,
    /// Recall position. Invariant: `0 <= cursor <= history.len()`, where
    /// `history.len()` means "not currently recalling".
    cursor: usize,
    scrollback: Vec<ScrollbackLine>,
    input: String,
    pending_navigations: Vec<ScheduledNavigation>,
    scroll_pending: bool,
}

impl TerminalSession {
    /// Build a session for the given deployment configuration. The command
    /// registry is fixed from here on.
    pub fn new(config: TermConfig) -> Self {
        let mut registry = CommandRegistry::new();
        register_profile(&mut registry, config.profile);
        let command_index = registry.list_commands();
        Self {
            registry,
            command_index,
            config,
            history: Vec::new(),
            cursor: 0,
            scrollback: Vec::new(),
            input: String::new(),
            pending_navigations: Vec::new(),
            scroll_pending: false,
        }
    }

    pub fn config(&self) -> &TermConfig {
        &self.config
    }

    /// The current line buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the line buffer (for hosts that own a native text field).
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scrollback(&self) -> &[ScrollbackLine] {
        &self.scrollback
    }

    /// Clear the scrollback (the Ctrl+L action). History and the recall
    /// cursor are untouched.
    pub fn clear_scrollback(&mut self) {
        self.scrollback.clear();
    }

    /// True once per dispatch: the host should scroll to the newest line.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }

    /// Navigations scheduled by `exit` that the host has not drained yet.
    pub fn pending_navigations(&self) -> &[ScheduledNavigation] {
        &self.pending_navigations
    }

    /// Drain scheduled navigations for the host to act on (or ignore).
    pub fn take_scheduled_navigations(&mut self) -> Vec<ScheduledNavigation> {
        std::mem::take(&mut self.pending_navigations)
    }

    /// Drop all scheduled navigations without acting on them.
    pub fn cancel_navigations(&mut self) {
        self.pending_navigations.clear();
    }

    /// Feed one key chord through the state machine.
    pub fn handle_key(&mut self, chord: &KeyChord, services: &Services<'_>) -> KeyDisposition {
        match chord.key {
            Key::Enter => {
                self.submit(services);
                KeyDisposition::Handled
            },
            Key::ArrowUp => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.input = self.history[self.cursor].clone();
                }
                KeyDisposition::Handled
            },
            Key::ArrowDown => {
                if self.cursor + 1 < self.history.len() {
                    self.cursor += 1;
                    self.input = self.history[self.cursor].clone();
                } else {
                    self.cursor = self.history.len();
                    self.input.clear();
                }
                KeyDisposition::Handled
            },
            Key::Char('l') if chord.ctrl => {
                self.clear_scrollback();
                KeyDisposition::Handled
            },
            Key::Char(c) if !chord.ctrl => {
                self.input.push(c);
                KeyDisposition::Default
            },
            Key::Backspace => {
                self.input.pop();
                KeyDisposition::Default
            },
            _ => KeyDisposition::Default,
        }
    }

    /// The Enter action: append to history, dispatch, clear the buffer.
    /// A blank or whitespace-only buffer is a no-op.
    fn submit(&mut self, services: &Services<'_>) {
        let line = self.input.trim().to_string();
        if line.is_empty() {
            return;
        }
        self.history.push(line.clone());
        self.cursor = self.history.len();
        self.dispatch(&line, services);
        self.input.clear();
    }

    /// Tokenize a submitted line, run the matching command, and append the
    /// echo plus its output to the scrollback.
    ///
    /// Tokens are split on single-space boundaries; consecutive spaces yield
    /// empty argument tokens and there is no quoting, so an argument cannot
    /// contain a space.
    pub fn dispatch(&mut self, line: &str, services: &Services<'_>) {
        log::debug!("dispatch: {line}");
        let mut tokens = line.split(' ');
        let cmd = tokens.next().unwrap_or_default();
        let args: Vec<&str> = tokens.collect();

        self.scrollback.push(ScrollbackLine::new(
            LineRole::Command,
            format!("{} {line}", self.config.prompt_label),
        ));

        let result = match self.registry.lookup(cmd) {
            Some(command) => {
                let env = Environment {
                    clock: services.clock,
                    history: &self.history,
                    commands: &self.command_index,
                    config: &self.config,
                };
                Some(command.execute(&args, &env))
            },
            None => None,
        };

        match result {
            Some(Ok(output)) => self.apply_output(output),
            Some(Err(e)) => {
                self.scrollback
                    .push(ScrollbackLine::new(LineRole::Error, e.to_string()));
            },
            None => {
                log::debug!("unknown command: {cmd}");
                let text = match &self.config.shell_name {
                    Some(shell) => format!("{shell}: {cmd}: command not found"),
                    None => format!("{cmd}: command not found"),
                };
                self.scrollback.push(ScrollbackLine::new(LineRole::Error, text));
            },
        }

        self.scroll_pending = true;
    }

    fn apply_output(&mut self, output: CommandOutput) {
        match output {
            CommandOutput::Text(text) => {
                if !text.is_empty() {
                    self.scrollback
                        .push(ScrollbackLine::new(LineRole::Output, text));
                }
            },
            CommandOutput::Styled { role, text } => {
                if !text.is_empty() {
                    self.scrollback.push(ScrollbackLine::new(role, text));
                }
            },
            CommandOutput::Listing(entries) => {
                self.scrollback
                    .push(ScrollbackLine::new(LineRole::Output, render_listing(&entries)));
            },
            CommandOutput::None => {},
            CommandOutput::Clear => self.scrollback.clear(),
            CommandOutput::Navigate {
                url,
                delay_ms,
                farewell,
            } => {
                if !farewell.is_empty() {
                    self.scrollback
                        .push(ScrollbackLine::new(LineRole::Warning, farewell));
                }
                log::info!("scheduled navigation to {url} in {delay_ms}ms");
                self.pending_navigations
                    .push(ScheduledNavigation::new(url, delay_ms));
            },
        }
    }
}
