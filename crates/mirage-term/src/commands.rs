//! Built-in commands for the MIRAGE_TERM interpreter.
//!
//! Every command here is a facade: it returns canned or lightly-templated
//! text and never touches a real filesystem, process, or network. The only
//! deferred effect in the whole set is the navigation `exit` schedules.

use mirage_types::error::{MirageError, Result};
use mirage_types::line::LineRole;

use crate::config::CommandProfile;
use crate::interpreter::{
    Command, CommandOutput, CommandRegistry, EntryKind, Environment, ListEntry,
};

/// Delay before the host should act on the navigation `exit` schedules.
pub(crate) const EXIT_NAVIGATE_DELAY_MS: u64 = 2000;

/// The one file `cat` recognizes.
pub(crate) const README_NAME: &str = "README.md";

pub(crate) const README_CONTENT: &str = "\
# MIRAGE_TERM

A terminal-style front end. The prompt is real; everything behind it is
painted on. Type 'help' to see which commands are wired up.";

/// The canned listing every filesystem command is a view of.
pub(crate) fn virtual_entries() -> Vec<ListEntry> {
    vec![
        ListEntry::new("documents", EntryKind::Directory),
        ListEntry::new("projects", EntryKind::Directory),
        ListEntry::new(README_NAME, EntryKind::File),
        ListEntry::new("hello.sh", EntryKind::Executable),
    ]
}

fn entry_kind(name: &str) -> Option<EntryKind> {
    virtual_entries()
        .iter()
        .find(|e| e.name == name)
        .map(|e| e.kind)
}

/// Register the command set selected by a profile.
///
/// Membership is deliberate, not discovered: the three deployments differ
/// only in which of these registrations run.
pub fn register_profile(reg: &mut CommandRegistry, profile: CommandProfile) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(AboutCmd));
    reg.register(Box::new(ExitCmd));
    if profile == CommandProfile::Minimal {
        return;
    }
    reg.register(Box::new(EchoCmd));
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(HistoryCmd));
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(PwdCmd));
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(CatCmd));
    reg.register(Box::new(MkdirCmd));
    reg.register(Box::new(TouchCmd));
    reg.register(Box::new(RmCmd));
    reg.register(Box::new(CdCmd));
    if profile == CommandProfile::Files {
        return;
    }
    reg.register(Box::new(NeofetchCmd));
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Show available commands"
    }
    fn usage(&self) -> &str {
        "help"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let mut out = String::from("Available Commands:");
        for (name, desc) in env.commands {
            out.push_str(&format!("\n  {name:<10} - {desc}"));
        }
        Ok(CommandOutput::Styled {
            role: LineRole::Success,
            text: out,
        })
    }
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Display current date and time"
    }
    fn usage(&self) -> &str {
        "date"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let text = match env.clock {
            Some(clock) => clock.now()?.to_string(),
            None => "date: no clock service available".to_string(),
        };
        Ok(CommandOutput::Styled {
            role: LineRole::Info,
            text,
        })
    }
}

// ---------------------------------------------------------------------------
// about
// ---------------------------------------------------------------------------

struct AboutCmd;
impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn description(&self) -> &str {
        "Display about this site"
    }
    fn usage(&self) -> &str {
        "about"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Styled {
            role: LineRole::Info,
            text: env.config.about_text.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// exit
// ---------------------------------------------------------------------------

struct ExitCmd;
impl Command for ExitCmd {
    fn name(&self) -> &str {
        "exit"
    }
    fn description(&self) -> &str {
        "Close the terminal"
    }
    fn usage(&self) -> &str {
        "exit"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Navigate {
            url: env.config.exit_url.clone(),
            delay_ms: EXIT_NAVIGATE_DELAY_MS,
            farewell: format!("Goodbye! Redirecting to {} ...", env.config.exit_url),
        })
    }
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Print text"
    }
    fn usage(&self) -> &str {
        "echo [text...]"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(args.join(" ")))
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear terminal output"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

struct HistoryCmd;
impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "List previously entered commands"
    }
    fn usage(&self) -> &str {
        "history"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        if env.history.is_empty() {
            return Ok(CommandOutput::Text("(no commands in history)".to_string()));
        }
        let lines: Vec<String> = env
            .history
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{:>4}  {entry}", i + 1))
            .collect();
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List directory contents"
    }
    fn usage(&self) -> &str {
        "ls"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Listing(virtual_entries()))
    }
}

// ---------------------------------------------------------------------------
// pwd
// ---------------------------------------------------------------------------

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        "pwd"
    }
    fn description(&self) -> &str {
        "Print working directory"
    }
    fn usage(&self) -> &str {
        "pwd"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(env.config.cwd.clone()))
    }
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Print current user name"
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(env.config.user.clone()))
    }
}

// ---------------------------------------------------------------------------
// cat
// ---------------------------------------------------------------------------

struct CatCmd;
impl Command for CatCmd {
    fn name(&self) -> &str {
        "cat"
    }
    fn description(&self) -> &str {
        "Display file contents"
    }
    fn usage(&self) -> &str {
        "cat <file>"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        let Some(&name) = args.first() else {
            return Err(MirageError::Command("cat: missing operand".to_string()));
        };
        if name == README_NAME {
            return Ok(CommandOutput::Text(README_CONTENT.to_string()));
        }
        Err(MirageError::Command(format!(
            "cat: {name}: No such file or directory"
        )))
    }
}

// ---------------------------------------------------------------------------
// mkdir
// ---------------------------------------------------------------------------

struct MkdirCmd;
impl Command for MkdirCmd {
    fn name(&self) -> &str {
        "mkdir"
    }
    fn description(&self) -> &str {
        "Create a directory (simulated)"
    }
    fn usage(&self) -> &str {
        "mkdir <path>"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        let Some(&name) = args.first() else {
            return Err(MirageError::Command("mkdir: missing operand".to_string()));
        };
        Ok(CommandOutput::Styled {
            role: LineRole::Success,
            text: format!("mkdir: created directory '{name}'"),
        })
    }
}

// ---------------------------------------------------------------------------
// touch
// ---------------------------------------------------------------------------

struct TouchCmd;
impl Command for TouchCmd {
    fn name(&self) -> &str {
        "touch"
    }
    fn description(&self) -> &str {
        "Create an empty file (simulated)"
    }
    fn usage(&self) -> &str {
        "touch <file>"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        let Some(&name) = args.first() else {
            return Err(MirageError::Command("touch: missing operand".to_string()));
        };
        Ok(CommandOutput::Styled {
            role: LineRole::Success,
            text: format!("touch: created '{name}'"),
        })
    }
}

// ---------------------------------------------------------------------------
// rm
// ---------------------------------------------------------------------------

struct RmCmd;
impl Command for RmCmd {
    fn name(&self) -> &str {
        "rm"
    }
    fn description(&self) -> &str {
        "Remove a file (simulated)"
    }
    fn usage(&self) -> &str {
        "rm <path>"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        let Some(&name) = args.first() else {
            return Err(MirageError::Command("rm: missing operand".to_string()));
        };
        if entry_kind(name).is_some() {
            return Ok(CommandOutput::Styled {
                role: LineRole::Warning,
                text: format!("rm: removed '{name}'"),
            });
        }
        Err(MirageError::Command(format!(
            "rm: cannot remove '{name}': No such file or directory"
        )))
    }
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

struct CdCmd;
impl Command for CdCmd {
    fn name(&self) -> &str {
        "cd"
    }
    fn description(&self) -> &str {
        "Change directory (simulated)"
    }
    fn usage(&self) -> &str {
        "cd [path]"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        let Some(&name) = args.first() else {
            return Ok(CommandOutput::None);
        };
        if name.is_empty() {
            return Ok(CommandOutput::None);
        }
        if entry_kind(name) == Some(EntryKind::Directory) {
            // The virtual cwd never actually changes.
            return Ok(CommandOutput::None);
        }
        Err(MirageError::Command(format!(
            "cd: {name}: No such file or directory"
        )))
    }
}

// ---------------------------------------------------------------------------
// neofetch
// ---------------------------------------------------------------------------

struct NeofetchCmd;
impl Command for NeofetchCmd {
    fn name(&self) -> &str {
        "neofetch"
    }
    fn description(&self) -> &str {
        "Show system information"
    }
    fn usage(&self) -> &str {
        "neofetch"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        const LOGO: [&str; 7] = [
            "   .--------.   ",
            "  / .------. \\  ",
            "  | |  ()  | |  ",
            "  | |      | |  ",
            "  \\ '------' /  ",
            "   '--------'   ",
            "                ",
        ];
        let cfg = env.config;
        let title = format!("{}@{}", cfg.user, cfg.host);
        let info = [
            title.clone(),
            "-".repeat(title.chars().count()),
            format!("OS: MIRAGE_TERM {}", cfg.version),
            "Host: a browser tab".to_string(),
            "Shell: mirage (simulated)".to_string(),
            format!("Commands: {}", env.commands.len()),
            "Filesystem: imaginary".to_string(),
        ];
        let lines: Vec<String> = LOGO
            .iter()
            .zip(info)
            .map(|(logo, fact)| format!("{logo}  {fact}").trim_end().to_string())
            .collect();
        Ok(CommandOutput::Styled {
            role: LineRole::Success,
            text: lines.join("\n"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TermConfig;

    fn env<'a>(cfg: &'a TermConfig, history: &'a [String]) -> Environment<'a> {
        Environment {
            clock: None,
            history,
            commands: &[],
            config: cfg,
        }
    }

    fn run(cmd: &dyn Command, args: &[&str]) -> Result<CommandOutput> {
        let cfg = TermConfig::default();
        cmd.execute(args, &env(&cfg, &[]))
    }

    #[test]
    fn profiles_register_exactly_their_command_sets() {
        for profile in [
            CommandProfile::Minimal,
            CommandProfile::Files,
            CommandProfile::Full,
        ] {
            let mut reg = CommandRegistry::new();
            register_profile(&mut reg, profile);
            let mut registered: Vec<String> =
                reg.list_commands().into_iter().map(|(n, _)| n).collect();
            let mut expected: Vec<String> = profile
                .command_names()
                .iter()
                .map(|n| n.to_string())
                .collect();
            registered.sort();
            expected.sort();
            assert_eq!(registered, expected, "profile {profile:?}");
        }
    }

    #[test]
    fn help_lists_registered_commands() {
        let cfg = TermConfig::default();
        let commands = vec![
            ("about".to_string(), "Display about this site".to_string()),
            ("help".to_string(), "Show available commands".to_string()),
        ];
        let env = Environment {
            clock: None,
            history: &[],
            commands: &commands,
            config: &cfg,
        };
        match HelpCmd.execute(&[], &env).unwrap() {
            CommandOutput::Styled { role, text } => {
                assert_eq!(role, LineRole::Success);
                assert!(text.starts_with("Available Commands:"));
                assert!(text.contains("about"));
                assert!(text.contains("Show available commands"));
            },
            other => panic!("expected styled output, got {other:?}"),
        }
    }

    #[test]
    fn date_without_clock_degrades() {
        match run(&DateCmd, &[]).unwrap() {
            CommandOutput::Styled { role, text } => {
                assert_eq!(role, LineRole::Info);
                assert!(text.contains("no clock service"));
            },
            other => panic!("expected styled output, got {other:?}"),
        }
    }

    #[test]
    fn date_with_clock_uses_fixed_format() {
        use mirage_platform::{Clock, WallClock};
        struct FixedClock;
        impl Clock for FixedClock {
            fn now(&self) -> mirage_types::error::Result<WallClock> {
                Ok(WallClock {
                    year: 2025,
                    month: 6,
                    day: 1,
                    hour: 12,
                    minute: 0,
                    second: 0,
                })
            }
        }
        let cfg = TermConfig::default();
        let clock = FixedClock;
        let env = Environment {
            clock: Some(&clock),
            history: &[],
            commands: &[],
            config: &cfg,
        };
        match DateCmd.execute(&[], &env).unwrap() {
            CommandOutput::Styled { text, .. } => {
                assert_eq!(text, "2025年6月1日日曜日 12:00:00");
            },
            other => panic!("expected styled output, got {other:?}"),
        }
    }

    #[test]
    fn about_returns_configured_text() {
        let cfg = TermConfig {
            about_text: "hello from the facade".into(),
            ..TermConfig::default()
        };
        match AboutCmd.execute(&[], &env(&cfg, &[])).unwrap() {
            CommandOutput::Styled { role, text } => {
                assert_eq!(role, LineRole::Info);
                assert_eq!(text, "hello from the facade");
            },
            other => panic!("expected styled output, got {other:?}"),
        }
    }

    #[test]
    fn exit_schedules_navigation_with_fixed_delay() {
        match run(&ExitCmd, &[]).unwrap() {
            CommandOutput::Navigate {
                url,
                delay_ms,
                farewell,
            } => {
                assert_eq!(url, TermConfig::default().exit_url);
                assert_eq!(delay_ms, EXIT_NAVIGATE_DELAY_MS);
                assert!(farewell.starts_with("Goodbye!"));
            },
            other => panic!("expected navigate output, got {other:?}"),
        }
    }

    #[test]
    fn echo_joins_args_with_single_spaces() {
        match run(&EchoCmd, &["a", "b", "c"]).unwrap() {
            CommandOutput::Text(s) => assert_eq!(s, "a b c"),
            other => panic!("expected text output, got {other:?}"),
        }
    }

    #[test]
    fn echo_no_args_is_empty_string() {
        match run(&EchoCmd, &[]).unwrap() {
            CommandOutput::Text(s) => assert_eq!(s, ""),
            other => panic!("expected text output, got {other:?}"),
        }
    }

    #[test]
    fn clear_signals_the_dispatcher() {
        assert_eq!(run(&ClearCmd, &[]).unwrap(), CommandOutput::Clear);
    }

    #[test]
    fn history_empty_message() {
        match run(&HistoryCmd, &[]).unwrap() {
            CommandOutput::Text(s) => assert_eq!(s, "(no commands in history)"),
            other => panic!("expected text output, got {other:?}"),
        }
    }

    #[test]
    fn history_is_one_indexed_in_submission_order() {
        let cfg = TermConfig::default();
        let history = vec!["echo hi".to_string(), "date".to_string()];
        match HistoryCmd.execute(&[], &env(&cfg, &history)).unwrap() {
            CommandOutput::Text(s) => {
                let lines: Vec<&str> = s.lines().collect();
                assert_eq!(lines.len(), 2);
                assert!(lines[0].contains("1  echo hi"));
                assert!(lines[1].contains("2  date"));
            },
            other => panic!("expected text output, got {other:?}"),
        }
    }

    #[test]
    fn ls_returns_the_canned_listing() {
        match run(&LsCmd, &[]).unwrap() {
            CommandOutput::Listing(entries) => {
                assert_eq!(entries, virtual_entries());
            },
            other => panic!("expected listing output, got {other:?}"),
        }
    }

    #[test]
    fn pwd_and_whoami_are_config_strings() {
        match run(&PwdCmd, &[]).unwrap() {
            CommandOutput::Text(s) => assert_eq!(s, "/home/guest"),
            other => panic!("expected text output, got {other:?}"),
        }
        match run(&WhoamiCmd, &[]).unwrap() {
            CommandOutput::Text(s) => assert_eq!(s, "guest"),
            other => panic!("expected text output, got {other:?}"),
        }
    }

    #[test]
    fn cat_missing_operand() {
        let err = run(&CatCmd, &[]).unwrap_err();
        assert_eq!(format!("{err}"), "cat: missing operand");
    }

    #[test]
    fn cat_readme_returns_fixed_content() {
        match run(&CatCmd, &["README.md"]).unwrap() {
            CommandOutput::Text(s) => assert_eq!(s, README_CONTENT),
            other => panic!("expected text output, got {other:?}"),
        }
    }

    #[test]
    fn cat_unknown_file_names_the_resource() {
        let err = run(&CatCmd, &["missing.txt"]).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("missing.txt"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn mkdir_touch_rm_require_an_operand() {
        for (cmd, name) in [
            (&MkdirCmd as &dyn Command, "mkdir"),
            (&TouchCmd, "touch"),
            (&RmCmd, "rm"),
        ] {
            let err = run(cmd, &[]).unwrap_err();
            assert_eq!(format!("{err}"), format!("{name}: missing operand"));
        }
    }

    #[test]
    fn mkdir_and_touch_template_the_operand() {
        match run(&MkdirCmd, &["stuff"]).unwrap() {
            CommandOutput::Styled { text, .. } => {
                assert_eq!(text, "mkdir: created directory 'stuff'");
            },
            other => panic!("expected styled output, got {other:?}"),
        }
        match run(&TouchCmd, &["note.txt"]).unwrap() {
            CommandOutput::Styled { text, .. } => assert_eq!(text, "touch: created 'note.txt'"),
            other => panic!("expected styled output, got {other:?}"),
        }
    }

    #[test]
    fn rm_known_entry_succeeds_unknown_fails() {
        match run(&RmCmd, &["README.md"]).unwrap() {
            CommandOutput::Styled { role, text } => {
                assert_eq!(role, LineRole::Warning);
                assert_eq!(text, "rm: removed 'README.md'");
            },
            other => panic!("expected styled output, got {other:?}"),
        }
        let err = run(&RmCmd, &["ghost"]).unwrap_err();
        assert!(format!("{err}").contains("cannot remove 'ghost'"));
    }

    #[test]
    fn cd_no_args_and_known_directory_are_silent() {
        assert_eq!(run(&CdCmd, &[]).unwrap(), CommandOutput::None);
        assert_eq!(run(&CdCmd, &["projects"]).unwrap(), CommandOutput::None);
    }

    #[test]
    fn cd_into_a_file_or_unknown_fails() {
        let err = run(&CdCmd, &["README.md"]).unwrap_err();
        assert!(format!("{err}").contains("README.md"));
        let err = run(&CdCmd, &["nowhere"]).unwrap_err();
        assert!(format!("{err}").contains("nowhere"));
    }

    #[test]
    fn neofetch_is_templated_from_config() {
        let cfg = TermConfig::default();
        let commands = vec![("help".to_string(), "h".to_string())];
        let env = Environment {
            clock: None,
            history: &[],
            commands: &commands,
            config: &cfg,
        };
        match NeofetchCmd.execute(&[], &env).unwrap() {
            CommandOutput::Styled { role, text } => {
                assert_eq!(role, LineRole::Success);
                assert!(text.contains("guest@mirage"));
                assert!(text.contains("MIRAGE_TERM 0.1.0"));
                assert!(text.contains("Commands: 1"));
            },
            other => panic!("expected styled output, got {other:?}"),
        }
    }

    #[test]
    fn usage_strings_are_nonempty() {
        let cmds: Vec<Box<dyn Command>> = vec![
            Box::new(HelpCmd),
            Box::new(DateCmd),
            Box::new(AboutCmd),
            Box::new(ExitCmd),
            Box::new(EchoCmd),
            Box::new(ClearCmd),
            Box::new(HistoryCmd),
            Box::new(LsCmd),
            Box::new(PwdCmd),
            Box::new(WhoamiCmd),
            Box::new(CatCmd),
            Box::new(MkdirCmd),
            Box::new(TouchCmd),
            Box::new(RmCmd),
            Box::new(CdCmd),
            Box::new(NeofetchCmd),
        ];
        for cmd in &cmds {
            assert!(!cmd.usage().is_empty(), "{} has empty usage", cmd.name());
            assert!(!cmd.description().is_empty());
        }
    }
}
