//! Per-deployment terminal configuration.
//!
//! The same interpreter ships in several deployments that differ only in
//! which commands are registered and the exact wording of a few canned
//! strings. Those differences are captured here as a profile plus a handful
//! of overridable strings, loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use mirage_types::error::Result;

/// Which command set a deployment registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandProfile {
    /// The original four: help, date, about, exit.
    Minimal,
    /// Adds echo, clear, history, and the simulated filesystem commands.
    Files,
    /// The full union, including neofetch.
    Full,
}

impl CommandProfile {
    /// Command names this profile registers, in registration order.
    pub fn command_names(&self) -> &'static [&'static str] {
        const MINIMAL: &[&str] = &["help", "date", "about", "exit"];
        const FILES: &[&str] = &[
            "help", "date", "about", "exit", "echo", "clear", "history", "ls", "pwd", "whoami",
            "cat", "mkdir", "touch", "rm", "cd",
        ];
        const FULL: &[&str] = &[
            "help", "date", "about", "exit", "echo", "clear", "history", "ls", "pwd", "whoami",
            "cat", "mkdir", "touch", "rm", "cd", "neofetch",
        ];
        match self {
            Self::Minimal => MINIMAL,
            Self::Files => FILES,
            Self::Full => FULL,
        }
    }
}

/// Terminal configuration with serde defaults for every field, so a partial
/// TOML file (or none at all) yields a working deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TermConfig {
    /// Which command set to register.
    pub profile: CommandProfile,
    /// Label prepended to every echoed command line.
    pub prompt_label: String,
    /// Optional shell-name prefix on "command not found" errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell_name: Option<String>,
    /// Virtual user reported by `whoami`.
    pub user: String,
    /// Virtual host name (neofetch).
    pub host: String,
    /// Virtual working directory reported by `pwd`.
    pub cwd: String,
    /// URL the `exit` command schedules a navigation to.
    pub exit_url: String,
    /// Text returned by `about`.
    pub about_text: String,
    /// Version string shown by neofetch.
    pub version: String,
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            profile: CommandProfile::Full,
            prompt_label: "mirage:~$".to_string(),
            shell_name: None,
            user: "guest".to_string(),
            host: "mirage".to_string(),
            cwd: "/home/guest".to_string(),
            exit_url: "https://github.com/fjsho".to_string(),
            about_text: "MIRAGE_TERM\nA terminal-style front end. Every command is simulated;\n\
                         nothing you type leaves this window."
                .to_string(),
            version: "0.1.0".to_string(),
        }
    }
}

impl TermConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_full() {
        let cfg = TermConfig::default();
        assert_eq!(cfg.profile, CommandProfile::Full);
        assert_eq!(cfg.user, "guest");
        assert!(cfg.shell_name.is_none());
    }

    #[test]
    fn minimal_profile_is_the_original_four() {
        assert_eq!(
            CommandProfile::Minimal.command_names(),
            &["help", "date", "about", "exit"]
        );
    }

    #[test]
    fn files_profile_lacks_neofetch() {
        let names = CommandProfile::Files.command_names();
        assert!(names.contains(&"ls"));
        assert!(names.contains(&"clear"));
        assert!(!names.contains(&"neofetch"));
    }

    #[test]
    fn full_profile_is_a_superset_of_files() {
        let files = CommandProfile::Files.command_names();
        let full = CommandProfile::Full.command_names();
        for name in files {
            assert!(full.contains(name), "full profile missing {name}");
        }
        assert!(full.contains(&"neofetch"));
    }

    #[test]
    fn profile_names_are_unique() {
        use std::collections::HashSet;
        for profile in [
            CommandProfile::Minimal,
            CommandProfile::Files,
            CommandProfile::Full,
        ] {
            let names = profile.command_names();
            let set: HashSet<&&str> = names.iter().collect();
            assert_eq!(set.len(), names.len());
        }
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg = TermConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, TermConfig::default());
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let cfg = TermConfig::from_toml_str(
            r#"
            profile = "minimal"
            prompt_label = "terminal-style-website:~$"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.profile, CommandProfile::Minimal);
        assert_eq!(cfg.prompt_label, "terminal-style-website:~$");
        assert_eq!(cfg.user, "guest");
    }

    #[test]
    fn shell_name_is_optional() {
        let cfg = TermConfig::from_toml_str("shell_name = \"mirage\"").unwrap();
        assert_eq!(cfg.shell_name.as_deref(), Some("mirage"));
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let err = TermConfig::from_toml_str("profile = [[[").unwrap_err();
        assert!(format!("{err}").contains("TOML parse error"));
    }

    #[test]
    fn unknown_profile_is_rejected() {
        assert!(TermConfig::from_toml_str("profile = \"turbo\"").is_err());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = TermConfig::load(Path::new("/nonexistent/mirage.toml")).unwrap_err();
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = TermConfig {
            profile: CommandProfile::Files,
            shell_name: Some("mirage".into()),
            ..TermConfig::default()
        };
        let text = toml::to_string(&cfg).unwrap();
        let back = TermConfig::from_toml_str(&text).unwrap();
        assert_eq!(cfg, back);
    }
}
