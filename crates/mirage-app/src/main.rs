//! MIRAGE_TERM desktop entry point.
//!
//! A line-oriented host for the interpreter: each stdin line is fed through
//! the session as key events, and newly appended scrollback lines are
//! rendered to stdout with ANSI colors. Browser hosts wire the same session
//! to a text input and an output pane instead.

mod render;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use mirage_platform::DesktopClock;
use mirage_term::{Services, TermConfig, TerminalSession};
use mirage_types::input::{Key, KeyChord};

/// Resolve the config from the CLI arg, the MIRAGE_CONFIG env var, or
/// defaults.
fn resolve_config() -> Result<TermConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("MIRAGE_CONFIG").ok());
    match path {
        Some(p) => Ok(TermConfig::load(Path::new(&p))?),
        None => Ok(TermConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = resolve_config()?;
    log::info!(
        "Starting MIRAGE_TERM v{} (profile {:?})",
        config.version,
        config.profile,
    );

    let clock = DesktopClock::new();
    let mut session = TerminalSession::new(config);

    println!(
        "MIRAGE_TERM v{} -- Type 'help' for commands",
        session.config().version
    );

    let stdin = io::stdin();
    let mut rendered = 0usize;
    'running: loop {
        print!("{} ", session.config().prompt_label);
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let services = Services::with_clock(&clock);
        for ch in line.trim_end_matches(['\r', '\n']).chars() {
            session.handle_key(&KeyChord::plain(Key::Char(ch)), &services);
        }
        session.handle_key(&KeyChord::plain(Key::Enter), &services);

        // Render whatever the dispatch appended. A shrinking scrollback
        // means `clear` ran; start the screen over.
        let new_total = {
            let lines = session.scrollback();
            if lines.len() < rendered {
                print!("\x1b[2J\x1b[H");
                rendered = 0;
            }
            for line in &lines[rendered..] {
                println!("{}", render::render_line(line));
            }
            lines.len()
        };
        rendered = new_total;

        // stdout scrolls on its own; just consume the request.
        let _ = session.take_scroll_request();

        for nav in session.take_scheduled_navigations() {
            log::info!("navigation scheduled: {} (+{}ms)", nav.url, nav.delay_ms);
            println!("(host) would open {} after {}ms", nav.url, nav.delay_ms);
            break 'running;
        }
    }

    log::info!("MIRAGE_TERM shut down cleanly");
    Ok(())
}
