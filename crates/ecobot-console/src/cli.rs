#![forbid(unsafe_code)]

//! Command-line argument parsing for the fleet console.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via `ECOBOT_*` prefix.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
EcoBot Fleet Console — waste-management fleet operations demo

USAGE:
    ecobot-console [OPTIONS]

OPTIONS:
    --screen-mode=MODE   Screen mode: 'alt' (default) or 'inline'
    --ui-height=N        UI height in rows for inline mode (default: 24)
    --screen=N           Start on screen N after sign-in, 1-indexed (default: 1)
    --seed=N             Seed for the activity calendar (default: 2024)
    --no-mouse           Disable mouse event capture
    --help, -h           Show this help message
    --version, -V        Show version

SCREENS:
    1  Home            Operator dashboard with stats and quick actions
    2  Pins            Map picker for pinning cleanup locations
    3  Capture         Camera viewfinder placeholder
    4  Tasks           Cleanup task list with dispatch controls
    5  Robots          Fleet overview with battery and assignments
    6  Reviews         Review submission and analytics
    7  Alerts          Notification feed and preferences
    8  Streaks         Activity calendar and achievements

KEYBINDINGS:
    1-8             Switch to screens 1-8 by number
    Tab / Shift-Tab Cycle through all screens
    ?               Toggle help overlay
    Ctrl+T          Cycle color theme
    Ctrl+L          Sign out
    q / Ctrl+C      Quit

ENVIRONMENT VARIABLES:
    ECOBOT_SCREEN_MODE     Override --screen-mode (alt|inline)
    ECOBOT_UI_HEIGHT       Override --ui-height
    ECOBOT_SCREEN          Override --screen
    ECOBOT_SEED            Override --seed
    ECOBOT_EXIT_AFTER_MS   Auto-quit after N milliseconds (for testing)";

/// Parsed command-line options.
pub struct Opts {
    /// Screen mode: "alt" or "inline".
    pub screen_mode: String,
    /// UI height for inline mode.
    pub ui_height: u16,
    /// Starting screen after sign-in (1-indexed).
    pub start_screen: u16,
    /// Whether mouse events are enabled.
    pub mouse: bool,
    /// Auto-exit after this many milliseconds (0 = disabled).
    pub exit_after_ms: u64,
    /// Seed for the streak activity calendar.
    pub seed: u64,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            screen_mode: "alt".into(),
            ui_height: 24,
            start_screen: 1,
            mouse: true,
            exit_after_ms: 0,
            seed: 2024,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        if let Ok(val) = env::var("ECOBOT_SCREEN_MODE") {
            opts.screen_mode = val;
        }
        if let Ok(val) = env::var("ECOBOT_UI_HEIGHT")
            && let Ok(n) = val.parse()
        {
            opts.ui_height = n;
        }
        if let Ok(val) = env::var("ECOBOT_SCREEN")
            && let Ok(n) = val.parse()
        {
            opts.start_screen = n;
        }
        if let Ok(val) = env::var("ECOBOT_SEED")
            && let Ok(n) = val.parse()
        {
            opts.seed = n;
        }
        if let Ok(val) = env::var("ECOBOT_EXIT_AFTER_MS")
            && let Ok(n) = val.parse()
        {
            opts.exit_after_ms = n;
        }

        let args: Vec<String> = env::args().skip(1).collect();
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("ecobot-console {VERSION}");
                    process::exit(0);
                }
                "--no-mouse" => {
                    opts.mouse = false;
                }
                other => {
                    if let Some(val) = other.strip_prefix("--screen-mode=") {
                        opts.screen_mode = val.to_string();
                    } else if let Some(val) = other.strip_prefix("--ui-height=") {
                        match val.parse() {
                            Ok(n) => opts.ui_height = n,
                            Err(_) => {
                                eprintln!("Invalid --ui-height value: {val}");
                                process::exit(1);
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--screen=") {
                        match val.parse() {
                            Ok(n) => opts.start_screen = n,
                            Err(_) => {
                                eprintln!("Invalid --screen value: {val}");
                                process::exit(1);
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--seed=") {
                        match val.parse() {
                            Ok(n) => opts.seed = n,
                            Err(_) => {
                                eprintln!("Invalid --seed value: {val}");
                                process::exit(1);
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--exit-after-ms=") {
                        match val.parse() {
                            Ok(n) => opts.exit_after_ms = n,
                            Err(_) => {
                                eprintln!("Invalid --exit-after-ms value: {val}");
                                process::exit(1);
                            }
                        }
                    } else {
                        eprintln!("Unknown argument: {other}");
                        eprintln!("Run with --help for usage information.");
                        process::exit(1);
                    }
                }
            }
            i += 1;
        }

        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_opts() {
        let opts = Opts::default();
        assert_eq!(opts.screen_mode, "alt");
        assert_eq!(opts.ui_height, 24);
        assert_eq!(opts.start_screen, 1);
        assert!(opts.mouse);
        assert_eq!(opts.exit_after_ms, 0);
        assert_eq!(opts.seed, 2024);
    }

    #[test]
    fn version_string_nonempty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn help_screen_count_matches_tabs() {
        let screen_count = HELP_TEXT
            .lines()
            .filter(|line| {
                let trimmed = line.trim();
                trimmed
                    .split_whitespace()
                    .next()
                    .is_some_and(|tok| tok.parse::<u16>().is_ok())
                    && trimmed.len() > 5
            })
            .count();
        assert_eq!(
            screen_count,
            crate::app::ScreenId::ALL.len(),
            "HELP_TEXT screen list count must match ScreenId::ALL"
        );
    }

    #[test]
    fn help_text_contains_env_vars() {
        assert!(HELP_TEXT.contains("ECOBOT_SCREEN_MODE"));
        assert!(HELP_TEXT.contains("ECOBOT_SEED"));
        assert!(HELP_TEXT.contains("ECOBOT_EXIT_AFTER_MS"));
    }

    #[test]
    fn help_text_lists_every_tab_label() {
        for id in crate::app::ScreenId::ALL {
            assert!(
                HELP_TEXT.contains(id.tab_label()),
                "missing tab label {}",
                id.tab_label()
            );
        }
    }
}
