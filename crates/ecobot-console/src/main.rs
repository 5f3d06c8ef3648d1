#![forbid(unsafe_code)]

//! EcoBot fleet console binary entry point.

use ecobot_console::app::{AppModel, ScreenId};
use ecobot_console::cli;
use ftui_render::budget::FrameBudgetConfig;
use ftui_runtime::{Program, ProgramConfig, ScreenMode};

fn main() {
    let opts = cli::Opts::parse();

    let screen_mode = match opts.screen_mode.as_str() {
        "inline" => ScreenMode::Inline {
            ui_height: opts.ui_height,
        },
        _ => ScreenMode::AltScreen,
    };

    let start_screen = if opts.start_screen >= 1 {
        let idx = (opts.start_screen as usize).saturating_sub(1);
        ScreenId::ALL.get(idx).copied().unwrap_or(ScreenId::Home)
    } else {
        ScreenId::Home
    };

    let mut model = AppModel::new(opts.seed);
    model.current_screen = start_screen;
    model.exit_after_ms = opts.exit_after_ms;

    let budget = match screen_mode {
        ScreenMode::AltScreen => {
            let mut cfg = FrameBudgetConfig::relaxed();
            cfg.allow_frame_skip = false;
            cfg
        }
        _ => FrameBudgetConfig::default(),
    };

    let config = ProgramConfig {
        screen_mode,
        mouse: opts.mouse,
        budget,
        ..ProgramConfig::default()
    };
    match Program::with_config(model, config) {
        Ok(mut program) => {
            if let Err(e) = program.run() {
                eprintln!("Runtime error: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Failed to initialize: {e}");
            std::process::exit(1);
        }
    }
}
