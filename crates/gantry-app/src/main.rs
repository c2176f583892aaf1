//! Gantry layout tool.
//!
//! Loads a screen file, lays it out, materializes it into a headless toolkit
//! and prints the resulting tree as JSON on stdout.
//!
//! The screen path is resolved against the configured GUI directory. Set
//! `GANTRY_CONFIG` to the path of a `gantry.toml` to change it or the screen
//! size; `RUST_LOG` controls diagnostics output.

mod dump;
mod headless;

use std::path::Path;

use anyhow::{Context, Result};

use dump::ScreenDump;
use gantry_screen::{Screen, ScreenConfig};
use headless::HeadlessToolkit;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::var_os("GANTRY_CONFIG") {
        Some(path) => ScreenConfig::from_file(Path::new(&path))?,
        None => ScreenConfig::default(),
    };
    let filename = std::env::args()
        .nth(1)
        .context("usage: gantry-layout <screen-file>")?;
    log::info!(
        "Laying out {} ({}x{})",
        config.resolve(&filename).display(),
        config.screen_width,
        config.screen_height,
    );

    let mut screen = Screen::new(filename, config)?;
    let mut toolkit = HeadlessToolkit::new();
    screen.add_widgets(&mut toolkit)?;

    match toolkit.focused().and_then(|id| screen.get_widget_by_handle(id)) {
        Some(widget) => log::info!("Focus starts on {}", widget.display_name()),
        None => log::info!("No focusable widget"),
    }
    if !screen.diagnostics().is_empty() {
        log::warn!(
            "{} layout diagnostics for {}",
            screen.diagnostics().len(),
            screen.filename()
        );
    }

    let dump = ScreenDump::from_screen(&screen);
    println!("{}", serde_json::to_string_pretty(&dump)?);
    Ok(())
}
