use anyhow::Result;
use console::style;
use log::{info, warn};
use rust_i18n::t;
use spanned_wallpaper::component::WallpaperCompositor;
use spanned_wallpaper::config::Config;
use spanned_wallpaper::init;
use spanned_wallpaper::signal::setup_shutdown_signal;
use std::path::PathBuf;

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en-US");

fn main() -> Result<()> {
    init::init();
    let shutdown_signal = setup_shutdown_signal();

    // Load config and set locale
    let config = Config::new()?;
    rust_i18n::set_locale(config.settings.language.as_str());

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("{}", style(t!("cli.usage")).yellow());
        std::process::exit(1);
    }

    let input_path = PathBuf::from(&args[1]);
    let output_path = PathBuf::from(&args[2]);

    let compositor = WallpaperCompositor::new(config, shutdown_signal);
    match compositor.run(&input_path, &output_path) {
        Ok(_) => {
            println!("\n{}", style(t!("cli.done")).green().bold());
            info!("Program exited normally");
        }
        Err(e) => {
            warn!("Program error: {e}");
            eprintln!("{} {}", style(t!("cli.error_prefix")).red().bold(), e);
            std::process::exit(1);
        }
    }

    Ok(())
}
