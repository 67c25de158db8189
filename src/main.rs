//! Battleships main entry point.
//!
//! A small turn-based naval artillery game built on **raylib** for
//! windowing, graphics, and audio.
//!
//! # Project Structure
//!
//! - `catalog` – declarative load lists for every named asset
//! - `resources` – the name→handle resource registry and its lifecycle
//! - `loadingscreen` – the scripted splash/loading sequence
//! - `sdk` – the `GameSdk` seam to raylib
//! - `raylibsdk` – the raylib-backed SDK implementation
//! - `config` – INI-backed window and asset-path settings
//!
//! # Startup
//!
//! 1. Initialize logging, CLI, configuration, the raylib window, and the
//!    audio device
//! 2. Load the full asset catalog behind the loading screen
//! 3. Run the menu loop (background music + menu screen)
//! 4. Free every loaded resource on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use clap::Parser;
use raylib::core::audio::RaylibAudio;

use battleships::config::GameConfig;
use battleships::raylibsdk::RaylibSdk;
use battleships::resources::GameResources;
use battleships::sdk::GameSdk;

/// Battleships
#[derive(Parser)]
#[command(version, about = "Battleships, a turn-based naval artillery game")]
struct Cli {
    /// Path to the configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the assets directory from the configuration.
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults
    if let Some(assets) = cli.assets {
        config.assets_dir = assets;
    }

    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("Battleships")
        .build();
    rl.set_target_fps(60);

    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            panic!("Failed to initialize audio device: {}", e);
        }
    };

    let mut sdk = RaylibSdk::new(rl, thread, &audio, config.assets_dir.clone())
        .expect("Failed to create SDK canvas");

    let mut resources = GameResources::new();
    if let Err(e) = resources.load_resources(&mut sdk) {
        log::error!("Failed to load game resources: {}", e);
        std::process::exit(1);
    }

    // Menu screen until the window closes. Music streaming needs a pump
    // once per frame.
    resources.game_music("Background").play_stream();
    while !sdk.window_should_close() {
        resources.game_music("Background").update_stream();
        sdk.draw_bitmap(resources.game_image("Menu"), 0.0, 0.0);
        sdk.refresh_screen();
    }

    resources.free_resources(&mut sdk);
}
