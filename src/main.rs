//! Tongue-switch demo: runs the gesture pipeline over a synthetic landmark source.

use anyhow::Result;
use clap::Parser;
use log::info;
use tongue_switch::app::{SessionConfig, SyntheticSource, TongueSwitchApp};
use tongue_switch::config::Config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of players (1 or 2)
    #[arg(short, long, default_value = "1")]
    players: usize,

    /// Frames to simulate
    #[arg(short = 'n', long, default_value = "600")]
    frames: u64,

    /// Simulated frames per second
    #[arg(long, default_value_t = tongue_switch::constants::DEFAULT_FPS)]
    fps: f64,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.print_config {
        print!("{}", tongue_switch::config::EXAMPLE_CONFIG);
        return Ok(());
    }

    info!("Tongue Switch - gesture pipeline demo");

    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };
    config.tracker.players = args.players;

    let source = Box::new(SyntheticSource::new(
        args.players,
        config.calibration.warmup_frames as u64,
    ));
    let session = SessionConfig {
        max_frames: args.frames,
        fps: args.fps,
    };

    let mut app = TongueSwitchApp::new(config, source, session)?;
    app.run()?;

    Ok(())
}
