use clap::Parser;
use relm4::prelude::*;
use slidedeck::config;
use slidedeck::gui::app::{AppInit, AppModel};
use slidedeck::gui::window::{MonitorName, WindowMode};
use slidedeck::sys::runtime;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Deck file to present (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page shown first, overriding `navigation.start_page`
    #[arg(short = 'p', long)]
    start_page: Option<usize>,

    /// Open a normal window instead of going fullscreen
    #[arg(short, long)]
    windowed: bool,

    /// Connector name of the monitor to present on (e.g. "HDMI-A-1")
    #[arg(short, long)]
    monitor: Option<String>,

    /// Write the example deck to the config path and exit
    #[arg(long)]
    init: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config_path = config::resolve_config_path(cli.config)?;

    if cli.init {
        let path = config::write_default_config(&config_path)?;
        println!("{}", path.display());
        return Ok(());
    }

    let mut config = config::load_or_default(&config_path);
    if let Some(start) = cli.start_page {
        config.navigation.start_page = start;
    }
    config.validate()?;

    let mode = WindowMode {
        windowed: cli.windowed,
        monitor: cli.monitor.map(MonitorName::new),
    };

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx, config_path.clone());

    let app = RelmApp::new("org.troia.slidedeck").with_args(Vec::new());

    app.run::<AppModel>(AppInit {
        config,
        config_path,
        mode,
        rx,
    });

    Ok(())
}
