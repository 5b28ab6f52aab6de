use bevy::{core::TaskPoolPlugin, log::LogPlugin, prelude::*};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use skyhop::{
    plugins::{menu_runner, MenuAircraftPlugin},
    resources::{ConfigError, SimulationConfig},
};

#[derive(Parser, Debug)]
#[command(name = "skyhop_menu", about = "Menu driven flight simulator")]
struct Args {
    /// YAML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated seconds advanced after each command.
    #[arg(long)]
    dt: Option<f64>,
}

fn load_config(args: &Args) -> Result<SimulationConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(dt) = args.dt {
        config.menu.dt = dt;
        config.menu.validate()?;
    }
    Ok(config)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let exit = App::new()
        .add_plugins((
            TaskPoolPlugin::default(),
            LogPlugin::default(),
            MenuAircraftPlugin::new(config.menu),
        ))
        .set_runner(menu_runner)
        .run();

    match exit {
        AppExit::Success => ExitCode::SUCCESS,
        AppExit::Error(code) => ExitCode::from(code.get()),
    }
}
