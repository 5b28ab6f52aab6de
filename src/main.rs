use bevy::prelude::*;
use clap::Parser;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::process::ExitCode;

use skyhop::{
    plugins::{ArcadeAircraftPlugin, ArcadeRenderPlugin, HeadlessPlugin, TelemetryPlugin},
    resources::{ConfigError, SimulationConfig, TickLimit},
    systems::display_hint,
};

/// Exit code when the window or configuration cannot be set up.
const SETUP_FAILURE: u8 = 255;

#[derive(Parser, Debug)]
#[command(name = "skyhop", about = "Arcade flight simulator")]
struct Args {
    /// YAML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run without a window.
    #[arg(long)]
    headless: bool,

    /// Stop after this many ticks.
    #[arg(long)]
    ticks: Option<u64>,

    /// Start with the autopilot disengaged.
    #[arg(long)]
    manual: bool,

    /// Draw the terrain wireframe.
    #[arg(long)]
    terrain: bool,

    /// Write one JSON state line per tick to this file.
    #[arg(long)]
    telemetry: Option<PathBuf>,

    /// Log the aircraft position every tick.
    #[arg(long)]
    log_position: bool,
}

impl Args {
    fn simulation_config(&self) -> Result<SimulationConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)?,
            None => SimulationConfig::default(),
        };

        if self.manual {
            config.start.autopilot = false;
        }
        if self.terrain {
            config.render.draw_terrain = true;
        }
        if self.telemetry.is_some() {
            config.telemetry.record_path = self.telemetry.clone();
        }
        if self.log_position {
            config.telemetry.log_position = true;
        }
        Ok(config)
    }
}

fn exit_code(exit: AppExit) -> ExitCode {
    match exit {
        AppExit::Success => ExitCode::SUCCESS,
        AppExit::Error(code) => ExitCode::from(code.get()),
    }
}

fn build_app(args: &Args, config: &SimulationConfig) -> App {
    let mut app = App::new();
    if args.headless {
        let mut headless = HeadlessPlugin::new(config.physics.time_step);
        if let Some(ticks) = args.ticks {
            headless = headless.with_max_ticks(ticks);
        }
        app.add_plugins(headless);
    } else {
        app.add_plugins(ArcadeRenderPlugin::new(
            config.render.clone(),
            config.terrain.clone(),
        ));
        if let Some(ticks) = args.ticks {
            app.insert_resource(TickLimit::new(ticks));
        }
    }

    app.add_plugins((
        ArcadeAircraftPlugin::new(config.clone()),
        TelemetryPlugin::new(config.telemetry.clone()),
    ));
    app
}

/// Builds and runs the app, reporting a panic during either as a setup failure.
///
/// The windowing plugin opens its event loop while being added, so the
/// build has to happen inside the guard as well.
fn run_guarded(build: impl FnOnce() -> App) -> AppExit {
    match panic::catch_unwind(AssertUnwindSafe(|| build().run())) {
        Ok(exit) => exit,
        Err(_) => {
            eprintln!("Failed to create the window or graphics context");
            AppExit::from_code(SETUP_FAILURE)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match args.simulation_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::from(SETUP_FAILURE);
        }
    };

    if !args.headless {
        match display_hint(|key| std::env::var(key).ok()) {
            Some((key, value)) => eprintln!("{} variable: {}", key, value),
            None => eprintln!(
                "DISPLAY environment variable is not set. No graphical output will be possible."
            ),
        }
    }

    exit_code(run_guarded(|| build_app(&args, &config)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyhop::resources::RenderConfig;

    #[test]
    fn test_headless_app_has_no_window() {
        let args = Args::parse_from(["skyhop", "--headless", "--ticks", "3", "--manual"]);
        let config = args.simulation_config().unwrap();
        let app = build_app(&args, &config);

        assert!(!config.start.autopilot);
        assert!(app.world().contains_resource::<TickLimit>());
        assert!(!app.world().contains_resource::<RenderConfig>());
    }

    #[test]
    fn test_panic_while_building_is_setup_failure() {
        let exit = run_guarded(|| panic!("Failed to build event loop"));
        assert_eq!(exit, AppExit::from_code(SETUP_FAILURE));
    }
}
