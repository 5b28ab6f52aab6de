use bevy::app::PluginsState;
use bevy::prelude::*;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::components::{MenuAircraftConfig, MenuAircraftState, MenuCommand, PlayerController};
use crate::plugins::staging::{ensure_startup_sequence, StartupStage};
use crate::plugins::MenuCommandEvent;
use crate::resources::{MenuConsole, MenuError, MenuSession};
use crate::systems::{menu_banner_system, menu_command_system, menu_integrator_system};

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum MenuSet {
    Command,
    Integrate,
}

/// Console driven airplane: one command, then one physics step.
pub struct MenuAircraftPlugin {
    config: MenuAircraftConfig,
}

impl MenuAircraftPlugin {
    pub fn new(config: MenuAircraftConfig) -> Self {
        MenuAircraftPlugin { config }
    }

    fn setup_aircraft(mut commands: Commands, config: MenuAircraftConfig) {
        commands.spawn((
            MenuAircraftState::new(),
            config,
            PlayerController,
            Name::new("Menu Airplane"),
        ));
    }
}

impl Plugin for MenuAircraftPlugin {
    fn build(&self, app: &mut App) {
        ensure_startup_sequence(app);
        let config = self.config.clone();

        app.add_event::<MenuCommandEvent>()
            .init_resource::<MenuConsole>()
            .init_resource::<MenuSession>()
            .configure_sets(Update, (MenuSet::Command, MenuSet::Integrate).chain())
            .add_systems(
                Startup,
                (
                    (move |commands: Commands| Self::setup_aircraft(commands, config.clone()))
                        .in_set(StartupStage::BuildAircraft),
                    menu_banner_system.in_set(StartupStage::BuildOverlay),
                ),
            )
            .add_systems(
                Update,
                (
                    menu_command_system.in_set(MenuSet::Command),
                    menu_integrator_system.in_set(MenuSet::Integrate),
                ),
            );
    }
}

/// Whitespace separated tokens, read lazily line by line.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, `None` at end of input.
    fn next_token(&mut self) -> Result<Option<String>, MenuError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

fn flush_console<W: Write>(app: &mut App, out: &mut W) -> Result<(), MenuError> {
    if let Some(mut console) = app.world_mut().get_resource_mut::<MenuConsole>() {
        for line in console.drain() {
            writeln!(out, "{}", line)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Drives a menu app from `input`, writing the console to `out`.
///
/// Returns when a quit command is handled or the input ends.
pub fn run_menu<R: BufRead, W: Write>(
    app: &mut App,
    input: R,
    out: &mut W,
) -> Result<AppExit, MenuError> {
    if app.plugins_state() == PluginsState::Ready {
        app.finish();
        app.cleanup();
    }

    app.update();
    flush_console(app, out)?;

    let mut tokens = Tokens::new(input);
    loop {
        if let Some(exit) = app.should_exit() {
            return Ok(exit);
        }

        write!(out, "\n> ")?;
        out.flush()?;

        let Some(token) = tokens.next_token()? else {
            info!("Input closed, leaving the simulator");
            writeln!(out)?;
            return Ok(AppExit::Success);
        };

        app.world_mut()
            .send_event(MenuCommandEvent(MenuCommand::parse(&token)));
        app.update();
        flush_console(app, out)?;
    }
}

/// App runner reading commands from stdin.
pub fn menu_runner(mut app: App) -> AppExit {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match run_menu(&mut app, stdin.lock(), &mut stdout.lock()) {
        Ok(exit) => exit,
        Err(e) => {
            error!("Menu loop failed: {}", e);
            AppExit::error()
        }
    }
}
