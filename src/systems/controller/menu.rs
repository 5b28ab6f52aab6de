use bevy::prelude::*;

use crate::components::{MenuAircraftConfig, MenuAircraftState, MenuCommand, PlayerController};
use crate::plugins::MenuCommandEvent;
use crate::resources::{MenuConsole, MenuSession};

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Integrate one step and prompt again.
    Continue,
    Quit,
}

/// Applies queued console commands to the menu airplane.
pub fn menu_command_system(
    mut commands: EventReader<MenuCommandEvent>,
    mut query: Query<(&mut MenuAircraftState, &MenuAircraftConfig), With<PlayerController>>,
    mut console: ResMut<MenuConsole>,
    mut session: ResMut<MenuSession>,
    mut exit: EventWriter<AppExit>,
) {
    let Ok((mut state, config)) = query.get_single_mut() else {
        warn!("No menu aircraft to command");
        return;
    };

    for MenuCommandEvent(command) in commands.read() {
        if session.quit_requested() {
            break;
        }

        match apply_menu_command(&mut state, config, command, &mut console) {
            MenuOutcome::Continue => session.complete_command(),
            MenuOutcome::Quit => {
                session.request_quit();
                info!("Quit after {} commands", session.commands());
                exit.send(AppExit::Success);
            }
        }
    }
}

/// Executes one command, writing its console output.
pub fn apply_menu_command(
    state: &mut MenuAircraftState,
    config: &MenuAircraftConfig,
    command: &MenuCommand,
    console: &mut MenuConsole,
) -> MenuOutcome {
    match command {
        MenuCommand::ThrottleUp => {
            state.throttle = (state.throttle + config.throttle_step).min(1.0);
            console.print("Throttle increased.");
            console.print_all(state.status_lines());
        }
        MenuCommand::ThrottleDown => {
            state.throttle = (state.throttle - config.throttle_step).max(0.0);
            console.print("Throttle decreased.");
            console.print_all(state.status_lines());
        }
        MenuCommand::PitchUp => {
            state.pitch += config.pitch_step;
            console.print("Pitch up.");
            console.print_all(state.status_lines());
        }
        MenuCommand::PitchDown => {
            state.pitch -= config.pitch_step;
            console.print("Pitch down.");
            console.print_all(state.status_lines());
        }
        MenuCommand::Status => console.print_all(state.status_lines()),
        MenuCommand::Quit => {
            console.print("Exiting simulator.");
            return MenuOutcome::Quit;
        }
        MenuCommand::Unknown(token) => {
            debug!("Ignoring unknown menu command {:?}", token);
            console.print("Unknown command.");
        }
    }
    MenuOutcome::Continue
}
