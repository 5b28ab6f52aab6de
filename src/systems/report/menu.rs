use bevy::prelude::*;

use crate::components::{MenuAircraftState, MenuCommand, PlayerController};
use crate::resources::MenuConsole;

/// Prints the title, the command list and the initial status.
pub fn menu_banner_system(
    query: Query<&MenuAircraftState, With<PlayerController>>,
    mut console: ResMut<MenuConsole>,
) {
    console.print("=== Simple Flight Simulator ===");
    console.print("Commands:");
    for (code, name) in MenuCommand::MENU {
        console.print(format!("  {}. {}", code, name));
    }

    if let Ok(state) = query.get_single() {
        console.print("");
        console.print("--- Current Airplane Status ---");
        console.print_all(state.status_lines());
        console.print("------------------------------");
    }
    console.print("Enter a number (1-6) to perform a command from the list above.");
}
