pub mod arcade;
pub mod menu;

pub use arcade::{arcade_control_system, keyboard_input_system};
pub use menu::{apply_menu_command, menu_command_system, MenuOutcome};
