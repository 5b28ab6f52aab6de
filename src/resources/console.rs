use bevy::prelude::*;

/// Lines the menu loop wants printed, drained by the runner after each
/// command.
#[derive(Resource, Debug, Default)]
pub struct MenuConsole {
    lines: Vec<String>,
}

impl MenuConsole {
    pub fn print(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn print_all(&mut self, lines: impl IntoIterator<Item = String>) {
        self.lines.extend(lines);
    }

    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

/// Progress of the menu loop between commands.
#[derive(Resource, Debug, Default)]
pub struct MenuSession {
    pending_step: bool,
    quit: bool,
    commands: u64,
}

impl MenuSession {
    /// Records a handled command that should be followed by a physics step.
    pub fn complete_command(&mut self) {
        self.commands += 1;
        self.pending_step = true;
    }

    pub fn take_pending_step(&mut self) -> bool {
        std::mem::take(&mut self.pending_step)
    }

    pub fn request_quit(&mut self) {
        self.commands += 1;
        self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn commands(&self) -> u64 {
        self.commands
    }
}
