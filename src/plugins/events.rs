use bevy::prelude::*;

use crate::components::MenuCommand;

/// One command read from the menu console.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct MenuCommandEvent(pub MenuCommand);
