use bevy::prelude::*;

use crate::resources::{TickCounter, TickLimit};

/// Requests a clean exit once the tick budget of a headless run is spent.
pub fn tick_limit_system(
    counter: Res<TickCounter>,
    limit: Option<Res<TickLimit>>,
    mut exit: EventWriter<AppExit>,
) {
    if let Some(limit) = limit {
        if limit.reached(&counter) {
            info!("Reached {} ticks, stopping", counter.ticks);
            exit.send(AppExit::Success);
        }
    }
}

/// Finds the display server a window would connect to, as `(variable, value)`.
pub fn display_hint(env: impl Fn(&str) -> Option<String>) -> Option<(&'static str, String)> {
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .into_iter()
        .find_map(|key| env(key).filter(|value| !value.is_empty()).map(|v| (key, v)))
}
