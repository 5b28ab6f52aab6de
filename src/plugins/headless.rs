use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*};
use std::time::Duration;

use crate::resources::TickLimit;

/// Runs the flight loop without a window, optionally for a fixed number of
/// ticks.
pub struct HeadlessPlugin {
    time_step: f64,
    max_ticks: Option<u64>,
}

impl HeadlessPlugin {
    pub fn new(time_step: f64) -> Self {
        HeadlessPlugin {
            time_step,
            max_ticks: None,
        }
    }

    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }
}

impl Plugin for HeadlessPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                self.time_step,
            ))),
            LogPlugin::default(),
        ));

        if let Some(max_ticks) = self.max_ticks {
            info!("Headless run limited to {} ticks", max_ticks);
            app.insert_resource(TickLimit::new(max_ticks));
        }
    }
}
