use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    BuildUtilities,
    BuildAircraft,
    BuildCameras,
    BuildOverlay,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Startup,
            (
                StartupStage::BuildUtilities,
                StartupStage::BuildAircraft,
                StartupStage::BuildCameras,
                StartupStage::BuildOverlay,
            )
                .chain(),
        );
    }
}

/// Adds the startup ordering once, whichever flight plugin comes first.
pub(crate) fn ensure_startup_sequence(app: &mut App) {
    if !app.is_plugin_added::<StartupSequencePlugin>() {
        app.add_plugins(StartupSequencePlugin);
    }
}
