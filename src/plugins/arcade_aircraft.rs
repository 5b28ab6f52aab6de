use bevy::input::InputSystem;
use bevy::prelude::*;

use crate::components::{ArcadeAircraftState, AutopilotState, CameraRig, PlayerController};
use crate::plugins::staging::{ensure_startup_sequence, StartupStage};
use crate::resources::{FlightInput, KeyBindings, SimulationConfig, TickCounter};
use crate::systems::{
    arcade_control_system, arcade_integrator_system, autopilot_system, keyboard_input_system,
    tick_limit_system,
};

/// Order of work inside one arcade tick.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum ArcadeSet {
    Input,
    Autopilot,
    Integrate,
    Report,
}

/// Spawns the player aircraft and runs its fixed-rate flight loop.
pub struct ArcadeAircraftPlugin {
    config: SimulationConfig,
}

impl ArcadeAircraftPlugin {
    pub fn new(config: SimulationConfig) -> Self {
        ArcadeAircraftPlugin { config }
    }

    fn setup_aircraft(mut commands: Commands, config: SimulationConfig) {
        let state = ArcadeAircraftState::from_start(&config.start);
        info!(
            "Spawning aircraft at ({}, {}, {}), autopilot {}",
            state.position.x,
            state.position.y,
            state.position.z,
            if config.start.autopilot { "on" } else { "off" }
        );

        commands.spawn((
            state,
            config.aircraft.clone(),
            AutopilotState::new(config.start.autopilot),
            config.autopilot.clone(),
            CameraRig::new(config.start.camera_distance),
            PlayerController,
            Name::new("Player Aircraft"),
        ));
    }
}

impl Plugin for ArcadeAircraftPlugin {
    fn build(&self, app: &mut App) {
        ensure_startup_sequence(app);
        let config = self.config.clone();

        app.insert_resource(self.config.physics.clone())
            .insert_resource(self.config.camera.clone())
            .init_resource::<KeyBindings>()
            .init_resource::<FlightInput>()
            .init_resource::<TickCounter>()
            .configure_sets(
                FixedUpdate,
                (
                    ArcadeSet::Input,
                    ArcadeSet::Autopilot,
                    ArcadeSet::Integrate,
                    ArcadeSet::Report,
                )
                    .chain(),
            )
            .add_systems(
                Startup,
                (move |commands: Commands| Self::setup_aircraft(commands, config.clone()))
                    .in_set(StartupStage::BuildAircraft),
            )
            .add_systems(PreUpdate, keyboard_input_system.after(InputSystem))
            .add_systems(
                FixedUpdate,
                (
                    arcade_control_system.in_set(ArcadeSet::Input),
                    autopilot_system.in_set(ArcadeSet::Autopilot),
                    arcade_integrator_system.in_set(ArcadeSet::Integrate),
                    tick_limit_system.in_set(ArcadeSet::Report),
                ),
            );

        app.insert_resource(Time::<Fixed>::from_seconds(self.config.physics.time_step));
    }
}
