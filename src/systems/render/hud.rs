use bevy::prelude::*;

use crate::components::{ArcadeAircraftState, AutopilotState, PlayerController};

/// Full height of a HUD bar (px).
const BAR_HEIGHT: f32 = 100.0;
const BAR_WIDTH: f32 = 30.0;
/// Bars grow upwards from this screen row.
const BAR_BOTTOM: f32 = 500.0;
const ALTITUDE_SCALE: f64 = 100.0;
const SPEED_SCALE: f64 = 10.0;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudGauge {
    Altitude,
    Speed,
}

#[derive(Component, Debug, Default)]
pub struct AutopilotIndicator;

/// Bar heights in px plus the autopilot lamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudReadout {
    pub altitude_bar: f32,
    pub speed_bar: f32,
    pub autopilot: bool,
}

impl HudReadout {
    pub fn new(state: &ArcadeAircraftState, autopilot: bool) -> Self {
        let bar = |value: f64, scale: f64| {
            (value / scale * BAR_HEIGHT as f64).clamp(0.0, BAR_HEIGHT as f64) as f32
        };

        Self {
            altitude_bar: bar(state.position.y, ALTITUDE_SCALE),
            speed_bar: bar(state.velocity, SPEED_SCALE),
            autopilot,
        }
    }

    pub fn gauge(&self, gauge: HudGauge) -> f32 {
        match gauge {
            HudGauge::Altitude => self.altitude_bar,
            HudGauge::Speed => self.speed_bar,
        }
    }
}

fn panel(left: f32, top: f32, width: f32, height: f32) -> Node {
    Node {
        position_type: PositionType::Absolute,
        left: Val::Px(left),
        top: Val::Px(top),
        width: Val::Px(width),
        height: Val::Px(height),
        ..default()
    }
}

/// Crosshair, the two gauges and the autopilot lamp, on a 800x600 overlay.
pub fn spawn_hud(mut commands: Commands) {
    for crosshair in [
        panel(390.0, 299.0, 20.0, 2.0),
        panel(399.0, 290.0, 2.0, 20.0),
    ] {
        commands.spawn((crosshair, BackgroundColor(Color::WHITE)));
    }

    for (gauge, left, [r, g, b]) in [
        (HudGauge::Altitude, 750.0, [0.0, 1.0, 0.0]),
        (HudGauge::Speed, 20.0, [1.0, 0.0, 0.0]),
    ] {
        commands.spawn((
            panel(left, BAR_BOTTOM - BAR_HEIGHT, BAR_WIDTH, BAR_HEIGHT),
            BackgroundColor(Color::srgba(r, g, b, 0.2)),
        ));
        commands.spawn((
            panel(left, BAR_BOTTOM, BAR_WIDTH, 0.0),
            BackgroundColor(Color::srgb(r, g, b)),
            gauge,
        ));
    }

    commands.spawn((
        panel(10.0, 10.0, 90.0, 20.0),
        BackgroundColor(Color::srgb(1.0, 1.0, 0.0)),
        Visibility::Hidden,
        AutopilotIndicator,
    ));
}

pub fn hud_update_system(
    player: Query<(&ArcadeAircraftState, &AutopilotState), With<PlayerController>>,
    mut gauges: Query<(&mut Node, &HudGauge)>,
    mut indicator: Query<&mut Visibility, With<AutopilotIndicator>>,
) {
    let Ok((state, autopilot)) = player.get_single() else {
        return;
    };
    let readout = HudReadout::new(state, autopilot.engaged);

    for (mut node, gauge) in gauges.iter_mut() {
        let height = readout.gauge(*gauge);
        node.height = Val::Px(height);
        node.top = Val::Px(BAR_BOTTOM - height);
    }

    for mut visibility in indicator.iter_mut() {
        *visibility = if readout.autopilot {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}
