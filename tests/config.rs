mod common;

use approx::assert_relative_eq;
use skyhop::{components::FlightAction, resources::SimulationConfig};
use std::io::Write;
use tempfile::NamedTempFile;

use crate::common::TestAppBuilder;

#[test]
fn test_yaml_config_drives_arcade_app() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        "start:\n  autopilot: false\n  position: [5.0, 40.0, -5.0]\naircraft:\n  yaw_rate: 5.0\n  gravity_drain: 0.0"
    )?;
    let config = SimulationConfig::load(file.path())?;

    let mut app = TestAppBuilder::new().with_config(config).build();
    assert!(!app.autopilot().engaged);

    app.hold([FlightAction::YawRight]);
    app.tick();

    let state = app.aircraft();
    assert_eq!(state.yaw, 5.0);
    assert_relative_eq!(state.position.y, 40.0);
    assert_relative_eq!(state.position.x, 5.0 + 5.0_f64.to_radians().sin() * 3.4, epsilon = 1e-9);

    Ok(())
}

#[test]
fn test_saved_config_round_trips_through_app() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = SimulationConfig::default();
    config.menu.dt = 0.2;
    config.menu.throttle_gain = 50.0;

    let file = NamedTempFile::new()?;
    config.save(file.path())?;
    let loaded = SimulationConfig::load(file.path())?;

    let mut app = TestAppBuilder::new().menu(loaded.menu).build();
    app.run_menu("1\n");

    // 0.1 throttle at 50 units/s for 0.2 s
    assert_relative_eq!(app.menu_aircraft().position.x, 1.0, epsilon = 1e-12);

    Ok(())
}
