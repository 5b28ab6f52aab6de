use bevy::{core::TaskPoolPlugin, prelude::*};
use skyhop::{
    components::{
        ArcadeAircraftState, ArcadeStartConfig, AutopilotState, CameraRig, FlightAction,
        MenuAircraftConfig, MenuAircraftState,
    },
    plugins::{run_menu, ArcadeAircraftPlugin, MenuAircraftPlugin, TelemetryPlugin},
    resources::{FlightInput, SimulationConfig, TelemetryConfig, TickCounter, TickLimit},
};

enum Variant {
    Arcade,
    Menu,
}

/// Builder for a windowless app driven one tick at a time.
pub struct TestAppBuilder {
    config: SimulationConfig,
    variant: Variant,
    tick_limit: Option<u64>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
            variant: Variant::Arcade,
            tick_limit: None,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_start(mut self, start: ArcadeStartConfig) -> Self {
        self.config.start = start;
        self
    }

    pub fn with_telemetry(mut self, telemetry: TelemetryConfig) -> Self {
        self.config.telemetry = telemetry;
        self
    }

    pub fn with_tick_limit(mut self, ticks: u64) -> Self {
        self.tick_limit = Some(ticks);
        self
    }

    pub fn menu(mut self, config: MenuAircraftConfig) -> Self {
        self.config.menu = config;
        self.variant = Variant::Menu;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        app.add_plugins(TaskPoolPlugin::default());

        match self.variant {
            Variant::Arcade => {
                app.add_plugins((
                    ArcadeAircraftPlugin::new(self.config.clone()),
                    TelemetryPlugin::new(self.config.telemetry.clone()),
                ));
                if let Some(ticks) = self.tick_limit {
                    app.insert_resource(TickLimit::new(ticks));
                }
                // Startup only; ticks are driven explicitly
                app.update();
            }
            Variant::Menu => {
                app.add_plugins(MenuAircraftPlugin::new(self.config.menu.clone()));
            }
        }

        TestApp { app }
    }
}

pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Runs one fixed tick: controls, autopilot, integration, reporting.
    pub fn tick(&mut self) {
        self.app.world_mut().run_schedule(FixedUpdate);
    }

    pub fn run_ticks(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// Holds `actions` for the following ticks, releasing everything else.
    pub fn hold(&mut self, actions: impl IntoIterator<Item = FlightAction>) {
        self.app
            .world_mut()
            .insert_resource(FlightInput::from_actions(actions));
    }

    pub fn release_all(&mut self) {
        self.hold([]);
    }

    pub fn ticks(&self) -> u64 {
        self.app.world().resource::<TickCounter>().ticks
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn aircraft(&mut self) -> ArcadeAircraftState {
        *self
            .query_single::<ArcadeAircraftState>()
            .expect("arcade aircraft spawned")
    }

    pub fn autopilot(&mut self) -> AutopilotState {
        *self
            .query_single::<AutopilotState>()
            .expect("autopilot state spawned")
    }

    pub fn camera(&mut self) -> CameraRig {
        *self.query_single::<CameraRig>().expect("camera rig spawned")
    }

    pub fn menu_aircraft(&mut self) -> MenuAircraftState {
        *self
            .query_single::<MenuAircraftState>()
            .expect("menu aircraft spawned")
    }

    pub fn exit_requested(&self) -> Option<AppExit> {
        self.app.should_exit()
    }

    /// Feeds `input` to the menu loop and returns its console output.
    pub fn run_menu(&mut self, input: &str) -> (AppExit, String) {
        let mut out = Vec::new();
        let exit = run_menu(&mut self.app, input.as_bytes(), &mut out).expect("menu loop");
        (exit, String::from_utf8(out).expect("utf-8 output"))
    }
}
