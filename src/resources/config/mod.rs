pub mod physics;
pub mod render;
pub mod simulation;
pub mod telemetry;

pub use physics::PhysicsConfig;
pub use render::RenderConfig;
pub use simulation::SimulationConfig;
pub use telemetry::TelemetryConfig;
