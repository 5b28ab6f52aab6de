mod arcade;
mod menu;
mod start;

pub use arcade::ArcadeAircraftConfig;
pub use menu::MenuAircraftConfig;
pub use start::ArcadeStartConfig;
