pub mod arcade;
pub mod menu;

pub use arcade::arcade_integrator_system;
pub use menu::menu_integrator_system;
