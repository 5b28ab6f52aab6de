#![allow(dead_code)]

mod assertions;
mod fixtures;
mod test_app;

pub use assertions::{assert_arcade_state_valid, assert_position_eq};
pub use fixtures::{level_start, menu_transcript, test_config};
pub use test_app::{TestApp, TestAppBuilder};
