mod format;
mod math;

pub use format::format_general;
pub use math::{deg_to_rad, wrap_degrees};
