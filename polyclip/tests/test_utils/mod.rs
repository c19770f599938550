#![allow(dead_code)]

mod path_modifiers;
mod path_test_properties;
mod winding;

pub use path_modifiers::*;
pub use path_test_properties::*;
pub use winding::*;

/// Install `env_logger` so `RUST_LOG=polyclip=trace cargo test` shows engine logging.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
