//! Configuration for brevid generators.
//!
//! Precedence (highest to lowest): explicit `with_*` values set after
//! loading > env vars > defaults.

mod env;
mod types;

pub use env::{
    ENV_CHARACTER_SET, ENV_HOST_MAGNITUDE, ENV_MIN_LENGTH, ENV_RAND_MAGNITUDE, ENV_START_TIMESTAMP,
    ENV_TIME_MAGNITUDE,
};
pub use types::*;
