use std::env;

use super::types::Config;

pub const ENV_START_TIMESTAMP: &str = "BREVID_START_TIMESTAMP";
pub const ENV_MIN_LENGTH: &str = "BREVID_MIN_LENGTH";
pub const ENV_TIME_MAGNITUDE: &str = "BREVID_TIME_MAGNITUDE";
pub const ENV_HOST_MAGNITUDE: &str = "BREVID_HOST_MAGNITUDE";
pub const ENV_RAND_MAGNITUDE: &str = "BREVID_RAND_MAGNITUDE";
pub const ENV_CHARACTER_SET: &str = "BREVID_CHARACTER_SET";

pub(super) fn apply_env(config: &mut Config) {
    apply_with(config, |key| env::var(key).ok());
}

/// Overlay values from `lookup`; numbers that fail to parse are ignored.
pub(super) fn apply_with<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let number = |key: &str| lookup(key).and_then(|val| val.trim().parse::<i64>().ok());

    if let Some(n) = number(ENV_START_TIMESTAMP) {
        config.start_timestamp = Some(n);
    }
    if let Some(n) = number(ENV_MIN_LENGTH) {
        config.min_length = Some(n);
    }
    if let Some(n) = number(ENV_TIME_MAGNITUDE) {
        config.time_magnitude = Some(n);
    }
    if let Some(n) = number(ENV_HOST_MAGNITUDE) {
        config.host_magnitude = Some(n);
    }
    if let Some(n) = number(ENV_RAND_MAGNITUDE) {
        config.rand_magnitude = Some(n);
    }
    if let Some(val) = lookup(ENV_CHARACTER_SET) {
        config.character_set = Some(val);
    }
}
