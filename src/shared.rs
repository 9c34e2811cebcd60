//! Process-wide default generator.
//!
//! Built on first use from [`Config::from_env`] and reused afterwards. A
//! failed build is not cached, so a later call retries.

use once_cell::sync::OnceCell;

use crate::config::Config;
use crate::error::BrevIdError;
use crate::generator::BrevId;

static SHARED: OnceCell<BrevId> = OnceCell::new();

/// The shared generator, building it if needed.
pub fn shared() -> Result<&'static BrevId, BrevIdError> {
    SHARED.get_or_try_init(|| BrevId::new(Config::from_env()))
}

/// Generate an ID with the shared generator.
///
/// # Examples
/// ```no_run
/// let id = brevid::generate().unwrap();
/// assert!(id.len() >= 5);
/// ```
pub fn generate() -> Result<String, BrevIdError> {
    shared()?.generate()
}
