//! brevid: short, largely collision-resistant string IDs.
//!
//! Each ID encodes four integers:
//! - a scaled timestamp relative to a configurable start
//! - a fixed-digit fingerprint of the hostname
//! - the process id
//! - a bounded random value
//!
//! The tuple is turned into a string by an [`Encoder`](encoder::Encoder),
//! sqids by default, using a configurable alphabet and minimum length.
//!
//! ```no_run
//! use brevid::{BrevId, Config};
//!
//! let generator = BrevId::new(Config::default().with_time_magnitude(3)).unwrap();
//! println!("{}", generator.generate().unwrap());
//! ```

pub mod clock;
pub mod config;
pub mod encoder;
pub mod environment;
pub mod error;
pub mod fingerprint;
pub mod generator;
pub mod random;
pub mod shared;
pub mod validate;

pub use config::{Config, ConfigError};
pub use error::BrevIdError;
pub use generator::{BrevId, BrevIdBuilder, IdComponents};
pub use shared::generate;
