//! The ID generator.
//!
//! A [`BrevId`] validates its configuration once, caches the host fingerprint
//! and process id, then builds each ID from the tuple
//! `[time_value, hashed_hostname, pid, random]`.

use std::fmt;
use std::sync::Arc;

use crate::clock::{self, Clock, SystemClock};
use crate::config::{Config, ValidConfig};
use crate::encoder::{Encoder, SqidsEncoder};
use crate::environment::{Environment, SystemEnvironment};
use crate::error::BrevIdError;
use crate::fingerprint::fixed_digits;
use crate::random::{RandomSource, ThreadRandom};

/// The numeric tuple an ID is encoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdComponents {
    /// Scaled time since the configured start timestamp.
    pub time_value: u64,
    /// Fixed-digit fingerprint of the hostname.
    pub hashed_hostname: u64,
    /// Process id captured at construction.
    pub pid: u32,
    /// Uniform draw from `0..=rand_max`.
    pub random: u64,
}

impl IdComponents {
    /// The tuple in encoding order.
    pub fn to_array(&self) -> [u64; 4] {
        [
            self.time_value,
            self.hashed_hostname,
            u64::from(self.pid),
            self.random,
        ]
    }
}

/// Short ID generator.
///
/// Immutable after construction and safe to share across threads.
///
/// # Examples
/// ```no_run
/// use brevid::{BrevId, Config};
///
/// let generator = BrevId::new(Config::default().with_min_length(8)).unwrap();
/// let id = generator.generate().unwrap();
/// assert!(id.len() >= 8);
/// ```
pub struct BrevId {
    config: ValidConfig,
    time_exponent: i64,
    start_baseline: i64,
    rand_max: u64,
    hashed_hostname: u64,
    pid: u32,
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
    encoder: Box<dyn Encoder>,
}

impl BrevId {
    /// Build a generator backed by the system clock, thread RNG, OS host
    /// identity and the sqids encoder.
    pub fn new(config: Config) -> Result<Self, BrevIdError> {
        Self::builder(config).build()
    }

    /// Start a builder for injecting collaborators.
    pub fn builder(config: Config) -> BrevIdBuilder {
        BrevIdBuilder::new(config)
    }

    /// Generate a new ID.
    pub fn generate(&self) -> Result<String, BrevIdError> {
        let components = self.components();
        let id = self.encoder.encode(&components.to_array())?;
        tracing::trace!(
            time_value = components.time_value,
            random = components.random,
            id = %id,
            "generated id"
        );
        Ok(id)
    }

    /// Sample the tuple an ID would be built from right now.
    ///
    /// Reads the clock and draws a fresh random value; the host fingerprint
    /// and pid are the cached ones.
    pub fn components(&self) -> IdComponents {
        let scaled = clock::scaled_timestamp(self.clock.now(), self.time_exponent);
        // A clock behind the start baseline saturates to zero.
        let elapsed = scaled.saturating_sub(self.start_baseline);
        let time_value = u64::try_from(elapsed).unwrap_or(0);

        IdComponents {
            time_value,
            hashed_hostname: self.hashed_hostname,
            pid: self.pid,
            random: self.random.next_in(self.rand_max),
        }
    }

    /// `10^(time_magnitude-1)`.
    pub fn time_exponent(&self) -> i64 {
        self.time_exponent
    }

    /// Upper bound of the random component, `10^rand_magnitude - 1`.
    pub fn rand_max(&self) -> u64 {
        self.rand_max
    }

    /// Host fingerprint with exactly `host_magnitude` digits.
    pub fn hashed_hostname(&self) -> u64 {
        self.hashed_hostname
    }

    /// Process id captured at construction.
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Unix seconds that time values are measured from.
    pub fn start_timestamp(&self) -> i64 {
        self.config.start_timestamp
    }

    /// Minimum length of generated IDs.
    pub fn min_length(&self) -> u8 {
        self.config.min_length
    }

    /// Alphabet handed to the sqids encoder.
    pub fn character_set(&self) -> &str {
        &self.config.character_set
    }
}

impl fmt::Debug for BrevId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrevId")
            .field("config", &self.config)
            .field("time_exponent", &self.time_exponent)
            .field("start_baseline", &self.start_baseline)
            .field("rand_max", &self.rand_max)
            .field("hashed_hostname", &self.hashed_hostname)
            .field("pid", &self.pid)
            .finish_non_exhaustive()
    }
}

/// Builder for [`BrevId`] with replaceable collaborators.
///
/// Anything left unset uses the system default.
pub struct BrevIdBuilder {
    config: Config,
    clock: Option<Arc<dyn Clock>>,
    random: Option<Arc<dyn RandomSource>>,
    environment: Option<Box<dyn Environment>>,
    encoder: Option<Box<dyn Encoder>>,
    host_fingerprint: Option<u64>,
}

impl BrevIdBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            clock: None,
            random: None,
            environment: None,
            encoder: None,
            host_fingerprint: None,
        }
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    pub fn random(mut self, random: impl RandomSource + 'static) -> Self {
        self.random = Some(Arc::new(random));
        self
    }

    pub fn environment(mut self, environment: impl Environment + 'static) -> Self {
        self.environment = Some(Box::new(environment));
        self
    }

    /// Replace the sqids encoder. The configured character set and minimum
    /// length are still validated but not passed to `encoder`.
    pub fn encoder(mut self, encoder: impl Encoder + 'static) -> Self {
        self.encoder = Some(Box::new(encoder));
        self
    }

    /// Use a precomputed host fingerprint instead of hashing the hostname.
    ///
    /// The hostname is then never looked up; the pid still is.
    pub fn host_fingerprint(mut self, fingerprint: u64) -> Self {
        self.host_fingerprint = Some(fingerprint);
        self
    }

    /// Validate the configuration and resolve the host identity.
    pub fn build(self) -> Result<BrevId, BrevIdError> {
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let random = self.random.unwrap_or_else(|| Arc::new(ThreadRandom));
        let environment = self
            .environment
            .unwrap_or_else(|| Box::new(SystemEnvironment));

        let config = self.config.validate(clock.now().timestamp())?;

        let time_exponent = 10i64.pow(config.time_magnitude - 1);
        let start_baseline = config.start_timestamp.saturating_mul(time_exponent);
        let rand_max = 10u64.pow(config.rand_magnitude) - 1;

        let hashed_hostname = match self.host_fingerprint {
            Some(fingerprint) => fingerprint,
            None => {
                let hostname = environment.hostname()?;
                // host_magnitude was checked against MAX_HEX_DIGITS above.
                fixed_digits(hostname.as_encoded_bytes(), config.host_magnitude)
            }
        };
        let pid = environment.current_process_id()?;

        let encoder: Box<dyn Encoder> = match self.encoder {
            Some(encoder) => encoder,
            None => {
                let sqids = SqidsEncoder::new(&config.character_set, config.min_length)?;
                Box::new(sqids)
            }
        };

        tracing::debug!(
            start_timestamp = config.start_timestamp,
            min_length = config.min_length,
            time_exponent,
            rand_max,
            hashed_hostname,
            pid,
            "brevid generator ready"
        );

        Ok(BrevId {
            config,
            time_exponent,
            start_baseline,
            rand_max,
            hashed_hostname,
            pid,
            clock,
            random,
            encoder,
        })
    }
}
