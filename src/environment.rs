//! Host identity: hostname and process id.
//!
//! Both values are read once when a generator is built. `SystemEnvironment`
//! asks the operating system; `FixedEnvironment` returns preset values.

use std::ffi::OsString;
use std::fmt;

/// The host identity could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentError {
    /// Hostname lookup failed.
    Hostname(String),
    /// Process id lookup failed.
    ProcessId(String),
}

impl fmt::Display for EnvironmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hostname(msg) => write!(f, "Unable to determine hostname: {}", msg),
            Self::ProcessId(msg) => write!(f, "Unable to determine process ID: {}", msg),
        }
    }
}

impl std::error::Error for EnvironmentError {}

/// Source of the local host identity.
pub trait Environment: Send + Sync {
    /// The local hostname, exactly as the OS reports it.
    ///
    /// Not necessarily UTF-8; the fingerprint is taken over its raw bytes.
    fn hostname(&self) -> Result<OsString, EnvironmentError>;

    /// The current process id.
    fn current_process_id(&self) -> Result<u32, EnvironmentError>;
}

/// Reads the hostname and pid from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn hostname(&self) -> Result<OsString, EnvironmentError> {
        let name = hostname::get()
            .map_err(|e| EnvironmentError::Hostname(e.to_string()))?;
        if name.is_empty() {
            return Err(EnvironmentError::Hostname("empty hostname".to_string()));
        }
        Ok(name)
    }

    fn current_process_id(&self) -> Result<u32, EnvironmentError> {
        Ok(std::process::id())
    }
}

/// Preset host identity for deterministic tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedEnvironment {
    hostname: Option<OsString>,
    pid: Option<u32>,
}

impl FixedEnvironment {
    pub fn new(hostname: impl Into<OsString>, pid: u32) -> Self {
        Self {
            hostname: Some(hostname.into()),
            pid: Some(pid),
        }
    }

    /// An environment whose hostname lookup fails.
    pub fn without_hostname(pid: u32) -> Self {
        Self {
            hostname: None,
            pid: Some(pid),
        }
    }

    /// An environment whose pid lookup fails.
    pub fn without_pid(hostname: impl Into<OsString>) -> Self {
        Self {
            hostname: Some(hostname.into()),
            pid: None,
        }
    }
}

impl Environment for FixedEnvironment {
    fn hostname(&self) -> Result<OsString, EnvironmentError> {
        self.hostname
            .clone()
            .ok_or_else(|| EnvironmentError::Hostname("not available".to_string()))
    }

    fn current_process_id(&self) -> Result<u32, EnvironmentError> {
        self.pid
            .ok_or_else(|| EnvironmentError::ProcessId("not available".to_string()))
    }
}
