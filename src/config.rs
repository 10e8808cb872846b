// src/config.rs
use crate::errors::{ExecError, Result};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_RUNTIME: &str = "node";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

/// How to launch the external interpreter: `<runtime> <entrypoint> <source file>`.
#[derive(Debug, Clone)]
pub struct InterpreterConfig {
    pub runtime: String,
    pub entrypoint: PathBuf,
    pub timeout: Duration,
}

/// High-level application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub interpreter: InterpreterConfig,
    pub bind_addr: String,
    pub port: u16,
}

impl InterpreterConfig {
    pub fn new(runtime: impl Into<String>, entrypoint: impl Into<PathBuf>) -> Self {
        Self {
            runtime: runtime.into(),
            entrypoint: entrypoint.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, so tests don't touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let runtime = lookup("LCC_INTERPRETER_RUNTIME")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RUNTIME.to_string());

        let entrypoint = match lookup("LCC_INTERPRETER_PATH") {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => default_entrypoint()?,
        };

        let timeout_secs = match lookup("LCC_EXEC_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ExecError::Config(format!(
                        "LCC_EXEC_TIMEOUT_SECS must be a positive integer, got '{}'",
                        raw
                    )));
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let bind_addr = lookup("LCC_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let port = match lookup("LCC_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                ExecError::Config(format!("LCC_PORT must be a valid port number, got '{}'", raw))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(AppConfig {
            interpreter: InterpreterConfig {
                runtime,
                entrypoint,
                timeout: Duration::from_secs(timeout_secs),
            },
            bind_addr,
            port,
        })
    }
}

/// The emulator ships next to the service: `<install dir>/../emulator/src/core/lcc.js`.
fn default_entrypoint() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let install_dir = exe
        .parent()
        .ok_or_else(|| ExecError::Config(format!("cannot resolve install directory of {}", exe.display())))?;
    let base_dir = install_dir.parent().unwrap_or(install_dir);
    Ok(base_dir.join("emulator").join("src").join("core").join("lcc.js"))
}
