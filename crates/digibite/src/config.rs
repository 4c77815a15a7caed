//! Runtime settings, read from `DIGIBITE_*` environment variables.

use crate::model::Price;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Charge added on top of every order subtotal, in Rupiah.
pub const DEFAULT_SERVICE_FEE: Price = 2_000;
pub const DEFAULT_CHECKOUT_DELAY_MS: u64 = 1_500;
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 500;
pub const DEFAULT_SESSION_KEY: &str = "auth-storage";
pub const DEFAULT_MAILBOX_SIZE: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub service_fee: Price,
    /// Simulated payment confirmation wait.
    pub checkout_delay: Duration,
    /// Simulated identity provider round trip.
    pub login_delay: Duration,
    /// Key the auth state is stored under.
    pub session_key: String,
    /// Directory for the file-backed session store; `None` keeps it in memory.
    pub session_dir: Option<PathBuf>,
    /// Mailbox capacity of every actor.
    pub mailbox_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_fee: DEFAULT_SERVICE_FEE,
            checkout_delay: Duration::from_millis(DEFAULT_CHECKOUT_DELAY_MS),
            login_delay: Duration::from_millis(DEFAULT_LOGIN_DELAY_MS),
            session_key: DEFAULT_SESSION_KEY.to_string(),
            session_dir: None,
            mailbox_size: DEFAULT_MAILBOX_SIZE,
        }
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

fn env_string(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    /// Defaults overridden by whatever `DIGIBITE_*` variables are set.
    /// Values that fail to parse fall back to the default.
    pub fn from_env() -> Self {
        Self {
            service_fee: env_u64("DIGIBITE_SERVICE_FEE", DEFAULT_SERVICE_FEE),
            checkout_delay: Duration::from_millis(env_u64(
                "DIGIBITE_CHECKOUT_DELAY_MS",
                DEFAULT_CHECKOUT_DELAY_MS,
            )),
            login_delay: Duration::from_millis(env_u64(
                "DIGIBITE_LOGIN_DELAY_MS",
                DEFAULT_LOGIN_DELAY_MS,
            )),
            session_key: env_string("DIGIBITE_SESSION_KEY")
                .unwrap_or_else(|| DEFAULT_SESSION_KEY.to_string()),
            session_dir: env_string("DIGIBITE_SESSION_DIR").map(PathBuf::from),
            mailbox_size: env_usize("DIGIBITE_MAILBOX_SIZE", DEFAULT_MAILBOX_SIZE),
        }
    }

    /// Same settings without artificial delays.
    pub fn without_delays(mut self) -> Self {
        self.checkout_delay = Duration::ZERO;
        self.login_delay = Duration::ZERO;
        self
    }
}
