//! # Tracing Setup
//!
//! One subscriber for the whole process: compact `fmt` output with span names
//! inline, module targets hidden (the actor loop already records `entity_type`),
//! filtered through `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle events
//! RUST_LOG=debug cargo run    # request payloads
//! ```

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber.
///
/// Safe to call more than once; later calls are ignored (tests share a process).
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_tracing_twice_does_not_panic() {
        setup_tracing();
        setup_tracing();
        tracing::info!("subscriber installed");
    }
}
