use std::time::Duration;

/// Submission pacing configuration.
///
/// Both delays are UX pacing rather than architectural requirements; zero
/// is a valid value for either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingConfig {
    /// Simulated latency before the record is handed to the store
    /// (default: 1000 ms). Not a real network call.
    pub submit_delay: Duration,
    /// Delay between a successful submit and the redirect to the listing
    /// view (default: 1500 ms).
    pub redirect_delay: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(1000),
            redirect_delay: Duration::from_millis(1500),
        }
    }
}

impl PacingConfig {
    /// Load pacing from environment variables with defaults.
    ///
    /// | Env Var             | Default |
    /// |---------------------|---------|
    /// | `SUBMIT_DELAY_MS`   | `1000`  |
    /// | `REDIRECT_DELAY_MS` | `1500`  |
    pub fn from_env() -> Self {
        let submit_ms: u64 = std::env::var("SUBMIT_DELAY_MS")
            .unwrap_or_else(|_| "1000".into())
            .parse()
            .expect("SUBMIT_DELAY_MS must be a valid u64");

        let redirect_ms: u64 = std::env::var("REDIRECT_DELAY_MS")
            .unwrap_or_else(|_| "1500".into())
            .parse()
            .expect("REDIRECT_DELAY_MS must be a valid u64");

        Self {
            submit_delay: Duration::from_millis(submit_ms),
            redirect_delay: Duration::from_millis(redirect_ms),
        }
    }

    /// Zero-delay pacing, useful in tests.
    pub const fn immediate() -> Self {
        Self {
            submit_delay: Duration::ZERO,
            redirect_delay: Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_original_pacing() {
        let config = PacingConfig::default();
        assert_eq!(config.submit_delay, Duration::from_millis(1000));
        assert_eq!(config.redirect_delay, Duration::from_millis(1500));
    }

    #[test]
    fn from_env_overrides_defaults() {
        std::env::set_var("SUBMIT_DELAY_MS", "0");
        std::env::set_var("REDIRECT_DELAY_MS", "250");
        let config = PacingConfig::from_env();
        std::env::remove_var("SUBMIT_DELAY_MS");
        std::env::remove_var("REDIRECT_DELAY_MS");

        assert_eq!(config.submit_delay, Duration::ZERO);
        assert_eq!(config.redirect_delay, Duration::from_millis(250));
    }

    #[test]
    fn immediate_has_zero_delays() {
        let config = PacingConfig::immediate();
        assert_eq!(config.submit_delay, Duration::ZERO);
        assert_eq!(config.redirect_delay, Duration::ZERO);
    }
}
