//! Retry policy with exponential backoff and jitter.

use std::time::Duration;

use rand::Rng;

/// Configuration for retry behavior.
///
/// Delays grow exponentially (`initial_delay * factor^attempt`) with full
/// jitter added on top, capped at `max_delay`. A `Retry-After` value from the
/// server takes precedence over the computed backoff, capped at
/// `max_retry_after`.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts.
    pub max_attempts: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Upper bound on any computed delay.
    pub max_delay: Duration,
    /// Exponential growth factor.
    pub factor: f64,
    /// Whether to honor `Retry-After` headers.
    pub respect_retry_after: bool,
    /// Upper bound on a `Retry-After` wait.
    pub max_retry_after: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
            factor: 2.0,
            respect_retry_after: true,
            max_retry_after: Duration::from_secs(60),
        }
    }
}

impl RetryConfig {
    /// Set the maximum number of retry attempts.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the delay before the first retry.
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the upper bound on computed delays.
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// A config that never retries.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 0,
            ..Default::default()
        }
    }

    /// Base (pre-jitter) delay for a 0-indexed attempt.
    fn base_delay(&self, attempt: u32) -> Duration {
        let multiplier = self.factor.powi(attempt as i32);
        let delay = Duration::from_secs_f64(self.initial_delay.as_secs_f64() * multiplier);
        delay.min(self.max_delay)
    }
}

/// Tracks retry attempts for one logical request.
#[derive(Debug, Clone)]
pub struct RetryState {
    config: RetryConfig,
    attempt: u32,
}

impl RetryState {
    /// Create a fresh retry state from a config.
    pub fn new(config: RetryConfig) -> Self {
        Self { config, attempt: 0 }
    }

    /// The current attempt number (0-indexed).
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Whether the retry budget allows another attempt.
    pub fn can_retry(&self) -> bool {
        self.attempt < self.config.max_attempts
    }

    /// Record a failed attempt and return the delay before the next one, or
    /// `None` if the budget is exhausted.
    ///
    /// `retry_after` is the server-provided wait, if any.
    pub fn next_delay(&mut self, retry_after: Option<Duration>) -> Option<Duration> {
        if !self.can_retry() {
            return None;
        }

        let delay = match retry_after {
            Some(wait) if self.config.respect_retry_after => {
                wait.min(self.config.max_retry_after)
            }
            _ => {
                let base = self.config.base_delay(self.attempt);
                // Full jitter: uniform in [base, 2 * base).
                let jitter = rand::rng().random::<f64>() * base.as_secs_f64();
                (base + Duration::from_secs_f64(jitter)).min(self.config.max_delay)
            }
        };

        self.attempt += 1;
        Some(delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RetryConfig::default();
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.initial_delay, Duration::from_millis(500));
        assert!(config.respect_retry_after);
    }

    #[test]
    fn test_no_retry() {
        let state = RetryState::new(RetryConfig::no_retry());
        assert!(!state.can_retry());
    }

    #[test]
    fn test_base_delay_growth() {
        let config = RetryConfig::default()
            .with_initial_delay(Duration::from_secs(1))
            .with_max_delay(Duration::from_secs(60));

        assert_eq!(config.base_delay(0), Duration::from_secs(1));
        assert_eq!(config.base_delay(1), Duration::from_secs(2));
        assert_eq!(config.base_delay(2), Duration::from_secs(4));
        // Capped at max_delay.
        assert_eq!(config.base_delay(10), Duration::from_secs(60));
    }

    #[test]
    fn test_jitter_bounds() {
        let config = RetryConfig::default()
            .with_initial_delay(Duration::from_secs(1))
            .with_max_delay(Duration::from_secs(60));
        let mut state = RetryState::new(config);

        // Jitter keeps the delay within [base, 2 * base).
        let delay = state.next_delay(None).unwrap();
        assert!(delay >= Duration::from_secs(1));
        assert!(delay <= Duration::from_secs(2));

        let delay = state.next_delay(None).unwrap();
        assert!(delay >= Duration::from_secs(2));
        assert!(delay <= Duration::from_secs(4));
    }

    #[test]
    fn test_budget_exhaustion() {
        let mut state = RetryState::new(RetryConfig::default().with_max_attempts(2));

        assert!(state.next_delay(None).is_some());
        assert!(state.next_delay(None).is_some());
        assert_eq!(state.attempt(), 2);
        assert!(!state.can_retry());
        assert!(state.next_delay(None).is_none());
    }

    #[test]
    fn test_retry_after_precedence() {
        let mut state = RetryState::new(RetryConfig::default());

        let delay = state.next_delay(Some(Duration::from_secs(30))).unwrap();
        assert_eq!(delay, Duration::from_secs(30));

        // Excessive Retry-After is capped.
        let delay = state.next_delay(Some(Duration::from_secs(300))).unwrap();
        assert_eq!(delay, Duration::from_secs(60));
    }

    #[test]
    fn test_retry_after_ignored_when_disabled() {
        let mut config = RetryConfig::default().with_initial_delay(Duration::from_secs(1));
        config.respect_retry_after = false;
        let mut state = RetryState::new(config);

        let delay = state.next_delay(Some(Duration::from_secs(30))).unwrap();
        // Falls back to backoff, which is at most 2s on the first attempt.
        assert!(delay <= Duration::from_secs(2));
    }
}
