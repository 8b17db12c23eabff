//! Routing configuration

use serde::{Deserialize, Serialize};

/// Tunable limits for the routing rules
///
/// The rule order, the fraud vocabulary and the mandatory schema are fixed;
/// only these thresholds vary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Claims estimated strictly below this amount (whole dollars) are fast-tracked
    pub fast_track_threshold: u64,

    /// Characters of the lowercased description quoted in fraud reasoning
    pub fraud_excerpt_chars: usize,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            fast_track_threshold: 25_000,
            fraud_excerpt_chars: 100,
        }
    }
}

impl RoutingConfig {
    /// Configuration that never fast-tracks; every clean claim gets a manual review
    pub fn no_fast_track() -> Self {
        Self {
            fast_track_threshold: 0,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RoutingConfig::default();
        assert_eq!(config.fast_track_threshold, 25_000);
        assert_eq!(config.fraud_excerpt_chars, 100);
    }

    #[test]
    fn test_no_fast_track_config() {
        let config = RoutingConfig::no_fast_track();
        assert_eq!(config.fast_track_threshold, 0);
        assert_eq!(config.fraud_excerpt_chars, 100);
    }
}
