//! Runtime configuration

use crate::data::DEFAULT_BUCKETS;
use crate::GameError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Knobs fixed for the lifetime of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Size of the suspect hash table. A prime keeps chains short.
    pub suspect_buckets: usize,
    /// Deepest mansion the path stack is sized for
    pub max_depth: usize,
    /// How long the TUI waits for a key before redrawing
    pub tick_rate_ms: u64,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.suspect_buckets == 0 {
            return Err(GameError::InvalidConfig("bucket count must be positive".to_string()));
        }
        if self.max_depth == 0 {
            return Err(GameError::InvalidConfig("max depth must be positive".to_string()));
        }
        if self.tick_rate_ms == 0 {
            return Err(GameError::InvalidConfig("tick rate must be positive".to_string()));
        }
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            suspect_buckets: DEFAULT_BUCKETS,
            max_depth: 32,
            tick_rate_ms: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.suspect_buckets, 53);
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
    }

    #[test]
    fn zero_values_are_rejected() {
        let zero_buckets = GameConfig { suspect_buckets: 0, ..GameConfig::default() };
        let zero_depth = GameConfig { max_depth: 0, ..GameConfig::default() };
        let zero_tick = GameConfig { tick_rate_ms: 0, ..GameConfig::default() };
        for config in [zero_buckets, zero_depth, zero_tick] {
            assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
        }
    }
}
