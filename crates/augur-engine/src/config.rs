//! Configuration for the divination engine.

use std::time::Duration;

use crate::cooldown::COOLDOWN_SECS;

/// Configuration for a [`DivinationService`](crate::DivinationService).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Cooldown window applied to non-privileged users.
    pub cooldown: Duration,
    /// RNG seed for reproducible outcomes. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cooldown: Duration::from_secs(COOLDOWN_SECS),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the cooldown window.
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.cooldown, Duration::from_secs(120));
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn builder_methods() {
        let cfg = EngineConfig::default()
            .with_seed(123)
            .with_cooldown(Duration::from_secs(30));
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.cooldown, Duration::from_secs(30));
    }
}
