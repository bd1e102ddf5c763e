use serde::{Deserialize, Serialize};

use crate::error::{LotteryError, Result};

/// Default number of lotteries run when estimating pick odds
pub const DEFAULT_N_SIMULATIONS: usize = 10_000;

/// Default number of lotteries per parallel work unit
pub const DEFAULT_BATCH_SIZE: usize = 1_000;

/// Options for seeded and batched lottery runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LotteryConfig {
    /// Master seed; `None` draws from OS entropy
    pub seed: Option<u64>,

    /// Lotteries to run for Monte Carlo odds estimation
    pub n_simulations: usize,

    /// Lotteries per rayon task
    pub batch_size: usize,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        LotteryConfig {
            seed: None,
            n_simulations: DEFAULT_N_SIMULATIONS,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl LotteryConfig {
    /// Config with a fixed seed and default sizing.
    pub fn seeded(seed: u64) -> Self {
        LotteryConfig {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: LotteryConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_simulations == 0 {
            return Err(LotteryError::Config("n_simulations must be at least 1".to_string()));
        }
        if self.batch_size == 0 {
            return Err(LotteryError::Config("batch_size must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = LotteryConfig::from_json_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.n_simulations, DEFAULT_N_SIMULATIONS);
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = LotteryConfig::from_json_str("{}").unwrap();
        assert_eq!(config, LotteryConfig::default());
    }

    #[test]
    fn test_rejects_zero_simulations() {
        let err = LotteryConfig::from_json_str(r#"{"n_simulations": 0}"#).unwrap_err();
        assert!(matches!(err, LotteryError::Config(_)));
    }

    #[test]
    fn test_rejects_zero_batch_size() {
        let config = LotteryConfig {
            batch_size: 0,
            ..LotteryConfig::seeded(1)
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = LotteryConfig::from_json_str("{seed: }").unwrap_err();
        assert!(matches!(err, LotteryError::Json(_)));
    }
}
