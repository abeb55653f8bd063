//! Read configuration for matrix loading and batch runs

use crate::error::{Error, Result};
use pmatrix_core::ByteOrder;
use std::str::FromStr;

/// Environment variable selecting the byte order of input files
pub const BYTE_ORDER_ENV: &str = "PMATRIX_BYTE_ORDER";
/// Environment variable selecting what happens when one file in a batch fails
pub const ON_ERROR_ENV: &str = "PMATRIX_ON_ERROR";
/// Environment variable enabling memory-mapped loading
pub const MMAP_ENV: &str = "PMATRIX_MMAP";

/// What a directory run does when one of its files fails to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Stop at the first failing file
    #[default]
    Abort,
    /// Log the failure, continue with the next file, fail at the end
    Skip,
}

impl FromStr for BatchPolicy {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(BatchPolicy::Abort),
            "skip" => Ok(BatchPolicy::Skip),
            _ => Err(()),
        }
    }
}

/// Configuration for reading matrix files
#[derive(Debug, Clone, Default)]
pub struct ReadConfig {
    /// Byte order used to decode every value
    pub byte_order: ByteOrder,
    /// Behavior when a file in a directory batch fails
    pub batch_policy: BatchPolicy,
    /// Decode from a memory map instead of discrete reads
    pub use_mmap: bool,
}

impl ReadConfig {
    /// Set the byte order
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Set the batch failure policy
    pub fn with_batch_policy(mut self, batch_policy: BatchPolicy) -> Self {
        self.batch_policy = batch_policy;
        self
    }

    /// Enable or disable memory-mapped loading
    pub fn with_mmap(mut self, use_mmap: bool) -> Self {
        self.use_mmap = use_mmap;
        self
    }

    /// Build from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(BYTE_ORDER_ENV) {
            config.byte_order = value.parse().map_err(|_| Error::InvalidConfig {
                key: BYTE_ORDER_ENV,
                value,
            })?;
        }

        if let Some(value) = lookup(ON_ERROR_ENV) {
            config.batch_policy = value.parse().map_err(|_| Error::InvalidConfig {
                key: ON_ERROR_ENV,
                value,
            })?;
        }

        if let Some(value) = lookup(MMAP_ENV) {
            config.use_mmap = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                _ => {
                    return Err(Error::InvalidConfig {
                        key: MMAP_ENV,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ReadConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.byte_order, ByteOrder::Native);
        assert_eq!(config.batch_policy, BatchPolicy::Abort);
        assert!(!config.use_mmap);
    }

    #[test]
    fn test_all_keys() {
        let config = ReadConfig::from_lookup(lookup_from(&[
            (BYTE_ORDER_ENV, "big"),
            (ON_ERROR_ENV, "Skip"),
            (MMAP_ENV, "1"),
        ]))
        .unwrap();
        assert_eq!(config.byte_order, ByteOrder::Big);
        assert_eq!(config.batch_policy, BatchPolicy::Skip);
        assert!(config.use_mmap);
    }

    #[test]
    fn test_invalid_values() {
        let err = ReadConfig::from_lookup(lookup_from(&[(BYTE_ORDER_ENV, "pdp")])).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { key: BYTE_ORDER_ENV, .. }));

        let err = ReadConfig::from_lookup(lookup_from(&[(ON_ERROR_ENV, "retry")])).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { key: ON_ERROR_ENV, .. }));

        let err = ReadConfig::from_lookup(lookup_from(&[(MMAP_ENV, "maybe")])).unwrap_err();
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn test_builder() {
        let config = ReadConfig::default()
            .with_byte_order(ByteOrder::Little)
            .with_batch_policy(BatchPolicy::Skip)
            .with_mmap(true);
        assert_eq!(config.byte_order, ByteOrder::Little);
        assert_eq!(config.batch_policy, BatchPolicy::Skip);
        assert!(config.use_mmap);
    }
}
