use std::env;

use anyhow::{Context, Result};

use crate::error::TopTermsError;
use crate::preprocess::tweets::TweetCleaner;
use crate::topics::extract::{DegenerateRowPolicy, TopNPolicy, TopTermExtractor};

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy; CLI flags override
/// whatever is set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Terms kept per topic (TOPTERMS_TOP_N, default 10)
    pub top_n: usize,
    /// Normalize rows before ranking (TOPTERMS_NORMALIZE, default true)
    pub normalize: bool,
    /// Clamp top_n to the vocabulary size instead of failing
    pub clamp_top_n: bool,
    /// Skip zero-sum topics instead of failing
    pub skip_degenerate: bool,
    /// Keep English stop words when cleaning tweets
    pub keep_stop_words: bool,
    /// Shortest token kept when cleaning tweets (TOPTERMS_MIN_TOKEN_LEN, default 2)
    pub min_token_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_n: 10,
            normalize: true,
            clamp_top_n: false,
            skip_degenerate: false,
            keep_stop_words: false,
            min_token_len: 2,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Unset keys fall back to defaults; set but unparseable keys are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let top_n = match lookup("TOPTERMS_TOP_N") {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .with_context(|| format!("TOPTERMS_TOP_N must be a positive integer, got {v:?}"))?,
            None => defaults.top_n,
        };
        if top_n == 0 {
            anyhow::bail!("TOPTERMS_TOP_N must be at least 1");
        }

        let min_token_len = match lookup("TOPTERMS_MIN_TOKEN_LEN") {
            Some(v) => v.trim().parse::<usize>().with_context(|| {
                format!("TOPTERMS_MIN_TOKEN_LEN must be a non-negative integer, got {v:?}")
            })?,
            None => defaults.min_token_len,
        };

        Ok(Self {
            top_n,
            normalize: flag(&lookup, "TOPTERMS_NORMALIZE", defaults.normalize)?,
            clamp_top_n: flag(&lookup, "TOPTERMS_CLAMP_TOP_N", defaults.clamp_top_n)?,
            skip_degenerate: flag(&lookup, "TOPTERMS_SKIP_DEGENERATE", defaults.skip_degenerate)?,
            keep_stop_words: flag(&lookup, "TOPTERMS_KEEP_STOP_WORDS", defaults.keep_stop_words)?,
            min_token_len,
        })
    }

    /// Build the extractor described by this configuration.
    pub fn extractor(&self) -> TopTermExtractor {
        TopTermExtractor {
            top_n: self.top_n,
            normalize: self.normalize,
            top_n_policy: if self.clamp_top_n {
                TopNPolicy::Clamp
            } else {
                TopNPolicy::Strict
            },
            degenerate_policy: if self.skip_degenerate {
                DegenerateRowPolicy::Skip
            } else {
                DegenerateRowPolicy::Fail
            },
        }
    }

    /// Build the tweet cleaner described by this configuration.
    pub fn cleaner(&self) -> Result<TweetCleaner, TopTermsError> {
        Ok(TweetCleaner::new()?
            .with_stop_words_removed(!self.keep_stop_words)
            .with_min_token_len(self.min_token_len))
    }
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> Result<bool> {
    let Some(value) = lookup(key) else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("{key} must be true or false, got {other:?}"),
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("TOPTERMS_TOP_N", "5"),
            ("TOPTERMS_NORMALIZE", "no"),
            ("TOPTERMS_CLAMP_TOP_N", "1"),
            ("TOPTERMS_SKIP_DEGENERATE", "TRUE"),
        ]))
        .unwrap();

        assert_eq!(config.top_n, 5);
        assert!(!config.normalize);

        let extractor = config.extractor();
        assert_eq!(extractor.top_n_policy, TopNPolicy::Clamp);
        assert_eq!(extractor.degenerate_policy, DegenerateRowPolicy::Skip);
    }

    #[test]
    fn test_rejects_zero_top_n() {
        assert!(Config::from_lookup(lookup_from(&[("TOPTERMS_TOP_N", "0")])).is_err());
    }

    #[test]
    fn test_rejects_bad_flag() {
        assert!(Config::from_lookup(lookup_from(&[("TOPTERMS_NORMALIZE", "maybe")])).is_err());
    }
}
