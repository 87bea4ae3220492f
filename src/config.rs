//! Run configuration.
//!
//! A [`ZapConfig`] is built once per run and never mutated while the walk is
//! in progress. Values are layered:
//!
//! ```text
//! stock defaults  →  --config file (TOML)  →  CLI flags that were given
//! ```
//!
//! The CLI layer is translated by [`ConfigOverrides`] rather than by
//! extending the config type, so the core only ever sees the plain struct.
//!
//! ## Config File
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! min_pixels = 240000          # width * height below this is deleted
//! # max_bytes = 5000000        # larger files are skipped (omit = unbounded)
//! hard_delete = false          # true = permanent delete, false = trash
//! debug_only = false           # true = count only, never delete
//! skip_extensions = []         # e.g. ["gif", ".zip"]; leading dot optional
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Default pixel threshold: 400 x 600.
pub const DEFAULT_MIN_PIXELS: u64 = 240_000;

/// Thresholds and switches for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZapConfig {
    /// Images with `width * height` strictly below this are deleted.
    pub min_pixels: u64,
    /// Files larger than this are skipped without being inspected.
    /// `None` means unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bytes: Option<u64>,
    /// Permanent delete instead of moving to the trash.
    pub hard_delete: bool,
    /// Evaluate and count, but never remove anything.
    pub debug_only: bool,
    /// Extensions (normalized to a leading dot) skipped without inspection.
    pub skip_extensions: BTreeSet<String>,
}

impl Default for ZapConfig {
    fn default() -> Self {
        Self {
            min_pixels: DEFAULT_MIN_PIXELS,
            max_bytes: None,
            hard_delete: false,
            debug_only: false,
            skip_extensions: BTreeSet::new(),
        }
    }
}

impl ZapConfig {
    /// Whether a file of `bytes` exceeds the size ceiling.
    pub fn exceeds_max_bytes(&self, bytes: u64) -> bool {
        self.max_bytes.is_some_and(|max| bytes > max)
    }

    /// Rewrite every skip extension into its normalized form.
    pub fn normalize(&mut self) {
        self.skip_extensions = self
            .skip_extensions
            .iter()
            .filter_map(|e| normalize_extension(e))
            .collect();
    }

    /// Validate values that serde can't check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for ext in &self.skip_extensions {
            if !ext.starts_with('.') {
                return Err(ConfigError::Validation(format!(
                    "skip extension '{ext}' must start with '.'"
                )));
            }
            if ext.len() == 1 {
                return Err(ConfigError::Validation(
                    "skip extension must not be a bare '.'".into(),
                ));
            }
            if ext.contains('/') || ext.contains('\\') {
                return Err(ConfigError::Validation(format!(
                    "skip extension '{ext}' must not contain a path separator"
                )));
            }
        }
        Ok(())
    }

    /// Layer CLI overrides on top of this config.
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(min_pixels) = overrides.min_pixels {
            self.min_pixels = min_pixels;
        }
        if let Some(max_bytes) = overrides.max_bytes {
            self.max_bytes = Some(max_bytes);
        }
        if overrides.hard_delete {
            self.hard_delete = true;
        }
        if overrides.debug_only {
            self.debug_only = true;
        }
        if let Some(raw) = &overrides.skip_extensions {
            self.skip_extensions = parse_skip_extensions(raw);
        }
    }
}

/// Raw values taken from the command line. `None`/`false` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub min_pixels: Option<u64>,
    pub max_bytes: Option<u64>,
    pub hard_delete: bool,
    pub debug_only: bool,
    /// Comma-separated list as typed, e.g. `"gif, .zip"`.
    pub skip_extensions: Option<String>,
}

/// Normalize one extension token to leading-dot form.
///
/// Returns `None` for blank tokens.
pub fn normalize_extension(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('.') {
        Some(trimmed.to_string())
    } else {
        Some(format!(".{trimmed}"))
    }
}

/// Split a comma-separated extension list into normalized tokens.
///
/// `"gif, .png,,zip"` → `{".gif", ".png", ".zip"}`
pub fn parse_skip_extensions(raw: &str) -> BTreeSet<String> {
    raw.split(',').filter_map(normalize_extension).collect()
}

/// Load a config file, normalize it and validate it.
pub fn load_config_file(path: &Path) -> Result<ZapConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: ZapConfig = toml::from_str(&content)?;
    config.normalize();
    config.validate()?;
    Ok(config)
}

/// Resolve the effective config from an optional file plus CLI overrides.
pub fn resolve_config(
    file: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<ZapConfig, ConfigError> {
    let mut config = match file {
        Some(path) => load_config_file(path)?,
        None => ZapConfig::default(),
    };
    config.apply(overrides);
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock config file.
///
/// Printed by the `--gen-config` flag.
pub fn stock_config_toml() -> &'static str {
    r##"# Small Image Zapper Configuration
# ================================
# All settings are optional. Values shown below are the defaults.
# Flags given on the command line override values from this file.
# Unknown keys will cause an error.

# Minimum number of pixels (width * height). Anything smaller is deleted.
# 400 x 600 = 240,000.
min_pixels = 240000

# Files larger than this many bytes are skipped without being opened.
# Reading metadata is the slow part, so this is mostly a speed shortcut.
# Omit for no limit.
# max_bytes = 5000000

# true  = delete permanently
# false = move to the system trash / recycle bin
hard_delete = false

# Evaluate and count every file, but never delete anything.
debug_only = false

# Extensions to skip without opening the file. Leading dot optional.
# Matching is exact, so ".GIF" and ".gif" are different entries.
skip_extensions = []
"##
}
