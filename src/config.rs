//! Configuration for layered-vfs.
//!
//! This module provides process-wide runtime limits.
//! Use [`ConfigBuilder`] at application startup to override the defaults.

use std::sync::OnceLock;

/// Global configuration, initialized via [`ConfigBuilder::init`].
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Default upper bound for a single materialised archive entry (256 MiB).
pub const DEFAULT_MAX_ENTRY_SIZE: u64 = 256 * 1024 * 1024;

/// Default initial capacity for line buffers.
pub const DEFAULT_LINE_CAPACITY: usize = 128;

/// Runtime configuration for layered-vfs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Largest archive entry (in bytes) that will be decoded into memory.
    /// Larger entries are reported as absent.
    pub max_entry_size: u64,
    /// Initial capacity used when reading a line into a `String`.
    pub line_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entry_size: DEFAULT_MAX_ENTRY_SIZE,
            line_capacity: DEFAULT_LINE_CAPACITY,
        }
    }
}

/// Configuration builder for fluent API.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    max_entry_size: Option<u64>,
    line_capacity: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the largest archive entry that may be decoded into memory.
    ///
    /// Default: 256 MiB
    ///
    /// # Example
    ///
    /// ```
    /// use layered_vfs::config::ConfigBuilder;
    ///
    /// ConfigBuilder::new()
    ///     .max_entry_size(16 * 1024 * 1024)
    ///     .init();
    /// ```
    pub fn max_entry_size(mut self, bytes: u64) -> Self {
        self.max_entry_size = Some(bytes);
        self
    }

    /// Set the initial capacity for line buffers.
    pub fn line_capacity(mut self, capacity: usize) -> Self {
        self.line_capacity = Some(capacity);
        self
    }

    /// Assemble the configuration without installing it.
    pub fn build(self) -> Config {
        let defaults = Config::default();
        Config {
            max_entry_size: self.max_entry_size.unwrap_or(defaults.max_entry_size),
            line_capacity: self.line_capacity.unwrap_or(defaults.line_capacity),
        }
    }

    /// Build and initialize the global configuration.
    ///
    /// This can only be called once. Subsequent calls are ignored.
    /// Returns `true` if configuration was set, `false` if already initialized.
    pub fn init(self) -> bool {
        CONFIG.set(self.build()).is_ok()
    }
}

/// Initialize layered-vfs with default configuration.
///
/// This is equivalent to `ConfigBuilder::new().init()`.
pub fn init_default() -> bool {
    ConfigBuilder::new().init()
}

/// Get the current configuration, or default if not initialized.
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.max_entry_size, DEFAULT_MAX_ENTRY_SIZE);
        assert_eq!(config.line_capacity, DEFAULT_LINE_CAPACITY);
    }

    #[test]
    fn test_builder() {
        let builder = ConfigBuilder::new().max_entry_size(1024);
        assert_eq!(builder.max_entry_size, Some(1024));

        let config = builder.build();
        assert_eq!(config.max_entry_size, 1024);
        assert_eq!(config.line_capacity, DEFAULT_LINE_CAPACITY);
    }
}
