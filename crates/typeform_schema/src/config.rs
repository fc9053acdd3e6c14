//! Configuration for type registries.

/// Configuration for a [`Registry`](crate::Registry).
///
/// Controls intern-table sizing and interning diagnostics.
#[derive(Clone, Debug)]
pub struct RegistryConfig {
    /// Initial capacity of the intern table.
    pub capacity: usize,

    /// Emit `tracing` events when types are interned or reused.
    pub log_interning: bool,

    /// Register `Any`, `Str`, `Num`, `Bool`, and `Int32` at construction.
    pub preintern_primitives: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            log_interning: true,
            preintern_primitives: true,
        }
    }
}

impl RegistryConfig {
    /// Creates a configuration with interning events turned off.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            log_interning: false,
            ..Self::default()
        }
    }

    /// Builder method to set the initial capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builder method to enable/disable interning events.
    #[must_use]
    pub fn with_log_interning(mut self, log: bool) -> Self {
        self.log_interning = log;
        self
    }

    /// Builder method to enable/disable eager primitive registration.
    #[must_use]
    pub fn with_preintern_primitives(mut self, preintern: bool) -> Self {
        self.preintern_primitives = preintern;
        self
    }
}
