//! Engine configuration.

use juicebar_core::{DomainError, DomainResult};

/// Starting stock for every ingredient when the caller does not pick one.
pub const DEFAULT_INITIAL_STOCK: u32 = 10;

/// Environment variable overriding [`DEFAULT_INITIAL_STOCK`].
pub const INITIAL_STOCK_ENV: &str = "JUICEBAR_INITIAL_STOCK";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Stock every ingredient starts with.
    pub initial_stock: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_stock: DEFAULT_INITIAL_STOCK,
        }
    }
}

impl EngineConfig {
    pub fn with_initial_stock(initial_stock: u32) -> Self {
        Self { initial_stock }
    }

    /// Read configuration from the process environment (`JUICEBAR_INITIAL_STOCK`).
    pub fn from_env() -> DomainResult<Self> {
        Self::from_env_value(std::env::var(INITIAL_STOCK_ENV).ok().as_deref())
    }

    /// Build from the raw value of `JUICEBAR_INITIAL_STOCK`; unset or blank means default.
    pub fn from_env_value(value: Option<&str>) -> DomainResult<Self> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(raw) => raw.parse::<u32>().map(Self::with_initial_stock).map_err(|e| {
                DomainError::validation(format!("{INITIAL_STOCK_ENV}={raw:?}: {e}"))
            }),
        }
    }
}
