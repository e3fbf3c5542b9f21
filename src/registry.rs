//! Named loggers the inference library can discover on its own.
//!
//! The global registry is created on first use and the default logger is registered into
//! it at that point, so every lookup sees it without the host passing it around.

use std::sync::OnceLock;

use ahash::{AHashMap, RandomState};
use parking_lot::RwLock;

use crate::{
    logger::{get_logger, InferLogger, DEFAULT_LOGGER_NAME},
    tracing::shim_macros::{debug, warn},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("logger `{0}` is already registered")]
    AlreadyExists(String),
}

pub struct LoggerRegistry {
    loggers: RwLock<AHashMap<String, &'static dyn InferLogger>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self {
            loggers: RwLock::new(AHashMap::with_hasher(RandomState::new())),
        }
    }

    /// Registers `logger` under `name`; the first registration of a name wins.
    pub fn register(
        &self,
        name: impl Into<String>,
        logger: &'static dyn InferLogger,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        {
            let mut loggers = self.loggers.write();
            if loggers.contains_key(&name) {
                return Err(RegistryError::AlreadyExists(name));
            }
            loggers.insert(name.clone(), logger);
        }
        debug!("registered logger {name}");
        Ok(())
    }

    pub fn look_up(&self, name: &str) -> Option<&'static dyn InferLogger> {
        self.loggers.read().get(name).copied()
    }

    pub fn registered_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("loggers", &self.registered_names())
            .finish()
    }
}

/// The process-wide registry, with the default logger already registered.
pub fn logger_registry() -> &'static LoggerRegistry {
    static REGISTRY: OnceLock<LoggerRegistry> = OnceLock::new();

    REGISTRY.get_or_init(|| {
        let registry = LoggerRegistry::new();
        if let Err(err) = registry.register(DEFAULT_LOGGER_NAME, get_logger()) {
            warn!("{err}");
        }
        registry
    })
}
