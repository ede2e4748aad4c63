//! Multiplier factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::MatrixError;
use crate::options::Options;
use crate::scalar::Scalar;
use crate::strategy::{Multiplier, NaiveStrategy, ParallelStrassenStrategy, StrassenStrategy};

/// Names accepted by [`DefaultFactory`], in presentation order.
pub const STRATEGY_NAMES: [&str; 3] = ["naive", "strassen", "parallel"];

/// Factory trait for creating multipliers.
pub trait MultiplierFactory<T: Scalar>: Send + Sync {
    /// Get or create a multiplier by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier<T>>, MatrixError>;

    /// List all available multiplier names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory<T: Scalar> {
    opts: Options,
    cache: RwLock<HashMap<String, Arc<dyn Multiplier<T>>>>,
}

impl<T: Scalar> DefaultFactory<T> {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Create a factory whose parallel strategy uses `opts`.
    #[must_use]
    pub fn with_options(opts: Options) -> Self {
        Self {
            opts: opts.normalize(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_multiplier(&self, name: &str) -> Result<Arc<dyn Multiplier<T>>, MatrixError> {
        match name {
            "naive" => Ok(Arc::new(NaiveStrategy::new())),
            "strassen" => Ok(Arc::new(StrassenStrategy::new())),
            "parallel" => Ok(Arc::new(ParallelStrassenStrategy::with_options(
                self.opts.clone(),
            ))),
            _ => Err(MatrixError::Config(format!("unknown strategy: {name}"))),
        }
    }
}

impl<T: Scalar> Default for DefaultFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> MultiplierFactory<T> for DefaultFactory<T> {
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier<T>>, MatrixError> {
        // Check cache first
        if let Some(multiplier) = self.cache.read().get(name) {
            return Ok(Arc::clone(multiplier));
        }

        let multiplier = self.create_multiplier(name)?;
        debug!(strategy = name, "created multiplier");
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&multiplier));
        Ok(multiplier)
    }

    fn available(&self) -> Vec<&str> {
        STRATEGY_NAMES.to_vec()
    }
}
