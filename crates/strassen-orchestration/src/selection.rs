//! Strategy selection logic.

use std::sync::Arc;

use strassen_core::registry::MultiplierFactory;
use strassen_core::{MatrixError, Multiplier, Scalar};

/// Get multipliers to run based on strategy selection (`all` or a name).
pub fn get_multipliers_to_run<T: Scalar>(
    strategy: &str,
    factory: &dyn MultiplierFactory<T>,
) -> Result<Vec<Arc<dyn Multiplier<T>>>, MatrixError> {
    match strategy {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}
