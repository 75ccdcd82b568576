//! Calculator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::auto::AutoNtt;
use crate::calculator::{Calculator, CoreCalculator, MulCalculator, MulError};
use crate::hybrid::HybridNtt;
use crate::reference::BigIntReference;
use crate::simple::SimpleNtt;

/// Factory trait for creating calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a calculator by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, MulError>;

    /// List all available calculator names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
///
/// Cached calculators keep their buffer pools warm across queries.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Calculator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_calculator(name: &str) -> Result<Arc<dyn Calculator>, MulError> {
        let core: Arc<dyn CoreCalculator> = match name {
            "auto" => Arc::new(AutoNtt::new()),
            "simple" => Arc::new(SimpleNtt::new()),
            "hybrid" => Arc::new(HybridNtt::new()),
            "bigint" => Arc::new(BigIntReference::new()),
            _ => return Err(MulError::Config(format!("unknown calculator: {name}"))),
        };
        Ok(Arc::new(MulCalculator::new(core)))
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, MulError> {
        if let Some(calc) = self.cache.read().get(name) {
            return Ok(Arc::clone(calc));
        }

        let calc = Self::create_calculator(name)?;
        self.cache
            .write()
            .entry(name.to_string())
            .or_insert_with(|| Arc::clone(&calc));
        Ok(calc)
    }

    fn available(&self) -> Vec<&str> {
        vec!["auto", "simple", "hybrid", "bigint"]
    }
}
