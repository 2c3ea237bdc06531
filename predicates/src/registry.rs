use std::collections::BTreeMap;

use plane_filter_common::plane::ImagePlaneDetails;
use tracing::debug;

use crate::traits::FilterPredicate;
use crate::{IsColorPredicate, IsMonochromePredicate, IsStackPredicate};

type PlanePredicate = dyn FilterPredicate<ImagePlaneDetails>;

/// Terminal plane predicates keyed by symbol.
///
/// Lookup is exact and case-sensitive. Once built, the registry is only
/// read, so it can be shared between threads behind an `Arc` or a plain `&`.
#[derive(Default)]
pub struct PredicateRegistry {
    predicates: BTreeMap<&'static str, Box<PlanePredicate>>,
}

impl PredicateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in plane predicate.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let builtins: [Box<PlanePredicate>; 3] = [
            Box::new(IsMonochromePredicate::new()),
            Box::new(IsColorPredicate::new()),
            Box::new(IsStackPredicate::new()),
        ];
        for predicate in builtins {
            registry.predicates.insert(predicate.symbol(), predicate);
        }
        registry
    }

    pub fn register(&mut self, predicate: Box<PlanePredicate>) -> Result<(), RegistryError> {
        let symbol = predicate.symbol();
        if self.predicates.contains_key(symbol) {
            return Err(RegistryError::DuplicateSymbol(symbol.to_string()));
        }
        debug!(symbol, "registered predicate");
        self.predicates.insert(symbol, predicate);
        Ok(())
    }

    pub fn get(&self, symbol: &str) -> Result<&PlanePredicate, RegistryError> {
        self.predicates
            .get(symbol)
            .map(|p| p.as_ref())
            .ok_or_else(|| RegistryError::UnknownSymbol(symbol.to_string()))
    }

    /// Registered symbols in sorted order.
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.predicates.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("no predicate registered for symbol \"{0}\"")]
    UnknownSymbol(String),
    #[error("a predicate is already registered for symbol \"{0}\"")]
    DuplicateSymbol(String),
}
