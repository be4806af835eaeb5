//! Evaluator loading as Stillwater effects.
//!
//! Acquiring the evaluator is the one asynchronous step in a session's
//! life. Loaders are effects over an environment; the session runs one
//! exactly once before accepting input.

use crate::core::{Evaluator, StandardEvaluator};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;
use thiserror::Error;

/// An evaluator shared between the loader and the session.
pub type SharedEvaluator = Arc<dyn Evaluator>;

/// Effect that produces an evaluator or fails to.
pub type EvaluatorLoader<Env> = BoxedEffect<SharedEvaluator, LoadError, Env>;

/// Errors that can occur while acquiring an evaluator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("No evaluator registered under '{0}'")]
    NotRegistered(String),

    #[error("Evaluator unavailable: {0}")]
    Unavailable(String),
}

/// Named evaluators a loader can resolve from.
#[derive(Clone, Default)]
pub struct EvaluatorRegistry {
    evaluators: HashMap<String, SharedEvaluator>,
}

impl EvaluatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the standard evaluator under `"standard"`.
    pub fn with_standard() -> Self {
        Self::new().register("standard", Arc::new(StandardEvaluator))
    }

    pub fn register(mut self, name: impl Into<String>, evaluator: SharedEvaluator) -> Self {
        self.evaluators.insert(name.into(), evaluator);
        self
    }

    pub fn resolve(&self, name: &str) -> Result<SharedEvaluator, LoadError> {
        self.evaluators
            .get(name)
            .cloned()
            .ok_or_else(|| LoadError::NotRegistered(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.evaluators.contains_key(name)
    }
}

impl fmt::Debug for EvaluatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.evaluators.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("EvaluatorRegistry")
            .field("evaluators", &names)
            .finish()
    }
}

/// Loader that always yields the standard evaluator.
pub fn builtin<Env>() -> EvaluatorLoader<Env>
where
    Env: Clone + Send + Sync + 'static,
{
    pure(Arc::new(StandardEvaluator) as SharedEvaluator).boxed()
}

/// Loader that resolves `name` from the registry environment.
pub fn named(name: impl Into<String>) -> EvaluatorLoader<EvaluatorRegistry> {
    let name = name.into();
    from_fn(move |registry: &EvaluatorRegistry| registry.resolve(&name)).boxed()
}

/// Loader that always fails, for hosts where the evaluator cannot be
/// fetched at all.
pub fn unavailable<Env>(reason: impl Into<String>) -> EvaluatorLoader<Env>
where
    Env: Clone + Send + Sync + 'static,
{
    fail(LoadError::Unavailable(reason.into())).boxed()
}
