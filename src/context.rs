//! Application context shared by the HTTP handlers.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::config::Config;
use crate::services::CatalogueService;

/// Root application context for dependency injection.
///
/// `#[derive(FromRef)]` makes each field extractable as axum `State`, and
/// services implement `FromRef<Context>` to be built from it on demand.
#[derive(FromRef, Clone)]
pub struct Context {
    /// Application configuration.
    pub config: Arc<Config>,
}

impl Context {
    /// Creates a new context from a loaded configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Resolve a dependency from the context.
    pub fn resolve<T: FromRef<Context>>(&self) -> T {
        T::from_ref(self)
    }

    /// Convenience accessor for the catalogue service.
    pub fn catalogue(&self) -> CatalogueService {
        self.resolve()
    }
}
