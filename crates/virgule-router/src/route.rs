use std::future::Future;

use anyhow::Result;

use crate::loader::{ViewLoader, ViewModule};

/// A single entry of the route table: a URL path, a symbolic name, and the
/// deferred factory that produces the corresponding view when the path is
/// first visited.
#[derive(Debug, Clone)]
pub struct Route {
    /// Canonical URL path, like `/main`
    pub path: String,
    /// Symbolic name for type-safe references, like `main`
    pub name: String,
    loader: ViewLoader,
}

impl Route {
    pub fn new(path: impl Into<String>, name: impl Into<String>, loader: ViewLoader) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            loader,
        }
    }

    /// Builds a route around a deferred view factory.
    ///
    /// This is the usual constructor: the factory is not invoked here, only
    /// when the route is first navigated to.
    pub fn lazy<F, Fut>(path: impl Into<String>, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<ViewModule>> + Send + 'static,
    {
        Self::new(path, name, ViewLoader::new(factory))
    }

    /// Load this route's view module, fetching it on first use.
    pub async fn load(&self) -> Result<ViewModule> {
        self.loader.load().await
    }

    /// Whether this route's view module is already cached.
    pub fn is_loaded(&self) -> bool {
        self.loader.is_loaded()
    }
}
