use std::fmt;
use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use futures::future::BoxFuture;
use maud::Markup;
use tokio::sync::OnceCell;
use tracing::debug;

/// A view component produced by a deferred module load.
pub trait View: Send + Sync {
    /// The symbolic name of the view, matching its route name.
    fn name(&self) -> &str;

    /// Renders the view to markup.
    fn render(&self) -> Markup;
}

impl fmt::Debug for dyn View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View").field("name", &self.name()).finish()
    }
}

/// A loaded, shareable view module.
pub type ViewModule = Arc<dyn View>;

type LoaderFn = Arc<dyn Fn() -> BoxFuture<'static, Result<ViewModule>> + Send + Sync>;

/// Deferred factory for a view module.
///
/// The factory runs at most once: the first successful load is cached and
/// shared by every clone of this loader, and concurrent first loads coalesce
/// into a single factory invocation. A failed load is not cached, so the next
/// request retries.
#[derive(Clone)]
pub struct ViewLoader {
    factory: LoaderFn,
    cell: Arc<OnceCell<ViewModule>>,
}

impl ViewLoader {
    pub fn new<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<ViewModule>> + Send + 'static,
    {
        Self {
            factory: Arc::new(move || Box::pin(factory())),
            cell: Arc::new(OnceCell::new()),
        }
    }

    /// Load the view module, invoking the factory only on first use.
    pub async fn load(&self) -> Result<ViewModule> {
        let module = self
            .cell
            .get_or_try_init(|| {
                debug!("invoking deferred view factory");
                (self.factory)()
            })
            .await?;

        Ok(Arc::clone(module))
    }

    /// Whether the module has already been fetched and cached.
    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }
}

impl fmt::Debug for ViewLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewLoader")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
