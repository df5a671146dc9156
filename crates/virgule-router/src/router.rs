use tracing::info;

use crate::error::RouterError;
use crate::history::History;
use crate::loader::ViewModule;
use crate::route::Route;
use crate::table::RouteTable;

/// The configured router object handed to the application's bootstrap code:
/// an immutable route table mounted on a history adapter.
///
/// Navigation here is deliberately thin. A path is resolved by exact lookup,
/// its view module is loaded (lazily, cached after the first success), and
/// only then is the history entry pushed, so the module always resolves
/// before the view is rendered.
pub struct Router<H: History> {
    table: RouteTable,
    history: H,
}

impl<H: History> Router<H> {
    pub fn new(table: RouteTable, history: H) -> Self {
        Self { table, history }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Resolves a path against the table, stripping the history base prefix
    /// first. Unmatched paths yield `None`.
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.table.resolve(self.strip_base(path))
    }

    /// Navigates to a path: loads the route's view module, then pushes the
    /// new location. The history entry is the route's canonical path, not
    /// the caller-supplied spelling.
    pub async fn navigate(&self, path: &str) -> Result<ViewModule, RouterError> {
        let (module, canonical) = self.load_for(path).await?;
        self.history.push(&canonical);
        Ok(module)
    }

    /// Like [`navigate`](Self::navigate), but replaces the current history
    /// entry instead of pushing.
    pub async fn replace(&self, path: &str) -> Result<ViewModule, RouterError> {
        let (module, canonical) = self.load_for(path).await?;
        self.history.replace(&canonical);
        Ok(module)
    }

    /// Loads the view module for the current location.
    pub async fn current_view(&self) -> Result<ViewModule, RouterError> {
        let (module, _) = self.load_for(&self.history.location()).await?;
        Ok(module)
    }

    async fn load_for(&self, path: &str) -> Result<(ViewModule, String), RouterError> {
        let route = self.resolve(path).ok_or_else(|| RouterError::NotFound {
            path: path.to_string(),
        })?;

        let module = route
            .load()
            .await
            .map_err(|source| RouterError::Load {
                name: route.name.clone(),
                source,
            })?;

        info!(path, route = %route.name, "resolved view");
        Ok((module, route.path.clone()))
    }

    fn strip_base<'a>(&self, path: &'a str) -> &'a str {
        let base = self.history.base();
        if base.is_empty() {
            return path;
        }

        match path.strip_prefix(base) {
            Some("") => "/",
            Some(rest) if rest.starts_with('/') => rest,
            _ => path,
        }
    }
}
