use std::collections::HashSet;

use crate::error::RouterError;
use crate::path::{is_canonical, normalize};
use crate::route::Route;

/// The ordered, immutable route table.
///
/// Constructed once at application start via [`RouteTable::builder`] and
/// never mutated afterwards. Lookup is exact: the incoming path is
/// normalized, then compared against each route's canonical path in
/// registration order.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::new()
    }

    /// Resolves a path to its route, or `None` if nothing in the table
    /// matches. Policy for unmatched paths belongs to the caller.
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        let path = normalize(path);
        self.routes.iter().find(|route| route.path == path)
    }

    /// Looks a route up by its symbolic name.
    pub fn find_by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// The ordered list of routes, as handed to the navigation engine.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Immutable builder for [`RouteTable`] configuration.
///
/// Uniqueness of paths and names is enforced at [`build`](Self::build) time
/// rather than assumed.
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<Route>,
}

impl RouteTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a route to the table.
    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Finalizes the table, rejecting non-canonical path literals and
    /// duplicate paths or names.
    pub fn build(self) -> Result<RouteTable, RouterError> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();

        for route in &self.routes {
            if !is_canonical(&route.path) {
                return Err(RouterError::InvalidPath(route.path.clone()));
            }
            if !paths.insert(route.path.as_str()) {
                return Err(RouterError::DuplicatePath(route.path.clone()));
            }
            if !names.insert(route.name.as_str()) {
                return Err(RouterError::DuplicateName(route.name.clone()));
            }
        }

        Ok(RouteTable {
            routes: self.routes,
        })
    }
}
