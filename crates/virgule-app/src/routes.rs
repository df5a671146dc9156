// File: src/routes.rs
// Purpose: The shell's route table

use virgule_router::{Route, RouteTable, RouterError};

use crate::views::{loading_view, main_view};

/// Builds the shell's route table: two named routes, each deferring its view
/// module until first visit.
pub fn route_table() -> Result<RouteTable, RouterError> {
    RouteTable::builder()
        .route(Route::lazy("/main", "main", main_view::load))
        .route(Route::lazy("/loading", "loading", loading_view::load))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_holds_the_two_shell_routes() {
        let table = route_table().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.resolve("/main").map(|r| r.name.as_str()),
            Some("main")
        );
        assert_eq!(
            table.resolve("/loading").map(|r| r.name.as_str()),
            Some("loading")
        );
        assert!(table.resolve("/else").is_none());
    }

    #[tokio::test]
    async fn views_load_on_demand() {
        let table = route_table().unwrap();
        let route = table.find_by_name("main").unwrap();

        assert!(!route.is_loaded());
        let view = route.load().await.unwrap();
        assert_eq!(view.name(), "main");
        assert!(route.is_loaded());
    }
}
