//! # Virgule Router
//!
//! A static, immutable route table with lazily-loaded views, mounted on an
//! externally supplied history object. This crate deliberately stops short of
//! a matching engine: lookups are exact (after path normalization), and
//! navigation lifecycle beyond push/replace belongs to the host.
//!
//! - **Immutable table**: built once at startup, duplicate paths and names
//!   are rejected at build time
//! - **Lazy views**: each route carries a deferred factory that runs at most
//!   once; concurrent first loads coalesce
//! - **History as a seam**: the HTML5-style history object is configured
//!   here, never implemented
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use maud::{html, Markup};
//! use virgule_router::{Route, RouteTable, View, ViewModule};
//!
//! struct MainView;
//!
//! impl View for MainView {
//!     fn name(&self) -> &str {
//!         "main"
//!     }
//!     fn render(&self) -> Markup {
//!         html! { h1 { "main" } }
//!     }
//! }
//!
//! let table = RouteTable::builder()
//!     .route(Route::lazy("/main", "main", || async {
//!         Ok(Arc::new(MainView) as ViewModule)
//!     }))
//!     .build()?;
//!
//! assert_eq!(table.resolve("/main").map(|r| r.name.as_str()), Some("main"));
//! assert!(table.resolve("/missing").is_none());
//! # Ok::<(), virgule_router::RouterError>(())
//! ```

mod error;
mod history;
mod loader;
mod route;
mod router;
mod table;

pub mod path;

pub use error::RouterError;
pub use history::{History, MemoryHistory, WebHistory};
pub use loader::{View, ViewLoader, ViewModule};
pub use route::Route;
pub use router::Router;
pub use table::{RouteTable, RouteTableBuilder};
