mod config;
mod routes;
mod views;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use virgule_router::{Router, WebHistory};

use crate::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let (config, config_err) = match AppConfig::load_default() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log.filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Some(e) = config_err {
        warn!("failed to load config, using defaults: {e:#}");
    }

    info!(base_url = %config.app.base_url, title = %config.app.title, "virgule starting");

    let table = routes::route_table()?;
    for route in table.routes() {
        info!("  {} -> {}", route.path, route.name);
    }

    let router = Router::new(table, WebHistory::new(config.app.base_url));

    // Visit each route once so the deferred modules resolve, then print the
    // rendered markup for the host to mount.
    for path in ["/main", "/loading"] {
        let view = router.navigate(path).await?;
        println!("{}", view.render().into_string());
    }

    Ok(())
}
