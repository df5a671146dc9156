use std::sync::Arc;

use anyhow::Result;
use maud::{html, Markup};
use tracing::debug;
use virgule_router::{View, ViewModule};

/// Placeholder view shown while the shell waits on the host.
pub struct LoadingView;

impl View for LoadingView {
    fn name(&self) -> &str {
        "loading"
    }

    fn render(&self) -> Markup {
        html! {
            section id="loading" aria-busy="true" {
                p { "Loading…" }
            }
        }
    }
}

/// Deferred factory for the loading view, invoked when `/loading` is first
/// visited.
pub async fn load() -> Result<ViewModule> {
    debug!("fetching loading view module");
    tokio::task::yield_now().await;
    Ok(Arc::new(LoadingView) as ViewModule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_busy_section() {
        let markup = LoadingView.render().into_string();
        assert!(markup.contains("aria-busy=\"true\""));
    }
}
