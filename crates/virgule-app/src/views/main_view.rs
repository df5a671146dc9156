use std::sync::Arc;

use anyhow::Result;
use maud::{html, Markup};
use tracing::debug;
use virgule_router::{View, ViewModule};

/// The primary view of the shell.
pub struct MainView;

impl View for MainView {
    fn name(&self) -> &str {
        "main"
    }

    fn render(&self) -> Markup {
        html! {
            section id="main" {
                h1 { "Virgule" }
                p { "Shell ready." }
            }
        }
    }
}

/// Deferred factory for the main view, invoked when `/main` is first
/// visited.
pub async fn load() -> Result<ViewModule> {
    debug!("fetching main view module");
    tokio::task::yield_now().await;
    Ok(Arc::new(MainView) as ViewModule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_shell_heading() {
        let markup = MainView.render().into_string();
        assert!(markup.contains("<h1>Virgule</h1>"));
    }
}
