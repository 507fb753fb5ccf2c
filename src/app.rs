mod about;
mod components;
mod contact;
mod footer;
mod header;
mod hero;
mod homepage;
mod icons;
mod resume;
mod state;

use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SiteConfig;
use crate::content::portfolio;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = SiteConfig::from_build_env();
    view! {
        <!DOCTYPE html>
        <html lang="it" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options root=config.base_path.clone() />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href=config.asset("/favicon.ico") />
                <link rel="stylesheet" id="leptos" href=config.asset("/pkg/portfolio.css") />
                <MetaTags />
            </head>
            <body class="font-mono">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let site_name = portfolio()
        .map(|p| p.owner.full_name())
        .unwrap_or_else(|_| "Portfolio".to_string());

    view! {
        <Title formatter=move |title: String| format!("{site_name} - {title}") />

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}
