//! Logging setup for both halves of the app.
//!
//! Code shared between server and browser logs through the `log` facade. In
//! the browser records go to the devtools console; on the server the tracing
//! subscriber picks them up through its `log` bridge.

/// Browser side: panics and `log` records go to the console.
#[cfg(feature = "hydrate")]
pub fn init_client() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        // a logger is already installed (e.g. after a hot reload)
        log::debug!("console logger already initialised");
    }
}

/// Server side. The filter is read from `PORTFOLIO_LOG`:
///
/// ```bash
/// PORTFOLIO_LOG=debug cargo leptos watch
/// PORTFOLIO_LOG=portfolio=trace,tower_http=debug cargo leptos serve
/// ```
#[cfg(feature = "ssr")]
pub fn init_server() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_env("PORTFOLIO_LOG")
        .unwrap_or_else(|_| EnvFilter::new("portfolio=info,tower_http=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}
