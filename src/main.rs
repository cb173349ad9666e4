mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;


use crate::app::App;
use crate::config::ClientConfig;

#[cfg(all(feature = "desktop", not(feature = "web")))]
fn main() {
    dioxus::logger::initialize_default();

    let config = ClientConfig::from_env().unwrap_or_else(|err| {
        tracing::warn!(error = %format!("{err:#}"), "invalid configuration, using defaults");
        ClientConfig::default()
    });
    tracing::info!(base_url = %config.base_url, "starting people table");

    let mut window = dioxus::desktop::Config::new()
        .with_window(dioxus::desktop::WindowBuilder::new().with_title("People"));
    match platform::desktop::webview_data_dir(config.webview_dir.as_deref()) {
        Ok(dir) => window = window.with_data_directory(dir),
        Err(err) => tracing::warn!(error = %format!("{err:#}"), "using default webview data directory"),
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(config)
        .launch(App);
}

#[cfg(feature = "web")]
fn main() {
    dioxus::logger::initialize_default();

    let config = match platform::web::page_origin() {
        Some(origin) => ClientConfig::default().with_base_url(origin),
        None => {
            tracing::warn!("page origin unavailable, using default base url");
            ClientConfig::default()
        }
    };
    tracing::info!(base_url = %config.base_url, "starting people table");

    dioxus::LaunchBuilder::web().with_context(config).launch(App);
}
