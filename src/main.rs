mod app;
mod config;
mod domain;
mod infra;
mod ui;
mod usecase;

#[cfg(test)]
mod tests;

use env_logger::Env;

use crate::config::Config;

fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info")).try_init();
}

fn main() {
    init_logging();

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            log::error!("failed to load configuration: {err:#}");
            std::process::exit(1);
        }
    };
    log::info!(
        "using {} (live listing: {})",
        config.graphql_http_url,
        config.live_listing
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("TCG Market")),
        )
        .with_context(config)
        .launch(app::App);
}
