use dioxus::prelude::*;

use crate::{
    ui::pages::DashboardScreen,
    util::{
        assets,
        config::{config_file, load_config, AppConfig},
    },
};

pub const APP_TITLE: &str = "Finanzas";

#[component]
pub fn App() -> Element {
    let config = use_hook(startup_config);
    use_context_provider(|| config.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Link { rel: "stylesheet", href: assets::ICON_FONT_CSS }
        document::Style { "{assets::main_css()}" }
        DashboardScreen {}
    }
}

fn startup_config() -> AppConfig {
    tracing::info!("Starting {APP_TITLE} v{}", env!("CARGO_PKG_VERSION"));

    match load_config() {
        Ok(config) => {
            tracing::info!(path = ?config_file(), display_name = %config.display_name, "Loaded config");
            config
        }
        Err(err) => {
            tracing::warn!("Failed to load config, using defaults: {err}");
            AppConfig::default()
        }
    }
}
