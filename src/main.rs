#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod ui;
mod util;

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config as DesktopConfig,
};

fn main() {
    #[cfg(feature = "desktop")]
    LaunchBuilder::desktop()
        .with_cfg(desktop_config())
        .launch(app::App);

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(app::App);
}

/// Fixed phone-sized window so the desktop build previews the mobile layout.
#[cfg(feature = "desktop")]
fn desktop_config() -> DesktopConfig {
    DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(app::APP_TITLE)
            .with_inner_size(LogicalSize::new(400.0, 820.0))
            .with_resizable(false),
    )
}
