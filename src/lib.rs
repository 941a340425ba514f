//! Applies the user's saved dark/light preference to the page.
//!
//! The settings page stores a JSON record under `localStorage["settings"]`.
//! On load this module reads it and adds `light-mode` to `<body>` when
//! `darkMode` is exactly `false`. Pages are dark by default, so every other
//! value leaves the page alone.

use tracing::Level;
use wasm_bindgen::prelude::*;

pub mod error;
pub mod loader;
pub mod settings;
pub mod store;
pub mod theme;
pub mod util;

pub use error::Error;
pub use loader::{apply_theme_from_settings, LoaderConfig};
pub use theme::Theme;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    // the host page may already have installed a subscriber
    if let Err(err) = dioxus_logger::init(Level::INFO) {
        tracing::debug!("logger not installed: {err:?}");
    }

    load().map_err(|err| {
        tracing::error!("settings loader: {err}");
        JsValue::from(err)
    })?;
    Ok(())
}

/// Applies the stored preference to the current document.
pub fn load() -> Result<Theme, Error> {
    let window = util::window()?;
    let storage = util::local_storage(&window)?;
    let mut classes = util::body_class_list(&window)?;
    let theme = apply_theme_from_settings(&storage, &mut classes, &LoaderConfig::default())?;
    tracing::info!("applied {:?} theme", theme);
    Ok(theme)
}
