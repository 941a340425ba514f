use crate::error::Error;
use crate::settings::Settings;
use crate::store::KeyValueStore;
use crate::theme::{ClassList, Theme, LIGHT_MODE_CLASS};

/// Storage key the settings page writes its record under.
pub const SETTINGS_KEY: &str = "settings";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderConfig {
    pub storage_key: String,
    pub light_class: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            storage_key: SETTINGS_KEY.to_owned(),
            light_class: LIGHT_MODE_CLASS.to_owned(),
        }
    }
}

/// Reads the settings record and marks the page light when the user
/// turned dark mode off.
///
/// Only ever adds `light_class`; dark is the page's unmodified state.
/// Store, parse and class-list failures are returned as is, with nothing
/// applied.
pub fn apply_theme_from_settings(
    store: &impl KeyValueStore,
    classes: &mut impl ClassList,
    config: &LoaderConfig,
) -> Result<Theme, Error> {
    let raw = store.get(&config.storage_key)?;
    tracing::debug!("{}: {:?}", config.storage_key, raw);

    let theme = Settings::parse(raw.as_deref())?.theme();
    tracing::debug!("theme: {:?}", theme);

    if theme == Theme::Light {
        classes.add(&config.light_class)?;
    }
    Ok(theme)
}
