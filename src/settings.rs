use std::fmt;

use serde::de::{Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde_json::value::RawValue;

use crate::error::Error;
use crate::theme::Theme;

/// Text used in place of a missing or empty stored record.
pub const EMPTY_RECORD: &str = "{}";

/// The `darkMode` field as written by the settings page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DarkMode {
    Unset,
    On,
    Off,
    /// Present but not a boolean (`null`, numbers, strings, ...), kept as
    /// its JSON text.
    Other(String),
}

/// The part of the stored record the loader reads.
///
/// Only `darkMode` is kept. Every other value is skipped without being
/// decoded, so anything the browser's `JSON.parse` accepts (deep nesting,
/// numbers past `f64`, lone surrogate escapes) still loads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    dark_mode: Option<String>,
}

impl Settings {
    pub fn parse(raw: Option<&str>) -> Result<Self, Error> {
        let raw = match raw {
            Some(s) if !s.is_empty() => s,
            _ => EMPTY_RECORD,
        };
        let value: Box<RawValue> = from_str_unbounded(raw)?;
        match value.get() {
            "null" => Err(Error::NullRecord),
            text if text.starts_with('{') => from_str_unbounded(text),
            // Scalars and arrays carry no fields.
            _ => Ok(Settings::default()),
        }
    }

    pub fn dark_mode(&self) -> DarkMode {
        match self.dark_mode.as_deref() {
            None => DarkMode::Unset,
            Some("true") => DarkMode::On,
            Some("false") => DarkMode::Off,
            Some(text) => DarkMode::Other(text.to_owned()),
        }
    }

    pub fn theme(&self) -> Theme {
        match self.dark_mode() {
            DarkMode::Off => Theme::Light,
            _ => Theme::default(),
        }
    }
}

fn from_str_unbounded<'a, T: Deserialize<'a>>(text: &'a str) -> Result<T, Error> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = T::deserialize(&mut de)?;
    de.end()?;
    Ok(value)
}

impl<'de> Deserialize<'de> for Settings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SettingsVisitor)
    }
}

struct SettingsVisitor;

impl<'de> Visitor<'de> for SettingsVisitor {
    type Value = Settings;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a settings object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Settings, A::Error> {
        let mut settings = Settings::default();
        // later duplicates win, as in JSON.parse
        while let Some(key) = map.next_key::<String>()? {
            if key == "darkMode" {
                let value: Box<RawValue> = map.next_value()?;
                settings.dark_mode = Some(value.get().to_owned());
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(settings)
    }
}
