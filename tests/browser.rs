#![cfg(target_arch = "wasm32")]

use settings_loader::theme::LIGHT_MODE_CLASS;
use settings_loader::{loader::SETTINGS_KEY, util, Theme};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn reset(settings: Option<&str>) -> web_sys::DomTokenList {
    let window = util::window().unwrap();
    let storage = util::local_storage(&window).unwrap();
    match settings {
        Some(s) => storage.set_item(SETTINGS_KEY, s).unwrap(),
        None => storage.remove_item(SETTINGS_KEY).unwrap(),
    }
    let classes = util::body_class_list(&window).unwrap();
    classes.remove_1(LIGHT_MODE_CLASS).unwrap();
    classes
}

#[wasm_bindgen_test]
fn light_when_dark_mode_off() {
    let classes = reset(Some(r#"{"darkMode":false,"fontSize":14}"#));
    assert_eq!(settings_loader::load().unwrap(), Theme::Light);
    assert!(classes.contains(LIGHT_MODE_CLASS));

    assert_eq!(settings_loader::load().unwrap(), Theme::Light);
    assert!(classes.contains(LIGHT_MODE_CLASS));
}

#[wasm_bindgen_test]
fn dark_when_key_missing() {
    let classes = reset(None);
    assert_eq!(settings_loader::load().unwrap(), Theme::Dark);
    assert!(!classes.contains(LIGHT_MODE_CLASS));
}

#[wasm_bindgen_test]
fn dark_when_dark_mode_on() {
    let classes = reset(Some(r#"{"darkMode":true}"#));
    assert_eq!(settings_loader::load().unwrap(), Theme::Dark);
    assert!(!classes.contains(LIGHT_MODE_CLASS));
}

#[wasm_bindgen_test]
fn malformed_record_errors() {
    let classes = reset(Some("not json"));
    assert!(settings_loader::load().is_err());
    assert!(!classes.contains(LIGHT_MODE_CLASS));
}

#[wasm_bindgen_test]
fn start_throws_js_error() {
    let classes = reset(Some("not json"));
    let err = settings_loader::start().unwrap_err();
    let err = err.dyn_into::<js_sys::Error>().unwrap();
    assert!(String::from(err.message()).starts_with("malformed settings record"));
    assert!(!classes.contains(LIGHT_MODE_CLASS));
}

#[wasm_bindgen_test]
fn start_applies_light() {
    let classes = reset(Some(r#"{"darkMode":false}"#));
    settings_loader::start().unwrap();
    assert!(classes.contains(LIGHT_MODE_CLASS));
}
