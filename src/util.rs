use wasm_bindgen::prelude::*;

use crate::error::Error;

pub fn window() -> Result<web_sys::Window, Error> {
    web_sys::window().ok_or(Error::NoWindow)
}

/// `window.localStorage`, which throws when storage is disabled.
pub fn local_storage(window: &web_sys::Window) -> Result<web_sys::Storage, Error> {
    window
        .local_storage()
        .map_err(|err| Error::StorageUnavailable(describe(&err)))?
        .ok_or_else(|| Error::StorageUnavailable("localStorage is null".to_owned()))
}

pub fn body_class_list(window: &web_sys::Window) -> Result<web_sys::DomTokenList, Error> {
    let document = window.document().ok_or(Error::NoDocument)?;
    let body = document.body().ok_or(Error::NoBody)?;
    Ok(body.class_list())
}

/// Best-effort message for a thrown JS value.
pub fn describe(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        String::from(e.message())
    } else if let Some(s) = err.as_string() {
        s
    } else {
        format!("{err:?}")
    }
}
