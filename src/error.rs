use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no global `window`")]
    NoWindow,
    #[error("`window` has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("local storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("failed to read {key:?} from storage: {reason}")]
    StorageRead { key: String, reason: String },
    #[error("malformed settings record: {0}")]
    MalformedRecord(#[from] serde_json::Error),
    #[error("settings record is null")]
    NullRecord,
    #[error("failed to add class {token:?}: {reason}")]
    ClassList { token: String, reason: String },
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
