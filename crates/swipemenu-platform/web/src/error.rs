use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebBindError {
    NoWindow,
    NoDocument,
    PanelNotFound { selector: String },
    Js(String),
}

impl std::fmt::Display for WebBindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WebBindError::NoWindow => write!(f, "no global window exists"),
            WebBindError::NoDocument => write!(f, "window has no document"),
            WebBindError::PanelNotFound { selector } => {
                write!(f, "no side menu panel matches '{selector}'")
            }
            WebBindError::Js(message) => write!(f, "DOM call failed: {message}"),
        }
    }
}

impl std::error::Error for WebBindError {}

impl From<JsValue> for WebBindError {
    fn from(value: JsValue) -> Self {
        WebBindError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<WebBindError> for JsValue {
    fn from(error: WebBindError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
