//! Central error types for the portfolio widgets.
//!
//! Browser calls report failures as opaque `JsValue`s; everything is folded
//! into `PortfolioError` before it crosses back into JavaScript as a string.

use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Main error type for widget operations.
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// A browser global (window, document, head, body) is unavailable
    #[error("Browser global unavailable: {0}")]
    MissingGlobal(&'static str),

    /// A DOM call threw
    #[error("DOM error: {0}")]
    DomError(String),

    /// Container element lookup failed
    #[error("Element not found with id {id:?}")]
    ElementNotFound { id: String },

    /// Config object from JavaScript was rejected
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A widget that must be unique is already mounted
    #[error("{0} is already mounted")]
    AlreadyMounted(&'static str),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

/// Serialized as the message string, matching what JavaScript receives.
impl Serialize for PortfolioError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<JsValue> for PortfolioError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        PortfolioError::DomError(message)
    }
}

impl From<serde_wasm_bindgen::Error> for PortfolioError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        PortfolioError::InvalidConfig(err.to_string())
    }
}

impl From<PortfolioError> for JsValue {
    fn from(err: PortfolioError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<String> for PortfolioError {
    fn from(msg: String) -> Self {
        PortfolioError::Other(msg)
    }
}

impl From<&str> for PortfolioError {
    fn from(msg: &str) -> Self {
        PortfolioError::Other(msg.to_string())
    }
}

/// Extension trait for adding context to Results.
///
/// # Example
/// ```ignore
/// use crate::error::{PortfolioResult, ResultExt};
///
/// fn container(document: &web_sys::Document) -> PortfolioResult<web_sys::Element> {
///     document.create_element("section").context("failed to create hero section")
/// }
/// ```
pub trait ResultExt<T> {
    /// Add context to an error, converting it to `PortfolioError::DomError`.
    fn context(self, msg: &str) -> PortfolioResult<T>;

    /// Add context lazily (only evaluated on error).
    fn with_context<F: FnOnce() -> String>(self, f: F) -> PortfolioResult<T>;
}

impl<T, E: Into<PortfolioError>> ResultExt<T> for Result<T, E> {
    fn context(self, msg: &str) -> PortfolioResult<T> {
        self.map_err(|e| {
            let inner: PortfolioError = e.into();
            PortfolioError::DomError(format!("{}: {}", msg, inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> PortfolioResult<T> {
        self.map_err(|e| {
            let inner: PortfolioError = e.into();
            PortfolioError::DomError(format!("{}: {}", f(), inner))
        })
    }
}

/// Extension trait for turning a missing browser global into an error.
pub trait OptionExt<T> {
    /// Convert None to `PortfolioError::MissingGlobal`.
    fn or_missing(self, global: &'static str) -> PortfolioResult<T>;

    /// Convert None to `PortfolioError::Other` with the given message.
    fn context(self, msg: &str) -> PortfolioResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn or_missing(self, global: &'static str) -> PortfolioResult<T> {
        self.ok_or(PortfolioError::MissingGlobal(global))
    }

    fn context(self, msg: &str) -> PortfolioResult<T> {
        self.ok_or_else(|| PortfolioError::Other(msg.to_string()))
    }
}

/// Type alias for Results using PortfolioError.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::MissingGlobal("document");
        assert_eq!(err.to_string(), "Browser global unavailable: document");

        let err = PortfolioError::ElementNotFound {
            id: "hero".to_string(),
        };
        assert_eq!(err.to_string(), "Element not found with id \"hero\"");

        let err = PortfolioError::AlreadyMounted("Cursor tracker");
        assert_eq!(err.to_string(), "Cursor tracker is already mounted");
    }

    #[test]
    fn test_error_serialization() {
        let err = PortfolioError::InvalidConfig("missing field `name`".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"Invalid config: missing field `name`\"");
    }

    #[test]
    fn test_from_string() {
        let err: PortfolioError = "test error".into();
        assert!(matches!(err, PortfolioError::Other(_)));

        let err: PortfolioError = String::from("owned").into();
        assert_eq!(err.to_string(), "owned");
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<(), &str> = Err("original error");
        let with_context = result.context("operation failed");

        assert!(matches!(with_context, Err(PortfolioError::DomError(_))));
        let msg = with_context.unwrap_err().to_string();
        assert!(msg.contains("operation failed"));
        assert!(msg.contains("original error"));
    }

    #[test]
    fn test_result_ext_with_context() {
        let result: Result<(), &str> = Err("inner");
        let with_context = result.with_context(|| format!("ctx-{}", 42));

        let msg = with_context.unwrap_err().to_string();
        assert!(msg.contains("ctx-42"));
        assert!(msg.contains("inner"));
    }

    #[test]
    fn test_result_ext_ok_passthrough() {
        let result: Result<i32, &str> = Ok(42);
        assert_eq!(result.context("should not appear").unwrap(), 42);
    }

    #[test]
    fn test_option_ext_or_missing() {
        let opt: Option<i32> = None;
        let result = opt.or_missing("window");
        assert!(matches!(result, Err(PortfolioError::MissingGlobal("window"))));

        assert_eq!(Some(7).or_missing("window").unwrap(), 7);
    }

    #[test]
    fn test_option_ext_context() {
        let opt: Option<i32> = None;
        let msg = opt.context("value was missing").unwrap_err().to_string();
        assert!(msg.contains("value was missing"));
    }
}
