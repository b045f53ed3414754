//! Errors raised at the page boundary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssessmentError {
    // Built by the page bindings only.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    #[error("element not found: {selector}")]
    MissingElement { selector: String },

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    #[error("element {id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    #[error("DOM call failed: {0}")]
    Js(String),

    #[error("invalid assessment config: {0}")]
    Config(#[from] serde_json::Error),

    // Built by the host preview only.
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    #[error("invalid form inputs: {0}")]
    Inputs(serde_json::Error),
}

impl AssessmentError {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn missing(selector: impl Into<String>) -> Self {
        AssessmentError::MissingElement {
            selector: selector.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_display() {
        let err = AssessmentError::missing("#resultSection");
        assert_eq!(err.to_string(), "element not found: #resultSection");
    }

    #[test]
    fn wrong_type_display() {
        let err = AssessmentError::WrongElementType {
            id: "[name=\"skills\"]".into(),
            expected: "HTMLSelectElement",
        };
        assert!(err.to_string().contains("HTMLSelectElement"));
    }

    #[test]
    fn config_error_conversion() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AssessmentError = parse.into();
        assert!(err.to_string().starts_with("invalid assessment config"));
    }
}
