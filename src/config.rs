//! Page wiring settings.
//!
//! The defaults match the quiz page shipped in `index.html`. A page can
//! override any subset by embedding
//! `<script type="application/json" id="assessment-config">{...}</script>`.

use serde::Deserialize;

use crate::error::AssessmentError;

/// Id of the optional JSON config element.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub const CONFIG_ELEMENT_ID: &str = "assessment-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssessmentConfig {
    /// Id of the quiz `<form>`.
    pub form_id: String,
    /// Id of the element whose content is replaced by the result card.
    pub result_id: String,
    /// Class on the outer result card element.
    pub card_class: String,
    pub smooth_scroll: bool,
    /// Log each submission to the browser console.
    pub log_submissions: bool,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            form_id: "assessmentForm".to_string(),
            result_id: "resultSection".to_string(),
            card_class: "result-card".to_string(),
            smooth_scroll: true,
            log_submissions: true,
        }
    }
}

impl AssessmentConfig {
    /// Parse the JSON body of the config element. Blank text means defaults.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn from_json(text: &str) -> Result<Self, AssessmentError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(text)?)
    }
}
