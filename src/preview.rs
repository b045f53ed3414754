//! Host-side rendering: answers as JSON in, result card out.
//!
//! Runs the same submission path as the page, with the form replaced by a
//! JSON document and the result section by a string buffer.

use std::cell::RefCell;

use crate::assessment::state::FormInputs;
use crate::assessment::{handle_submission, FormSource, ResultSink};
use crate::config::AssessmentConfig;
use crate::error::AssessmentError;

struct JsonForm<'a>(&'a str);

impl FormSource for JsonForm<'_> {
    fn read_inputs(&self) -> Result<FormInputs, AssessmentError> {
        serde_json::from_str(self.0).map_err(AssessmentError::Inputs)
    }
}

#[derive(Default)]
struct CapturedCard(RefCell<String>);

impl ResultSink for CapturedCard {
    fn replace_content(&self, html: &str) -> Result<(), AssessmentError> {
        *self.0.borrow_mut() = html.to_string();
        Ok(())
    }

    // Nothing to scroll on a terminal.
    fn scroll_into_view(&self, _smooth: bool) {}
}

/// Render the card a page with `config` would show for `json` answers.
pub fn render_preview(json: &str, config: &AssessmentConfig) -> Result<String, AssessmentError> {
    let card = CapturedCard::default();
    handle_submission(&JsonForm(json), &card, config)?;
    Ok(card.0.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_renders_marketing_card() {
        let html = render_preview(
            r#"{"interests":["Business"],"skills":["Communication"],"goals":""}"#,
            &AssessmentConfig::default(),
        )
        .unwrap();
        assert!(html.contains("<h3>Recommended Career: Marketing Specialist</h3>"));
    }

    #[test]
    fn empty_object_is_default_career() {
        let html = render_preview("{}", &AssessmentConfig::default()).unwrap();
        assert!(html.contains("Recommended Career: Software Engineer"));
    }

    #[test]
    fn malformed_answers_are_rejected() {
        let err = render_preview(r#"{"skills": "Excel"}"#, &AssessmentConfig::default())
            .unwrap_err();
        assert!(matches!(err, AssessmentError::Inputs(_)));
    }
}
