//! Career assessment: turns one quiz submission into one rendered result.
//!
//! The decision (`logic`) and the card (`render`) are pure. Reading the form
//! and writing the result go through [`FormSource`] and [`ResultSink`], so
//! the handler runs the same against the live page or a test double.

pub mod logic;
pub mod render;
pub mod state;

use crate::config::AssessmentConfig;
use crate::error::AssessmentError;

use render::ResultView;
use state::{FormInputs, Recommendation};

/// Where submitted answers come from.
pub trait FormSource {
    fn read_inputs(&self) -> Result<FormInputs, AssessmentError>;
}

/// Where the result card goes.
pub trait ResultSink {
    /// Replace everything currently shown with `html`.
    fn replace_content(&self, html: &str) -> Result<(), AssessmentError>;

    /// Best-effort request to bring the result into view.
    fn scroll_into_view(&self, smooth: bool);
}

/// Handle one submission: read, decide, render, show.
///
/// Keeps nothing between calls. Identical answers produce identical output.
pub fn handle_submission(
    source: &impl FormSource,
    sink: &impl ResultSink,
    config: &AssessmentConfig,
) -> Result<Recommendation, AssessmentError> {
    let inputs = source.read_inputs()?;
    let recommendation = logic::recommend(&inputs);

    let html = ResultView::new(recommendation.label).to_html(&config.card_class);
    sink.replace_content(&html)?;
    sink.scroll_into_view(config.smooth_scroll);

    Ok(recommendation)
}

/// Entry point for a form `submit` event.
///
/// `prevent_default` runs before the form is read, so navigation is
/// suppressed even when reading fails.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub fn handle_submit_event(
    prevent_default: impl FnOnce(),
    source: &impl FormSource,
    sink: &impl ResultSink,
    config: &AssessmentConfig,
) -> Result<Recommendation, AssessmentError> {
    prevent_default();
    handle_submission(source, sink, config)
}
