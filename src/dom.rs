//! Browser bindings for the quiz page.
//!
//! Everything that touches `web_sys` lives here so the assessment modules
//! stay testable on the host.

use std::collections::BTreeSet;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlFormElement, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement, HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions,
};

use crate::assessment::state::{FormInputs, Recommendation};
use crate::assessment::{handle_submit_event, FormSource, ResultSink};
use crate::config::{AssessmentConfig, CONFIG_ELEMENT_ID};
use crate::error::AssessmentError;

const INTERESTS_SELECTOR: &str = r#"input[name="interests"]:checked"#;

fn js_error(value: JsValue) -> AssessmentError {
    AssessmentError::Js(format!("{value:?}"))
}

fn document() -> Result<Document, AssessmentError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AssessmentError::Js("no document".to_string()))
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, AssessmentError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| AssessmentError::missing(format!("#{id}")))
}

/// The live quiz form.
pub struct DomForm {
    form: HtmlFormElement,
}

impl DomForm {
    fn control(&self, name: &str) -> Result<Element, AssessmentError> {
        let selector = format!(r#"[name="{name}"]"#);
        self.form
            .query_selector(&selector)
            .map_err(js_error)?
            .ok_or_else(|| AssessmentError::missing(selector))
    }

    fn checked_interests(&self) -> Result<BTreeSet<String>, AssessmentError> {
        let checked = self
            .form
            .query_selector_all(INTERESTS_SELECTOR)
            .map_err(js_error)?;

        let mut interests = BTreeSet::new();
        for i in 0..checked.length() {
            if let Some(input) = checked
                .get(i)
                .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
            {
                interests.insert(input.value());
            }
        }
        Ok(interests)
    }

    fn selected_skills(&self) -> Result<Vec<String>, AssessmentError> {
        let select = self
            .control("skills")?
            .dyn_into::<HtmlSelectElement>()
            .map_err(|_| AssessmentError::WrongElementType {
                id: "skills".to_string(),
                expected: "HTMLSelectElement",
            })?;

        let options = select.selected_options();
        let mut skills = Vec::with_capacity(options.length() as usize);
        for i in 0..options.length() {
            if let Some(option) = options
                .item(i)
                .and_then(|el| el.dyn_into::<HtmlOptionElement>().ok())
            {
                skills.push(option.value());
            }
        }
        Ok(skills)
    }

    fn goals(&self) -> Result<String, AssessmentError> {
        let control = self.control("goals")?;
        if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
            Ok(input.value())
        } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
            Ok(area.value())
        } else {
            Err(AssessmentError::WrongElementType {
                id: "goals".to_string(),
                expected: "text field",
            })
        }
    }
}

impl FormSource for DomForm {
    fn read_inputs(&self) -> Result<FormInputs, AssessmentError> {
        Ok(FormInputs {
            interests: self.checked_interests()?,
            skills: self.selected_skills()?,
            goals: self.goals()?,
        })
    }
}

/// The container the result card is written into.
pub struct DomResultSection {
    element: Element,
}

impl ResultSink for DomResultSection {
    fn replace_content(&self, html: &str) -> Result<(), AssessmentError> {
        self.element.set_inner_html(html);
        Ok(())
    }

    fn scroll_into_view(&self, smooth: bool) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Auto
        });
        self.element
            .scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Read the optional page-embedded config.
pub fn load_config(document: &Document) -> Result<AssessmentConfig, AssessmentError> {
    match document.get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(el) => AssessmentConfig::from_json(&el.text_content().unwrap_or_default()),
        None => Ok(AssessmentConfig::default()),
    }
}

fn log_recommendation(r: &Recommendation) {
    let rule = r.matched.map(|id| id.name()).unwrap_or("default");
    web_sys::console::log_1(&format!("assessment: recommended {} ({rule})", r.label).into());
}

fn report(err: &AssessmentError) {
    web_sys::console::error_1(&format!("assessment: {err}").into());
}

/// Report a startup fault and throw it into the page. Never returns.
pub fn fail(err: &AssessmentError) -> ! {
    report(err);
    wasm_bindgen::throw_str(&err.to_string())
}

/// Attach the submit handler to the quiz form for the lifetime of the page.
pub fn install(document: &Document, config: AssessmentConfig) -> Result<(), AssessmentError> {
    let form = element_by_id(document, &config.form_id)?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| AssessmentError::WrongElementType {
            id: config.form_id.clone(),
            expected: "HTMLFormElement",
        })?;
    let section = DomResultSection {
        element: element_by_id(document, &config.result_id)?,
    };
    let source = DomForm { form: form.clone() };

    // An `Err` returned here is rethrown by wasm-bindgen as an uncaught
    // exception on the page.
    let on_submit = Closure::<dyn FnMut(Event) -> Result<(), JsValue>>::new(
        move |event: Event| {
            match handle_submit_event(|| event.prevent_default(), &source, &section, &config) {
                Ok(r) => {
                    if config.log_submissions {
                        log_recommendation(&r);
                    }
                    Ok(())
                }
                Err(e) => {
                    report(&e);
                    Err(JsValue::from_str(&e.to_string()))
                }
            }
        },
    );

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(js_error)?;
    on_submit.forget();

    Ok(())
}

/// Load config and wire up the page.
pub fn start() -> Result<(), AssessmentError> {
    let document = document()?;
    let config = load_config(&document)?;
    web_sys::console::log_1(
        &format!(
            "assessment: listening on #{} -> #{}",
            config.form_id, config.result_id
        )
        .into(),
    );
    install(&document, config)
}
