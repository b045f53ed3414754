//! Result card rendering (read-only from the recommendation).

use super::state::CareerLabel;

pub const COURSES_HEADING: &str = "Suggested Courses:";
pub const WORKSHOP_COURSE: &str = "Career Preparation Workshop";

/// The result card for one recommendation.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub label: CareerLabel,
    pub heading: String,
    pub courses: [String; 3],
}

impl ResultView {
    pub fn new(label: CareerLabel) -> Self {
        Self {
            label,
            heading: format!("Recommended Career: {label}"),
            courses: [
                format!("Introduction to {label}"),
                format!("Advanced {label} Skills"),
                WORKSHOP_COURSE.to_string(),
            ],
        }
    }

    /// Markup for the result container. `card_class` is the stylesheet hook
    /// on the outer element.
    ///
    /// Labels come from a closed set of plain words, so nothing here needs
    /// escaping. `card_class` is trusted page configuration.
    pub fn to_html(&self, card_class: &str) -> String {
        let mut html = String::new();
        html.push_str(&format!("<div class=\"{card_class}\">\n"));
        html.push_str(&format!("  <h3>{}</h3>\n", self.heading));
        html.push_str(&format!(
            "  <p>Based on your interests and skills, we suggest: <b>{}</b>.</p>\n",
            self.label
        ));
        html.push_str(&format!("  <h4>{COURSES_HEADING}</h4>\n"));
        html.push_str("  <ul>\n");
        for course in &self.courses {
            html.push_str(&format!("    <li>{course}</li>\n"));
        }
        html.push_str("  </ul>\n");
        html.push_str("</div>\n");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::state::ALL_CAREERS;

    #[test]
    fn designer_courses() {
        let view = ResultView::new(CareerLabel::GraphicDesigner);
        assert_eq!(view.heading, "Recommended Career: Graphic Designer");
        assert_eq!(
            view.courses,
            [
                "Introduction to Graphic Designer",
                "Advanced Graphic Designer Skills",
                "Career Preparation Workshop",
            ]
        );
    }

    #[test]
    fn html_shape() {
        let html = ResultView::new(CareerLabel::BusinessAnalyst).to_html("result-card");
        assert!(html.starts_with("<div class=\"result-card\">"));
        assert!(html.contains("<h3>Recommended Career: Business Analyst</h3>"));
        assert!(html.contains("<b>Business Analyst</b>."));
        assert!(html.contains("<h4>Suggested Courses:</h4>"));
        assert_eq!(html.matches("<li>").count(), 3);
        assert!(html.trim_end().ends_with("</div>"));
    }

    #[test]
    fn every_label_appears_in_heading_paragraph_and_two_courses() {
        for label in ALL_CAREERS {
            let html = ResultView::new(label).to_html("card");
            // heading, bold paragraph, introduction, advanced
            assert_eq!(html.matches(label.as_str()).count(), 4, "{label}");
        }
    }

    #[test]
    fn rendering_is_repeatable() {
        let a = ResultView::new(CareerLabel::MarketingSpecialist).to_html("result-card");
        let b = ResultView::new(CareerLabel::MarketingSpecialist).to_html("result-card");
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn custom_card_class() {
        let html = ResultView::new(CareerLabel::SoftwareEngineer).to_html("quiz-result");
        assert!(html.starts_with("<div class=\"quiz-result\">"));
    }
}
