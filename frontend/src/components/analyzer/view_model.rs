//! Render model for the results panel.
//!
//! `ResultsVm::from_analysis` is a pure function of the analysis; `view.rs`
//! turns the model into markup without further decisions.

use common::model::analysis::AnalysisResult;
use common::model::category::{Category, CATEGORIES};
use common::model::score::{Band, Score};
use common::model::section::{SectionContent, SectionKey};

#[derive(Clone, Debug, PartialEq)]
pub struct GaugeVm {
    /// `stroke-dasharray` of the score arc, e.g. `"85, 100"`.
    pub dasharray: String,
    pub text: String,
    pub band: Band,
    pub verdict: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryBarVm {
    pub category: Category,
    pub title: &'static str,
    pub score_text: String,
    /// CSS width, e.g. `"70%"`.
    pub width: String,
    pub band: Band,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SuggestionListVm {
    pub category: Category,
    pub title: &'static str,
    pub items: Vec<String>,
    /// `items` holds only the "no improvements needed" text.
    pub is_placeholder: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactLineVm {
    pub label: &'static str,
    pub value: String,
}

impl ContactLineVm {
    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SectionBodyVm {
    Contact(Vec<ContactLineVm>),
    Text(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionPanelVm {
    pub section: SectionKey,
    pub icon: &'static str,
    pub title: &'static str,
    pub body: SectionBodyVm,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultsVm {
    pub gauge: GaugeVm,
    pub categories: Vec<CategoryBarVm>,
    pub suggestions: Vec<SuggestionListVm>,
    pub sections: Vec<SectionPanelVm>,
}

impl ResultsVm {
    pub fn from_analysis(analysis: &AnalysisResult) -> Self {
        let scores = &analysis.ats_score.categories;
        Self {
            gauge: gauge(analysis.ats_score.overall),
            categories: CATEGORIES
                .iter()
                .map(|info| category_bar(info.category, scores.get(info.category)))
                .collect(),
            suggestions: CATEGORIES
                .iter()
                .map(|info| suggestion_list(info.category, analysis.suggestions.get(info.category)))
                .collect(),
            sections: analysis
                .parsed_resume
                .non_blank()
                .map(|(section, content)| section_panel(section, content))
                .collect(),
        }
    }
}

pub fn gauge(overall: Score) -> GaugeVm {
    let band = overall.band();
    GaugeVm {
        dasharray: format!("{}, 100", Score::new(overall.percent())),
        text: overall.to_string(),
        band,
        verdict: band.verdict(),
    }
}

pub fn category_bar(category: Category, score: Score) -> CategoryBarVm {
    CategoryBarVm {
        category,
        title: category.info().title,
        score_text: score.to_string(),
        width: format!("{}%", Score::new(score.percent())),
        band: score.band(),
    }
}

pub fn suggestion_list(category: Category, suggestions: &[String]) -> SuggestionListVm {
    let info = category.info();
    if suggestions.is_empty() {
        SuggestionListVm {
            category,
            title: info.title,
            items: vec![info.placeholder.to_string()],
            is_placeholder: true,
        }
    } else {
        SuggestionListVm {
            category,
            title: info.title,
            items: suggestions.to_vec(),
            is_placeholder: false,
        }
    }
}

pub fn section_panel(section: SectionKey, content: &SectionContent) -> SectionPanelVm {
    let info = section.info();
    let body = match content {
        SectionContent::Contact(contact) => SectionBodyVm::Contact(
            contact
                .present_fields()
                .into_iter()
                .map(|(label, value)| ContactLineVm {
                    label,
                    value: value.to_string(),
                })
                .collect(),
        ),
        SectionContent::Text(text) => SectionBodyVm::Text(text.clone()),
    };
    SectionPanelVm {
        section,
        icon: info.icon,
        title: info.title,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::requests::UploadResponse;

    fn sample_analysis() -> AnalysisResult {
        let body = r#"{"analysis": {
            "ats_score": {"overall": 85, "categories": {"content": 90, "format": 70, "skills": 60, "sections": 95, "style": 55}},
            "suggestions": {"content": [], "format": ["Use bullet points"], "skills": [], "sections": [], "style": ["Avoid passive voice"]},
            "parsed_resume": {
                "contact_info": {"email": "a@b.com", "phone": null, "linkedin": null},
                "summary": "Backend engineer",
                "experience": "   ",
                "skills": "Rust\nSQL"
            },
            "result_id": "r1"
        }}"#;
        serde_json::from_str::<UploadResponse>(body)
            .unwrap()
            .into_analysis()
    }

    fn bar(vm: &ResultsVm, category: Category) -> &CategoryBarVm {
        vm.categories.iter().find(|c| c.category == category).unwrap()
    }

    fn list(vm: &ResultsVm, category: Category) -> &SuggestionListVm {
        vm.suggestions.iter().find(|s| s.category == category).unwrap()
    }

    #[test]
    fn renders_sample_analysis() {
        let vm = ResultsVm::from_analysis(&sample_analysis());

        assert_eq!(vm.gauge.text, "85");
        assert_eq!(vm.gauge.dasharray, "85, 100");
        assert_eq!(vm.gauge.band, Band::Good);
        assert_eq!(vm.gauge.band.color(), "#28a745");

        let format = bar(&vm, Category::Format);
        assert_eq!((format.width.as_str(), format.band), ("70%", Band::Warning));
        let style = bar(&vm, Category::Style);
        assert_eq!((style.width.as_str(), style.band), ("55%", Band::Poor));
        assert_eq!(bar(&vm, Category::Skills).band, Band::Warning);

        assert_eq!(list(&vm, Category::Format).items, vec!["Use bullet points"]);
        let content = list(&vm, Category::Content);
        assert!(content.is_placeholder);
        assert_eq!(content.items, vec!["Great job! No content improvements needed."]);
    }

    #[test]
    fn categories_follow_table_order() {
        let vm = ResultsVm::from_analysis(&sample_analysis());
        let order: Vec<Category> = vm.categories.iter().map(|c| c.category).collect();
        assert_eq!(
            order,
            vec![
                Category::Content,
                Category::Format,
                Category::Skills,
                Category::Sections,
                Category::Style
            ]
        );
    }

    #[test]
    fn suggestions_keep_count_and_order() {
        let input: Vec<String> = ["b", "a", "c"].iter().map(|s| s.to_string()).collect();
        let vm = suggestion_list(Category::Skills, &input);
        assert!(!vm.is_placeholder);
        assert_eq!(vm.items, input);
    }

    #[test]
    fn sections_skip_blank_and_keep_order() {
        let vm = ResultsVm::from_analysis(&sample_analysis());
        let rendered: Vec<SectionKey> = vm.sections.iter().map(|s| s.section).collect();
        assert_eq!(
            rendered,
            vec![SectionKey::ContactInfo, SectionKey::Summary, SectionKey::Skills]
        );
        assert_eq!(vm.sections[1].icon, "fa-file-alt");
        assert_eq!(vm.sections[1].title, "Professional Summary");
        assert_eq!(vm.sections[2].body, SectionBodyVm::Text("Rust\nSQL".to_string()));
    }

    #[test]
    fn email_only_contact_has_single_line() {
        let vm = ResultsVm::from_analysis(&sample_analysis());
        match &vm.sections[0].body {
            SectionBodyVm::Contact(lines) => {
                let text: Vec<String> = lines.iter().map(ContactLineVm::text).collect();
                assert_eq!(text, vec!["Email: a@b.com"]);
            }
            other => panic!("expected contact body, got {:?}", other),
        }
    }

    #[test]
    fn empty_contact_is_not_rendered() {
        let analysis: AnalysisResult = serde_json::from_str(
            r#"{"ats_score": {"overall": 10},
                "parsed_resume": {"contact_info": {"email": null, "phone": null, "linkedin": null}}}"#,
        )
        .unwrap();
        assert!(ResultsVm::from_analysis(&analysis).sections.is_empty());
    }

    #[test]
    fn fractional_overall_score() {
        let vm = gauge(Score::new(78.5));
        assert_eq!(vm.text, "78.5");
        assert_eq!(vm.dasharray, "78.5, 100");
        assert_eq!(vm.band, Band::Warning);
        assert_eq!(
            vm.verdict,
            "Your resume needs some improvements for better ATS compatibility."
        );
    }
}
