//! Search domain types

use serde::Deserialize;

/// One raw section from the book-search API response.
///
/// Lives only for the duration of a single request; the repository maps it
/// into a [`ResultSummary`] before handing results to anyone else.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSection {
    /// Snippets of matching text, possibly carrying simple HTML markup
    #[serde(default)]
    pub snippets: Vec<String>,

    /// Title of the book section the match came from
    #[serde(rename = "sectionTitle")]
    pub section_title: String,
}

/// Display-ready search result: a section title plus its first snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSummary {
    pub title: String,
    /// May contain `<b>`-style markup; rendered as rich text by the view
    pub snippet: String,
}

impl From<SearchSection> for ResultSummary {
    fn from(section: SearchSection) -> Self {
        Self {
            title: section.section_title,
            snippet: section.snippets.into_iter().next().unwrap_or_default(),
        }
    }
}

/// The single value describing what the UI should currently show.
///
/// Exactly one state is active at a time. Every search attempt ends in
/// `Content` or `Error` -- the two terminal states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// No query issued yet
    #[default]
    Initial,

    /// A query is in flight
    Loading,

    /// The last query succeeded (possibly with zero matches)
    Content(Vec<ResultSummary>),

    /// The last query failed; carries a human-readable description
    Error(String),
}

impl ViewState {
    /// True for the two states that end a search attempt.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ViewState::Content(_) | ViewState::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_section() {
        let json = r#"{"sectionTitle": "Dogs", "snippets": ["A dog is a domesticated canine."]}"#;
        let section: SearchSection = serde_json::from_str(json).unwrap();
        assert_eq!(section.section_title, "Dogs");
        assert_eq!(section.snippets, vec!["A dog is a domesticated canine."]);
    }

    #[test]
    fn missing_snippets_defaults_to_empty() {
        let json = r#"{"sectionTitle": "Empty"}"#;
        let section: SearchSection = serde_json::from_str(json).unwrap();
        assert!(section.snippets.is_empty());
    }

    #[test]
    fn summary_takes_title_and_first_snippet() {
        let section = SearchSection {
            section_title: "Dogs".into(),
            snippets: vec!["first <b>dog</b>".into(), "second".into()],
        };
        let summary = ResultSummary::from(section);
        assert_eq!(summary.title, "Dogs");
        assert_eq!(summary.snippet, "first <b>dog</b>");
    }

    #[test]
    fn summary_of_snippetless_section_is_empty_string() {
        let section = SearchSection {
            section_title: "Bare".into(),
            snippets: vec![],
        };
        let summary = ResultSummary::from(section);
        assert_eq!(summary.snippet, "");
    }

    #[test]
    fn default_state_is_initial() {
        assert_eq!(ViewState::default(), ViewState::Initial);
    }

    #[test]
    fn terminal_states() {
        assert!(!ViewState::Initial.is_terminal());
        assert!(!ViewState::Loading.is_terminal());
        assert!(ViewState::Content(vec![]).is_terminal());
        assert!(ViewState::Error("boom".into()).is_terminal());
    }
}
