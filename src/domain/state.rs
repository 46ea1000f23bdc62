use crate::domain::Article;

pub const SUMMARY_FAILED: &str = "Failed to load summary.";
pub const MEANING_FAILED: &str = "Failed to fetch meaning.";
pub const MEANING_PLACEHOLDER: &str = "Loading...";

/// Lifecycle of the summary for the selected article.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SummaryState {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(String),
}

impl SummaryState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SummaryState::Success(_) | SummaryState::Error(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    NoSelection,
    Selected {
        article: Article,
        summary: SummaryState,
    },
}

impl SelectionState {
    pub fn article(&self) -> Option<&Article> {
        match self {
            SelectionState::NoSelection => None,
            SelectionState::Selected { article, .. } => Some(article),
        }
    }

    pub fn summary(&self) -> Option<&SummaryState> {
        match self {
            SelectionState::NoSelection => None,
            SelectionState::Selected { summary, .. } => Some(summary),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Meaning {
    Loading,
    Resolved(String),
}

impl Meaning {
    pub fn text(&self) -> &str {
        match self {
            Meaning::Loading => MEANING_PLACEHOLDER,
            Meaning::Resolved(text) => text,
        }
    }
}

/// A word-definition lookup, either pending or resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupState {
    pub word: String,
    pub meaning: Meaning,
}

impl LookupState {
    pub fn loading(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            meaning: Meaning::Loading,
        }
    }

    pub fn resolved(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            meaning: Meaning::Resolved(meaning.into()),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.meaning == Meaning::Loading
    }
}
