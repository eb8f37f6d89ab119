use serde::Serialize;

use crate::category::{format_score, ScoreCategory};
use crate::models::CheckResult;
use crate::state::UiState;

/// Labels longer than this many characters are cut.
pub const MAX_LABEL_CHARS: usize = 80;
pub const ELLIPSIS: &str = "...";
pub const EMPTY_ARTICLE_PLACEHOLDER: &str = "No text provided";

/// Reference links open in a new browsing context with no opener or
/// referrer linkage back to this page.
pub const LINK_TARGET: &str = "_blank";
pub const LINK_REL: &str = "noopener noreferrer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceLink {
    pub href: String,
    /// Literal label text, without the ellipsis marker.
    pub label: String,
    pub truncated: bool,
}

impl ReferenceLink {
    pub fn new(url: &str) -> Self {
        let (label, truncated) = truncate_label(url);
        Self {
            href: url.to_owned(),
            label,
            truncated,
        }
    }

    /// What the user reads: the label plus the marker when cut.
    pub fn display_text(&self) -> String {
        if self.truncated {
            format!("{}{ELLIPSIS}", self.label)
        } else {
            self.label.clone()
        }
    }

    pub fn target(&self) -> &'static str {
        LINK_TARGET
    }

    pub fn rel(&self) -> &'static str {
        LINK_REL
    }
}

/// First [`MAX_LABEL_CHARS`] characters of `url`, and whether anything was cut.
/// Counts `char`s, so a URL with astral-plane characters is cut later than a
/// browser counting UTF-16 units would cut it.
pub fn truncate_label(url: &str) -> (String, bool) {
    match url.char_indices().nth(MAX_LABEL_CHARS) {
        Some((cut, _)) => (url[..cut].to_owned(), true),
        None => (url.to_owned(), false),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub score_text: String,
    pub category: ScoreCategory,
    pub reason: String,
    pub excerpt: String,
    /// `None` hides the whole reference section.
    pub references: Option<Vec<ReferenceLink>>,
}

impl ResultView {
    pub fn card_classes(&self) -> String {
        self.category.card_classes()
    }
}

/// Pure mapping from a normalised result to its view.
pub fn render_result(result: &CheckResult) -> ResultView {
    let references = if result.documents.is_empty() {
        None
    } else {
        Some(result.documents.iter().map(|d| ReferenceLink::new(d)).collect())
    };

    let excerpt = if result.article.is_empty() {
        EMPTY_ARTICLE_PLACEHOLDER.to_owned()
    } else {
        result.article.clone()
    };

    ResultView {
        score_text: format_score(result.score),
        category: ScoreCategory::classify(result.score),
        reason: result.reason.clone(),
        excerpt,
        references,
    }
}

/// Visibility-resolved view of a [`UiState`]. At most one of `loading`,
/// `error` and `result` is ever set.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Presentation {
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<ResultView>,
    /// Bring the result area into view (smooth, nearest) after populating it.
    pub scroll_to_result: bool,
}

impl Presentation {
    pub fn of(state: &UiState) -> Self {
        match state {
            UiState::Idle => Self::default(),
            UiState::Loading => Self {
                loading: true,
                ..Self::default()
            },
            UiState::Success(result) => Self {
                result: Some(render_result(result)),
                scroll_to_result: true,
                ..Self::default()
            },
            UiState::Error(message) => Self {
                error: Some(message.clone()),
                ..Self::default()
            },
        }
    }
}
