use axum::extract::State;
use axum::response::Html;
use axum::Form;
use credcheck_verdict::html::{page, FormEcho};
use credcheck_verdict::{Presentation, UiState};
use serde::Deserialize;

use crate::AppState;

use super::coordinator::{Coordinator, TraceSurface};

/// Fields of the check form. Both are optional on the wire; blank text is
/// caught by validation and a blank top-N falls back to the default.
#[derive(Debug, Default, Deserialize)]
pub struct CheckForm {
    #[serde(default)]
    pub text: String,
    #[serde(default, rename = "topN")]
    pub top_n: Option<String>,
}

pub async fn index() -> Html<String> {
    Html(page(&FormEcho::default(), &Presentation::of(&UiState::Idle)))
}

/// One submission, one cycle. Failures are part of the rendered page, so the
/// response is always 200.
pub async fn post_check(State(state): State<AppState>, Form(form): Form<CheckForm>) -> Html<String> {
    let coordinator = Coordinator::new(state.client.clone(), TraceSurface);
    let outcome = coordinator.submit(&form.text, form.top_n.as_deref()).await;

    let echo = FormEcho {
        text: form.text,
        top_n: form.top_n.unwrap_or_default(),
    };
    Html(page(&echo, &Presentation::of(&outcome)))
}
