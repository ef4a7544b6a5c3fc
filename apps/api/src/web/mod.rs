//! HTML front end: the headline form and the rendered scorecard.

pub mod page;

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use crate::scoring::comparator::compare_headlines;
use crate::state::AppState;
use crate::web::page::{render_page, Outcome};

/// The five optional single-line inputs of the headline form.
#[derive(Debug, Deserialize)]
pub struct HeadlineForm {
    #[serde(default)]
    pub headline_1: String,
    #[serde(default)]
    pub headline_2: String,
    #[serde(default)]
    pub headline_3: String,
    #[serde(default)]
    pub headline_4: String,
    #[serde(default)]
    pub headline_5: String,
}

impl HeadlineForm {
    pub fn fields(self) -> Vec<String> {
        vec![
            self.headline_1,
            self.headline_2,
            self.headline_3,
            self.headline_4,
            self.headline_5,
        ]
    }
}

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(render_page(&[], Outcome::Empty))
}

/// POST /compare
///
/// Always renders the page: failures show up as a banner and the form keeps
/// the submitted values so the user can fix them and resubmit.
pub async fn handle_compare_form(
    State(state): State<AppState>,
    Form(form): Form<HeadlineForm>,
) -> Html<String> {
    let fields = form.fields();
    let html = match compare_headlines(state.llm.as_ref(), &fields).await {
        Ok(comparison) => render_page(&fields, Outcome::Compared(&comparison)),
        Err(err) => render_page(&fields, Outcome::Failed(&err)),
    };
    Html(html)
}
