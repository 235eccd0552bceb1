//! Add-visit form handler.

use axum::{extract::State, response::Html, Form};

use super::super::error::AppError;
use super::super::types::{AddVisitForm, AppState};
use crate::app::add_visit;
use crate::storage::visited_country_codes;
use crate::view::{render_index, IndexPage};

/// `POST /add`: records the submitted country and re-renders the list.
///
/// Every expected outcome, including blank input, renders the page exactly
/// once with its notification. Unexpected store failures become a 500.
pub async fn add_visit_handler(
    State(state): State<AppState>,
    Form(form): Form<AddVisitForm>,
) -> Result<Html<String>, AppError> {
    let outcome = add_visit(&state.pool, form.country.as_deref())
        .await
        .map_err(AppError::AddVisitFailed)?;
    let notification = outcome.notification();

    let countries = visited_country_codes(&state.pool)
        .await
        .map_err(AppError::AddVisitFailed)?;

    Ok(Html(render_index(&IndexPage::new(
        &countries,
        Some(&notification),
    ))))
}
