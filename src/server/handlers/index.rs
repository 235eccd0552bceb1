//! List page handler.

use axum::{extract::State, response::Html};

use super::super::error::AppError;
use super::super::types::AppState;
use crate::storage::visited_country_codes;
use crate::view::{render_index, IndexPage};

/// `GET /`: the visited list and its count, with no notification.
pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let countries = visited_country_codes(&state.pool)
        .await
        .map_err(AppError::ListUnavailable)?;

    Ok(Html(render_index(&IndexPage::new(&countries, None))))
}
