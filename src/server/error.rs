//! Errors that cross the handler boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use thiserror::Error;

use crate::config::{ADD_VISIT_FAILURE_BODY, DISPLAY_FAILURE_BODY};
use crate::error_handling::StoreError;

/// An unrecovered store failure, answered with a fixed 500 body.
///
/// The source error is logged and never sent to the client.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{}", DISPLAY_FAILURE_BODY)]
    ListUnavailable(#[source] StoreError),

    #[error("{}", ADD_VISIT_FAILURE_BODY)]
    AddVisitFailed(#[source] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::ListUnavailable(source) => error!("Query error: {source}"),
            AppError::AddVisitFailed(source) => error!("Add visit failed: {source}"),
        }

        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
