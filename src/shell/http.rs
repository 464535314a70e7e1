use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::json;

use crate::modules::time_entries::core::errors::ApplicationError;
use crate::modules::time_entries::use_cases::amend_time_entry::inbound::http as amend_http;
use crate::modules::time_entries::use_cases::get_horizon::inbound::http as horizon_http;
use crate::modules::time_entries::use_cases::get_rollup::inbound::http as rollup_http;
use crate::modules::time_entries::use_cases::list_entries_by_range::inbound::http as list_http;
use crate::modules::time_entries::use_cases::reconcile_weekly_submission::inbound::http as reconcile_http;
use crate::modules::time_entries::use_cases::ticket_description::inbound::http as ticket_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/time-entries", get(list_http::handle))
        .route("/time-entries/weekly", post(reconcile_http::handle))
        .route("/time-entries/horizon", get(horizon_http::handle))
        .route("/time-entries/{id}", put(amend_http::handle))
        .route("/admin/rollup", post(rollup_http::handle))
        .route(
            "/tickets/description",
            get(ticket_http::lookup).put(ticket_http::update),
        )
        .with_state(state)
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::Conflict(_) => StatusCode::CONFLICT,
            ApplicationError::MalformedData(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApplicationError::Store(_) | ApplicationError::Directory(_) => {
                tracing::error!(error = %self, "backend failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
