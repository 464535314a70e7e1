use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct TicketParams {
    pub ticket: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateTicketDescriptionBody {
    pub ticket: String,
    pub ticket_description: String,
}

pub async fn lookup(
    State(state): State<AppState>,
    Query(params): Query<TicketParams>,
) -> impl IntoResponse {
    let ticket = params.ticket.unwrap_or_default();
    match state.ticket_description_handler.lookup(&ticket).await {
        Ok(lookup) => Json(lookup).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn update(
    State(state): State<AppState>,
    body: Result<Json<UpdateTicketDescriptionBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .ticket_description_handler
        .update(&body.ticket, &body.ticket_description)
        .await
    {
        Ok(result) => Json(result).into_response(),
        Err(err) => err.into_response(),
    }
}
