use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use rent_core::IntakeProfile;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/save-booking", post(save_booking))
        .route("/api/save-contact", post(save_contact))
}

async fn save_booking(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    accept(&state, &state.booking, &body).await
}

async fn save_contact(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    accept(&state, &state.contact, &body).await
}

async fn accept(
    state: &AppState,
    profile: &IntakeProfile,
    body: &[u8],
) -> Result<Json<Value>, AppError> {
    // unparseable bodies carry no payload either
    let body: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

    // the notification task is detached; the response does not wait for it
    let _receipt = state.intake.accept(profile, &body).await?;

    Ok(Json(json!({ "ok": true })))
}
