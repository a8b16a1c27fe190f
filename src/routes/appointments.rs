use axum::extract::State;
use axum::http::StatusCode;

use super::notes::{add_for_parent, list_for_parent, NoteForParent};
use super::{
    add_record, delete_record, get_record, list_records, require_reference, update_record,
    ApiJson,
};
use crate::auth::extractor::AuthUser;
use crate::envelope::ApiResult;
use crate::error::AppError;
use crate::models::{Appointment, Note, ParentKind};
use crate::state::SharedState;

pub async fn add(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(appointment): ApiJson<Appointment>,
) -> ApiResult<()> {
    if appointment.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }
    require_reference(&state.customers, &auth, appointment.customer_id, "Customer").await?;
    add_record(&state.appointments, &auth, appointment, "Appointment").await
}

pub async fn get(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(id): ApiJson<i64>,
) -> ApiResult<Appointment> {
    get_record(&state.appointments, &auth, id, "Appointment").await
}

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> ApiResult<Vec<Appointment>> {
    list_records(&state.appointments, &auth).await
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(appointment): ApiJson<Appointment>,
) -> ApiResult<()> {
    require_reference(&state.customers, &auth, appointment.customer_id, "Customer").await?;
    update_record(&state.appointments, &auth, appointment, "Appointment").await
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(id): ApiJson<i64>,
) -> Result<StatusCode, AppError> {
    delete_record(&state.appointments, &auth, id, "Appointment").await
}

pub async fn notes(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(appointment_id): ApiJson<i64>,
) -> ApiResult<Vec<Note>> {
    list_for_parent(&state, &auth, ParentKind::Appointment, appointment_id).await
}

pub async fn add_note(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<NoteForParent>,
) -> ApiResult<()> {
    add_for_parent(&state, &auth, ParentKind::Appointment, req).await
}
