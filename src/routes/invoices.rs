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
use crate::models::{Invoice, Note, ParentKind};
use crate::state::{AppState, SharedState};

fn validate(invoice: &Invoice) -> Result<(), AppError> {
    if invoice.due_date < invoice.issue_date {
        return Err(AppError::BadRequest(
            "Due date cannot be before the issue date".to_string(),
        ));
    }
    if invoice
        .items
        .iter()
        .any(|item| item.quantity <= 0.0 || item.price < 0.0)
    {
        return Err(AppError::BadRequest(
            "Line items need a positive quantity and a non-negative price".to_string(),
        ));
    }
    Ok(())
}

async fn check_references(
    state: &AppState,
    auth: &AuthUser,
    invoice: &Invoice,
) -> Result<(), AppError> {
    require_reference(&state.customers, auth, invoice.customer_id, "Customer").await?;
    if let Some(appointment_id) = invoice.appointment_id {
        require_reference(&state.appointments, auth, appointment_id, "Appointment").await?;
    }
    Ok(())
}

pub async fn add(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(invoice): ApiJson<Invoice>,
) -> ApiResult<()> {
    validate(&invoice)?;
    check_references(&state, &auth, &invoice).await?;
    add_record(&state.invoices, &auth, invoice, "Invoice").await
}

pub async fn get(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(id): ApiJson<i64>,
) -> ApiResult<Invoice> {
    get_record(&state.invoices, &auth, id, "Invoice").await
}

pub async fn list(auth: AuthUser, State(state): State<SharedState>) -> ApiResult<Vec<Invoice>> {
    list_records(&state.invoices, &auth).await
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(invoice): ApiJson<Invoice>,
) -> ApiResult<()> {
    validate(&invoice)?;
    check_references(&state, &auth, &invoice).await?;
    update_record(&state.invoices, &auth, invoice, "Invoice").await
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(id): ApiJson<i64>,
) -> Result<StatusCode, AppError> {
    delete_record(&state.invoices, &auth, id, "Invoice").await
}

pub async fn notes(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(invoice_id): ApiJson<i64>,
) -> ApiResult<Vec<Note>> {
    list_for_parent(&state, &auth, ParentKind::Invoice, invoice_id).await
}

pub async fn add_note(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<NoteForParent>,
) -> ApiResult<()> {
    add_for_parent(&state, &auth, ParentKind::Invoice, req).await
}
