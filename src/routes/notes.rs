use axum::extract::State;
use axum::http::StatusCode;
use chrono::Utc;
use serde::Deserialize;

use super::ApiJson;
use crate::auth::extractor::AuthUser;
use crate::envelope::{created, done, ok, ApiResult};
use crate::error::AppError;
use crate::models::{Note, NoteDraft, ParentKind};
use crate::state::{AppState, SharedState};

#[derive(Deserialize)]
pub struct NoteForParent {
    #[serde(rename = "parentID")]
    pub parent_id: i64,
    pub note: NoteDraft,
}

async fn require_parent(
    state: &AppState,
    auth: &AuthUser,
    kind: ParentKind,
    parent_id: i64,
) -> Result<(), AppError> {
    match state.notes.parent_owner(kind, parent_id).await? {
        Some(owner) if owner == auth.user_id => Ok(()),
        _ => Err(AppError::NotFound(format!("No {kind} with id {parent_id}"))),
    }
}

async fn require_note(state: &AppState, auth: &AuthUser, note_id: i64) -> Result<(), AppError> {
    match state.notes.owner_of(note_id).await? {
        Some(owner) if owner == auth.user_id => Ok(()),
        _ => Err(AppError::NotFound("Note not found".to_string())),
    }
}

pub(super) async fn list_for_parent(
    state: &AppState,
    auth: &AuthUser,
    kind: ParentKind,
    parent_id: i64,
) -> ApiResult<Vec<Note>> {
    require_parent(state, auth, kind, parent_id).await?;
    let notes = state.notes.get_by_parent(kind, parent_id).await?;
    ok(notes)
}

pub(super) async fn add_for_parent(
    state: &AppState,
    auth: &AuthUser,
    kind: ParentKind,
    req: NoteForParent,
) -> ApiResult<()> {
    if req.note.title.trim().is_empty() {
        return Err(AppError::BadRequest("Note title is required".to_string()));
    }
    require_parent(state, auth, kind, req.parent_id).await?;

    let note = req.note.into_note(Utc::now());
    if state
        .notes
        .create_for_parent(kind, req.parent_id, note)
        .await?
    {
        created("Note created")
    } else {
        Err(AppError::Internal(format!(
            "Note for {kind} {} was not stored",
            req.parent_id
        )))
    }
}

pub async fn get(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(id): ApiJson<i64>,
) -> ApiResult<Note> {
    require_note(&state, &auth, id).await?;
    let note = state
        .notes
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Note not found".to_string()))?;
    ok(note)
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(note): ApiJson<Note>,
) -> ApiResult<()> {
    require_note(&state, &auth, note.id).await?;
    if state.notes.update_by_id(note.id, note).await? {
        done("Note updated")
    } else {
        Err(AppError::NotFound("Note not found".to_string()))
    }
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(id): ApiJson<i64>,
) -> Result<StatusCode, AppError> {
    require_note(&state, &auth, id).await?;
    if state.notes.delete_by_id(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Note not found".to_string()))
    }
}
