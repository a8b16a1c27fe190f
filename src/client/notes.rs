use serde::Serialize;

use super::{ApiClient, ClientError, Reply};
use crate::envelope::Envelope;
use crate::models::{Note, NoteDraft, ParentKind};

#[derive(Serialize)]
struct NoteForParent<'a> {
    #[serde(rename = "parentID")]
    parent_id: i64,
    note: &'a NoteDraft,
}

/// Note operations for one parent kind.
///
/// The kind only picks which endpoints `get_notes` and `create_note` hit;
/// the by-id operations are the same for every kind. Nothing here returns an
/// error: transport and decode failures come back as `success: false`.
#[derive(Clone)]
pub struct NoteClient {
    api: ApiClient,
    kind: ParentKind,
}

impl NoteClient {
    pub fn new(api: ApiClient, kind: ParentKind) -> Self {
        Self { api, kind }
    }

    pub fn kind(&self) -> ParentKind {
        self.kind
    }

    pub async fn get_notes(&self, parent_id: i64) -> Envelope<Vec<Note>> {
        let path = self.kind.binding().list_path;
        settle(self.api.post(path, &parent_id).await, "Notes loaded")
    }

    pub async fn create_note(&self, parent_id: i64, note: &NoteDraft) -> Envelope<()> {
        let path = self.kind.binding().create_path;
        let body = NoteForParent { parent_id, note };
        settle(self.api.post(path, &body).await, "Note created")
    }

    pub async fn get_note(&self, id: i64) -> Envelope<Note> {
        settle(self.api.post("/api/notes/get", &id).await, "Note loaded")
    }

    pub async fn update_note(&self, note: &Note) -> Envelope<()> {
        settle(self.api.post("/api/notes/update", note).await, "Note updated")
    }

    pub async fn delete_note(&self, id: i64) -> Envelope<()> {
        settle(self.api.post("/api/notes/delete", &id).await, "Note deleted")
    }
}

fn settle<T>(
    result: Result<Reply<Envelope<T>>, ClientError>,
    no_content_message: &str,
) -> Envelope<T> {
    match result {
        Ok(Reply::Body(envelope)) => envelope,
        Ok(Reply::NoContent) => Envelope::done(no_content_message),
        Err(e) => {
            tracing::warn!("Note request failed: {e}");
            Envelope::fail(e.to_string())
        }
    }
}
