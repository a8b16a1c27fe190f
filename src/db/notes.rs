use sqlx::SqlitePool;

use super::changed_one;
use crate::models::{Note, ParentKind};

/// Notes plus the association tables that attach them to parents.
#[derive(Clone)]
pub struct NoteStore {
    pool: SqlitePool,
}

impl NoteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a standalone note, returning its id.
    pub async fn add_new(&self, note: Note) -> Result<Option<i64>, sqlx::Error> {
        let result = sqlx::query("INSERT INTO notes (title, note, created_date) VALUES (?, ?, ?)")
            .bind(note.title)
            .bind(note.note)
            .bind(note.created_date)
            .execute(&self.pool)
            .await?;
        Ok(changed_one(&result).then(|| result.last_insert_rowid()))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Note>, sqlx::Error> {
        sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn update_by_id(&self, id: i64, patch: Note) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE notes SET title = ?, note = ? WHERE id = ? AND deleted = 0")
                .bind(patch.title)
                .bind(patch.note)
                .bind(id)
                .execute(&self.pool)
                .await?;
        Ok(changed_one(&result))
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE notes SET deleted = 1 WHERE id = ? AND deleted = 0")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(changed_one(&result))
    }

    pub async fn link(
        &self,
        kind: ParentKind,
        parent_id: i64,
        note_id: i64,
    ) -> Result<bool, sqlx::Error> {
        let binding = kind.binding();
        let result = sqlx::query(&format!(
            "INSERT INTO {} ({}, note_id) VALUES (?, ?)",
            binding.link_table, binding.parent_column
        ))
        .bind(parent_id)
        .bind(note_id)
        .execute(&self.pool)
        .await?;
        Ok(changed_one(&result))
    }

    /// Live notes attached to one parent, newest first.
    pub async fn get_by_parent(
        &self,
        kind: ParentKind,
        parent_id: i64,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let binding = kind.binding();
        sqlx::query_as::<_, Note>(&format!(
            "SELECT n.* FROM notes n
             JOIN {link} l ON l.note_id = n.id
             WHERE l.{column} = ? AND n.deleted = 0
             ORDER BY n.id DESC",
            link = binding.link_table,
            column = binding.parent_column,
        ))
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Store the note, then attach it. The two writes are independent: if
    /// linking fails the note row stays behind unattached.
    pub async fn create_for_parent(
        &self,
        kind: ParentKind,
        parent_id: i64,
        note: Note,
    ) -> Result<bool, sqlx::Error> {
        let Some(note_id) = self.add_new(note).await? else {
            return Ok(false);
        };
        self.link(kind, parent_id, note_id).await
    }

    /// Owner of a parent record, whether or not it is tombstoned.
    pub async fn parent_owner(
        &self,
        kind: ParentKind,
        parent_id: i64,
    ) -> Result<Option<i64>, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as(&format!(
            "SELECT user_id FROM {} WHERE id = ?",
            kind.binding().parent_table
        ))
        .bind(parent_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|(user_id,)| user_id))
    }

    /// Owner of a note, found through whichever parent it is attached to.
    /// Unattached notes have no owner.
    pub async fn owner_of(&self, note_id: i64) -> Result<Option<i64>, sqlx::Error> {
        let union = ParentKind::ALL
            .iter()
            .map(|kind| {
                let binding = kind.binding();
                format!(
                    "SELECT p.user_id FROM {link} l JOIN {parent} p ON p.id = l.{column}
                     WHERE l.note_id = ?",
                    link = binding.link_table,
                    parent = binding.parent_table,
                    column = binding.parent_column,
                )
            })
            .collect::<Vec<_>>()
            .join(" UNION ALL ");

        let mut query = sqlx::query_as::<_, (i64,)>(&union);
        for _ in ParentKind::ALL {
            query = query.bind(note_id);
        }
        let row = query.fetch_optional(&self.pool).await?;
        Ok(row.map(|(user_id,)| user_id))
    }
}
