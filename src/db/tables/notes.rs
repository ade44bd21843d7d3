//! Note table operations

use chrono::{DateTime, Utc};

use super::super::{Database, StoreError};
use crate::models::Note;

impl Database {
    /// Insert a note, assigning its id and creation timestamp.
    ///
    /// Runs inside an explicit transaction: the insert either commits fully
    /// or the guard's drop rolls it back, leaving the store unchanged.
    pub fn create_note(&self, title: &str, content: &str) -> Result<Note, StoreError> {
        let mut conn = self.conn()?;
        let created_at = Utc::now();

        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO notes (title, content, created_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![title, content, created_at.to_rfc3339()],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(Note {
            id,
            title: title.to_string(),
            content: content.to_string(),
            created_at,
        })
    }

    /// List all notes, newest first.
    ///
    /// The id tiebreak keeps ordering deterministic when two inserts share a
    /// timestamp instant.
    pub fn list_notes(&self) -> Result<Vec<Note>, StoreError> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            "SELECT id, title, content, created_at
             FROM notes ORDER BY created_at DESC, id DESC",
        )?;

        let notes = stmt
            .query_map([], |row| Self::row_to_note(row))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(notes)
    }

    /// Delete a note by id. Returns false when no row matched.
    pub fn delete_note(&self, id: i64) -> Result<bool, StoreError> {
        let mut conn = self.conn()?;

        let tx = conn.transaction()?;
        let rows_affected = tx.execute("DELETE FROM notes WHERE id = ?1", [id])?;
        tx.commit()?;

        Ok(rows_affected > 0)
    }

    fn row_to_note(row: &rusqlite::Row) -> rusqlite::Result<Note> {
        let created_at_str: String = row.get(3)?;

        Ok(Note {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            created_at: DateTime::parse_from_rfc3339(&created_at_str)
                .map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        3,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?
                .with_timezone(&Utc),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_db(dir: &tempfile::TempDir) -> Database {
        let db_path = dir.path().join("test.db");
        let db = Database::new(db_path.to_str().unwrap()).expect("Failed to open database");
        db.init_tables().expect("Failed to init tables");
        db
    }

    #[test]
    fn test_create_and_list_newest_first() {
        let dir = tempdir().unwrap();
        let db = test_db(&dir);

        let a = db.create_note("First", "a").expect("Failed to create note");
        let b = db.create_note("Second", "b").expect("Failed to create note");
        assert!(b.id > a.id);

        let notes = db.list_notes().expect("Failed to list notes");
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].id, b.id);
        assert_eq!(notes[0].title, "Second");
        assert_eq!(notes[1].id, a.id);
    }

    #[test]
    fn test_list_empty_store() {
        let dir = tempdir().unwrap();
        let db = test_db(&dir);

        let notes = db.list_notes().expect("Failed to list notes");
        assert!(notes.is_empty());
    }

    #[test]
    fn test_delete_existing_note() {
        let dir = tempdir().unwrap();
        let db = test_db(&dir);

        let note = db.create_note("Doomed", "bye").expect("Failed to create note");
        let removed = db.delete_note(note.id).expect("Failed to delete note");
        assert!(removed);

        let notes = db.list_notes().expect("Failed to list notes");
        assert!(notes.is_empty());
    }

    #[test]
    fn test_delete_missing_note_leaves_store_unchanged() {
        let dir = tempdir().unwrap();
        let db = test_db(&dir);

        db.create_note("Keeper", "stays").expect("Failed to create note");

        let removed = db.delete_note(9999).expect("Delete of missing id errored");
        assert!(!removed);

        let notes = db.list_notes().expect("Failed to list notes");
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn test_create_note_accepts_empty_strings() {
        // Presence-only validation upstream: empty strings persist fine.
        let dir = tempdir().unwrap();
        let db = test_db(&dir);

        let note = db.create_note("", "").expect("Empty strings should insert");
        assert_eq!(note.title, "");
        assert_eq!(note.content, "");
    }

    #[test]
    fn test_title_length_bound_enforced() {
        let dir = tempdir().unwrap();
        let db = test_db(&dir);

        let long_title = "x".repeat(101);
        let result = db.create_note(&long_title, "content");
        assert!(result.is_err());

        // Failed insert rolled back: store unchanged.
        let notes = db.list_notes().expect("Failed to list notes");
        assert!(notes.is_empty());

        let max_title = "x".repeat(100);
        db.create_note(&max_title, "content")
            .expect("100-char title should insert");
    }

    #[test]
    fn test_created_at_roundtrips_through_storage() {
        let dir = tempdir().unwrap();
        let db = test_db(&dir);

        let created = db.create_note("Stamped", "when").expect("Failed to create note");
        let notes = db.list_notes().expect("Failed to list notes");
        assert_eq!(notes[0].created_at, created.created_at);
    }
}
