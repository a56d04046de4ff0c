//! TaskStore implementation over a SQLite database.
//!
//! The store owns a single `rusqlite::Connection` with an explicit
//! lifecycle: opened once at process start, dropped at exit. Identifiers
//! come from SQLite `AUTOINCREMENT`, so an id deleted today is never
//! handed out again tomorrow.

use crate::error::{Result, TaskdeckError};
use crate::store::records::{NewTask, Task, TaskPatch};
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::Path;

/// SQLite-backed store for task records.
pub struct TaskStore {
    db: Connection,
}

/// Current time in UTC, truncated to milliseconds (the precision the
/// store persists, so same-millisecond rows compare equal).
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

fn to_db(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, false)
}

fn from_db(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    let created_raw: String = row.get(6)?;
    let updated_raw: String = row.get(7)?;
    Ok(Task {
        id: row.get(0)?,
        text: row.get(1)?,
        done: row.get(2)?,
        teacher: row.get(3)?,
        subject: row.get(4)?,
        assigned_date: row.get(5)?,
        created_at: from_db(6, &created_raw)?,
        updated_at: from_db(7, &updated_raw)?,
    })
}

const TASK_COLUMNS: &str = "id, text, done, teacher, subject, assigned_date, created_at, updated_at";

impl TaskStore {
    /// Open or create the store at the given database path.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let db = Connection::open(path)?;
        Self::init_schema(&db)?;
        log::info!("Opened task store at {}", path.display());
        Ok(Self { db })
    }

    /// Open an in-memory store. Useful for tests.
    pub fn open_in_memory() -> Result<Self> {
        let db = Connection::open_in_memory()?;
        Self::init_schema(&db)?;
        Ok(Self { db })
    }

    fn init_schema(db: &Connection) -> Result<()> {
        db.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                text TEXT NOT NULL,
                done INTEGER NOT NULL DEFAULT 0,
                teacher TEXT NOT NULL DEFAULT '',
                subject TEXT NOT NULL DEFAULT '',
                assigned_date INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_tasks_created ON tasks(created_at);
            "#,
        )?;
        Ok(())
    }

    /// Create a task. Returns `Ok(None)` without touching the store when
    /// the text trims to empty; blank submissions are ignored, not errors.
    pub fn create(&self, fields: NewTask) -> Result<Option<Task>> {
        let text = fields.text.trim();
        if text.is_empty() {
            log::debug!("Ignoring create with blank text");
            return Ok(None);
        }

        let ts = now();
        let stamp = to_db(ts);
        self.db.execute(
            "INSERT INTO tasks (text, done, teacher, subject, assigned_date, created_at, updated_at)
             VALUES (?1, 0, ?2, ?3, 0, ?4, ?4)",
            params![text, fields.teacher, fields.subject, stamp],
        )?;
        let id = self.db.last_insert_rowid();

        Ok(Some(Task {
            id,
            text: text.to_string(),
            done: false,
            teacher: fields.teacher,
            subject: fields.subject,
            assigned_date: false,
            created_at: ts,
            updated_at: ts,
        }))
    }

    /// Fetch a task by id.
    pub fn get(&self, id: i64) -> Result<Task> {
        self.db
            .query_row(
                &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"),
                params![id],
                row_to_task,
            )
            .optional()?
            .ok_or(TaskdeckError::TaskNotFound(id))
    }

    /// Apply a partial update. Fields that are absent or trim to empty
    /// are left unchanged; a patch with no effective fields writes
    /// nothing and keeps `updated_at` as it was. Otherwise refreshes
    /// `updated_at`.
    pub fn update(&self, id: i64, patch: TaskPatch) -> Result<Task> {
        if patch.is_empty() {
            log::debug!("Ignoring empty update for task {}", id);
            return self.get(id);
        }

        let mut task = self.get(id)?;

        if let Some(text) = patch.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            task.text = text.to_string();
        }
        if let Some(teacher) = patch.teacher.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            task.teacher = teacher.to_string();
        }
        if let Some(subject) = patch.subject.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            task.subject = subject.to_string();
        }

        task.updated_at = now();
        self.db.execute(
            "UPDATE tasks SET text = ?1, teacher = ?2, subject = ?3, updated_at = ?4 WHERE id = ?5",
            params![task.text, task.teacher, task.subject, to_db(task.updated_at), id],
        )?;
        Ok(task)
    }

    /// Invert the done flag and refresh `updated_at`.
    pub fn toggle(&self, id: i64) -> Result<Task> {
        let mut task = self.get(id)?;
        task.done = !task.done;
        task.updated_at = now();
        self.db.execute(
            "UPDATE tasks SET done = ?1, updated_at = ?2 WHERE id = ?3",
            params![task.done, to_db(task.updated_at), id],
        )?;
        Ok(task)
    }

    /// Remove a task permanently. The id is never reassigned.
    pub fn delete(&self, id: i64) -> Result<()> {
        let affected = self.db.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(TaskdeckError::TaskNotFound(id));
        }
        Ok(())
    }

    /// All tasks, most recently created first. Rows created in the same
    /// millisecond keep their insertion order.
    pub fn list(&self) -> Result<Vec<Task>> {
        let mut stmt = self
            .db
            .prepare(&format!("SELECT {TASK_COLUMNS} FROM tasks ORDER BY created_at DESC, id ASC"))?;
        let tasks = stmt
            .query_map([], row_to_task)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tasks)
    }

    /// Insert a batch of tasks in one transaction, all sharing the same
    /// creation timestamp. An empty batch performs no store interaction.
    pub fn insert_batch(&mut self, texts: &[String], batch_ts: DateTime<Utc>) -> Result<usize> {
        if texts.is_empty() {
            return Ok(0);
        }

        let stamp = to_db(batch_ts.trunc_subsecs(3));
        let tx = self.db.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO tasks (text, done, created_at, updated_at) VALUES (?1, 0, ?2, ?2)",
            )?;
            for text in texts {
                stmt.execute(params![text, stamp])?;
            }
        }
        tx.commit()?;

        log::info!("Inserted batch of {} tasks", texts.len());
        Ok(texts.len())
    }

    /// Number of tasks in the store.
    pub fn count(&self) -> Result<i64> {
        let n = self.db.query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))?;
        Ok(n)
    }
}
