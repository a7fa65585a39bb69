//! Exercise Store - SQLite-backed record storage
//!
//! One table, one row per exercise. Rows carry an autoincrement sequence
//! number so listing returns records in insertion order.

use crate::storage::{Exercise, NewExercise, StorageError, StorageResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

const DATE_FORMAT: &str = "%Y-%m-%d";

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS exercises (
        seq INTEGER PRIMARY KEY AUTOINCREMENT,
        id TEXT NOT NULL UNIQUE,
        name TEXT NOT NULL,
        reps INTEGER NOT NULL,
        weight REAL NOT NULL,
        unit TEXT NOT NULL,
        date TEXT NOT NULL
    );
";

/// SQLite-backed exercise storage
///
/// Cheap to clone; all clones share one connection (std::sync::Mutex because
/// a rusqlite `Connection` is not `Sync`).
#[derive(Clone)]
pub struct ExerciseStore {
    conn: Arc<Mutex<Connection>>,
    path: Option<PathBuf>,
}

/// Raw column values before decoding into an [`Exercise`]
struct ExerciseRow {
    id: String,
    name: String,
    reps: i64,
    weight: f64,
    unit: String,
    date: String,
}

impl ExerciseRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            reps: row.get(2)?,
            weight: row.get(3)?,
            unit: row.get(4)?,
            date: row.get(5)?,
        })
    }

    fn into_exercise(self) -> StorageResult<Exercise> {
        let reps = u32::try_from(self.reps).map_err(|_| {
            StorageError::Corruption(format!("exercise {} has invalid reps {}", self.id, self.reps))
        })?;
        let unit = self.unit.parse().map_err(|_| {
            StorageError::Corruption(format!("exercise {} has invalid unit '{}'", self.id, self.unit))
        })?;
        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|_| {
            StorageError::Corruption(format!("exercise {} has invalid date '{}'", self.id, self.date))
        })?;

        Ok(Exercise {
            id: self.id,
            name: self.name,
            reps,
            weight: self.weight,
            unit,
            date,
        })
    }
}

impl ExerciseStore {
    /// Create or open the database file at `path`
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            ",
        )?;
        conn.execute_batch(SCHEMA)?;

        tracing::debug!(path = ?path, "Opened exercise store");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: Some(path),
        })
    }

    /// Create a store that lives only in memory
    pub fn in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: None,
        })
    }

    /// Database file path, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))
    }

    /// All exercises in insertion order
    pub fn list(&self) -> StorageResult<Vec<Exercise>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached(
            "SELECT id, name, reps, weight, unit, date FROM exercises ORDER BY seq",
        )?;

        let rows = stmt.query_map([], ExerciseRow::from_row)?;

        rows.map(|row| row.map_err(StorageError::from).and_then(ExerciseRow::into_exercise))
            .collect()
    }

    /// A single exercise by id
    pub fn get(&self, id: &str) -> StorageResult<Option<Exercise>> {
        let conn = self.lock()?;
        let row = conn
            .query_row(
                "SELECT id, name, reps, weight, unit, date FROM exercises WHERE id = ?",
                params![id],
                ExerciseRow::from_row,
            )
            .optional()?;

        row.map(ExerciseRow::into_exercise).transpose()
    }

    /// Insert a new exercise under a freshly generated id
    pub fn create(&self, new: NewExercise) -> StorageResult<Exercise> {
        let exercise = Exercise::from_new(uuid::Uuid::new_v4().to_string(), new);

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO exercises (id, name, reps, weight, unit, date)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                exercise.id,
                exercise.name,
                i64::from(exercise.reps),
                exercise.weight,
                exercise.unit.as_str(),
                exercise.date.format(DATE_FORMAT).to_string(),
            ],
        )?;

        Ok(exercise)
    }

    /// Replace every writable field of an existing exercise
    pub fn replace(&self, id: &str, new: NewExercise) -> StorageResult<Exercise> {
        let conn = self.lock()?;
        let changed = conn.execute(
            "UPDATE exercises
             SET name = ?, reps = ?, weight = ?, unit = ?, date = ?
             WHERE id = ?",
            params![
                new.name,
                i64::from(new.reps),
                new.weight,
                new.unit.as_str(),
                new.date.format(DATE_FORMAT).to_string(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(StorageError::ExerciseNotFound(id.to_string()));
        }

        Ok(Exercise::from_new(id, new))
    }

    /// Delete an exercise
    pub fn delete(&self, id: &str) -> StorageResult<()> {
        let conn = self.lock()?;
        let changed = conn.execute("DELETE FROM exercises WHERE id = ?", params![id])?;

        if changed == 0 {
            return Err(StorageError::ExerciseNotFound(id.to_string()));
        }

        Ok(())
    }

    /// Number of stored exercises
    pub fn count(&self) -> StorageResult<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM exercises", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Unit;
    use tempfile::tempdir;

    fn new_exercise(name: &str) -> NewExercise {
        NewExercise::new(
            name,
            5,
            100.0,
            Unit::Lbs,
            NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_create_and_get() {
        let store = ExerciseStore::in_memory().unwrap();

        let created = store.create(new_exercise("Squat")).unwrap();
        assert!(!created.id.is_empty());

        let fetched = store.get(&created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
        assert!(store.get("missing").unwrap().is_none());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = ExerciseStore::in_memory().unwrap();

        let names = ["Squat", "Bench", "Deadlift"];
        for name in names {
            store.create(new_exercise(name)).unwrap();
        }

        let listed: Vec<String> = store.list().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(listed, names);
    }

    #[test]
    fn test_replace() {
        let store = ExerciseStore::in_memory().unwrap();
        let created = store.create(new_exercise("Squat")).unwrap();

        let mut update = new_exercise("Front Squat");
        update.unit = Unit::Kg;
        let replaced = store.replace(&created.id, update).unwrap();

        assert_eq!(replaced.id, created.id);
        assert_eq!(store.get(&created.id).unwrap().unwrap(), replaced);

        let missing = store.replace("missing", new_exercise("x"));
        assert!(matches!(missing, Err(StorageError::ExerciseNotFound(_))));
    }

    #[test]
    fn test_delete() {
        let store = ExerciseStore::in_memory().unwrap();
        let created = store.create(new_exercise("Squat")).unwrap();

        store.delete(&created.id).unwrap();
        assert_eq!(store.count().unwrap(), 0);

        let again = store.delete(&created.id);
        assert!(matches!(again, Err(StorageError::ExerciseNotFound(_))));
    }

    #[test]
    fn test_persistence_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("exercises.db");

        let id = {
            let store = ExerciseStore::open(&path).unwrap();
            store.create(new_exercise("Squat")).unwrap().id
        };

        let store = ExerciseStore::open(&path).unwrap();
        assert_eq!(store.path(), Some(path.as_path()));
        assert_eq!(store.get(&id).unwrap().unwrap().name, "Squat");
    }
}
