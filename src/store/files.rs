use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TodoError};
use crate::model::Task;
use crate::store::atomic::write_atomic;

/// On-disk shape of the task file.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    tasks: Option<Vec<Task>>,
    next_id: Option<u64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotRef<'a> {
    tasks: &'a [Task],
    file_path: &'a Path,
    next_id: u64,
}

/// Ordered task collection backed by a single JSON file.
///
/// Every mutation rewrites the whole file. Ids come from a counter that
/// only moves forward, so deleted ids are never handed out again.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    file_path: PathBuf,
    next_id: u64,
}

impl TaskStore {
    /// An empty store bound to `file_path`. Nothing is read or written.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            tasks: Vec::new(),
            file_path: file_path.into(),
            next_id: 1,
        }
    }

    /// Bind to `file_path` and load whatever it already holds.
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self::new(file_path);
        store.load()?;
        Ok(store)
    }

    /// Replace in-memory state with the file's contents. A missing or
    /// zero-byte file leaves the store empty.
    pub fn load(&mut self) -> Result<()> {
        let data = match fs::read(&self.file_path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.file_path.display(), "no task file yet");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };
        if data.is_empty() {
            tracing::debug!(path = %self.file_path.display(), "task file is empty");
            return Ok(());
        }

        let snapshot: Snapshot =
            serde_json::from_slice(&data).map_err(|source| TodoError::Decode {
                path: self.file_path.display().to_string(),
                source,
            })?;
        let tasks = snapshot.tasks.unwrap_or_default();

        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if !seen.insert(task.id) {
                return Err(TodoError::Corrupt(
                    self.file_path.display().to_string(),
                    format!("duplicate task id {}", task.id),
                ));
            }
        }

        let stored_next = snapshot.next_id.unwrap_or(1);
        let floor = match tasks.iter().map(|t| t.id).max() {
            Some(max) => max.checked_add(1).ok_or_else(|| self.exhausted())?,
            None => 1,
        };
        let next_id = if stored_next < floor {
            tracing::warn!(
                path = %self.file_path.display(),
                stored = stored_next,
                repaired = floor,
                "next id behind stored tasks; raising it"
            );
            floor
        } else {
            stored_next
        };

        tracing::debug!(
            path = %self.file_path.display(),
            tasks = tasks.len(),
            next_id,
            "loaded task file"
        );
        self.tasks = tasks;
        self.next_id = next_id;
        Ok(())
    }

    /// Write the full store to its file, replacing previous content.
    pub fn save(&self) -> Result<()> {
        let snapshot = SnapshotRef {
            tasks: &self.tasks,
            file_path: &self.file_path,
            next_id: self.next_id,
        };
        let json = serde_json::to_string_pretty(&snapshot)?;
        write_atomic(&self.file_path, json.as_bytes())?;
        tracing::debug!(path = %self.file_path.display(), tasks = self.tasks.len(), "saved task file");
        Ok(())
    }

    /// Append a new active task and persist. The title is stored verbatim.
    /// Nothing changes in memory if the id space is used up or the save
    /// fails.
    pub fn add_task(&mut self, title: impl Into<String>) -> Result<Task> {
        let id = self.next_id;
        let next_id = id.checked_add(1).ok_or_else(|| self.exhausted())?;
        let task = Task::new(id, title.into());

        self.tasks.push(task.clone());
        self.next_id = next_id;
        if let Err(err) = self.save() {
            self.tasks.pop();
            self.next_id = id;
            return Err(err);
        }
        tracing::info!(id, "added task");
        Ok(task)
    }

    /// Tasks in stored order; active ones only unless `show_completed`.
    pub fn list_tasks(&self, show_completed: bool) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| show_completed || t.is_active())
            .collect()
    }

    /// Mark task `id` completed and persist. `Ok(false)` when no such task.
    pub fn complete_task(&mut self, id: u64) -> Result<bool> {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return Ok(false);
        };
        let was_completed = self.tasks[index].completed;
        self.tasks[index].completed = true;
        if let Err(err) = self.save() {
            self.tasks[index].completed = was_completed;
            return Err(err);
        }
        tracing::info!(id, "completed task");
        Ok(true)
    }

    /// Remove task `id`, keeping the others in order, and persist.
    /// `Ok(false)` when no such task.
    pub fn delete_task(&mut self, id: u64) -> Result<bool> {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return Ok(false);
        };
        let removed = self.tasks.remove(index);
        if let Err(err) = self.save() {
            self.tasks.insert(index, removed);
            return Err(err);
        }
        tracing::info!(id, "deleted task");
        Ok(true)
    }

    fn exhausted(&self) -> TodoError {
        TodoError::Corrupt(
            self.file_path.display().to_string(),
            "task id space exhausted".to_string(),
        )
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}
