// tasks.rs - Persisted Task Checklist
//
// A flat list of tasks stored as pretty-printed JSON. The list is saved after
// every mutation; loading never fails hard, a broken file just starts empty.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, NaiveDateTime};
use log::{debug, error, info, warn};
use serde::{Deserialize, Deserializer, Serialize};

use crate::paths::write_file;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    /// Local creation time, `None` for entries with a missing or unreadable stamp
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created: Option<NaiveDateTime>,
    #[serde(default)]
    pub completed: bool,
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| s.parse().ok()))
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            created: Some(Local::now().naive_local()),
            completed: false,
        }
    }

    /// Checkbox glyph followed by the text
    pub fn label(&self) -> String {
        let mark = if self.completed { "✓" } else { "□" };
        format!("{} {}", mark, self.text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a trimmed task. Blank input is rejected.
    pub fn add(&mut self, text: &str) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            warn!("Attempted to add empty task");
            return None;
        }
        self.tasks.push(Task::new(text));
        info!("Added task: {}", text);
        self.tasks.last()
    }

    /// Flip the completed flag, returning the new value
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let Some(task) = self.tasks.get_mut(index) else {
            error!("Task index {} out of range", index);
            return None;
        };
        task.completed = !task.completed;
        info!(
            "Task '{}' marked as {}",
            task.text,
            if task.completed { "completed" } else { "uncompleted" }
        );
        Some(task.completed)
    }

    pub fn remove(&mut self, index: usize) -> Option<Task> {
        if index >= self.tasks.len() {
            error!("Task index {} out of range", index);
            return None;
        }
        let task = self.tasks.remove(index);
        info!("Deleted task: {}", task.text);
        Some(task)
    }

    pub fn clear(&mut self) {
        info!("Cleared {} tasks", self.tasks.len());
        self.tasks.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}

/// JSON file backing a [`TaskList`]
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or corrupt files give an empty list
    pub fn load(&self) -> TaskList {
        if !self.path.exists() {
            info!("No task file at {:?}, starting with an empty list", self.path);
            return TaskList::new();
        }
        match self.try_load() {
            Ok(list) => {
                info!("Loaded {} tasks from {:?}", list.len(), self.path);
                list
            }
            Err(e) => {
                error!("Error loading tasks: {:#}", e);
                TaskList::new()
            }
        }
    }

    fn try_load(&self) -> anyhow::Result<TaskList> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {:?}", self.path))?;
        serde_json::from_str(&contents).context("Failed to parse task file")
    }

    pub fn save(&self, tasks: &TaskList) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(tasks).context("Failed to serialize tasks")?;
        write_file(&self.path, &json).with_context(|| format!("Failed to write {:?}", self.path))?;
        debug!("Saved {} tasks to file", tasks.len());
        Ok(())
    }
}
