use log::{debug, info};

use crate::model::task::{Task, TaskCounts, TaskId};
use crate::ops::ids::{ClockIds, IdGenerator};

/// Error type for task store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("a task titled \"{0}\" already exists")]
    DuplicateTitle(String),
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Answer to a remove prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
}

impl Confirmation {
    /// Parse a yes/no answer (`y`, `yes`, `n`, `no`, any case)
    pub fn parse(s: &str) -> Option<Confirmation> {
        match s.to_ascii_lowercase().as_str() {
            "y" | "yes" => Some(Confirmation::Yes),
            "n" | "no" => Some(Confirmation::No),
            _ => None,
        }
    }
}

/// A pending removal awaiting the user's answer.
///
/// Only [`TaskStore::request_remove`] creates one, and only
/// [`TaskStore::resolve_removal`] consumes it, so no task leaves the store
/// without a confirmation step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a removal prompt does nothing until it is resolved"]
pub struct RemovalPrompt {
    id: TaskId,
    title: Option<String>,
}

impl RemovalPrompt {
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Title of the task at the time the prompt was raised, if it existed
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// The ordered, in-memory collection of tasks owned by one screen
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    ids: Box<dyn IdGenerator>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Empty store drawing wall-clock ids
    pub fn new() -> Self {
        Self::with_ids(Box::new(ClockIds::new()))
    }

    pub fn with_ids(ids: Box<dyn IdGenerator>) -> Self {
        TaskStore {
            tasks: Vec::new(),
            ids,
        }
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.tasks.iter().any(|t| t.title == title)
    }

    pub fn counts(&self) -> TaskCounts {
        TaskCounts::from_tasks(&self.tasks)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Append a new task with `done = false`.
    ///
    /// Titles are compared with exact, case-sensitive, untrimmed equality.
    /// A duplicate is rejected and the store is left unchanged.
    pub fn add(&mut self, title: impl Into<String>) -> Result<TaskId, TaskError> {
        let title = title.into();
        if self.contains_title(&title) {
            debug!("add rejected: duplicate title");
            return Err(TaskError::DuplicateTitle(title));
        }

        let mut id = self.ids.next_id();
        while self.get(id).is_some() {
            id = self.ids.next_id();
        }

        self.tasks.push(Task::new(id, title));
        info!("added task {} ({} total)", id, self.tasks.len());
        Ok(id)
    }

    /// Flip `done` on the task with this id.
    ///
    /// An unknown id is a harmless no-op: callers get `NotFound` back but are
    /// expected to ignore it, and the store is unchanged.
    pub fn toggle_done(&mut self, id: TaskId) -> Result<(), TaskError> {
        let task = self.find_mut(id)?;
        task.done = !task.done;
        debug!("toggled task {} (done = {})", id, task.done);
        Ok(())
    }

    /// Replace the title of the task with this id.
    ///
    /// Unlike [`add`](Self::add) no duplicate check is made, so an edit may
    /// give two tasks the same title. Unknown ids behave as in
    /// [`toggle_done`](Self::toggle_done).
    pub fn edit(&mut self, id: TaskId, new_title: impl Into<String>) -> Result<(), TaskError> {
        let task = self.find_mut(id)?;
        task.title = new_title.into();
        debug!("edited task {}", id);
        Ok(())
    }

    /// Raise a yes/no prompt for removing the task with this id
    pub fn request_remove(&self, id: TaskId) -> RemovalPrompt {
        RemovalPrompt {
            id,
            title: self.get(id).map(|t| t.title.clone()),
        }
    }

    /// Apply the user's answer to a removal prompt.
    ///
    /// Returns the removed task on `Yes`; `No` (or a task that is already
    /// gone) leaves the store unchanged and returns `None`.
    pub fn resolve_removal(&mut self, prompt: RemovalPrompt, answer: Confirmation) -> Option<Task> {
        if answer == Confirmation::No {
            debug!("removal of task {} declined", prompt.id);
            return None;
        }
        let idx = self.position(prompt.id)?;
        let removed = self.tasks.remove(idx);
        info!("removed task {} ({} left)", removed.id, self.tasks.len());
        Some(removed)
    }

    fn find_mut(&mut self, id: TaskId) -> Result<&mut Task, TaskError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))
    }
}

impl<'a> IntoIterator for &'a TaskStore {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
