use log::debug;

use crate::model::task::{Task, TaskId};
use crate::ops::task_store::{TaskError, TaskStore};
use crate::util::text_buffer::TextBuffer;

/// In-progress inline edit of one task's title.
///
/// The store is only touched by [`commit`](EditDraft::commit); dropping or
/// cancelling the draft discards the typed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    task_id: TaskId,
    pub buffer: TextBuffer,
}

impl EditDraft {
    /// Start editing `task`, with the buffer holding its current title
    pub fn begin(task: &Task) -> Self {
        EditDraft {
            task_id: task.id,
            buffer: TextBuffer::from_text(task.title.clone()),
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Write the buffer into the store as the task's new title
    pub fn commit(self, store: &mut TaskStore) -> Result<(), TaskError> {
        store.edit(self.task_id, self.buffer.into_string())
    }

    /// Discard the typed text. The row shows the stored title again.
    pub fn cancel(self) {
        debug!("edit of task {} cancelled", self.task_id);
    }
}
