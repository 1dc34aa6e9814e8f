use serde::Serialize;

use crate::model::task::{Task, TaskCounts};
use crate::ops::script::Event;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

/// Whole result of `tl run --json`
#[derive(Serialize)]
pub struct RunJson<'a> {
    pub events: &'a [Event],
    pub tasks: &'a [Task],
    pub counts: TaskCounts,
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a single task as a one-line summary
pub fn format_task_line(task: &Task) -> String {
    format!("[{}] {} {}", task.checkbox_char(), task.id, task.title)
}

/// One or more lines describing what a script command did
pub fn format_event(event: &Event) -> Vec<String> {
    match event {
        Event::Added { id, title } => vec![format!("added {}: {}", id, title)],
        Event::Rejected { title } => {
            vec![format!("rejected \"{}\": a task with this title exists", title)]
        }
        Event::Toggled { id, done } => {
            let state = if *done { "done" } else { "not done" };
            vec![format!("toggled {}: {}", id, state)]
        }
        Event::Edited { id, title } => vec![format!("edited {}: {}", id, title)],
        Event::Removed { id, title } => vec![format!("removed {}: {}", id, title)],
        Event::Kept { id } => vec![format!("kept {}", id)],
        Event::Ignored { id } => vec![format!("ignored {}: no such task", id)],
        Event::Listed { tasks } => {
            let mut lines = vec![format!("list: {}", TaskCounts::from_tasks(tasks))];
            lines.extend(tasks.iter().map(|t| format!("  {}", format_task_line(t))));
            lines
        }
    }
}

/// The final list followed by its counter
pub fn format_task_listing(tasks: &[Task]) -> Vec<String> {
    let mut lines: Vec<String> = tasks.iter().map(format_task_line).collect();
    if tasks.is_empty() {
        lines.push("(no tasks)".into());
    }
    lines.push(TaskCounts::from_tasks(tasks).to_string());
    lines
}

/// Full text report of a script run: events, a blank line, then the list
pub fn format_run(events: &[Event], tasks: &[Task]) -> Vec<String> {
    let mut lines: Vec<String> = events.iter().flat_map(format_event).collect();
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.extend(format_task_listing(tasks));
    lines
}
