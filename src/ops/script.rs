use log::debug;
use serde::Serialize;

use crate::model::task::{Task, TaskId};
use crate::ops::task_store::{Confirmation, TaskError, TaskStore};

/// One parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(TaskId),
    Edit(TaskId, String),
    Remove(TaskId, Confirmation),
    List,
}

/// Error type for script parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: {command} needs {what}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        what: &'static str,
    },
    #[error("line {line}: invalid task id '{value}'")]
    InvalidId { line: usize, value: String },
    #[error("line {line}: expected yes or no, got '{value}'")]
    InvalidAnswer { line: usize, value: String },
    #[error("line {line}: unexpected '{extra}' after {command}")]
    TrailingText {
        line: usize,
        command: &'static str,
        extra: String,
    },
}

/// Outcome of applying one command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Added { id: TaskId, title: String },
    /// Add refused because the title is already taken
    Rejected { title: String },
    Toggled { id: TaskId, done: bool },
    Edited { id: TaskId, title: String },
    Removed { id: TaskId, title: String },
    /// Removal declined at the prompt
    Kept { id: TaskId },
    /// Unknown id; the store is unchanged
    Ignored { id: TaskId },
    Listed { tasks: Vec<Task> },
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a whole script. Blank lines and `#` comments are skipped.
pub fn parse_script(text: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let trimmed = raw.trim_start();
        if trimmed.trim_end().is_empty() || trimmed.starts_with('#') {
            continue;
        }
        commands.push(parse_line(trimmed, idx + 1)?);
    }
    Ok(commands)
}

/// Parse a single non-blank line (already stripped of leading whitespace)
fn parse_line(line: &str, line_no: usize) -> Result<Command, ScriptError> {
    let (word, rest) = match line.split_once(' ') {
        Some((w, r)) => (w, Some(r)),
        None => (line.trim_end(), None),
    };

    match word {
        "add" => {
            // The title is everything after the first space, untrimmed
            let title = rest.ok_or(ScriptError::MissingArgument {
                line: line_no,
                command: "add",
                what: "a title",
            })?;
            Ok(Command::Add(title.to_string()))
        }
        "toggle" => {
            let mut args = rest.unwrap_or("").split_whitespace();
            let id = parse_id(args.next(), "toggle", line_no)?;
            no_trailing(args.next(), "toggle", line_no)?;
            Ok(Command::Toggle(id))
        }
        "edit" => {
            let rest = rest.unwrap_or("").trim_start();
            let (id_str, title) = match rest.split_once(' ') {
                Some((id, title)) => (id, Some(title)),
                None => (rest.trim_end(), None),
            };
            let id_str = (!id_str.is_empty()).then_some(id_str);
            let id = parse_id(id_str, "edit", line_no)?;
            let title = title.ok_or(ScriptError::MissingArgument {
                line: line_no,
                command: "edit",
                what: "a new title",
            })?;
            Ok(Command::Edit(id, title.to_string()))
        }
        "remove" => {
            let mut args = rest.unwrap_or("").split_whitespace();
            let id = parse_id(args.next(), "remove", line_no)?;
            let answer = args.next().ok_or(ScriptError::MissingArgument {
                line: line_no,
                command: "remove",
                what: "a yes/no answer",
            })?;
            let answer = Confirmation::parse(answer).ok_or_else(|| ScriptError::InvalidAnswer {
                line: line_no,
                value: answer.to_string(),
            })?;
            no_trailing(args.next(), "remove", line_no)?;
            Ok(Command::Remove(id, answer))
        }
        "list" => {
            no_trailing(rest.and_then(|r| r.split_whitespace().next()), "list", line_no)?;
            Ok(Command::List)
        }
        other => Err(ScriptError::UnknownCommand {
            line: line_no,
            command: other.to_string(),
        }),
    }
}

fn parse_id(arg: Option<&str>, command: &'static str, line: usize) -> Result<TaskId, ScriptError> {
    let arg = arg.ok_or(ScriptError::MissingArgument {
        line,
        command,
        what: "a task id",
    })?;
    arg.parse().map_err(|_| ScriptError::InvalidId {
        line,
        value: arg.to_string(),
    })
}

fn no_trailing(extra: Option<&str>, command: &'static str, line: usize) -> Result<(), ScriptError> {
    match extra {
        Some(extra) => Err(ScriptError::TrailingText {
            line,
            command,
            extra: extra.to_string(),
        }),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

/// Apply commands in order. Policy errors become events and never stop the run.
pub fn run_script(store: &mut TaskStore, commands: &[Command]) -> Vec<Event> {
    commands.iter().map(|cmd| apply(store, cmd)).collect()
}

/// Apply a single command to the store
pub fn apply(store: &mut TaskStore, command: &Command) -> Event {
    match command {
        Command::Add(title) => match store.add(title.clone()) {
            Ok(id) => Event::Added {
                id,
                title: title.clone(),
            },
            Err(_) => Event::Rejected {
                title: title.clone(),
            },
        },
        Command::Toggle(id) => match store.toggle_done(*id) {
            Ok(()) => Event::Toggled {
                id: *id,
                done: store.get(*id).is_some_and(|t| t.done),
            },
            Err(e) => ignored(*id, e),
        },
        Command::Edit(id, title) => match store.edit(*id, title.clone()) {
            Ok(()) => Event::Edited {
                id: *id,
                title: title.clone(),
            },
            Err(e) => ignored(*id, e),
        },
        Command::Remove(id, answer) => {
            let prompt = store.request_remove(*id);
            match (answer, store.resolve_removal(prompt, *answer)) {
                (_, Some(task)) => Event::Removed {
                    id: task.id,
                    title: task.title,
                },
                (Confirmation::No, None) => Event::Kept { id: *id },
                (Confirmation::Yes, None) => Event::Ignored { id: *id },
            }
        }
        Command::List => Event::Listed {
            tasks: store.tasks().to_vec(),
        },
    }
}

fn ignored(id: TaskId, err: TaskError) -> Event {
    debug!("script: {}", err);
    Event::Ignored { id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::ids::SequentialIds;
    use pretty_assertions::assert_eq;

    fn store() -> TaskStore {
        TaskStore::with_ids(Box::new(SequentialIds::new()))
    }

    // --- parsing ---

    #[test]
    fn parse_all_commands() {
        let script = "\
# a comment
add Buy milk

toggle 1
edit 1 Buy oat milk
remove 1 yes
remove 2 n
list
";
        let commands = parse_script(script).unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Add("Buy milk".into()),
                Command::Toggle(TaskId(1)),
                Command::Edit(TaskId(1), "Buy oat milk".into()),
                Command::Remove(TaskId(1), Confirmation::Yes),
                Command::Remove(TaskId(2), Confirmation::No),
                Command::List,
            ]
        );
    }

    #[test]
    fn add_title_is_verbatim() {
        let commands = parse_script("add  padded title  \nadd \n").unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Add(" padded title  ".into()),
                Command::Add(String::new()),
            ]
        );
    }

    #[test]
    fn crlf_line_endings() {
        let commands = parse_script("add A\r\ntoggle 1\r\n").unwrap();
        assert_eq!(
            commands,
            vec![Command::Add("A".into()), Command::Toggle(TaskId(1))]
        );
    }

    #[test]
    fn unknown_command_reports_line() {
        let err = parse_script("add A\n\nfrobnicate 3\n").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownCommand {
                line: 3,
                command: "frobnicate".into()
            }
        );
        assert_eq!(err.to_string(), "line 3: unknown command 'frobnicate'");
    }

    #[test]
    fn bad_ids_are_rejected() {
        assert_eq!(
            parse_script("toggle x1").unwrap_err(),
            ScriptError::InvalidId {
                line: 1,
                value: "x1".into()
            }
        );
        assert!(matches!(
            parse_script("toggle").unwrap_err(),
            ScriptError::MissingArgument { what: "a task id", .. }
        ));
        assert!(matches!(
            parse_script("edit").unwrap_err(),
            ScriptError::MissingArgument { what: "a task id", .. }
        ));
    }

    #[test]
    fn missing_arguments() {
        assert!(matches!(
            parse_script("add").unwrap_err(),
            ScriptError::MissingArgument { command: "add", .. }
        ));
        assert!(matches!(
            parse_script("edit 3").unwrap_err(),
            ScriptError::MissingArgument { what: "a new title", .. }
        ));
        assert!(matches!(
            parse_script("remove 3").unwrap_err(),
            ScriptError::MissingArgument { what: "a yes/no answer", .. }
        ));
    }

    #[test]
    fn invalid_answer_and_trailing_text() {
        assert_eq!(
            parse_script("remove 3 perhaps").unwrap_err(),
            ScriptError::InvalidAnswer {
                line: 1,
                value: "perhaps".into()
            }
        );
        assert!(matches!(
            parse_script("toggle 1 2").unwrap_err(),
            ScriptError::TrailingText { command: "toggle", .. }
        ));
        assert!(matches!(
            parse_script("list all").unwrap_err(),
            ScriptError::TrailingText { command: "list", .. }
        ));
        assert_eq!(parse_script("list  ").unwrap(), vec![Command::List]);
    }

    // --- execution ---

    #[test]
    fn scenario_duplicate_add() {
        let mut s = store();
        let commands = parse_script("add Buy milk\nadd Buy milk\n").unwrap();
        let events = run_script(&mut s, &commands);
        assert_eq!(
            events,
            vec![
                Event::Added {
                    id: TaskId(1),
                    title: "Buy milk".into()
                },
                Event::Rejected {
                    title: "Buy milk".into()
                },
            ]
        );
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn scenario_toggle_and_remove() {
        let mut s = store();
        let commands = parse_script("add A\nadd B\ntoggle 1\nremove 2 yes\nlist\n").unwrap();
        let events = run_script(&mut s, &commands);
        assert_eq!(
            &events[2..],
            &[
                Event::Toggled {
                    id: TaskId(1),
                    done: true
                },
                Event::Removed {
                    id: TaskId(2),
                    title: "B".into()
                },
                Event::Listed {
                    tasks: vec![Task {
                        id: TaskId(1),
                        title: "A".into(),
                        done: true
                    }]
                },
            ]
        );
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut s = store();
        let commands = parse_script("add A\ntoggle 9\nedit 9 B\nremove 9 yes\n").unwrap();
        let events = run_script(&mut s, &commands);
        assert_eq!(
            &events[1..],
            &[
                Event::Ignored { id: TaskId(9) },
                Event::Ignored { id: TaskId(9) },
                Event::Ignored { id: TaskId(9) },
            ]
        );
        assert_eq!(s.tasks()[0].title, "A");
    }

    #[test]
    fn declined_remove_keeps_task() {
        let mut s = store();
        let commands = parse_script("add A\nremove 1 no\n").unwrap();
        let events = run_script(&mut s, &commands);
        assert_eq!(events[1], Event::Kept { id: TaskId(1) });
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn events_serialize_with_tag() {
        let event = Event::Toggled {
            id: TaskId(4),
            done: true,
        };
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"event":"toggled","id":4,"done":true}"#
        );
    }
}
