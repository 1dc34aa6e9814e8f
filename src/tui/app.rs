use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::debug;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{Config, IdStrategy, Messages, Task, TaskId};
use crate::ops::draft::EditDraft;
use crate::ops::ids::generator_for;
use crate::ops::task_store::{Confirmation, RemovalPrompt, TaskError, TaskStore};
use crate::util::text_buffer::TextBuffer;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving the cursor over the list
    Navigate,
    /// Typing a new task into the input field
    Input,
    /// Editing the title of the selected task inline
    Edit,
    /// Waiting for a yes/no answer to a remove prompt
    Confirm,
    /// A dismissible notice is shown
    Notice,
}

/// A dismissible message box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    /// Mode to go back to once dismissed
    pub return_mode: Mode,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub messages: Messages,
    pub show_key_hints: bool,
    /// Index of the selected row
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,
    /// The "add a task" input field
    pub input: TextBuffer,
    /// Inline edit in progress (Mode::Edit)
    pub edit: Option<EditDraft>,
    /// Pending remove prompt (Mode::Confirm)
    pub confirm: Option<RemovalPrompt>,
    /// Visible notice (Mode::Notice)
    pub notice: Option<Notice>,
    /// One-shot feedback in the status row, cleared on the next key
    pub status_message: Option<String>,
}

impl App {
    pub fn new(store: TaskStore, config: &Config) -> Self {
        App {
            store,
            mode: Mode::Input,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            messages: config.messages.clone(),
            show_key_hints: config.ui.show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            input: TextBuffer::new(),
            edit: None,
            confirm: None,
            notice: None,
            status_message: None,
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.store.tasks().get(self.cursor)
    }

    pub fn selected_id(&self) -> Option<TaskId> {
        self.selected_task().map(|t| t.id)
    }

    /// Keep the cursor on an existing row
    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.store.len().saturating_sub(1));
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.store.is_empty() {
            self.cursor = 0;
            return;
        }
        let max = self.store.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(max);
    }

    // -----------------------------------------------------------------------
    // Add
    // -----------------------------------------------------------------------

    /// Submit the input field as a new task. An empty field is ignored.
    pub fn submit_input(&mut self) {
        if self.input.is_empty() {
            return;
        }
        let title = self.input.take();
        match self.store.add(title) {
            Ok(id) => {
                if let Some(pos) = self.store.position(id) {
                    self.cursor = pos;
                }
            }
            Err(TaskError::DuplicateTitle(_)) => {
                self.show_notice(
                    self.messages.duplicate_title.clone(),
                    self.messages.duplicate_body.clone(),
                );
            }
            Err(e) => debug!("add: {}", e),
        }
    }

    // -----------------------------------------------------------------------
    // Toggle
    // -----------------------------------------------------------------------

    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if let Err(e) = self.store.toggle_done(id) {
            debug!("toggle: {}", e);
        }
    }

    // -----------------------------------------------------------------------
    // Inline edit
    // -----------------------------------------------------------------------

    pub fn begin_edit(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        self.edit = Some(EditDraft::begin(task));
        self.mode = Mode::Edit;
    }

    pub fn commit_edit(&mut self) {
        if let Some(draft) = self.edit.take()
            && let Err(e) = draft.commit(&mut self.store)
        {
            debug!("edit: {}", e);
        }
        self.mode = Mode::Navigate;
    }

    pub fn cancel_edit(&mut self) {
        if let Some(draft) = self.edit.take() {
            draft.cancel();
        }
        self.mode = Mode::Navigate;
    }

    // -----------------------------------------------------------------------
    // Remove
    // -----------------------------------------------------------------------

    /// Ask for confirmation before removing the selected task
    pub fn request_remove_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        self.confirm = Some(self.store.request_remove(id));
        self.mode = Mode::Confirm;
    }

    pub fn answer_removal(&mut self, answer: Confirmation) {
        if let Some(prompt) = self.confirm.take()
            && let Some(removed) = self.store.resolve_removal(prompt, answer)
        {
            self.status_message = Some(format!("removed \"{}\"", removed.title));
            self.clamp_cursor();
        }
        self.mode = Mode::Navigate;
    }

    // -----------------------------------------------------------------------
    // Notices
    // -----------------------------------------------------------------------

    pub fn show_notice(&mut self, title: String, body: String) {
        self.notice = Some(Notice {
            title,
            body,
            return_mode: self.mode,
        });
        self.mode = Mode::Notice;
    }

    pub fn dismiss_notice(&mut self) {
        let notice = self.notice.take();
        self.mode = notice.map_or(Mode::Navigate, |n| n.return_mode);
    }
}

/// Run the TUI application
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let strategy = config.ids.strategy.unwrap_or(IdStrategy::Clock);
    let store = TaskStore::with_ids(generator_for(strategy));
    let mut app = App::new(store, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
