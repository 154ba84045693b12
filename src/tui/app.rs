use std::collections::HashSet;
use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::io::phases_io;
use crate::io::state::{UiState, read_ui_state, write_ui_state};
use crate::io::watcher::DataWatcher;
use crate::store::PhaseStore;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
}

/// A row in the visible checklist: a phase section header, or one of its
/// task checkboxes (present only while the section is expanded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatRow {
    PhaseHeader { phase_idx: usize },
    Task { phase_idx: usize, task_idx: usize },
}

/// Main application state
pub struct App {
    pub store: PhaseStore,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Cursor index into the flat visible row list
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    /// Phase ids whose sections are collapsed
    pub collapsed: HashSet<u32>,
    /// Event-loop tick counter, drives the spinner animation
    pub tick: usize,
    /// Search mode: current query being typed
    pub search_input: String,
    /// Last executed search pattern
    pub last_search: Option<String>,
}

impl App {
    pub fn new(store: PhaseStore, theme: Theme, show_key_hints: bool) -> Self {
        App {
            store,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            collapsed: HashSet::new(),
            tick: 0,
            search_input: String::new(),
            last_search: None,
        }
    }

    /// Build the flat list of visible rows: each phase header in data
    /// order, followed by its task rows when the section is expanded.
    pub fn build_flat_rows(&self) -> Vec<FlatRow> {
        let mut rows = Vec::new();
        let Some(data) = self.store.data() else {
            return rows;
        };
        for (phase_idx, phase) in data.start_up_phases.iter().enumerate() {
            rows.push(FlatRow::PhaseHeader { phase_idx });
            if !self.collapsed.contains(&phase.id) {
                for task_idx in 0..phase.tasks.len() {
                    rows.push(FlatRow::Task {
                        phase_idx,
                        task_idx,
                    });
                }
            }
        }
        rows
    }

    /// Get the active search regex for highlighting.
    /// In Search mode: compiles from current input. In Navigate: compiles
    /// from last_search.
    pub fn active_search_re(&self) -> Option<Regex> {
        let pattern = match self.mode {
            Mode::Search if !self.search_input.is_empty() => &self.search_input,
            Mode::Navigate => self.last_search.as_deref()?,
            _ => return None,
        };
        Regex::new(&format!("(?i){}", pattern))
            .or_else(|_| Regex::new(&format!("(?i){}", regex::escape(pattern))))
            .ok()
    }
}

/// Restore UI state from .state.json
pub fn restore_ui_state(app: &mut App, dir: &Path) {
    let ui_state = match read_ui_state(dir) {
        Some(s) => s,
        None => return,
    };
    app.cursor = ui_state.cursor;
    app.scroll_offset = ui_state.scroll_offset;
    app.collapsed = ui_state.collapsed;
    app.last_search = ui_state.last_search;
}

/// Save UI state to .state.json
pub fn save_ui_state(app: &App, dir: &Path) {
    let ui_state = UiState {
        cursor: app.cursor,
        scroll_offset: app.scroll_offset,
        collapsed: app.collapsed.clone(),
        last_search: app.last_search.clone(),
    };
    let _ = write_ui_state(dir, &ui_state);
}

/// Run the TUI application
pub fn run(dir_override: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    // Discover the checklist directory and read config up front; phases
    // load in the background while the spinner shows.
    let cwd = std::env::current_dir()?;
    let dir = phases_io::discover_dir(dir_override.unwrap_or(&cwd))?;
    let config = phases_io::load_config(&dir)?;

    let theme = Theme::from_config(&config.ui);
    let store = PhaseStore::open(dir.clone());
    let mut app = App::new(store, theme, config.ui.show_key_hints);
    restore_ui_state(&mut app, &dir);

    let watcher = DataWatcher::start(&dir).ok();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Start-up Tasks"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref());

    // Save UI state before exit
    save_ui_state(&app, &dir);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&DataWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.store.poll();
        if let Some(w) = watcher
            && !w.poll().is_empty()
        {
            app.store.reload();
        }

        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                input::handle_key(app, key);
            }
        } else {
            app.tick = app.tick.wrapping_add(1);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
