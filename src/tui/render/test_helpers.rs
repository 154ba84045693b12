use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::phases_io;
use crate::model::phase::{StartUpPhase, StartUpPhases, Task};
use crate::store::PhaseStore;
use crate::tui::app::App;
use crate::tui::theme::Theme;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// A fresh directory under the system temp dir that outlives the test.
fn unique_data_dir(suffix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time should be after unix epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "liftoff-{suffix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Two phases with 2 and 1 tasks, all unchecked.
pub fn sample_phases() -> StartUpPhases {
    let mut p1 = StartUpPhase::new(1, "Foundation");
    p1.tasks.push(Task::new(1, "Setup virtual office"));
    p1.tasks.push(Task::new(2, "Buy domains"));
    let mut p2 = StartUpPhase::new(2, "Discovery");
    p2.tasks.push(Task::new(1, "Create roadmap"));
    StartUpPhases {
        start_up_phases: vec![p1, p2],
    }
}

/// Build an App over a preloaded store (not loading, data present).
pub fn app_with_phases(phases: StartUpPhases) -> App {
    let dir = unique_data_dir("app");
    phases_io::save_phases(&dir, &phases).unwrap();
    let store = PhaseStore::preloaded(dir, phases);
    App::new(store, Theme::default(), true)
}

/// Build an App whose store is still loading (no data yet).
pub fn loading_app() -> App {
    let dir = unique_data_dir("loading");
    // No phases file; the background load will fail, but without polling
    // the store stays in its loading state.
    let store = PhaseStore::open(dir);
    App::new(store, Theme::default(), true)
}

/// Build an App whose store finished loading with no data (load failed).
pub fn failed_load_app() -> App {
    let dir = unique_data_dir("failed");
    let mut store = PhaseStore::open(dir);
    let deadline = Instant::now() + Duration::from_secs(5);
    while store.loading() {
        assert!(Instant::now() < deadline, "load never settled");
        store.poll();
        std::thread::sleep(Duration::from_millis(5));
    }
    App::new(store, Theme::default(), true)
}
