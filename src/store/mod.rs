//! The data side of the checklist TUI: loads phases off the render thread,
//! exposes the current snapshot, and owns all mutation.
//!
//! The view contract is deliberately narrow: `data()` (None until the first
//! load lands), `loading()`, `random_fact()`, and `handle_change()`. The
//! view renders from the snapshot and forwards checkbox change events
//! untouched. Target resolution, locking, completion
//! bookkeeping, and persistence all happen here.

pub mod facts;

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use crate::io::phases_io;
use crate::model::phase::{ChangeEvent, StartUpPhases};
use crate::ops::phase_ops::{self, PhaseOpError};

enum LoadMsg {
    Loaded(StartUpPhases),
    Failed(String),
}

pub struct PhaseStore {
    dir: PathBuf,
    data: Option<StartUpPhases>,
    loading: bool,
    random_fact: &'static str,
    last_error: Option<String>,
    change_count: u64,
    tx: mpsc::Sender<LoadMsg>,
    rx: mpsc::Receiver<LoadMsg>,
}

impl PhaseStore {
    /// Open a store over the given checklist directory and start loading in
    /// the background. `loading()` stays true until the first load lands.
    pub fn open(dir: PathBuf) -> Self {
        let (tx, rx) = mpsc::channel();
        let store = PhaseStore {
            dir,
            data: None,
            loading: true,
            random_fact: facts::pick(),
            last_error: None,
            change_count: 0,
            tx,
            rx,
        };
        store.spawn_load();
        store
    }

    /// A store with a snapshot already in place. Used by tests and anywhere
    /// data was loaded synchronously up front.
    pub fn preloaded(dir: PathBuf, data: StartUpPhases) -> Self {
        let (tx, rx) = mpsc::channel();
        PhaseStore {
            dir,
            data: Some(data),
            loading: false,
            random_fact: facts::pick(),
            last_error: None,
            change_count: 0,
            tx,
            rx,
        }
    }

    fn spawn_load(&self) {
        let tx = self.tx.clone();
        let dir = self.dir.clone();
        thread::spawn(move || {
            let msg = match phases_io::load_phases(&dir) {
                Ok(phases) => LoadMsg::Loaded(phases),
                Err(e) => LoadMsg::Failed(e.to_string()),
            };
            let _ = tx.send(msg);
        });
    }

    /// Drain pending load results. Returns true if the snapshot changed.
    /// Call once per event-loop tick.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                LoadMsg::Loaded(phases) => {
                    tracing::info!(phases = phases.start_up_phases.len(), "checklist loaded");
                    self.data = Some(phases);
                    self.last_error = None;
                    changed = true;
                }
                LoadMsg::Failed(err) => {
                    // Keep whatever snapshot we had; absent data is a state,
                    // not an error surface.
                    tracing::warn!(error = %err, "checklist load failed");
                    self.last_error = Some(err);
                }
            }
            self.loading = false;
        }
        changed
    }

    /// Re-run the background load (file changed on disk). The current
    /// snapshot stays visible until the new one lands.
    pub fn reload(&self) {
        self.spawn_load();
    }

    pub fn data(&self) -> Option<&StartUpPhases> {
        self.data.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn random_fact(&self) -> &str {
        self.random_fact
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Number of change events handled (accepted or ignored).
    pub fn change_count(&self) -> u64 {
        self.change_count
    }

    /// A task's checkbox is disabled while any earlier phase is incomplete.
    pub fn is_locked(&self, phase_idx: usize) -> bool {
        self.data
            .as_ref()
            .is_some_and(|phases| phase_ops::phase_locked(phases, phase_idx))
    }

    /// Handle a checkbox change event from the view: apply it to the
    /// snapshot, persist, and refresh the fact when a phase completes.
    /// Events addressed to locked or unknown targets are ignored.
    pub fn handle_change(&mut self, event: &ChangeEvent) {
        self.change_count += 1;
        let Some(phases) = self.data.as_mut() else {
            return;
        };

        match phase_ops::apply_change(phases, event) {
            Ok(outcome) => {
                if outcome.phase_completed {
                    self.random_fact = facts::pick();
                }
                if let Err(e) = phases_io::save_phases(&self.dir, phases) {
                    tracing::error!(error = %e, "failed to save checklist");
                    self.last_error = Some(e.to_string());
                }
            }
            Err(PhaseOpError::Locked { phase_id, task_id }) => {
                tracing::debug!(phase_id, task_id, "change event on locked task ignored");
            }
            Err(e) => {
                tracing::warn!(error = %e, "change event dropped");
            }
        }
    }
}

#[cfg(test)]
impl PhaseStore {
    /// Force the loading flag, for exercising the view's loading branch.
    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::phase::{StartUpPhase, Task};
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    fn fixture() -> StartUpPhases {
        let mut p1 = StartUpPhase::new(1, "Foundation");
        p1.tasks.push(Task::new(1, "Setup virtual office"));
        p1.tasks.push(Task::new(2, "Buy domains"));
        let mut p2 = StartUpPhase::new(2, "Discovery");
        p2.tasks.push(Task::new(1, "Create roadmap"));
        StartUpPhases {
            start_up_phases: vec![p1, p2],
        }
    }

    fn poll_until_loaded(store: &mut PhaseStore) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while store.loading() {
            assert!(Instant::now() < deadline, "load never completed");
            store.poll();
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn open_loads_in_background() {
        let dir = TempDir::new().unwrap();
        phases_io::save_phases(dir.path(), &fixture()).unwrap();

        let mut store = PhaseStore::open(dir.path().to_path_buf());
        assert!(store.loading());
        poll_until_loaded(&mut store);
        assert_eq!(store.data().unwrap().start_up_phases.len(), 2);
        assert!(store.last_error().is_none());
    }

    #[test]
    fn load_failure_keeps_data_absent_and_records_error() {
        let dir = TempDir::new().unwrap();
        let mut store = PhaseStore::open(dir.path().to_path_buf());
        poll_until_loaded(&mut store);
        assert!(store.data().is_none());
        assert!(store.last_error().is_some());
    }

    #[test]
    fn handle_change_toggles_and_persists() {
        let dir = TempDir::new().unwrap();
        phases_io::save_phases(dir.path(), &fixture()).unwrap();
        let mut store = PhaseStore::preloaded(dir.path().to_path_buf(), fixture());

        store.handle_change(&ChangeEvent {
            phase_id: 1,
            task_id: 2,
            checked: true,
        });
        assert_eq!(store.change_count(), 1);
        assert!(
            store
                .data()
                .unwrap()
                .phase(1)
                .unwrap()
                .task(2)
                .unwrap()
                .is_checked
        );

        // The change hit the disk too.
        let on_disk = phases_io::load_phases(dir.path()).unwrap();
        assert!(on_disk.phase(1).unwrap().task(2).unwrap().is_checked);
    }

    #[test]
    fn locked_change_is_ignored() {
        let dir = TempDir::new().unwrap();
        let mut store = PhaseStore::preloaded(dir.path().to_path_buf(), fixture());

        assert!(store.is_locked(1));
        store.handle_change(&ChangeEvent {
            phase_id: 2,
            task_id: 1,
            checked: true,
        });
        assert!(
            !store
                .data()
                .unwrap()
                .phase(2)
                .unwrap()
                .task(1)
                .unwrap()
                .is_checked
        );
    }

    #[test]
    fn completing_a_phase_refreshes_nothing_else() {
        let dir = TempDir::new().unwrap();
        let mut store = PhaseStore::preloaded(dir.path().to_path_buf(), fixture());

        store.handle_change(&ChangeEvent {
            phase_id: 1,
            task_id: 1,
            checked: true,
        });
        store.handle_change(&ChangeEvent {
            phase_id: 1,
            task_id: 2,
            checked: true,
        });
        assert_eq!(store.change_count(), 2);

        let data = store.data().unwrap();
        assert!(data.phase(1).unwrap().is_completed);
        // Phase 2 untouched by phase 1's events
        assert!(!data.phase(2).unwrap().task(1).unwrap().is_checked);
        assert!(!data.phase(2).unwrap().is_completed);
    }

    #[test]
    fn reload_picks_up_external_edits() {
        let dir = TempDir::new().unwrap();
        phases_io::save_phases(dir.path(), &fixture()).unwrap();
        let mut store = PhaseStore::open(dir.path().to_path_buf());
        poll_until_loaded(&mut store);

        let mut edited = fixture();
        edited.start_up_phases[0].title = "Renamed".into();
        phases_io::save_phases(dir.path(), &edited).unwrap();

        store.reload();
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            assert!(Instant::now() < deadline, "reload never landed");
            if store.poll() {
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(store.data().unwrap().start_up_phases[0].title, "Renamed");
    }
}
