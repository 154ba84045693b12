use chrono::Local;

use crate::model::phase::{ChangeEvent, StartUpPhases};

/// Error type for checklist operations
#[derive(Debug, thiserror::Error)]
pub enum PhaseOpError {
    #[error("phase not found: {0}")]
    PhaseNotFound(u32),
    #[error("task not found: {task_id} in phase {phase_id}")]
    TaskNotFound { phase_id: u32, task_id: u32 },
    #[error("task {task_id} in phase {phase_id} is locked")]
    Locked { phase_id: u32, task_id: u32 },
}

/// What a change did to the target phase's completion flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChangeOutcome {
    /// The phase transitioned incomplete → completed.
    pub phase_completed: bool,
    /// The phase transitioned completed → incomplete.
    pub phase_reopened: bool,
}

/// A phase is locked while any earlier phase is incomplete.
/// Locked tasks render as disabled checkboxes and accept no changes.
pub fn phase_locked(phases: &StartUpPhases, phase_idx: usize) -> bool {
    phases.start_up_phases[..phase_idx.min(phases.start_up_phases.len())]
        .iter()
        .any(|p| !p.is_completed)
}

/// Apply a checkbox change event: set the target task's checked state and
/// recompute the parent phase's completion flag (with date bookkeeping).
///
/// The target is the composite `(phase_id, task_id)` key; task ids are
/// only unique within a phase.
pub fn apply_change(
    phases: &mut StartUpPhases,
    event: &ChangeEvent,
) -> Result<ChangeOutcome, PhaseOpError> {
    let phase_idx = phases
        .phase_index(event.phase_id)
        .ok_or(PhaseOpError::PhaseNotFound(event.phase_id))?;

    if phase_locked(phases, phase_idx) {
        return Err(PhaseOpError::Locked {
            phase_id: event.phase_id,
            task_id: event.task_id,
        });
    }

    let phase = &mut phases.start_up_phases[phase_idx];
    let task = phase
        .task_mut(event.task_id)
        .ok_or(PhaseOpError::TaskNotFound {
            phase_id: event.phase_id,
            task_id: event.task_id,
        })?;

    task.is_checked = event.checked;

    let was_completed = phase.is_completed;
    let now_completed = !phase.tasks.is_empty() && phase.all_tasks_checked();
    phase.is_completed = now_completed;

    let mut outcome = ChangeOutcome::default();
    if now_completed && !was_completed {
        phase.completed_at = Some(today_str());
        outcome.phase_completed = true;
    } else if was_completed && !now_completed {
        phase.completed_at = None;
        outcome.phase_reopened = true;
    }
    Ok(outcome)
}

/// Validate checklist integrity. Returns a list of human-readable problems
/// (empty = clean). Backs the `check` command.
pub fn validate(phases: &StartUpPhases) -> Vec<String> {
    let mut problems = Vec::new();

    let mut seen_phase_ids = std::collections::HashSet::new();
    for phase in &phases.start_up_phases {
        if !seen_phase_ids.insert(phase.id) {
            problems.push(format!("duplicate phase id {}", phase.id));
        }
        if phase.title.trim().is_empty() {
            problems.push(format!("phase {} has an empty title", phase.id));
        }

        let mut seen_task_ids = std::collections::HashSet::new();
        for task in &phase.tasks {
            if !seen_task_ids.insert(task.id) {
                problems.push(format!(
                    "duplicate task id {} in phase {}",
                    task.id, phase.id
                ));
            }
            if task.label.trim().is_empty() {
                problems.push(format!(
                    "task {} in phase {} has an empty label",
                    task.id, phase.id
                ));
            }
        }

        // Flag a stale flag rather than silently fixing it; the file is
        // hand-editable.
        let expected = !phase.tasks.is_empty() && phase.all_tasks_checked();
        if phase.is_completed != expected {
            problems.push(format!(
                "phase {} isCompleted={} does not match its tasks",
                phase.id, phase.is_completed
            ));
        }
    }

    problems
}

fn today_str() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::phase::{StartUpPhase, Task};

    fn two_phase_fixture() -> StartUpPhases {
        let mut p1 = StartUpPhase::new(1, "Foundation");
        p1.tasks.push(Task::new(1, "Setup virtual office"));
        p1.tasks.push(Task::new(2, "Buy domains"));
        let mut p2 = StartUpPhase::new(2, "Discovery");
        p2.tasks.push(Task::new(1, "Create roadmap"));
        StartUpPhases {
            start_up_phases: vec![p1, p2],
        }
    }

    fn change(phase_id: u32, task_id: u32, checked: bool) -> ChangeEvent {
        ChangeEvent {
            phase_id,
            task_id,
            checked,
        }
    }

    #[test]
    fn toggle_sets_checked_state() {
        let mut phases = two_phase_fixture();
        let outcome = apply_change(&mut phases, &change(1, 2, true)).unwrap();
        assert!(phases.phase(1).unwrap().task(2).unwrap().is_checked);
        assert!(!outcome.phase_completed);
        assert!(!phases.phase(1).unwrap().is_completed);
    }

    #[test]
    fn checking_last_task_completes_phase_and_stamps_date() {
        let mut phases = two_phase_fixture();
        apply_change(&mut phases, &change(1, 1, true)).unwrap();
        let outcome = apply_change(&mut phases, &change(1, 2, true)).unwrap();
        assert!(outcome.phase_completed);
        let p1 = phases.phase(1).unwrap();
        assert!(p1.is_completed);
        assert!(p1.completed_at.is_some());
    }

    #[test]
    fn unchecking_reopens_phase_and_clears_date() {
        let mut phases = two_phase_fixture();
        apply_change(&mut phases, &change(1, 1, true)).unwrap();
        apply_change(&mut phases, &change(1, 2, true)).unwrap();

        let outcome = apply_change(&mut phases, &change(1, 1, false)).unwrap();
        assert!(outcome.phase_reopened);
        let p1 = phases.phase(1).unwrap();
        assert!(!p1.is_completed);
        assert!(p1.completed_at.is_none());
    }

    #[test]
    fn later_phase_is_locked_until_earlier_completes() {
        let mut phases = two_phase_fixture();
        assert!(phase_locked(&phases, 1));
        assert!(!phase_locked(&phases, 0));

        let err = apply_change(&mut phases, &change(2, 1, true)).unwrap_err();
        assert!(matches!(
            err,
            PhaseOpError::Locked {
                phase_id: 2,
                task_id: 1
            }
        ));

        // Complete phase 1; phase 2 unlocks.
        apply_change(&mut phases, &change(1, 1, true)).unwrap();
        apply_change(&mut phases, &change(1, 2, true)).unwrap();
        assert!(!phase_locked(&phases, 1));
        apply_change(&mut phases, &change(2, 1, true)).unwrap();
        assert!(phases.phase(2).unwrap().is_completed);
    }

    #[test]
    fn unknown_targets_are_errors() {
        let mut phases = two_phase_fixture();
        assert!(matches!(
            apply_change(&mut phases, &change(9, 1, true)).unwrap_err(),
            PhaseOpError::PhaseNotFound(9)
        ));
        assert!(matches!(
            apply_change(&mut phases, &change(1, 9, true)).unwrap_err(),
            PhaseOpError::TaskNotFound {
                phase_id: 1,
                task_id: 9
            }
        ));
    }

    #[test]
    fn validate_flags_duplicates_and_stale_flags() {
        let mut phases = two_phase_fixture();
        phases.start_up_phases[0].tasks.push(Task::new(1, "dup id"));
        phases.start_up_phases[1].is_completed = true;

        let problems = validate(&phases);
        assert!(problems.iter().any(|p| p.contains("duplicate task id 1")));
        assert!(
            problems
                .iter()
                .any(|p| p.contains("phase 2 isCompleted=true"))
        );
    }

    #[test]
    fn validate_clean_fixture_is_empty() {
        let phases = two_phase_fixture();
        assert!(validate(&phases).is_empty());
    }

    #[test]
    fn same_task_id_in_different_phases_is_fine() {
        // Task ids are scoped per phase; both fixtures use task id 1.
        let phases = two_phase_fixture();
        assert!(validate(&phases).is_empty());
    }
}
