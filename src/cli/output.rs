use serde::Serialize;

use crate::model::phase::{StartUpPhase, StartUpPhases, Task};
use crate::ops::phase_ops;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: u32,
    pub label: String,
    pub checked: bool,
    pub locked: bool,
}

#[derive(Serialize)]
pub struct PhaseJson {
    pub id: u32,
    pub title: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct ChecklistJson {
    pub phases: Vec<PhaseJson>,
}

pub fn checklist_json(phases: &StartUpPhases) -> ChecklistJson {
    ChecklistJson {
        phases: phases
            .start_up_phases
            .iter()
            .enumerate()
            .map(|(idx, phase)| phase_json(phase, phase_ops::phase_locked(phases, idx)))
            .collect(),
    }
}

fn phase_json(phase: &StartUpPhase, locked: bool) -> PhaseJson {
    PhaseJson {
        id: phase.id,
        title: phase.title.clone(),
        completed: phase.is_completed,
        completed_at: phase.completed_at.clone(),
        tasks: phase.tasks.iter().map(|t| task_json(t, locked)).collect(),
    }
}

fn task_json(task: &Task, locked: bool) -> TaskJson {
    TaskJson {
        id: task.id,
        label: task.label.clone(),
        checked: task.is_checked,
        locked,
    }
}

// ---------------------------------------------------------------------------
// Plain text output
// ---------------------------------------------------------------------------

/// Print the checklist as indented text, one phase per section.
pub fn print_checklist(phases: &StartUpPhases) {
    for (idx, phase) in phases.start_up_phases.iter().enumerate() {
        let mark = if phase.is_completed { " \u{2713}" } else { "" };
        println!("Phase {}: {}{}", idx + 1, phase.title, mark);
        let locked = phase_ops::phase_locked(phases, idx);
        for task in &phase.tasks {
            let checkbox = if task.is_checked { "[x]" } else { "[ ]" };
            let suffix = if locked { "  (locked)" } else { "" };
            println!("  {} {}{}", checkbox, task.label, suffix);
        }
        if idx + 1 < phases.start_up_phases.len() {
            println!();
        }
    }
}
