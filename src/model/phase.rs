use serde::{Deserialize, Serialize};

/// A single checkable item within a phase.
///
/// Task ids are unique within their parent phase only; never address a
/// task by bare id, always by `(phase_id, task_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub label: String,
    pub is_checked: bool,
}

impl Task {
    /// Create a new unchecked task.
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Task {
            id,
            label: label.into(),
            is_checked: false,
        }
    }
}

/// A named group of tasks with an aggregate completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartUpPhase {
    pub id: u32,
    pub title: String,
    pub is_completed: bool,
    /// Date the phase last transitioned to completed (cleared on reopen).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl StartUpPhase {
    /// Create a new phase with no tasks.
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        StartUpPhase {
            id,
            title: title.into(),
            is_completed: false,
            completed_at: None,
            tasks: Vec::new(),
        }
    }

    pub fn task(&self, task_id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn task_mut(&mut self, task_id: u32) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == task_id)
    }

    /// Vacuously true for an empty phase, so a phase with no tasks never
    /// wedges the phases after it.
    pub fn all_tasks_checked(&self) -> bool {
        self.tasks.iter().all(|t| t.is_checked)
    }
}

/// Root of the checklist data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StartUpPhases {
    #[serde(default)]
    pub start_up_phases: Vec<StartUpPhase>,
}

impl StartUpPhases {
    pub fn phase(&self, phase_id: u32) -> Option<&StartUpPhase> {
        self.start_up_phases.iter().find(|p| p.id == phase_id)
    }

    pub fn phase_index(&self, phase_id: u32) -> Option<usize> {
        self.start_up_phases.iter().position(|p| p.id == phase_id)
    }

    /// Total task count across all phases.
    pub fn task_count(&self) -> usize {
        self.start_up_phases.iter().map(|p| p.tasks.len()).sum()
    }
}

/// A checkbox change event, forwarded from the view to the store untouched.
/// Carries the composite target key plus the new checked value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    pub phase_id: u32,
    pub task_id: u32,
    pub checked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_camel_case_wire_names() {
        let phases = StartUpPhases {
            start_up_phases: vec![StartUpPhase {
                id: 1,
                title: "Foundation".into(),
                is_completed: false,
                completed_at: None,
                tasks: vec![Task::new(1, "Buy domains")],
            }],
        };
        let json = serde_json::to_string(&phases).unwrap();
        assert!(json.contains("\"startUpPhases\""));
        assert!(json.contains("\"isCompleted\""));
        assert!(json.contains("\"isChecked\""));
        // completed_at is absent until set
        assert!(!json.contains("completedAt"));
    }

    #[test]
    fn deserialize_camel_case_document() {
        let json = r#"{
            "startUpPhases": [
                {
                    "id": 1,
                    "title": "phase1",
                    "isCompleted": false,
                    "tasks": [
                        { "id": 1, "label": "phase1 task1", "isChecked": false },
                        { "id": 2, "label": "phase1 task2", "isChecked": true }
                    ]
                },
                { "id": 2, "title": "phase2", "isCompleted": false, "tasks": [] }
            ]
        }"#;
        let phases: StartUpPhases = serde_json::from_str(json).unwrap();
        assert_eq!(phases.start_up_phases.len(), 2);
        assert_eq!(phases.task_count(), 2);
        let p1 = phases.phase(1).unwrap();
        assert_eq!(p1.task(2).unwrap().label, "phase1 task2");
        assert!(p1.task(2).unwrap().is_checked);
    }

    #[test]
    fn all_tasks_checked_is_vacuous_for_empty_phase() {
        let empty = StartUpPhase::new(7, "Empty");
        assert!(empty.all_tasks_checked());

        let mut phase = StartUpPhase::new(1, "Foundation");
        phase.tasks.push(Task::new(1, "a"));
        assert!(!phase.all_tasks_checked());
        phase.tasks[0].is_checked = true;
        assert!(phase.all_tasks_checked());
    }

    #[test]
    fn phase_lookup_by_id_not_position() {
        let phases = StartUpPhases {
            start_up_phases: vec![StartUpPhase::new(10, "a"), StartUpPhase::new(3, "b")],
        };
        assert_eq!(phases.phase_index(3), Some(1));
        assert_eq!(phases.phase(10).unwrap().title, "a");
        assert!(phases.phase(99).is_none());
    }
}
