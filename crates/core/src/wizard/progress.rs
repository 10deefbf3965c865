//! Progress indicator model for the wizard header.

use serde::Serialize;

use super::WizardState;

/// Stage labels shown while claiming an existing business.
pub const EXISTING_FLOW_LABELS: [&str; 5] =
    ["Find Business", "Verify", "Create Account", "Terms", "Done!"];

/// Stage labels shown while registering a new business. Verification is skipped.
pub const NEW_FLOW_LABELS: [&str; 4] = ["Register", "Create Account", "Terms", "Done!"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    Completed,
    Active,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stage {
    pub label: &'static str,
    pub status: StageStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// 1-based position within `stages`.
    pub position: u8,
    pub stages: Vec<Stage>,
}

impl Progress {
    /// Compute the indicator for `state`.
    ///
    /// The new-business flow has no verification stage, so its position is one
    /// behind the step number.
    pub fn for_state(state: &WizardState) -> Self {
        let step = state.step().to_number();
        let (labels, position): (&[&'static str], u8) = if state.is_new_business_flow() {
            (&NEW_FLOW_LABELS[..], step.saturating_sub(1))
        } else {
            (&EXISTING_FLOW_LABELS[..], step)
        };

        let stages = labels
            .iter()
            .zip(1u8..)
            .map(|(&label, index)| Stage {
                label,
                status: if index < position {
                    StageStatus::Completed
                } else if index == position {
                    StageStatus::Active
                } else {
                    StageStatus::Pending
                },
            })
            .collect();

        Self { position, stages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{transition, WizardEvent};

    fn statuses(progress: &Progress) -> Vec<StageStatus> {
        progress.stages.iter().map(|s| s.status).collect()
    }

    #[test]
    fn initial_state_shows_five_stages() {
        let progress = Progress::for_state(&WizardState::new());
        assert_eq!(progress.position, 1);
        assert_eq!(progress.stages.len(), 5);
        assert_eq!(progress.stages[0].label, "Find Business");
        assert_eq!(progress.stages[0].status, StageStatus::Active);
        assert_eq!(progress.stages[4].status, StageStatus::Pending);
    }

    #[test]
    fn new_business_flow_drops_verify_stage() {
        let state = transition(&WizardState::new(), WizardEvent::RegisterNew).unwrap();
        let progress = Progress::for_state(&state);
        assert_eq!(progress.position, 2);
        assert_eq!(
            progress.stages.iter().map(|s| s.label).collect::<Vec<_>>(),
            NEW_FLOW_LABELS.to_vec()
        );
        assert_eq!(
            statuses(&progress),
            vec![
                StageStatus::Completed,
                StageStatus::Active,
                StageStatus::Pending,
                StageStatus::Pending,
            ]
        );
    }
}
