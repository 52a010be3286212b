//! Processing timeline
//!
//! The detail view shows where a policy sits in the downstream pipeline
//! (Issued, Staging, PolicyODS, Validation, Processed). There is no workflow
//! engine behind it: the timeline is a pure function of the record status.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::record::PolicyStatus;

/// Pipeline stages in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessingStage {
    Issued,
    Staging,
    PolicyOds,
    Validation,
    Processed,
}

impl ProcessingStage {
    pub const ALL: [ProcessingStage; 5] = [
        ProcessingStage::Issued,
        ProcessingStage::Staging,
        ProcessingStage::PolicyOds,
        ProcessingStage::Validation,
        ProcessingStage::Processed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProcessingStage::Issued => "Issued",
            ProcessingStage::Staging => "Staging",
            ProcessingStage::PolicyOds => "PolicyODS",
            ProcessingStage::Validation => "Validation",
            ProcessingStage::Processed => "Processed",
        }
    }

    // Fixed display timestamps on the reference day.
    fn stamp(&self) -> NaiveDateTime {
        let (hour, minute) = match self {
            ProcessingStage::Issued => (9, 30),
            ProcessingStage::Staging => (10, 15),
            ProcessingStage::PolicyOds => (11, 0),
            ProcessingStage::Validation => (11, 45),
            ProcessingStage::Processed => (12, 30),
        };
        NaiveDateTime::new(reference_day(), NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default())
    }
}

fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default()
}

/// State of one stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepState {
    Completed,
    Current,
    Pending,
    Failed,
}

impl StepState {
    pub fn label(&self) -> &'static str {
        match self {
            StepState::Completed => "Completed",
            StepState::Current => "In Progress",
            StepState::Pending => "Pending",
            StepState::Failed => "Failed",
        }
    }
}

/// One stage of the timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingStep {
    pub stage: ProcessingStage,
    pub state: StepState,
    /// Set for completed and failed stages only
    pub at: Option<NaiveDateTime>,
}

/// Builds the timeline for a record in `status`
///
/// Issued, Staging and PolicyODS are always complete. Validation fails for
/// rejected records. Processed is pending behind a failed validation, the
/// current step for pending records, and complete otherwise.
pub fn processing_steps(status: PolicyStatus) -> Vec<ProcessingStep> {
    ProcessingStage::ALL
        .into_iter()
        .map(|stage| {
            let state = match (stage, status) {
                (ProcessingStage::Validation, PolicyStatus::Rejected) => StepState::Failed,
                (ProcessingStage::Processed, PolicyStatus::Rejected) => StepState::Pending,
                (ProcessingStage::Processed, PolicyStatus::Pending) => StepState::Current,
                _ => StepState::Completed,
            };
            let at = matches!(state, StepState::Completed | StepState::Failed).then(|| stage.stamp());
            ProcessingStep { stage, state, at }
        })
        .collect()
}

/// Width of the progress bar in percent
///
/// Measured to the first current or failed step; a timeline with neither
/// shows no progress.
pub fn progress_percent(steps: &[ProcessingStep]) -> u32 {
    if steps.is_empty() {
        return 0;
    }
    let reached = steps
        .iter()
        .position(|s| matches!(s.state, StepState::Current | StepState::Failed))
        .map_or(0, |index| index + 1);
    let percent = (reached * 100 / steps.len()) as i64 - 12;
    percent.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(status: PolicyStatus) -> Vec<StepState> {
        processing_steps(status).into_iter().map(|s| s.state).collect()
    }

    #[test]
    fn test_booked_is_fully_complete() {
        assert_eq!(states(PolicyStatus::Booked), vec![StepState::Completed; 5]);
    }

    #[test]
    fn test_rejected_fails_validation() {
        assert_eq!(
            states(PolicyStatus::Rejected),
            vec![
                StepState::Completed,
                StepState::Completed,
                StepState::Completed,
                StepState::Failed,
                StepState::Pending,
            ]
        );
    }

    #[test]
    fn test_pending_is_current_at_processed() {
        let steps = processing_steps(PolicyStatus::Pending);
        assert_eq!(steps[4].state, StepState::Current);
        assert_eq!(steps[4].at, None);
        assert!(steps[3].at.is_some());
    }

    #[test]
    fn test_progress() {
        assert_eq!(progress_percent(&processing_steps(PolicyStatus::Pending)), 88);
        assert_eq!(progress_percent(&processing_steps(PolicyStatus::Rejected)), 68);
        assert_eq!(progress_percent(&processing_steps(PolicyStatus::Posted)), 0);
        assert_eq!(progress_percent(&[]), 0);
    }
}
