//! Observable progress of a generation request.

use crate::payload::Variant;
use serde::{Deserialize, Serialize};

/// Orchestrator state machine.
///
/// `Idle -> Validating -> Building -> Assembling -> Done`, or
/// `Validating -> Rejected` when the request never reaches the builder, or
/// `Building | Assembling -> Failed` when construction itself fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationState {
    Idle,
    Validating,
    Building,
    Assembling,
    Done,
    Rejected,
    Failed,
}

impl GenerationState {
    pub fn as_str(self) -> &'static str {
        match self {
            GenerationState::Idle => "idle",
            GenerationState::Validating => "validating",
            GenerationState::Building => "building",
            GenerationState::Assembling => "assembling",
            GenerationState::Done => "done",
            GenerationState::Rejected => "rejected",
            GenerationState::Failed => "failed",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GenerationState::Done | GenerationState::Rejected | GenerationState::Failed
        )
    }

    pub fn tone(self) -> StatusTone {
        match self {
            GenerationState::Idle => StatusTone::Neutral,
            GenerationState::Validating
            | GenerationState::Building
            | GenerationState::Assembling => StatusTone::Working,
            GenerationState::Done => StatusTone::Success,
            GenerationState::Rejected | GenerationState::Failed => StatusTone::Error,
        }
    }
}

/// How a front-end should present a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Neutral,
    Working,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStatus {
    /// Request this status belongs to; 0 before the first request.
    pub ticket: u64,
    pub state: GenerationState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<i64>,
    pub message: String,
    /// Code points in the finished payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}

impl GenerationStatus {
    pub fn idle() -> Self {
        Self {
            ticket: 0,
            state: GenerationState::Idle,
            variant: None,
            intensity: None,
            message: "Idle".to_string(),
            length: None,
        }
    }
}

impl Default for GenerationStatus {
    fn default() -> Self {
        Self::idle()
    }
}
