use credcheck_common::error::CheckError;

use crate::models::CheckResult;

/// The one piece of mutable UI state. Only the request coordinator writes it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success(CheckResult),
    Error(String),
}

impl UiState {
    pub fn as_str(&self) -> &'static str {
        match self {
            UiState::Idle => "idle",
            UiState::Loading => "loading",
            UiState::Success(_) => "success",
            UiState::Error(_) => "error",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    /// Terminal state of a finished cycle.
    pub fn settled(outcome: Result<CheckResult, CheckError>) -> Self {
        match outcome {
            Ok(result) => UiState::Success(result),
            Err(err) => UiState::Error(err.to_string()),
        }
    }
}
