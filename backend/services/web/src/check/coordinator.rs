use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use credcheck_common::error::CheckError;
use credcheck_verdict::models::rejection_message;
use credcheck_verdict::{CheckRequest, CheckResult, Presentation, ScoreCategory, UiState};

use super::client::ScoringService;

/// Wherever presentations end up. Receives every state transition in order.
pub trait Surface: Send + Sync {
    fn present(&self, presentation: &Presentation);
}

/// Surface for the server-rendered host: the page is built from the final
/// state, so transitions are only traced.
pub struct TraceSurface;

impl Surface for TraceSurface {
    fn present(&self, presentation: &Presentation) {
        tracing::trace!(
            loading = presentation.loading,
            error = presentation.error.is_some(),
            result = presentation.result.is_some(),
            "presentation updated"
        );
    }
}

/// Owns the current [`UiState`] and runs one request/response cycle per
/// submission. Submissions are numbered; only the latest one may settle the
/// state, so a slow earlier reply never overwrites a newer one.
pub struct Coordinator<S: ScoringService, V: Surface> {
    service: S,
    surface: V,
    state: Mutex<UiState>,
    latest: AtomicU64,
}

impl<S: ScoringService, V: Surface> Coordinator<S, V> {
    pub fn new(service: S, surface: V) -> Self {
        Self {
            service,
            surface,
            state: Mutex::new(UiState::Idle),
            latest: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> UiState {
        self.lock_state().clone()
    }

    /// Handle one user submission and return the state it leaves behind.
    pub async fn submit(&self, raw_text: &str, raw_top_n: Option<&str>) -> UiState {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        let request = match CheckRequest::from_input(raw_text, raw_top_n) {
            Ok(request) => request,
            Err(err) => {
                tracing::info!(seq, kind = err.kind(), "submission rejected locally");
                self.settle(seq, Err(err));
                return self.state();
            }
        };

        tracing::info!(seq, top_n = request.top_n, chars = request.text.chars().count(), "checking");

        let loading = LoadingGuard::enter(self, seq);
        let outcome = self.exchange(&request).await;
        self.settle(seq, outcome);
        drop(loading);

        self.state()
    }

    async fn exchange(&self, request: &CheckRequest) -> Result<CheckResult, CheckError> {
        let reply = self
            .service
            .check(request)
            .await
            .map_err(|e| CheckError::TransportFailure(e.to_string()))?;

        if !reply.status.is_success() {
            tracing::warn!(status = %reply.status, "scoring service rejected check");
            return Err(CheckError::ServiceRejected(rejection_message(&reply.payload)));
        }

        let result = CheckResult::from_payload(&reply.payload);
        tracing::info!(
            status = %reply.status,
            score = result.score,
            category = ScoreCategory::classify(result.score).as_str(),
            documents = result.documents.len(),
            "check completed"
        );
        Ok(result)
    }

    fn settle(&self, seq: u64, outcome: Result<CheckResult, CheckError>) {
        if let Err(err) = &outcome {
            tracing::warn!(seq, kind = err.kind(), error = %err, "check failed");
        }
        let mut state = self.lock_state();
        if self.latest.load(Ordering::SeqCst) != seq {
            tracing::debug!(seq, "discarding stale completion");
            return;
        }
        *state = UiState::settled(outcome);
        self.surface.present(&Presentation::of(&state));
    }

    fn lock_state(&self) -> MutexGuard<'_, UiState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Loading indicator held for the duration of one exchange. If the cycle
/// ends without settling (cancelled future, panic) the indicator is cleared
/// on drop, unless a newer submission has taken over.
struct LoadingGuard<'a, S: ScoringService, V: Surface> {
    owner: &'a Coordinator<S, V>,
    seq: u64,
}

impl<'a, S: ScoringService, V: Surface> LoadingGuard<'a, S, V> {
    fn enter(owner: &'a Coordinator<S, V>, seq: u64) -> Self {
        let mut state = owner.lock_state();
        if owner.latest.load(Ordering::SeqCst) == seq {
            *state = UiState::Loading;
            owner.surface.present(&Presentation::of(&state));
        }
        drop(state);
        Self { owner, seq }
    }
}

impl<S: ScoringService, V: Surface> Drop for LoadingGuard<'_, S, V> {
    fn drop(&mut self) {
        let mut state = self.owner.lock_state();
        if state.is_loading() && self.owner.latest.load(Ordering::SeqCst) == self.seq {
            *state = UiState::Idle;
            self.owner.surface.present(&Presentation::of(&state));
        }
    }
}
