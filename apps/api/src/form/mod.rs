//! Optimization form — the state behind the resume / job description page.
//!
//! Framework-agnostic: a view layer renders from the accessors and calls the
//! actions. The optimizer (remote gateway or local heuristic) and the platform
//! (clipboard, downloads, notices) are injected so the logic runs without a browser.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, warn};

use crate::errors::OPTIMIZATION_ERROR_PREFIX;

pub mod gateway_client;
pub mod platform;

pub use gateway_client::GatewayOptimizer;
pub use platform::{LocalPlatform, PlatformError, PlatformServices};

pub const VALIDATION_MESSAGE: &str = "Veuillez remplir les deux champs avant de continuer.";
pub const COPY_CONFIRMATION: &str = "CV copié dans le presse-papiers !";
pub const DOWNLOAD_FILENAME: &str = "cv_optimise.txt";
pub const SUBMIT_LABEL: &str = "Optimiser mon CV";
pub const SUBMIT_LABEL_BUSY: &str = "Magie en cours...";

/// One form submission. Lives only for the duration of the call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationRequest {
    pub resume: String,
    pub job_description: String,
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("{message}")]
    Gateway { status: u16, message: String },

    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

/// Produces the optimized resume text for a submission.
#[async_trait]
pub trait Optimizer: Send + Sync {
    async fn optimize(&self, request: &OptimizationRequest) -> Result<String, FormError>;
}

/// What a call to `submit` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A field was blank; nothing was sent.
    Invalid,
    /// A submission is already in flight; nothing was sent.
    Busy,
    Optimized,
    Failed,
}

#[derive(Debug, Default)]
struct FormState {
    resume: String,
    job_description: String,
    optimized_resume: Option<String>,
    is_loading: bool,
    error: Option<String>,
}

/// Shared handle to one form instance. Clones see the same state.
#[derive(Debug, Clone, Default)]
pub struct OptimizationForm {
    state: Arc<Mutex<FormState>>,
}

impl OptimizationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_resume(&self, text: impl Into<String>) {
        self.lock().resume = text.into();
    }

    pub fn set_job_description(&self, text: impl Into<String>) {
        self.lock().job_description = text.into();
    }

    pub fn resume(&self) -> String {
        self.lock().resume.clone()
    }

    pub fn job_description(&self) -> String {
        self.lock().job_description.clone()
    }

    /// Last successful result, kept across later failures.
    pub fn optimized_resume(&self) -> Option<String> {
        self.lock().optimized_resume.clone()
    }

    /// Banner text, if any.
    pub fn error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().is_loading
    }

    pub fn is_submit_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            SUBMIT_LABEL_BUSY
        } else {
            SUBMIT_LABEL
        }
    }

    /// Validates, then runs one optimization. At most one runs per form at a time.
    pub async fn submit(&self, optimizer: &dyn Optimizer) -> SubmitOutcome {
        let request = {
            let mut state = self.lock();
            if state.is_loading {
                return SubmitOutcome::Busy;
            }
            if state.resume.trim().is_empty() || state.job_description.trim().is_empty() {
                state.error = Some(VALIDATION_MESSAGE.to_string());
                return SubmitOutcome::Invalid;
            }
            state.is_loading = true;
            state.error = None;
            OptimizationRequest {
                resume: state.resume.clone(),
                job_description: state.job_description.clone(),
            }
        };

        // Clears the busy flag on every exit path, including cancellation.
        let _loading = LoadingGuard(&self.state);

        match optimizer.optimize(&request).await {
            Ok(optimized) => {
                self.lock().optimized_resume = Some(optimized);
                SubmitOutcome::Optimized
            }
            Err(e) => {
                error!("Optimization failed: {e}");
                self.lock().error = Some(format!("{OPTIMIZATION_ERROR_PREFIX}{e}"));
                SubmitOutcome::Failed
            }
        }
    }

    /// Copies the last result to the clipboard, then shows the confirmation notice.
    ///
    /// Fire-and-forget: the returned handle may be dropped. `None` when there is no result.
    pub fn copy_result(&self, platform: Arc<dyn PlatformServices>) -> Option<JoinHandle<()>> {
        let text = self.optimized_resume()?;
        Some(tokio::spawn(async move {
            match platform.write_clipboard(&text).await {
                Ok(()) => platform.notify(COPY_CONFIRMATION),
                Err(e) => warn!("Clipboard write failed: {e}"),
            }
        }))
    }

    /// Saves the last result as a plain text file. No-op when there is no result.
    pub async fn download_result(&self, platform: &dyn PlatformServices) -> Result<(), PlatformError> {
        match self.optimized_resume() {
            Some(text) => platform.save_text_file(DOWNLOAD_FILENAME, &text).await,
            None => Ok(()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        lock_state(&self.state)
    }
}

fn lock_state(state: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

struct LoadingGuard<'a>(&'a Mutex<FormState>);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        lock_state(self.0).is_loading = false;
    }
}
