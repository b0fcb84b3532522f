//! Form controller: draft state, the submit flow, and redirect pacing.

use std::sync::{Arc, Mutex, MutexGuard};

use schoolbook_core::config::PacingConfig;
use schoolbook_core::routes::ROUTE_SCHOOL_LIST;
use schoolbook_core::school::{SchoolDraft, SchoolField};
use schoolbook_core::validation::evaluator::evaluate_draft;
use schoolbook_core::validation::rules::{FieldViolation, ValidationReport};
use schoolbook_store::{NewSchool, School, SchoolStore, StoreError};
use tokio::task::JoinHandle;

use crate::nav::Navigator;
use crate::notify::Notifier;
use crate::preview::ImagePreview;

/// Notification shown after a successful registration.
pub const SUBMIT_SUCCESS_MESSAGE: &str = "School added successfully";

/// Notification shown when the store refuses the record.
pub const SUBMIT_FAILURE_MESSAGE: &str = "Failed to add school";

/// Result of a single submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The record was appended; a redirect to the listing is scheduled.
    Saved(School),
    /// One or more fields failed validation; nothing was submitted.
    Rejected(ValidationReport),
    /// The store refused the record; the draft is preserved for a retry.
    StoreFailed(StoreError),
    /// A previous attempt is still pending; this call did nothing.
    AlreadyPending,
}

/// Mutable form state, guarded by the controller's mutex.
#[derive(Debug, Default)]
struct FormState {
    draft: SchoolDraft,
    violations: Vec<FieldViolation>,
    in_progress: bool,
    redirect_task: Option<JoinHandle<()>>,
}

/// Controller for the school registration form.
///
/// Owns the draft and validation state; the store, notifier, and navigator
/// are injected at construction. At most one submission is in flight at a
/// time; while one is pending, further [`submit`](Self::submit) calls are
/// refused. Once a redirect is scheduled it cannot be cancelled.
pub struct FormController {
    state: Mutex<FormState>,
    pacing: PacingConfig,
    store: Arc<dyn SchoolStore>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl FormController {
    pub fn new(
        store: Arc<dyn SchoolStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        pacing: PacingConfig,
    ) -> Self {
        Self {
            state: Mutex::new(FormState::default()),
            pacing,
            store,
            notifier,
            navigator,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Snapshot of the current draft.
    pub fn draft(&self) -> SchoolDraft {
        self.state().draft.clone()
    }

    /// Whether a submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.state().in_progress
    }

    /// The violations from the most recent rejected submit.
    pub fn violations(&self) -> Vec<FieldViolation> {
        self.state().violations.clone()
    }

    /// The inline error message for one field, if it failed the last submit.
    pub fn error_for(&self, field: SchoolField) -> Option<String> {
        self.state()
            .violations
            .iter()
            .find(|v| v.field == field.as_str())
            .map(|v| v.message.clone())
    }

    /// Derived preview state for the image field.
    pub fn image_preview(&self) -> ImagePreview {
        ImagePreview::from_value(&self.state().draft.image)
    }

    /// The injected notifier, for collaborators that report through the
    /// same channel as the controller (e.g. the upload flow).
    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Take the handle of the scheduled redirect task, if one is pending.
    /// Awaiting it observes the navigation deterministically in tests.
    pub fn take_redirect_task(&self) -> Option<JoinHandle<()>> {
        self.state().redirect_task.take()
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Overwrite one field with a new value. No validation runs until the
    /// next submit.
    pub fn update_field(&self, field: SchoolField, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!(field = field.as_str(), "Form field updated");
        self.state().draft.set(field, value);
    }

    /// Overwrite the image field directly (used by the upload flow).
    pub fn set_image(&self, url: impl Into<String>) {
        self.state().draft.set(SchoolField::Image, url);
    }

    /// Validate the draft and, if it passes, append it to the store.
    ///
    /// The record handed to the store is the draft as of this call; edits
    /// made while the simulated latency elapses do not leak into it. On
    /// success the draft is reset and a redirect to the listing view is
    /// scheduled after the configured delay. On store failure the draft is
    /// preserved so the user can retry; there is no automatic retry.
    pub async fn submit(&self) -> SubmitOutcome {
        let new = {
            let mut state = self.state();

            if state.in_progress {
                tracing::debug!("Submit ignored: a submission is already pending");
                return SubmitOutcome::AlreadyPending;
            }

            let report = evaluate_draft(&state.draft);
            if !report.is_valid {
                tracing::warn!(
                    violation_count = report.violations.len(),
                    "Submission rejected by validation"
                );
                state.violations = report.violations.clone();
                return SubmitOutcome::Rejected(report);
            }

            state.violations.clear();
            state.in_progress = true;
            NewSchool::from(&state.draft)
        };

        // Simulated pre-append latency; purely UX pacing.
        tokio::time::sleep(self.pacing.submit_delay).await;

        match self.store.add_school(new).await {
            Ok(school) => {
                tracing::info!(school_id = %school.id, name = %school.name, "School registered");
                self.notifier.notify_success(SUBMIT_SUCCESS_MESSAGE);

                let mut state = self.state();
                state.draft.clear();
                state.redirect_task = Some(self.schedule_redirect());
                state.in_progress = false;
                SubmitOutcome::Saved(school)
            }
            Err(e) => {
                tracing::error!(error = %e, "Store append failed");
                self.notifier.notify_error(SUBMIT_FAILURE_MESSAGE);

                self.state().in_progress = false;
                SubmitOutcome::StoreFailed(e)
            }
        }
    }

    /// Spawn the delayed redirect to the listing view.
    ///
    /// The task owns only its navigator handle, so it cannot conflict with
    /// form state while it waits.
    fn schedule_redirect(&self) -> JoinHandle<()> {
        let navigator = Arc::clone(&self.navigator);
        let delay = self.pacing.redirect_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            navigator.go_to(ROUTE_SCHOOL_LIST);
        })
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().expect("form state mutex poisoned")
    }
}
