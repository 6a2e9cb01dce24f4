use crate::client::{ApiError, TagApi};
use crate::models::{NewTag, TagDraft};
use crate::services::cache::{QueryCache, QueryKey};
use crate::services::dialog::DialogHandle;
use crate::services::validation::{validate_draft, FieldErrors};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Invalid tag: {0}")]
    Validation(FieldErrors),

    #[error("A submission is already in progress")]
    InFlight,

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub tag: NewTag,
}

/// The create-tag form: a title, its derived slug, and the submit action.
pub struct TagForm<A> {
    api: Arc<A>,
    cache: QueryCache,
    dialog: DialogHandle,
    draft: TagDraft,
    submitting: AtomicBool,
}

impl<A: TagApi> TagForm<A> {
    pub fn new(api: Arc<A>, cache: QueryCache, dialog: DialogHandle) -> Self {
        Self {
            api,
            cache,
            dialog,
            draft: TagDraft::default(),
            submitting: AtomicBool::new(false),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn title(&self) -> &str {
        &self.draft.title
    }

    /// Read-only: recomputed from the title on every call.
    pub fn slug(&self) -> String {
        self.draft.slug()
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        validate_draft(&self.draft)
    }

    pub fn state(&self) -> SubmitState {
        if self.is_submitting() {
            SubmitState::Submitting
        } else {
            SubmitState::Idle
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Validate the draft, create the tag remotely, and on success mark the
    /// tag list stale.
    ///
    /// Only one submission runs at a time; a second call while one is
    /// outstanding returns [`SubmitError::InFlight`]. Failures are handed
    /// back as-is, with no retry and no invalidation.
    pub async fn submit(&self) -> Result<SubmitOutcome, SubmitError> {
        let _guard = SubmittingGuard::acquire(&self.submitting).ok_or(SubmitError::InFlight)?;

        self.validate().map_err(SubmitError::Validation)?;

        let tag = NewTag::from(&self.draft);
        tracing::info!("Creating tag '{}' ({})", tag.title(), tag.slug());

        if let Err(e) = self.api.create_tag(&tag).await {
            tracing::warn!("Failed to create tag '{}': {}", tag.title(), e);
            return Err(e.into());
        }

        self.cache.invalidate(&QueryKey::tags());
        Ok(SubmitOutcome { tag })
    }

    /// Discard the draft and close the dialog.
    pub fn cancel(self) {
        tracing::debug!("Create-tag form cancelled");
        self.dialog.close();
    }
}

/// Holds the form in `Submitting` until dropped, including when the submit
/// future is dropped mid-request.
struct SubmittingGuard<'a>(&'a AtomicBool);

impl<'a> SubmittingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
