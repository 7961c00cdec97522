//! The [`FormStore`] trait every storage backend must satisfy.

use formforge_core::FormForgeResult;

use crate::models::{Form, FormStats, FormSubmissionRecord, UserId};

/// The core trait for form storage backends.
///
/// All methods are async because storage is inherently I/O-bound; the
/// in-memory reference backend keeps the same interface. Owner-scoped
/// lookups never reveal whether a form exists under another owner:
/// not-found and not-owned are indistinguishable.
#[async_trait::async_trait]
pub trait FormStore: Send + Sync {
    /// Creates a new unpublished form with a fresh share token and zeroed
    /// counters. Payload validation happens in the actions layer.
    async fn create_form(
        &self,
        owner_id: &UserId,
        name: &str,
        description: &str,
    ) -> FormForgeResult<Form>;

    /// Returns the owner's forms, newest first.
    async fn get_forms(&self, owner_id: &UserId) -> FormForgeResult<Vec<Form>>;

    /// Returns the form with `id` if it belongs to `owner_id`.
    async fn get_form_by_id(&self, id: u64, owner_id: &UserId) -> FormForgeResult<Option<Form>>;

    /// Overwrites the form's saved content. Last writer wins; publishing
    /// does not freeze the draft.
    async fn update_form_content(
        &self,
        id: u64,
        owner_id: &UserId,
        content: &str,
    ) -> FormForgeResult<Form>;

    /// Marks the form published. Idempotent; content preconditions are the
    /// caller's job.
    async fn publish_form(&self, id: u64, owner_id: &UserId) -> FormForgeResult<Form>;

    /// Resolves a share token to the form's content for rendering and
    /// counts the visit. The two happen under one write lock so counters
    /// never drift from the lookup.
    async fn get_form_content_by_share_token(
        &self,
        share_token: &str,
    ) -> FormForgeResult<Option<String>>;

    /// Appends a visitor submission to the published form behind
    /// `share_token` and increments its submission counter.
    async fn submit_form(
        &self,
        share_token: &str,
        submission: &str,
    ) -> FormForgeResult<FormSubmissionRecord>;

    /// Returns the form's submissions, oldest first.
    async fn get_submissions(
        &self,
        id: u64,
        owner_id: &UserId,
    ) -> FormForgeResult<Vec<FormSubmissionRecord>>;

    /// Deletes the form and its submissions.
    async fn delete_form(&self, id: u64, owner_id: &UserId) -> FormForgeResult<()>;

    /// Aggregates traffic counters across all of the owner's forms.
    async fn get_form_stats(&self, owner_id: &UserId) -> FormForgeResult<FormStats>;
}
