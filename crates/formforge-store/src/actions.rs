//! Owner-scoped entry points over a [`FormStore`].
//!
//! Every owner-facing operation resolves identity first: a missing caller
//! identity fails uniformly with [`FormForgeError::Unauthorized`] before
//! any store access, so "not logged in" can never leak whether data
//! exists. Payload and publish preconditions are also enforced here, never
//! in the backends.

use std::collections::HashMap;

use formforge_core::logging::action_span;
use formforge_core::{FormForgeError, FormForgeResult, ValidationError};
use formforge_elements::parse_content;
use tracing::Instrument;

use crate::models::{Form, FormStats, FormSubmissionRecord, UserId};
use crate::store::FormStore;

/// The application-facing actions layer.
pub struct FormActions<S: FormStore> {
    store: S,
}

impl<S: FormStore> FormActions<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Direct access to the backend, for tests and migration tooling.
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn identity<'a>(user: Option<&'a UserId>) -> FormForgeResult<&'a UserId> {
        user.ok_or_else(|| FormForgeError::Unauthorized("user not found".to_string()))
    }

    /// Creates a form after validating the payload. The name must be
    /// non-empty; the description may be blank.
    pub async fn create_form(
        &self,
        user: Option<&UserId>,
        name: &str,
        description: &str,
    ) -> FormForgeResult<Form> {
        let owner = Self::identity(user)?;

        if name.trim().is_empty() {
            let mut attribute_errors = HashMap::new();
            attribute_errors.insert(
                "name".to_string(),
                vec![ValidationError::new("Name is required.", "required")],
            );
            return Err(FormForgeError::Validation(
                ValidationError::with_attribute_errors(attribute_errors),
            ));
        }

        async {
            let form = self.store.create_form(owner, name, description).await?;
            tracing::info!(form_id = form.id, name, "form created");
            Ok(form)
        }
        .instrument(action_span("create_form", &owner.0))
        .await
    }

    /// The owner's forms, newest first.
    pub async fn get_forms(&self, user: Option<&UserId>) -> FormForgeResult<Vec<Form>> {
        let owner = Self::identity(user)?;
        self.store.get_forms(owner).await
    }

    /// A single form by id.
    ///
    /// # Errors
    ///
    /// Returns [`FormForgeError::NotFound`] when the form is absent or
    /// owned by someone else.
    pub async fn get_form_by_id(&self, user: Option<&UserId>, id: u64) -> FormForgeResult<Form> {
        let owner = Self::identity(user)?;
        self.store
            .get_form_by_id(id, owner)
            .await?
            .ok_or_else(|| FormForgeError::NotFound(format!("form {id} does not exist")))
    }

    /// Saves the designer's serialized content. The content must parse as
    /// an element array but may be empty; publishing is where emptiness is
    /// rejected. Saving is allowed after publish, last writer wins.
    pub async fn update_form_content(
        &self,
        user: Option<&UserId>,
        id: u64,
        content: &str,
    ) -> FormForgeResult<Form> {
        let owner = Self::identity(user)?;
        parse_content(content)?;

        async {
            let form = self.store.update_form_content(id, owner, content).await?;
            tracing::debug!(form_id = form.id, "form content saved");
            Ok(form)
        }
        .instrument(action_span("update_form_content", &owner.0))
        .await
    }

    /// Publishes the form. The saved content must deserialize to a
    /// non-empty element sequence; republishing an already-published form
    /// is a no-op that succeeds.
    pub async fn publish_form(&self, user: Option<&UserId>, id: u64) -> FormForgeResult<Form> {
        let owner = Self::identity(user)?;

        async {
            let form = self
                .store
                .get_form_by_id(id, owner)
                .await?
                .ok_or_else(|| FormForgeError::NotFound(format!("form {id} does not exist")))?;
            let elements = match form.content.as_deref() {
                Some(content) => parse_content(content)?,
                None => Vec::new(),
            };
            if elements.is_empty() {
                return Err(FormForgeError::PublishPrecondition(
                    "form has no elements".to_string(),
                ));
            }

            let form = self.store.publish_form(id, owner).await?;
            tracing::info!(form_id = form.id, "form published");
            Ok(form)
        }
        .instrument(action_span("publish_form", &owner.0))
        .await
    }

    /// Public path: resolves a share token to renderable content and
    /// counts the visit. Takes no identity.
    pub async fn visit_form(&self, share_token: &str) -> FormForgeResult<String> {
        self.store
            .get_form_content_by_share_token(share_token)
            .await?
            .ok_or_else(|| FormForgeError::NotFound("unknown share token".to_string()))
    }

    /// Public path: stores a visitor submission against a published form.
    /// Takes no identity.
    pub async fn submit_form(
        &self,
        share_token: &str,
        submission: &str,
    ) -> FormForgeResult<FormSubmissionRecord> {
        let record = self.store.submit_form(share_token, submission).await?;
        tracing::info!(form_id = record.form_id, "submission stored");
        Ok(record)
    }

    /// The form's submissions, oldest first.
    pub async fn get_submissions(
        &self,
        user: Option<&UserId>,
        id: u64,
    ) -> FormForgeResult<Vec<FormSubmissionRecord>> {
        let owner = Self::identity(user)?;
        self.store.get_submissions(id, owner).await
    }

    /// Deletes the form and its submissions.
    pub async fn delete_form(&self, user: Option<&UserId>, id: u64) -> FormForgeResult<()> {
        let owner = Self::identity(user)?;

        async {
            self.store.delete_form(id, owner).await?;
            tracing::info!(form_id = id, "form deleted");
            Ok(())
        }
        .instrument(action_span("delete_form", &owner.0))
        .await
    }

    /// Traffic aggregates across the owner's forms.
    pub async fn get_form_stats(&self, user: Option<&UserId>) -> FormForgeResult<FormStats> {
        let owner = Self::identity(user)?;
        self.store.get_form_stats(owner).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn actions() -> FormActions<MemoryStore> {
        FormActions::new(MemoryStore::new())
    }

    #[tokio::test]
    async fn test_missing_identity_is_unauthorized_everywhere() {
        let actions = actions();
        assert!(matches!(
            actions.create_form(None, "Survey", "").await,
            Err(FormForgeError::Unauthorized(_))
        ));
        assert!(matches!(
            actions.get_forms(None).await,
            Err(FormForgeError::Unauthorized(_))
        ));
        assert!(matches!(
            actions.publish_form(None, 1).await,
            Err(FormForgeError::Unauthorized(_))
        ));
        assert!(matches!(
            actions.get_form_stats(None).await,
            Err(FormForgeError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let actions = actions();
        let owner = UserId::from("alice");
        let err = actions.create_form(Some(&owner), "  ", "").await.unwrap_err();
        match err {
            FormForgeError::Validation(validation) => {
                assert!(validation.attribute_errors.contains_key("name"));
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_update_rejects_malformed_content() {
        let actions = actions();
        let owner = UserId::from("alice");
        let form = actions.create_form(Some(&owner), "Survey", "").await.unwrap();
        assert!(matches!(
            actions
                .update_form_content(Some(&owner), form.id, "not json")
                .await,
            Err(FormForgeError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn test_publish_requires_non_empty_content() {
        let actions = actions();
        let owner = UserId::from("alice");
        let form = actions.create_form(Some(&owner), "Survey", "").await.unwrap();

        // Never saved at all.
        assert!(matches!(
            actions.publish_form(Some(&owner), form.id).await,
            Err(FormForgeError::PublishPrecondition(_))
        ));

        // Saved, but empty.
        actions
            .update_form_content(Some(&owner), form.id, "[]")
            .await
            .unwrap();
        assert!(matches!(
            actions.publish_form(Some(&owner), form.id).await,
            Err(FormForgeError::PublishPrecondition(_))
        ));
    }
}
