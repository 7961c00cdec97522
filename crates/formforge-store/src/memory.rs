//! In-memory reference backend.

use chrono::Utc;
use formforge_core::ids::share_token;
use formforge_core::{FormForgeError, FormForgeResult};
use tokio::sync::RwLock;

use crate::models::{Form, FormStats, FormSubmissionRecord, UserId};
use crate::store::FormStore;

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    forms: Vec<Form>,
    submissions: Vec<FormSubmissionRecord>,
}

/// Stores everything behind one `RwLock`. Counter increments run under the
/// write lock, so a visit or submission is never lost to interleaving.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn owned_form<'a>(inner: &'a mut Inner, id: u64, owner_id: &UserId) -> FormForgeResult<&'a mut Form> {
    inner
        .forms
        .iter_mut()
        .find(|form| form.id == id && form.owner_id == *owner_id)
        .ok_or_else(|| FormForgeError::NotFound(format!("form {id} does not exist")))
}

#[async_trait::async_trait]
impl FormStore for MemoryStore {
    async fn create_form(
        &self,
        owner_id: &UserId,
        name: &str,
        description: &str,
    ) -> FormForgeResult<Form> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let form = Form {
            id: inner.next_id,
            owner_id: owner_id.clone(),
            name: name.to_string(),
            description: description.to_string(),
            content: None,
            published: false,
            share_token: share_token(),
            visits: 0,
            submissions: 0,
            created_at: Utc::now(),
        };
        inner.forms.push(form.clone());
        Ok(form)
    }

    async fn get_forms(&self, owner_id: &UserId) -> FormForgeResult<Vec<Form>> {
        let inner = self.inner.read().await;
        let mut forms: Vec<Form> = inner
            .forms
            .iter()
            .filter(|form| form.owner_id == *owner_id)
            .cloned()
            .collect();
        forms.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(forms)
    }

    async fn get_form_by_id(&self, id: u64, owner_id: &UserId) -> FormForgeResult<Option<Form>> {
        let inner = self.inner.read().await;
        Ok(inner
            .forms
            .iter()
            .find(|form| form.id == id && form.owner_id == *owner_id)
            .cloned())
    }

    async fn update_form_content(
        &self,
        id: u64,
        owner_id: &UserId,
        content: &str,
    ) -> FormForgeResult<Form> {
        let mut inner = self.inner.write().await;
        let form = owned_form(&mut inner, id, owner_id)?;
        form.content = Some(content.to_string());
        Ok(form.clone())
    }

    async fn publish_form(&self, id: u64, owner_id: &UserId) -> FormForgeResult<Form> {
        let mut inner = self.inner.write().await;
        let form = owned_form(&mut inner, id, owner_id)?;
        form.published = true;
        Ok(form.clone())
    }

    async fn get_form_content_by_share_token(
        &self,
        share_token: &str,
    ) -> FormForgeResult<Option<String>> {
        let mut inner = self.inner.write().await;
        let Some(form) = inner
            .forms
            .iter_mut()
            .find(|form| form.share_token == share_token)
        else {
            return Ok(None);
        };
        form.visits += 1;
        Ok(form.content.clone())
    }

    async fn submit_form(
        &self,
        share_token: &str,
        submission: &str,
    ) -> FormForgeResult<FormSubmissionRecord> {
        let mut inner = self.inner.write().await;
        let form = inner
            .forms
            .iter_mut()
            .find(|form| form.share_token == share_token && form.published)
            .ok_or_else(|| {
                FormForgeError::NotFound("no published form for that share token".to_string())
            })?;
        form.submissions += 1;
        let record = FormSubmissionRecord {
            form_id: form.id,
            content: submission.to_string(),
            created_at: Utc::now(),
        };
        inner.submissions.push(record.clone());
        Ok(record)
    }

    async fn get_submissions(
        &self,
        id: u64,
        owner_id: &UserId,
    ) -> FormForgeResult<Vec<FormSubmissionRecord>> {
        let inner = self.inner.read().await;
        if !inner
            .forms
            .iter()
            .any(|form| form.id == id && form.owner_id == *owner_id)
        {
            return Err(FormForgeError::NotFound(format!("form {id} does not exist")));
        }
        Ok(inner
            .submissions
            .iter()
            .filter(|record| record.form_id == id)
            .cloned()
            .collect())
    }

    async fn delete_form(&self, id: u64, owner_id: &UserId) -> FormForgeResult<()> {
        let mut inner = self.inner.write().await;
        owned_form(&mut inner, id, owner_id)?;
        inner.forms.retain(|form| form.id != id);
        inner.submissions.retain(|record| record.form_id != id);
        Ok(())
    }

    async fn get_form_stats(&self, owner_id: &UserId) -> FormForgeResult<FormStats> {
        let inner = self.inner.read().await;
        let (visits, submissions) = inner
            .forms
            .iter()
            .filter(|form| form.owner_id == *owner_id)
            .fold((0, 0), |(visits, submissions), form| {
                (visits + form.visits, submissions + form.submissions)
            });
        Ok(FormStats::from_counters(visits, submissions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ownership_scopes_lookups() {
        let store = MemoryStore::new();
        let alice = UserId::from("alice");
        let mallory = UserId::from("mallory");
        let form = store.create_form(&alice, "Survey", "").await.unwrap();

        assert!(store.get_form_by_id(form.id, &alice).await.unwrap().is_some());
        // Another owner sees nothing, same as a missing id.
        assert!(store
            .get_form_by_id(form.id, &mallory)
            .await
            .unwrap()
            .is_none());
        assert!(matches!(
            store.update_form_content(form.id, &mallory, "[]").await,
            Err(FormForgeError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_visit_counter_increments_on_content_lookup() {
        let store = MemoryStore::new();
        let owner = UserId::from("alice");
        let form = store.create_form(&owner, "Survey", "").await.unwrap();
        store
            .update_form_content(form.id, &owner, "[]")
            .await
            .unwrap();

        for _ in 0..3 {
            store
                .get_form_content_by_share_token(&form.share_token)
                .await
                .unwrap();
        }
        let reloaded = store.get_form_by_id(form.id, &owner).await.unwrap().unwrap();
        assert_eq!(reloaded.visits, 3);
    }

    #[tokio::test]
    async fn test_submit_requires_published() {
        let store = MemoryStore::new();
        let owner = UserId::from("alice");
        let form = store.create_form(&owner, "Survey", "").await.unwrap();

        assert!(matches!(
            store.submit_form(&form.share_token, "{}").await,
            Err(FormForgeError::NotFound(_))
        ));

        store.publish_form(form.id, &owner).await.unwrap();
        let record = store.submit_form(&form.share_token, "{}").await.unwrap();
        assert_eq!(record.form_id, form.id);
        let reloaded = store.get_form_by_id(form.id, &owner).await.unwrap().unwrap();
        assert_eq!(reloaded.submissions, 1);
    }

    #[tokio::test]
    async fn test_delete_removes_form_and_submissions() {
        let store = MemoryStore::new();
        let owner = UserId::from("alice");
        let form = store.create_form(&owner, "Survey", "").await.unwrap();
        store.publish_form(form.id, &owner).await.unwrap();
        store.submit_form(&form.share_token, "{}").await.unwrap();

        store.delete_form(form.id, &owner).await.unwrap();
        assert!(store.get_form_by_id(form.id, &owner).await.unwrap().is_none());
        assert!(matches!(
            store.get_submissions(form.id, &owner).await,
            Err(FormForgeError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_stats_aggregate_across_owner_forms() {
        let store = MemoryStore::new();
        let owner = UserId::from("alice");
        let other = UserId::from("bob");
        let a = store.create_form(&owner, "A", "").await.unwrap();
        let b = store.create_form(&owner, "B", "").await.unwrap();
        let c = store.create_form(&other, "C", "").await.unwrap();
        for form in [&a, &b, &c] {
            store
                .get_form_content_by_share_token(&form.share_token)
                .await
                .unwrap();
        }
        let stats = store.get_form_stats(&owner).await.unwrap();
        assert_eq!(stats.visits, 2);
        assert_eq!(stats.submissions, 0);
    }
}
