//! Full lifecycle tests driving the actions layer against the in-memory
//! backend, from form creation through visitor submission.

use formforge_core::FormForgeError;
use formforge_elements::{ElementAttributes, ElementInstance, ElementKind};
use formforge_runtime::SubmissionRuntime;
use formforge_store::{FormActions, MemoryStore, UserId};

fn actions() -> FormActions<MemoryStore> {
    FormActions::new(MemoryStore::new())
}

fn required_text(id: &str) -> ElementInstance {
    let mut attributes = ElementAttributes::defaults_for(ElementKind::TextField);
    if let ElementAttributes::TextField(a) = &mut attributes {
        a.label = "Your name".to_string();
        a.required = true;
    }
    ElementInstance::new(id.to_string(), attributes)
}

#[tokio::test]
async fn test_created_form_starts_unpublished_with_no_content() {
    let actions = actions();
    let owner = UserId::from("alice");

    let created = actions
        .create_form(Some(&owner), "Survey", "Customer feedback")
        .await
        .unwrap();
    let fetched = actions
        .get_form_by_id(Some(&owner), created.id)
        .await
        .unwrap();

    assert_eq!(fetched.name, "Survey");
    assert!(!fetched.published);
    assert!(fetched.content.is_none());
    assert_eq!(fetched.visits, 0);
    assert_eq!(fetched.submissions, 0);
}

#[tokio::test]
async fn test_publish_checks_structure_not_value_completeness() {
    let actions = actions();
    let owner = UserId::from("alice");
    let form = actions.create_form(Some(&owner), "Survey", "").await.unwrap();

    // A single required field that nobody has ever filled in. Publishing
    // only checks that the element sequence is non-empty.
    let content =
        formforge_elements::serialize_content(&[required_text("f1")]).unwrap();
    actions
        .update_form_content(Some(&owner), form.id, &content)
        .await
        .unwrap();

    let published = actions.publish_form(Some(&owner), form.id).await.unwrap();
    assert!(published.published);
}

#[tokio::test]
async fn test_publish_is_idempotent() {
    let actions = actions();
    let owner = UserId::from("alice");
    let form = actions.create_form(Some(&owner), "Survey", "").await.unwrap();
    let content =
        formforge_elements::serialize_content(&[required_text("f1")]).unwrap();
    actions
        .update_form_content(Some(&owner), form.id, &content)
        .await
        .unwrap();

    actions.publish_form(Some(&owner), form.id).await.unwrap();
    let again = actions.publish_form(Some(&owner), form.id).await.unwrap();
    assert!(again.published);
}

#[tokio::test]
async fn test_visitor_flow_validates_per_commit() {
    let actions = actions();
    let owner = UserId::from("alice");
    let form = actions.create_form(Some(&owner), "Survey", "").await.unwrap();
    let content =
        formforge_elements::serialize_content(&[required_text("f1")]).unwrap();
    actions
        .update_form_content(Some(&owner), form.id, &content)
        .await
        .unwrap();
    actions.publish_form(Some(&owner), form.id).await.unwrap();

    let served = actions.visit_form(&form.share_token).await.unwrap();
    let mut runtime = SubmissionRuntime::from_content(&served).unwrap();

    // Empty commit fails and stays out of the mapping.
    assert_eq!(runtime.commit_value("f1", ""), Ok(false));
    assert_eq!(runtime.invalid_fields(), ["f1"]);

    // Corrected commit enters the mapping.
    assert_eq!(runtime.commit_value("f1", "answer"), Ok(true));
    let submission = runtime.into_submission().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&submission).unwrap();
    assert_eq!(parsed, serde_json::json!({ "f1": "answer" }));

    let record = actions.submit_form(&form.share_token, &submission).await.unwrap();
    assert_eq!(record.form_id, form.id);

    let stored = actions
        .get_submissions(Some(&owner), form.id)
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].content, submission);
}

#[tokio::test]
async fn test_repeat_visits_increment_counter_and_serve_same_content() {
    let actions = actions();
    let owner = UserId::from("alice");
    let form = actions.create_form(Some(&owner), "Survey", "").await.unwrap();
    let content =
        formforge_elements::serialize_content(&[required_text("f1")]).unwrap();
    actions
        .update_form_content(Some(&owner), form.id, &content)
        .await
        .unwrap();
    actions.publish_form(Some(&owner), form.id).await.unwrap();

    let first = actions.visit_form(&form.share_token).await.unwrap();
    let second = actions.visit_form(&form.share_token).await.unwrap();
    assert_eq!(first, second);

    let reloaded = actions
        .get_form_by_id(Some(&owner), form.id)
        .await
        .unwrap();
    assert_eq!(reloaded.visits, 2);

    let stats = actions.get_form_stats(Some(&owner)).await.unwrap();
    assert_eq!(stats.visits, 2);
    assert_eq!(stats.submissions, 0);
    assert!((stats.bounce_rate - 100.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_forms_listing_is_newest_first_and_owner_scoped() {
    let actions = actions();
    let alice = UserId::from("alice");
    let bob = UserId::from("bob");

    let first = actions.create_form(Some(&alice), "First", "").await.unwrap();
    let second = actions.create_form(Some(&alice), "Second", "").await.unwrap();
    actions.create_form(Some(&bob), "Other", "").await.unwrap();

    let forms = actions.get_forms(Some(&alice)).await.unwrap();
    let ids: Vec<u64> = forms.iter().map(|form| form.id).collect();
    assert_eq!(ids, [second.id, first.id]);
}

#[tokio::test]
async fn test_deleted_form_disappears_everywhere() {
    let actions = actions();
    let owner = UserId::from("alice");
    let form = actions.create_form(Some(&owner), "Survey", "").await.unwrap();

    actions.delete_form(Some(&owner), form.id).await.unwrap();
    assert!(matches!(
        actions.get_form_by_id(Some(&owner), form.id).await,
        Err(FormForgeError::NotFound(_))
    ));
    assert!(matches!(
        actions.visit_form(&form.share_token).await,
        Err(FormForgeError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_draft_edits_after_publish_take_effect() {
    let actions = actions();
    let owner = UserId::from("alice");
    let form = actions.create_form(Some(&owner), "Survey", "").await.unwrap();
    let content =
        formforge_elements::serialize_content(&[required_text("f1")]).unwrap();
    actions
        .update_form_content(Some(&owner), form.id, &content)
        .await
        .unwrap();
    actions.publish_form(Some(&owner), form.id).await.unwrap();

    // Last writer wins even while published.
    let revised =
        formforge_elements::serialize_content(&[required_text("f1"), required_text("f2")])
            .unwrap();
    actions
        .update_form_content(Some(&owner), form.id, &revised)
        .await
        .unwrap();

    let served = actions.visit_form(&form.share_token).await.unwrap();
    assert_eq!(served, revised);
}
