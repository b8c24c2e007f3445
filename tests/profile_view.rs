mod support;

use broker_admin::api::models::{ImagePayload, RecordId, UserProfile};
use broker_admin::role::{current_role, store_role, RoleCipher, RoleGate, SUPERADMIN};
use broker_admin::storage::LocalStorage;
use broker_admin::view::{LoadState, Outcome, ProfilePictureView};
use broker_admin::ActionError;
use std::sync::Arc;
use support::{gateway, user, Call, Fail, Fake, ScriptedPrompter};
use tokio::sync::Notify;

fn photo() -> ImagePayload {
    ImagePayload::new("me.png", "image/png", vec![0x89, b'P', b'N', b'G'])
}

fn editor(
    api: &Fake<UserProfile>,
    prompter: &ScriptedPrompter,
    role: Option<&str>,
) -> ProfilePictureView<Fake<UserProfile>, ScriptedPrompter> {
    ProfilePictureView::new(
        RecordId::from(7),
        api.clone(),
        gateway(prompter),
        role.map(str::to_string),
    )
}

#[tokio::test]
async fn mount_fetches_the_user() {
    let api = Fake::new(vec![user(7, Some("old.png"))]);
    let prompter = ScriptedPrompter::accepting();
    let view = editor(&api, &prompter, Some(SUPERADMIN));

    assert_eq!(view.mount().await.unwrap(), Outcome::Done);
    assert_eq!(view.load_state(), LoadState::Loaded);
    assert_eq!(view.user().unwrap().profile.as_deref(), Some("old.png"));
    assert_eq!(api.calls(), vec![Call::GetUser("7".into())]);
}

#[tokio::test]
async fn non_superadmin_never_reaches_the_network() {
    let api = Fake::new(vec![user(7, Some("old.png"))]);
    let prompter = ScriptedPrompter::accepting();
    let view = editor(&api, &prompter, Some("admin"));
    view.mount().await.unwrap();
    view.select_image(photo());

    let err = view.submit().await.unwrap_err();

    assert!(matches!(err, ActionError::Authorization(_)));
    assert_eq!(api.calls(), vec![Call::GetUser("7".into())]);
    let errors = prompter.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].title, "You are not allowed to make this change");
    assert!(view.selected_image().is_some());
}

#[tokio::test]
async fn missing_role_is_refused_too() {
    let api = Fake::new(vec![user(7, None)]);
    let prompter = ScriptedPrompter::accepting();
    let view = editor(&api, &prompter, None);
    view.mount().await.unwrap();
    view.select_image(photo());

    assert!(matches!(view.submit().await, Err(ActionError::Authorization(_))));
    assert_eq!(api.calls().len(), 1);
}

#[tokio::test]
async fn superadmin_upload_sends_old_image_and_refreshes() {
    let api = Fake::new(vec![user(7, Some("old.png"))]);
    let prompter = ScriptedPrompter::new(&[true]);
    let view = editor(&api, &prompter, Some(SUPERADMIN));
    view.mount().await.unwrap();
    view.select_image(photo());

    let outcome = view.submit().await.unwrap();

    assert_eq!(outcome, Outcome::Done);
    assert_eq!(
        api.calls(),
        vec![
            Call::GetUser("7".into()),
            Call::UpdateImage("7".into(), "me.png".into(), "old.png".into()),
            Call::GetUser("7".into()),
        ]
    );
    assert_eq!(prompter.asked()[0].title, "Apply this change now?");
    assert_eq!(prompter.successes()[0].title, "Updated!");
    assert!(view.selected_image().is_none());
    assert!(!view.is_submitting());
    assert_eq!(view.user().unwrap().profile.as_deref(), Some("me.png"));
}

#[tokio::test]
async fn user_without_picture_sends_empty_old_image() {
    let api = Fake::new(vec![user(7, None)]);
    let prompter = ScriptedPrompter::accepting();
    let view = editor(&api, &prompter, Some(SUPERADMIN));
    view.mount().await.unwrap();
    view.select_image(photo());

    view.submit().await.unwrap();
    assert!(api
        .calls()
        .contains(&Call::UpdateImage("7".into(), "me.png".into(), String::new())));
}

#[tokio::test]
async fn submit_without_image_is_a_validation_error() {
    let api = Fake::new(vec![user(7, None)]);
    let prompter = ScriptedPrompter::accepting();
    let view = editor(&api, &prompter, Some(SUPERADMIN));
    view.mount().await.unwrap();

    let err = view.submit().await.unwrap_err();

    assert!(matches!(err, ActionError::Validation(_)));
    assert!(prompter.asked().is_empty());
    assert_eq!(prompter.errors()[0].text.as_deref(), Some("Please choose an image"));
    assert_eq!(api.calls().len(), 1);

    view.select_image(ImagePayload::new("empty.png", "image/png", Vec::new()));
    assert!(matches!(view.submit().await, Err(ActionError::Validation(_))));
}

#[tokio::test]
async fn declined_confirmation_keeps_selection() {
    let api = Fake::new(vec![user(7, None)]);
    let prompter = ScriptedPrompter::new(&[false]);
    let view = editor(&api, &prompter, Some(SUPERADMIN));
    view.mount().await.unwrap();
    view.select_image(photo());

    assert_eq!(view.submit().await.unwrap(), Outcome::Declined);
    assert_eq!(api.calls().len(), 1);
    assert!(view.selected_image().is_some());
    assert!(prompter.notices().is_empty());
}

#[tokio::test]
async fn server_refusal_is_an_authorization_error() {
    let api = Fake::new(vec![user(7, Some("old.png"))]);
    api.fail_mutations(Fail::Always(403));
    let prompter = ScriptedPrompter::accepting();
    let view = editor(&api, &prompter, Some(SUPERADMIN));
    view.mount().await.unwrap();
    view.select_image(photo());

    let err = view.submit().await.unwrap_err();

    assert!(matches!(err, ActionError::Authorization(_)));
    assert_eq!(prompter.errors()[0].title, "You are not allowed to make this change");
    assert!(!view.is_submitting());
}

#[tokio::test]
async fn other_upload_failures_report_update_failed() {
    let api = Fake::new(vec![user(7, Some("old.png"))]);
    api.fail_mutations(Fail::Always(500));
    let prompter = ScriptedPrompter::accepting();
    let view = editor(&api, &prompter, Some(SUPERADMIN));
    view.mount().await.unwrap();
    view.select_image(photo());

    assert!(matches!(view.submit().await, Err(ActionError::Network(_))));
    assert_eq!(prompter.errors()[0].title, "Update failed");
}

#[tokio::test]
async fn custom_gate_admits_its_role() {
    let api = Fake::new(vec![user(7, None)]);
    let prompter = ScriptedPrompter::accepting();
    let view = editor(&api, &prompter, Some("editor")).with_gate(RoleGate::new("editor"));
    view.mount().await.unwrap();
    view.select_image(photo());

    assert_eq!(view.submit().await.unwrap(), Outcome::Done);
}

#[tokio::test]
async fn role_sealed_in_local_storage_unlocks_upload() {
    let storage = LocalStorage::open_in_memory().unwrap();
    let cipher = RoleCipher::new("s3cret");
    store_role(&storage, &cipher, SUPERADMIN).unwrap();

    let api = Fake::new(vec![user(7, None)]);
    let prompter = ScriptedPrompter::accepting();
    let role = current_role(&storage, &cipher);
    let view = ProfilePictureView::new(RecordId::from(7), api.clone(), gateway(&prompter), role);
    view.mount().await.unwrap();
    view.select_image(photo());

    assert_eq!(view.submit().await.unwrap(), Outcome::Done);

    // A different secret cannot unseal the stored role.
    assert_eq!(current_role(&storage, &RoleCipher::new("other")), None);
}

#[tokio::test]
async fn user_answered_after_unmount_is_dropped() {
    let api = Fake::new(vec![user(7, Some("old.png"))]);
    let release = Arc::new(Notify::new());
    api.hold_list(release.clone());
    let prompter = ScriptedPrompter::accepting();
    let view = editor(&api, &prompter, Some(SUPERADMIN));

    let leave = async {
        tokio::task::yield_now().await;
        view.unmount();
        release.notify_one();
    };
    let (outcome, _) = tokio::join!(view.mount(), leave);

    assert_eq!(outcome.unwrap(), Outcome::Unmounted);
    assert!(view.user().is_none());
    assert!(prompter.notices().is_empty());
}

#[tokio::test]
async fn upload_answered_after_unmount_changes_nothing() {
    let api = Fake::new(vec![user(7, Some("old.png"))]);
    let prompter = ScriptedPrompter::accepting();
    let view = editor(&api, &prompter, Some(SUPERADMIN));
    view.mount().await.unwrap();
    view.select_image(photo());
    let release = Arc::new(Notify::new());
    api.hold_mutations(release.clone());

    let leave = async {
        tokio::task::yield_now().await;
        assert!(view.is_submitting());
        view.unmount();
        release.notify_one();
    };
    let (outcome, _) = tokio::join!(view.submit(), leave);

    assert_eq!(outcome.unwrap(), Outcome::Unmounted);
    assert_eq!(
        api.calls(),
        vec![
            Call::GetUser("7".into()),
            Call::UpdateImage("7".into(), "me.png".into(), "old.png".into()),
        ]
    );
    assert!(prompter.notices().is_empty());
    assert!(view.selected_image().is_some());
    assert!(!view.is_submitting());
}

#[tokio::test]
async fn second_submit_while_uploading_is_refused() {
    let api = Fake::new(vec![user(7, Some("old.png"))]);
    let prompter = ScriptedPrompter::accepting();
    let view = editor(&api, &prompter, Some(SUPERADMIN));
    view.mount().await.unwrap();
    view.select_image(photo());
    let release = Arc::new(Notify::new());
    api.hold_mutations(release.clone());

    let again = async {
        tokio::task::yield_now().await;
        let second = view.submit().await;
        release.notify_one();
        second
    };
    let (first, second) = tokio::join!(view.submit(), again);

    assert_eq!(first.unwrap(), Outcome::Done);
    assert_eq!(second.unwrap(), Outcome::Busy);
    assert_eq!(prompter.asked().len(), 1);
    let uploads = api
        .calls()
        .into_iter()
        .filter(|c| matches!(c, Call::UpdateImage(..)))
        .count();
    assert_eq!(uploads, 1);
    assert!(!view.is_submitting());
}

#[test]
fn preview_is_a_data_url() {
    let api = Fake::new(vec![user(7, None)]);
    let prompter = ScriptedPrompter::accepting();
    let view = editor(&api, &prompter, None);
    assert!(view.preview_data_url().is_none());

    view.select_image(photo());
    assert_eq!(view.preview_data_url().unwrap(), "data:image/png;base64,iVBORw==");
}
