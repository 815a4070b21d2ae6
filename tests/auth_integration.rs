//! End-to-end auth lifecycle over the file-backed secure store.

use std::sync::Arc;

use waypoint_workers::adapters::{FileSecureStore, MockIdentityProvider};
use waypoint_workers::domain::SignInMethod;
use waypoint_workers::ports::{
    AuthApi, FederatedCallback, ProviderSignInMethod, SecureStore,
};
use waypoint_workers::status::StatusReporter;
use waypoint_workers::workers::AuthWorker;

async fn worker_over(
    provider: Arc<MockIdentityProvider>,
    dir: &std::path::Path,
) -> AuthWorker {
    AuthWorker::load(
        provider,
        Arc::new(FileSecureStore::new(dir)) as Arc<dyn SecureStore>,
        StatusReporter::disabled(),
    )
    .await
}

#[tokio::test]
async fn password_session_survives_a_worker_restart() {
    let dir = tempfile::tempdir().unwrap();
    let provider =
        Arc::new(MockIdentityProvider::new().with_password_user("ada@example.com", "pw", "uid-1"));

    let worker = worker_over(Arc::clone(&provider), dir.path()).await;
    let data = worker.sign_in("ada@example.com", "pw").await.unwrap();
    assert_eq!(data.method, SignInMethod::Password);
    drop(worker);

    // A fresh worker over the same directory picks the session back up.
    let restarted = worker_over(provider, dir.path()).await;
    let restored = restarted.access_data().await;
    assert!(restored.is_signed_in());
    assert_eq!(restored, data);
}

#[tokio::test]
async fn sign_out_clears_the_persisted_session() {
    let dir = tempfile::tempdir().unwrap();
    let provider =
        Arc::new(MockIdentityProvider::new().with_password_user("ada@example.com", "pw", "uid-1"));

    let worker = worker_over(Arc::clone(&provider), dir.path()).await;
    worker.sign_in("ada@example.com", "pw").await.unwrap();
    worker.sign_out().await.unwrap();
    drop(worker);

    let restarted = worker_over(provider, dir.path()).await;
    assert!(!restarted.access_data().await.is_signed_in());
}

#[tokio::test]
async fn federated_sign_in_links_onto_an_existing_password_account() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(
        MockIdentityProvider::new()
            .with_password_user("ada@example.com", "pw", "uid-1")
            .with_sign_in_methods("ada@example.com", vec![ProviderSignInMethod::Password]),
    );

    let worker = worker_over(Arc::clone(&provider), dir.path()).await;
    let challenge = worker
        .begin_federated_sign_in("ada@example.com", "pw")
        .await
        .unwrap();
    let data = worker
        .complete_federated_sign_in(
            challenge.handle,
            FederatedCallback::Authorized {
                identity_token: Some(b"identity-token".to_vec()),
                email: Some("ada@example.com".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(data.method, SignInMethod::Federated);
    // Same provider user as the password account, not a forked one.
    assert_eq!(data.provider_user_id, "uid-1");
    assert_eq!(provider.linked_credentials(), vec!["apple.com"]);
}

#[tokio::test]
async fn a_flow_handle_is_consumed_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(MockIdentityProvider::new().with_federated_user("uid-fed"));

    let worker = worker_over(provider, dir.path()).await;
    let challenge = worker
        .begin_federated_sign_in("ada@example.com", "pw")
        .await
        .unwrap();
    let callback = FederatedCallback::Authorized {
        identity_token: Some(b"identity-token".to_vec()),
        email: None,
    };

    worker
        .complete_federated_sign_in(challenge.handle, callback.clone())
        .await
        .unwrap();
    // Replaying the same handle must fail without reaching the provider.
    worker
        .complete_federated_sign_in(challenge.handle, callback)
        .await
        .unwrap_err();
}
