use mockito::Server;

use forgecli::manifest::Manifest;
use forgecli::version::error::VersionError;
use forgecli::version::registry::GitTagRegistry;
use forgecli::version::service::VersionService;

fn manifest_for(repository: &str, private: bool) -> Manifest {
    Manifest::from_json(&format!(
        r#"{{
            "name": "app",
            "bin": "app",
            "version": "1.4.0",
            "repository": "{repository}",
            "private": {private}
        }}"#
    ))
    .unwrap()
}

#[tokio::test]
async fn outdated_build_is_detected_end_to_end() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/org/app/tags")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"name": "1.5.0"}]"#)
        .create_async()
        .await;

    let manifest = manifest_for(&format!("{}/org/app", server.url()), false);
    let mut service = VersionService::new(manifest, GitTagRegistry::new());

    assert_eq!(service.current_version(), "1.4.0");
    assert_eq!(service.latest_version().await.unwrap(), "1.5.0");
    assert!(!service.is_latest_version().await.unwrap());

    // Both calls above are served by a single HTTP request.
    mock.assert_async().await;
}

#[tokio::test]
async fn trailing_git_suffix_is_stripped_from_the_repository_url() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/org/app/tags")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"name": "v1.4.0"}]"#)
        .create_async()
        .await;

    let manifest = manifest_for(&format!("{}/org/app.git", server.url()), false);
    let mut service = VersionService::new(manifest, GitTagRegistry::new());

    assert!(service.is_latest_version().await.unwrap());
    mock.assert_async().await;
}

#[tokio::test]
async fn private_repository_never_reaches_the_network() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/org/app/tags")
        .expect(0)
        .create_async()
        .await;

    let manifest = manifest_for(&format!("{}/org/app", server.url()), true);
    let mut service = VersionService::new(manifest, GitTagRegistry::new());

    assert!(matches!(
        service.is_latest_version().await,
        Err(VersionError::PrivateRepository)
    ));
    assert!(matches!(
        service.latest_version().await,
        Err(VersionError::PrivateRepository)
    ));

    mock.assert_async().await;
    assert_eq!(service.cached_latest_version(), None);
    assert_eq!(service.last_checked_at(), None);
}

#[tokio::test]
async fn failed_tag_listing_surfaces_a_typed_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/org/app/tags")
        .with_status(503)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "unavailable"}"#)
        .create_async()
        .await;

    let manifest = manifest_for(&format!("{}/org/app", server.url()), false);
    let mut service = VersionService::new(manifest, GitTagRegistry::new());

    assert!(matches!(
        service.latest_version().await,
        Err(VersionError::UnexpectedStatus(_))
    ));
    mock.assert_async().await;

    // The attempt was made, so the last-checked timestamp is set even though
    // no version was cached.
    assert!(service.last_checked_at().is_some());
    assert_eq!(service.cached_latest_version(), None);
}

#[tokio::test]
async fn release_redirect_path_resolves_the_tag_end_to_end() {
    let mut server = Server::new_async().await;
    let redirect = server
        .mock("GET", "/org/app/releases/latest")
        .with_status(302)
        .with_header(
            "location",
            &format!("{}/org/app/releases/tag/v1.6.0", server.url()),
        )
        .create_async()
        .await;
    let target = server
        .mock("GET", "/org/app/releases/tag/v1.6.0")
        .with_status(200)
        .with_body("release page")
        .create_async()
        .await;

    let manifest = manifest_for(&format!("{}/org/app", server.url()), false);
    let service = VersionService::new(manifest, GitTagRegistry::new());

    assert_eq!(service.latest_release_version().await.unwrap(), "v1.6.0");
    redirect.assert_async().await;
    target.assert_async().await;
}
