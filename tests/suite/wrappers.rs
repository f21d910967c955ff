//! Cross-resource wrapper behavior: the authentication handshake and the
//! envelope contract the pages rely on.

use jobdeck_api::ApiContext;
use jobdeck_types::Credentials;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common;

/// Login, install the token, then hit a private resource with it.
#[tokio::test]
async fn login_token_flows_into_private_requests() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "token": "fresh-token",
                "user": {"id": 1, "name": "User", "email": "user@example.com"}
            }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/private/applications"))
        .and(header("authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [common::application_json(1, "pending")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut ctx = ApiContext::new(&server.uri()).unwrap();
    assert!(!ctx.has_token());

    let credentials = Credentials {
        email: "user@example.com".to_string(),
        password: "hunter2".to_string(),
    };
    let session = jobdeck_api::auth::login(&ctx, &credentials)
        .await
        .unwrap()
        .data
        .expect("session");
    ctx.set_token(session.token);

    let envelope = jobdeck_api::applications::index(&ctx).await.unwrap();
    assert_eq!(envelope.data.expect("applications").len(), 1);
}

/// The envelope contract: one status, one optional payload, no typed
/// errors for backend failures.
#[tokio::test]
async fn envelope_reflects_status_and_payload_presence() {
    let server = MockServer::start().await;
    common::mount_jobs_index(&server, vec![]).await;
    common::mount_server_error(&server, "/api/private/uploads", 503).await;

    let ctx = ApiContext::new(&server.uri()).unwrap().with_token("tok");

    // 200 with an empty list is still a payload, not the empty condition.
    let jobs = jobdeck_api::public_jobs::index(&ctx).await.unwrap();
    assert!(jobs.is_success());
    assert_eq!(jobs.data, Some(vec![]));

    let uploads = jobdeck_api::uploads::index(&ctx).await.unwrap();
    assert_eq!(uploads.status, 503);
    assert!(uploads.data.is_none());
}

#[tokio::test]
async fn logout_posts_to_the_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/logout"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": null})))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = ApiContext::new(&server.uri()).unwrap().with_token("tok");
    let envelope = jobdeck_api::auth::logout(&ctx).await.unwrap();
    assert!(envelope.is_success());
}
