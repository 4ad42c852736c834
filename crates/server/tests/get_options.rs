use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use service::file::settings_store::FileSettingsStore;
use service::options::{OPTION_NAME_API_KEY, OPTION_NAME_RESTRICTION_LIST, OPTION_NAME_RESTRICTION_TYPE};
use service::settings::SettingsStore;
use tower::ServiceExt;
use uuid::Uuid;

use server::routes::{self, auth::ServerState};

const KEY: &str = "0f1e2d3c4b5a69788796a5b4c3d2e1f00f1e2d3c4b5a69788796a5b4c3d2e1f0";
const ENDPOINT: &str = "/rest-options/v1/get-options";

struct TestApp {
    app: Router,
    store: Arc<FileSettingsStore>,
}

async fn build_app() -> anyhow::Result<TestApp> {
    let path = std::env::temp_dir().join(format!("get_options_{}.json", Uuid::new_v4()));
    let store = FileSettingsStore::new(&path).await?;
    store.set(OPTION_NAME_API_KEY, json!(KEY)).await?;
    store.set("blogname", json!("My Site")).await?;
    store.set("posts_per_page", json!(10)).await?;
    store.set("sticky_posts", json!([4, 8])).await?;

    let state = ServerState {
        store: store.clone(),
        admin_token: None,
        namespace: "rest-options/v1".into(),
    };
    let app = routes::build_router(state, tower_http::cors::CorsLayer::very_permissive());
    Ok(TestApp { app, store })
}

fn options_request(key: Option<&str>, body: Value) -> anyhow::Result<Request<Body>> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(ENDPOINT)
        .header("content-type", "application/json");
    if let Some(key) = key {
        builder = builder.header("x-api-key", key);
    }
    Ok(builder.body(Body::from(serde_json::to_vec(&body)?))?)
}

async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

#[tokio::test]
async fn health_is_public() -> anyhow::Result<()> {
    let t = build_app().await?;
    let req = Request::builder().uri("/health").body(Body::empty())?;
    let (status, body) = send(&t.app, req).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn missing_or_wrong_key_is_unauthorized() -> anyhow::Result<()> {
    let t = build_app().await?;
    for key in [None, Some(""), Some("wrong")] {
        let (status, body) = send(&t.app, options_request(key, json!({"options": ["blogname"]}))?).await?;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"code": "unauthorized", "message": "Invalid API key", "data": {"status": 401}}));
    }
    Ok(())
}

#[tokio::test]
async fn no_stored_key_denies_everyone() -> anyhow::Result<()> {
    let t = build_app().await?;
    t.store.set(OPTION_NAME_API_KEY, Value::Null).await?;
    let (status, _) = send(&t.app, options_request(Some(KEY), json!({"options": ["blogname"]}))?).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn auth_runs_before_validation() -> anyhow::Result<()> {
    let t = build_app().await?;
    let (status, _) = send(&t.app, options_request(None, json!({"options": "nope"}))?).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn default_policy_returns_values_and_hides_the_key() -> anyhow::Result<()> {
    let t = build_app().await?;
    let req = options_request(
        Some(KEY),
        json!({"options": ["blogname", "sticky_posts", "does_not_exist", OPTION_NAME_API_KEY]}),
    )?;
    let (status, body) = send(&t.app, req).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "code": "success",
            "message": "Options retrieved successfully.",
            "data": {
                "status": 200,
                "options": {"blogname": "My Site", "sticky_posts": [4, 8], "does_not_exist": null}
            }
        })
    );
    Ok(())
}

#[tokio::test]
async fn allow_only_limits_to_listed_names() -> anyhow::Result<()> {
    let t = build_app().await?;
    t.store.set(OPTION_NAME_RESTRICTION_TYPE, json!("allow_only")).await?;
    t.store.set(OPTION_NAME_RESTRICTION_LIST, json!("posts_per_page\n missing \n")).await?;

    let req = options_request(Some(KEY), json!({"options": ["blogname", "posts_per_page", "missing"]}))?;
    let (status, body) = send(&t.app, req).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["options"], json!({"posts_per_page": 10, "missing": null}));
    Ok(())
}

#[tokio::test]
async fn allow_all_can_expose_the_key() -> anyhow::Result<()> {
    let t = build_app().await?;
    t.store.set(OPTION_NAME_RESTRICTION_TYPE, json!("allow_all")).await?;
    let req = options_request(Some(KEY), json!({"options": [OPTION_NAME_API_KEY]}))?;
    let (_, body) = send(&t.app, req).await?;
    assert_eq!(body["data"]["options"][OPTION_NAME_API_KEY], KEY);
    Ok(())
}

#[tokio::test]
async fn invalid_bodies_are_rejected_with_messages() -> anyhow::Result<()> {
    let t = build_app().await?;
    let too_many: Vec<String> = (0..101).map(|i| format!("o{i}")).collect();
    let cases = [
        (json!({"options": "not-an-array"}), "Options must be an array"),
        (json!({}), "Options must be an array"),
        (json!({"options": []}), "Options must not be empty"),
        (json!({ "options": too_many }), "Options must not contain more than 100 items"),
        (json!({"options": ["blogname", 7]}), "Each option must be a string"),
    ];
    for (payload, message) in cases {
        let (status, body) = send(&t.app, options_request(Some(KEY), payload)?).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_param");
        assert_eq!(body["message"], message);
        assert_eq!(body["data"]["status"], 400);
    }
    Ok(())
}

#[tokio::test]
async fn one_hundred_names_are_accepted() -> anyhow::Result<()> {
    let t = build_app().await?;
    let hundred: Vec<String> = (0..100).map(|i| format!("o{i}")).collect();
    let (status, body) = send(&t.app, options_request(Some(KEY), json!({ "options": hundred }))?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["options"].as_object().map(|m| m.len()), Some(100));
    Ok(())
}

#[tokio::test]
async fn non_json_body_fails_the_array_check() -> anyhow::Result<()> {
    let t = build_app().await?;
    let req = Request::builder()
        .method("POST")
        .uri(ENDPOINT)
        .header("x-api-key", KEY)
        .body(Body::from("options[]=blogname"))?;
    let (status, body) = send(&t.app, req).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Options must be an array");
    Ok(())
}
