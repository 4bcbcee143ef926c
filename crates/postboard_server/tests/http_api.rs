use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use postboard_core::db::open_db_in_memory;
use postboard_server::{build_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    build_router(AppState::new(open_db_in_memory().unwrap()))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn create_post_returns_201_with_assigned_id() {
    let app = app();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/post",
        Some(json!({"title": "T1", "content": "C1"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "title": "T1", "content": "C1"}));
}

#[tokio::test]
async fn missing_post_maps_to_404_error_body() {
    let app = app();
    let expected = json!({"code": "Item Not Found", "message": "id를 확인해주세요!!"});

    let (status, body) = send_json(&app, Method::GET, "/post/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, expected);

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/post/1",
        Some(json!({"title": "t", "content": "c"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, expected);

    let (status, body) = send_json(&app, Method::DELETE, "/post/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, expected);

    let (_, body) = send_json(&app, Method::GET, "/post", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn post_crud_scenario_over_http() {
    let app = app();

    for (title, content) in [("T1", "C1"), ("T2", "C2")] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/post",
            Some(json!({"title": title, "content": content})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send_json(&app, Method::GET, "/post", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "title": "T1", "content": "C1"},
            {"id": 2, "title": "T2", "content": "C2"}
        ])
    );

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/post/1",
        Some(json!({"title": "T1b", "content": "C1b"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "title": "T1b", "content": "C1b"}));

    let (status, body) = send(&app, Method::DELETE, "/post/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");

    let (status, body) = send_json(&app, Method::GET, "/post/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "title": "T1b", "content": "C1b"}));

    let (_, body) = send_json(&app, Method::GET, "/post", None).await;
    assert_eq!(body, json!([{"id": 1, "title": "T1b", "content": "C1b"}]));
}

#[tokio::test]
async fn missing_fields_are_stored_as_empty_text() {
    let app = app();

    let (status, body) = send_json(&app, Method::POST, "/post", Some(json!({}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "title": "", "content": ""}));
}

#[tokio::test]
async fn oversized_content_is_a_server_error() {
    let app = app();
    let content = "x".repeat(postboard_core::MAX_CONTENT_CHARS + 1);

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/post",
        Some(json!({"title": "t", "content": content})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "Internal Server Error");

    let (_, body) = send_json(&app, Method::GET, "/post", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn book_routes_follow_post_conventions() {
    let app = app();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/book",
        Some(json!({"title": "Dune", "author": "Herbert"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "title": "Dune", "author": "Herbert"}));

    let (status, body) = send_json(&app, Method::GET, "/book/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Dune");

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/book/1",
        Some(json!({"title": "Dune", "author": "Frank Herbert"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["author"], "Frank Herbert");

    let (status, body) = send(&app, Method::DELETE, "/book/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");

    let (status, body) = send_json(&app, Method::DELETE, "/book/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "Item Not Found");
}

#[tokio::test]
async fn health_check_answers_ok() {
    let (status, body) = send(&app(), Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/post")
        .header(header::ORIGIN, "https://client.example")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_writes_stay_serialized() {
    let app = app();
    send(
        &app,
        Method::POST,
        "/post",
        Some(json!({"title": "seed", "content": "seed"})),
    )
    .await;

    let mut tasks = Vec::new();
    for n in 0..16 {
        let app_put = app.clone();
        tasks.push(tokio::spawn(async move {
            let (status, body) = send_json(
                &app_put,
                Method::PUT,
                "/post/1",
                Some(json!({"title": format!("t{n}"), "content": format!("c{n}")})),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["id"], 1);
        }));

        let app_post = app.clone();
        tasks.push(tokio::spawn(async move {
            let (status, _) = send_json(
                &app_post,
                Method::POST,
                "/post",
                Some(json!({"title": format!("new{n}"), "content": "body"})),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }));

        let app_ghost = app.clone();
        tasks.push(tokio::spawn(async move {
            let (status, _) = send_json(
                &app_ghost,
                Method::PUT,
                "/post/9999",
                Some(json!({"title": "ghost", "content": "ghost"})),
            )
            .await;
            assert_eq!(status, StatusCode::NOT_FOUND);
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let (_, body) = send_json(&app, Method::GET, "/post", None).await;
    let posts = body.as_array().unwrap();
    assert_eq!(posts.len(), 17);

    let ids: std::collections::HashSet<i64> =
        posts.iter().map(|post| post["id"].as_i64().unwrap()).collect();
    assert_eq!(ids.len(), 17);
    assert!(!ids.contains(&9999));
    assert!(posts.iter().all(|post| post["title"] != "ghost"));

    let first = &posts[0];
    let title = first["title"].as_str().unwrap();
    let n = title.strip_prefix('t').unwrap();
    assert_eq!(first["content"], format!("c{n}"));
}
