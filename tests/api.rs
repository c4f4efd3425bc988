use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use school_activities::database;
use school_activities::database::seed::SEED_ACTIVITIES;
use school_activities::web;

async fn build_app() -> axum::Router {
    let pool = database::connect_in_memory().await.unwrap();
    database::init(&pool).await.unwrap();
    web::router(pool, "static")
}

async fn send(router: &axum::Router, method: &str, path: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

async fn participants(router: &axum::Router, activity: &str) -> Vec<String> {
    let (status, body) = send(router, "GET", "/activities").await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_value(body[activity]["participants"].clone()).unwrap()
}

#[tokio::test]
async fn root_redirects_to_static_entry_page() {
    let router = build_app().await;
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();

    let resp = router.oneshot(req).await.unwrap();

    assert!(resp.status().is_redirection());
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/static/index.html"
    );
}

#[tokio::test]
async fn lists_seeded_activities() {
    let router = build_app().await;

    let (status, body) = send(&router, "GET", "/activities").await;

    assert_eq!(status, StatusCode::OK);
    let catalog = body.as_object().unwrap();
    assert_eq!(catalog.len(), SEED_ACTIVITIES.len());
    for seed in SEED_ACTIVITIES {
        let entry = &catalog[seed.name];
        assert_eq!(entry["description"], seed.description);
        assert_eq!(entry["schedule"], seed.schedule);
        assert_eq!(entry["max_participants"], seed.max_participants);
        let emails: Vec<String> = serde_json::from_value(entry["participants"].clone()).unwrap();
        assert_eq!(emails, seed.participants);
    }
}

#[tokio::test]
async fn signup_unregister_scenario() {
    let router = build_app().await;
    let signup = "/activities/Chess%20Club/signup?email=x@y.edu";
    let unregister = "/activities/Chess%20Club/unregister?email=x@y.edu";

    let (status, body) = send(&router, "POST", signup).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Signed up x@y.edu for Chess Club");

    let (status, body) = send(&router, "POST", signup).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Student is already signed up");

    let (status, body) = send(&router, "DELETE", unregister).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Unregistered x@y.edu from Chess Club");

    let (status, body) = send(&router, "DELETE", unregister).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Student is not signed up for this activity");
}

#[tokio::test]
async fn unknown_activity_returns_404() {
    let router = build_app().await;

    let (status, body) = send(&router, "POST", "/activities/Underwater%20Basket/signup?email=a@b.edu").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");

    let (status, _) = send(&router, "DELETE", "/activities/Underwater%20Basket/unregister?email=a@b.edu").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_signup_does_not_add_row() {
    let router = build_app().await;
    let path = "/activities/Programming%20Class/signup?email=tester@example.com";

    send(&router, "POST", path).await;
    let (status, _) = send(&router, "POST", path).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let emails = participants(&router, "Programming Class").await;
    assert_eq!(
        emails.iter().filter(|e| *e == "tester@example.com").count(),
        1
    );
}

#[tokio::test]
async fn activity_full_after_capacity_reached() {
    let router = build_app().await;
    // Math Club holds 10 and is seeded with 2.
    for i in 0..8 {
        let path = format!("/activities/Math%20Club/signup?email=s{i}@mergington.edu");
        let (status, _) = send(&router, "POST", &path).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&router, "POST", "/activities/Math%20Club/signup?email=late@mergington.edu").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Activity is full");
    assert_eq!(participants(&router, "Math Club").await.len(), 10);
}

#[tokio::test]
async fn signup_then_unregister_round_trips() {
    let router = build_app().await;
    let before = participants(&router, "Art Club").await;

    send(&router, "POST", "/activities/Art%20Club/signup?email=tester2@example.com").await;
    assert_eq!(participants(&router, "Art Club").await.len(), before.len() + 1);
    send(&router, "DELETE", "/activities/Art%20Club/unregister?email=tester2@example.com").await;

    assert_eq!(participants(&router, "Art Club").await, before);
}

#[tokio::test]
async fn missing_email_is_rejected_with_json_detail() {
    let router = build_app().await;

    let (status, body) = send(&router, "POST", "/activities/Chess%20Club/signup").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("email"));

    let (status, body) = send(&router, "DELETE", "/activities/Chess%20Club/unregister").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    assert_eq!(participants(&router, "Chess Club").await.len(), 2);
}

#[tokio::test]
async fn responses_carry_no_store_cache_header() {
    let router = build_app().await;
    let req = Request::builder()
        .uri("/activities")
        .body(Body::empty())
        .unwrap();

    let resp = router.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(header::CACHE_CONTROL).unwrap(), "no-store");
}

#[tokio::test]
async fn serves_files_from_static_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Activities</h1>").unwrap();
    let pool = database::connect_in_memory().await.unwrap();
    database::init(&pool).await.unwrap();
    let router = web::router(pool, dir.path().to_str().unwrap());
    let req = Request::builder()
        .uri("/static/index.html")
        .body(Body::empty())
        .unwrap();

    let resp = router.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"<h1>Activities</h1>");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_signups_never_exceed_capacity() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("activities.db").display());
    let pool = database::connect(&url).await.unwrap();
    database::init(&pool).await.unwrap();
    let router = web::router(pool, "static");

    // Math Club holds 10 and is seeded with 2.
    let mut handles = Vec::new();
    for i in 0..40 {
        let router = router.clone();
        handles.push(tokio::spawn(async move {
            let path = format!("/activities/Math%20Club/signup?email=racer{i}@mergington.edu");
            send(&router, "POST", &path).await.0
        }));
    }
    let mut accepted = 0;
    for handle in handles {
        match handle.await.unwrap() {
            StatusCode::OK => accepted += 1,
            StatusCode::BAD_REQUEST => {}
            other => panic!("unexpected status {other}"),
        }
    }

    assert_eq!(accepted, 8);
    assert_eq!(participants(&router, "Math Club").await.len(), 10);
}
