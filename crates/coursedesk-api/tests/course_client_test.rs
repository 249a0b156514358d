#![allow(clippy::unwrap_used)]
// Integration tests for `CourseClient` using wiremock.

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coursedesk_api::{CourseBody, CourseClient, Error, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, CourseClient) {
    let server = MockServer::start().await;
    let client = CourseClient::new(&server.uri(), &TransportConfig::default()).unwrap();
    (server, client)
}

fn rust_course() -> CourseBody {
    CourseBody {
        name: "Rust".into(),
        workload: 40,
        start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
    }
}

// ── Course tests ────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_courses() {
    let (server, client) = setup().await;

    let body = json!([
        {
            "_id": "c1",
            "name": "Rust",
            "workload": 40,
            "startDate": "2024-03-01T00:00:00.000Z",
            "disciplines": [
                { "_id": "d1", "name": "Ownership" },
                { "_id": "d2", "name": "Traits" }
            ]
        },
        {
            "_id": "c2",
            "name": "Go",
            "workload": 20,
            "startDate": "2024-04-15",
            "disciplines": []
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/courses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let courses = client.list_courses().await.unwrap();

    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].id, "c1");
    assert_eq!(courses[0].start_date, NaiveDate::from_ymd_opt(2024, 3, 1));
    assert_eq!(courses[0].disciplines[1].name, "Traits");
    assert_eq!(courses[1].name, "Go");
    assert_eq!(courses[1].start_date, NaiveDate::from_ymd_opt(2024, 4, 15));
}

#[tokio::test]
async fn test_list_courses_bad_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/courses"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client.list_courses().await;
    assert!(
        matches!(result, Err(Error::Deserialization { ref body, .. }) if body.contains("oops")),
        "expected Deserialization error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_create_course() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/courses"))
        .and(body_json(json!({
            "name": "Rust",
            "workload": 40,
            "startDate": "2024-03-01"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "_id": "new" })))
        .expect(1)
        .mount(&server)
        .await;

    client.create_course(&rust_course()).await.unwrap();
}

#[tokio::test]
async fn test_create_course_server_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/courses"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "database down" })),
        )
        .mount(&server)
        .await;

    let result = client.create_course(&rust_course()).await;
    match result {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "database down");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_update_course() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/courses/c1"))
        .and(body_json(json!({
            "name": "Rust",
            "workload": 40,
            "startDate": "2024-03-01"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.update_course("c1", &rust_course()).await.unwrap();
}

#[tokio::test]
async fn test_delete_course() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/course-disciplines/courses/c1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_course("c1").await.unwrap();
}

#[tokio::test]
async fn test_delete_course_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/course-disciplines/courses/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Course not found"))
        .mount(&server)
        .await;

    let err = client.delete_course("missing").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(!err.is_transient());
    assert!(err.to_string().contains("Course not found"));
}

// ── Discipline tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_create_discipline_sends_course_id() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/course-disciplines/disciplines"))
        .and(body_json(json!({ "id": "c1", "name": "Lifetimes" })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client.create_discipline("c1", "Lifetimes").await.unwrap();
}

#[tokio::test]
async fn test_update_discipline() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/disciplines"))
        .and(body_json(json!({ "id": "d1", "name": "Borrowing" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.update_discipline("d1", "Borrowing").await.unwrap();
}

#[tokio::test]
async fn test_delete_discipline() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/course-disciplines/courses/c1/disciplines/d2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_discipline("c1", "d2").await.unwrap();
}

// ── Transport tests ─────────────────────────────────────────────────

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Pooled mock servers keep listening after drop; a raw listener does not.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let uri = format!("http://{addr}");
    let client = CourseClient::new(&uri, &TransportConfig::default()).unwrap();

    let result = client.list_courses().await;
    assert!(
        matches!(result, Err(Error::Transport(_))),
        "expected Transport error, got: {result:?}"
    );
}
