use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn recording_sink() -> (ErrorSink, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let captured = messages.clone();
    let sink: ErrorSink = Arc::new(move |message: &str| {
        captured.lock().unwrap().push(message.to_string());
    });
    (sink, messages)
}

fn note_json(id: &str, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "content": "body",
        "tags": ["Work"],
        "createdAt": "2024-05-01T10:00:00Z",
        "updatedAt": "2024-05-01T10:00:00Z"
    })
}

#[test]
fn base_url_trailing_slashes_are_trimmed() {
    let (sink, _) = recording_sink();
    let api = NotesApi::new("https://api.example.com///", sink).unwrap();
    assert_eq!(api.base_url(), "https://api.example.com");
}

#[test]
fn note_path_percent_encodes_ids() {
    assert_eq!(note_path(&NoteId::new("a b/c")), "/notes/a%20b%2Fc");
}

#[test]
fn api_error_prefers_message_field() {
    let error = api_error(StatusCode::BAD_REQUEST, r#"{"message": "Title too long"}"#);
    assert_eq!(
        error,
        Error::Api {
            status: 400,
            message: "Title too long".to_string()
        }
    );
}

#[test]
fn api_error_falls_back_to_status_line() {
    let error = api_error(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
    assert_eq!(error.to_string(), "API error: 500 Internal Server Error");

    let empty_message = api_error(StatusCode::NOT_FOUND, r#"{"message": ""}"#);
    assert_eq!(empty_message.to_string(), "API error: 404 Not Found");
}

#[tokio::test(flavor = "current_thread")]
async fn list_returns_notes_in_service_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .and(header("Content-Type", "application/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([note_json("2", "Second"), note_json("1", "First")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (sink, messages) = recording_sink();
    let api = NotesApi::new(server.uri(), sink).unwrap();
    let notes = api.list().await.unwrap();

    let titles: Vec<_> = notes.iter().map(|note| note.title.as_str()).collect();
    assert_eq!(titles, vec!["Second", "First"]);
    assert!(messages.lock().unwrap().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn create_posts_payload_with_default_tags() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/notes"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"title": "A", "content": "B", "tags": []})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "new-1",
            "title": "A",
            "content": "B",
            "tags": [],
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-01T10:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (sink, _) = recording_sink();
    let api = NotesApi::new(server.uri(), sink).unwrap();
    let payload: NotePayload = serde_json::from_value(json!({"title": "A", "content": "B"})).unwrap();
    let created = api.create(&payload).await.unwrap();

    assert_eq!(created.id, Some(NoteId::new("new-1")));
    assert!(created.created_at.is_some());
}

#[tokio::test(flavor = "current_thread")]
async fn update_puts_to_encoded_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/notes/id%20with%20space"))
        .and(body_json(json!({"title": "T", "content": "C", "tags": ["x"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(note_json("id with space", "T")))
        .expect(1)
        .mount(&server)
        .await;

    let (sink, _) = recording_sink();
    let api = NotesApi::new(server.uri(), sink).unwrap();
    let payload = NotePayload {
        title: "T".to_string(),
        content: "C".to_string(),
        tags: vec!["x".to_string()],
    };
    let updated = api
        .update(&NoteId::new("id with space"), &payload)
        .await
        .unwrap();
    assert_eq!(updated.title, "T");
}

#[tokio::test(flavor = "current_thread")]
async fn delete_accepts_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/notes/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let (sink, _) = recording_sink();
    let api = NotesApi::new(server.uri(), sink).unwrap();
    api.delete(&NoteId::new("7")).await.unwrap();
}

#[tokio::test(flavor = "current_thread")]
async fn request_normalizes_empty_json_and_text_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/empty"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/text"))
        .respond_with(ResponseTemplate::new(200).set_body_string("plain"))
        .mount(&server)
        .await;

    let (sink, _) = recording_sink();
    let api = NotesApi::new(server.uri(), sink).unwrap();

    let empty = api.request::<()>(Method::GET, "/empty", None).await.unwrap();
    assert_eq!(empty, ApiResponse::Empty);
    let value = api.request::<()>(Method::GET, "/json", None).await.unwrap();
    assert_eq!(value, ApiResponse::Json(json!({"ok": true})));
    let text = api.request::<()>(Method::GET, "/text", None).await.unwrap();
    assert_eq!(text, ApiResponse::Text("plain".to_string()));
}

#[tokio::test(flavor = "current_thread")]
async fn get_missing_note_reports_and_returns_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Note not found"})),
        )
        .mount(&server)
        .await;

    let (sink, messages) = recording_sink();
    let api = NotesApi::new(server.uri(), sink).unwrap();
    let error = api.get(&NoteId::new("missing")).await.unwrap_err();

    assert_eq!(error.status(), Some(404));
    assert_eq!(
        messages.lock().unwrap().as_slice(),
        ["API error: Note not found".to_string()]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn transport_failure_is_a_network_error() {
    let (sink, messages) = recording_sink();
    // Nothing listens on port 1.
    let api = NotesApi::new("http://127.0.0.1:1", sink).unwrap();
    let error = api.list().await.unwrap_err();

    assert!(matches!(error, Error::Network(_)));
    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("Network error: "));
}

#[tokio::test(flavor = "current_thread")]
async fn empty_base_url_fails_at_request_time() {
    let (sink, messages) = recording_sink();
    let api = NotesApi::new("", sink).unwrap();
    let error = api.list().await.unwrap_err();

    assert!(matches!(error, Error::Network(_)));
    assert_eq!(messages.lock().unwrap().len(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn non_json_body_for_typed_call_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let (sink, messages) = recording_sink();
    let api = NotesApi::new(server.uri(), sink).unwrap();
    let error = api.list().await.unwrap_err();

    assert!(matches!(error, Error::Decode(_)));
    assert_eq!(messages.lock().unwrap().len(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn in_memory_create_then_get_round_trips() {
    let backend = InMemoryBackend::new();
    let payload = NotePayload {
        title: "A".to_string(),
        content: "B".to_string(),
        tags: vec!["x".to_string(), "y".to_string()],
    };

    let created = backend.create(&payload).await.unwrap();
    let id = created.id.clone().unwrap();
    let fetched = backend.get(&id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.title, "A");
    assert_eq!(fetched.content, "B");
    assert_eq!(fetched.tags, vec!["x", "y"]);
    assert!(fetched.created_at.is_some());
    assert!(fetched.updated_at.is_some());
}

#[tokio::test(flavor = "current_thread")]
async fn http_create_then_get_round_trips() {
    let server = MockServer::start().await;
    let stored = json!({
        "id": "srv-9",
        "title": "A",
        "content": "B",
        "tags": ["x", "y"],
        "createdAt": "2024-06-01T08:00:00Z",
        "updatedAt": "2024-06-01T08:00:00Z"
    });
    Mock::given(method("POST"))
        .and(path("/notes"))
        .and(body_json(json!({"title": "A", "content": "B", "tags": ["x", "y"]})))
        .respond_with(ResponseTemplate::new(201).set_body_json(stored.clone()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/notes/srv-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored))
        .mount(&server)
        .await;

    let (sink, _) = recording_sink();
    let api = NotesApi::new(server.uri(), sink).unwrap();
    let payload = NotePayload {
        title: "A".to_string(),
        content: "B".to_string(),
        tags: vec!["x".to_string(), "y".to_string()],
    };
    let created = api.create(&payload).await.unwrap();
    let fetched = api.get(created.id.as_ref().unwrap()).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.tags, vec!["x", "y"]);
}
