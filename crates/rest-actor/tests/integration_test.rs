use axum::http::{Method, StatusCode};
use rest_actor::fake_backend::FakeBackend;
use rest_actor::{Backend, FrameworkError, ParentRef, ResourceActor, ResourceClient, RestEntity};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

// --- Test Entities ---

#[derive(Clone, Debug, PartialEq, Deserialize)]
struct Shelf {
    id: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
struct Book {
    id: String,
    title: String,
}

#[derive(Debug, Serialize)]
struct BookCreate {
    title: String,
}

#[derive(Debug, Serialize)]
struct BookUpdate {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

impl RestEntity for Shelf {
    type Id = String;
    type Create = ();
    type Update = ();
    const COLLECTION: &'static str = "shelves";
}

impl RestEntity for Book {
    type Id = String;
    type Create = BookCreate;
    type Update = BookUpdate;
    const COLLECTION: &'static str = "books";
}

fn book(id: &str, title: &str) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
    }
}

async fn spawn_books(base_url: &str) -> (ResourceClient<Book>, tokio::task::JoinHandle<()>) {
    let backend = Backend::new(base_url, None).expect("valid base url");
    let (actor, client) = ResourceActor::<Book>::new(8, backend);
    (client, tokio::spawn(actor.run()))
}

#[tokio::test]
async fn test_reads_hit_expected_paths() {
    let fake = FakeBackend::start().await.unwrap();
    fake.respond_json(
        Method::GET,
        "/books",
        json!([{ "id": "b1", "title": "Dune" }, { "id": "b2", "title": "Emma" }]),
    )
    .respond_json(Method::GET, "/books/b1", json!({ "id": "b1", "title": "Dune" }))
    .respond_json(
        Method::GET,
        "/shelves/s1/books",
        json!([{ "id": "b2", "title": "Emma", "extra": true }]),
    );

    let (books, handle) = spawn_books(&fake.base_url()).await;

    let all = books.list().await.unwrap();
    assert_eq!(all, vec![book("b1", "Dune"), book("b2", "Emma")]);

    let one = books.get("b1".to_string()).await.unwrap();
    assert_eq!(one, Some(book("b1", "Dune")));

    let shelved = books
        .list_under(ParentRef::of::<Shelf>(&"s1".to_string()))
        .await
        .unwrap();
    assert_eq!(shelved, vec![book("b2", "Emma")]);

    assert_eq!(fake.count(Method::GET, "/books"), 1);
    assert_eq!(fake.count(Method::GET, "/books/b1"), 1);
    assert_eq!(fake.count(Method::GET, "/shelves/s1/books"), 1);
    assert!(fake.requests().iter().all(|r| r.body.is_none()));

    drop(books);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_writes_send_json_bodies() {
    let fake = FakeBackend::start().await.unwrap();
    fake.respond(
        Method::POST,
        "/books",
        StatusCode::CREATED,
        json!({ "id": "b3", "title": "Ulysses" }),
    )
    .respond_json(Method::PATCH, "/books/b3", json!({ "id": "b3", "title": "Ulysses" }))
    .respond_json(Method::DELETE, "/books/b3", json!({ "id": "b3", "title": "Ulysses" }));

    let (books, handle) = spawn_books(&fake.base_url()).await;

    let created = books
        .create(BookCreate {
            title: "Ulysses".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(created, book("b3", "Ulysses"));

    books
        .update(
            "b3".to_string(),
            BookUpdate {
                id: "b3".to_string(),
                title: None,
            },
        )
        .await
        .unwrap();

    let deleted = books.delete("b3".to_string()).await.unwrap();
    assert_eq!(deleted, Some(book("b3", "Ulysses")));

    let requests = fake.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].body, Some(json!({ "title": "Ulysses" })));
    assert_eq!(requests[1].method, Method::PATCH);
    assert_eq!(requests[1].path, "/books/b3");
    assert_eq!(requests[1].body, Some(json!({ "id": "b3" })));
    assert_eq!(requests[2].method, Method::DELETE);
    assert_eq!(requests[2].body, None);

    drop(books);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_empty_delete_body_is_none() {
    let fake = FakeBackend::start().await.unwrap();
    fake.respond_empty(Method::DELETE, "/books/b1", StatusCode::NO_CONTENT);

    let (books, _handle) = spawn_books(&fake.base_url()).await;
    assert_eq!(books.delete("b1".to_string()).await.unwrap(), None);
}

#[tokio::test]
async fn test_null_body_get_is_none() {
    let fake = FakeBackend::start().await.unwrap();
    fake.respond_json(Method::GET, "/books/b1", json!(null));

    let (books, _handle) = spawn_books(&fake.base_url()).await;
    assert_eq!(books.get("b1".to_string()).await.unwrap(), None);
}

#[tokio::test]
async fn test_error_statuses_propagate() {
    let fake = FakeBackend::start().await.unwrap();
    fake.respond(
        Method::GET,
        "/books/b1",
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "message": "boom" }),
    );

    let (books, _handle) = spawn_books(&fake.base_url()).await;

    let error = books.get("b1".to_string()).await.unwrap_err();
    assert_eq!(error.status(), Some(500));
    assert!(matches!(&error, FrameworkError::Status { body, .. } if body.contains("boom")));

    // Unknown routes answer 404 like a json-server would.
    let error = books.get("nope".to_string()).await.unwrap_err();
    assert!(error.is_not_found());
}

#[tokio::test]
async fn test_undecodable_body_is_decode_error() {
    let fake = FakeBackend::start().await.unwrap();
    fake.respond_json(Method::GET, "/books/b1", json!({ "id": 1 }));

    let (books, _handle) = spawn_books(&fake.base_url()).await;
    let error = books.get("b1".to_string()).await.unwrap_err();
    assert!(matches!(error, FrameworkError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // Reserve a port, then release it so nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let (books, _handle) = spawn_books(&format!("http://{address}")).await;
    let error = books.list().await.unwrap_err();
    assert!(matches!(error, FrameworkError::Transport(_)), "{error:?}");
}

#[tokio::test]
async fn test_request_timeout_is_transport_error() {
    let fake = FakeBackend::start().await.unwrap();
    fake.stall(Method::GET, "/books");

    let backend = Backend::new(&fake.base_url(), Some(Duration::from_millis(100))).unwrap();
    let (actor, books) = ResourceActor::<Book>::new(8, backend);
    let handle = tokio::spawn(actor.run());

    let error = books.list().await.unwrap_err();
    assert!(matches!(error, FrameworkError::Transport(_)), "{error:?}");
    assert_eq!(fake.count(Method::GET, "/books"), 1);

    drop(books);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_client_fails_after_actor_is_gone() {
    let backend = Backend::new("http://localhost:3300", None).unwrap();
    let (actor, books) = ResourceActor::<Book>::new(8, backend);
    drop(actor);

    let error = books.list().await.unwrap_err();
    assert_eq!(error, FrameworkError::ActorClosed);
}

#[tokio::test]
async fn test_concurrent_requests_each_reach_backend() {
    let fake = FakeBackend::start().await.unwrap();
    fake.respond_json(Method::GET, "/books/b1", json!({ "id": "b1", "title": "Dune" }));

    let (books, handle) = spawn_books(&fake.base_url()).await;

    let mut tasks = Vec::new();
    for _ in 0..10 {
        let books = books.clone();
        tasks.push(tokio::spawn(async move { books.get("b1".to_string()).await }));
    }
    for task in tasks {
        assert_eq!(task.await.unwrap().unwrap(), Some(book("b1", "Dune")));
    }

    // No caching: ten calls, ten backend requests.
    assert_eq!(fake.count(Method::GET, "/books/b1"), 10);

    drop(books);
    handle.await.unwrap();
}
