//! End-to-end tests of the HTTP API against a temporary upload directory

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use docqa::{
    config::DocQaConfig,
    generation::FALLBACK_MODEL_LABEL,
    providers::{DocumentStoreProvider, LlmProvider, LocalDocumentStore},
    server::{state::AppState, DocQaServer},
    Error, Result,
};

const BOUNDARY: &str = "docqa-test-boundary";

const PLAN: &str = "Alpha project deadline is March 5, and every team must submit their final reports.\n\n\
                    Beta project started in January and is staffed by the platform group.";

enum Reply {
    Text(&'static str),
    NetworkError,
}

struct StubLlm(Reply);

#[async_trait]
impl LlmProvider for StubLlm {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        match self.0 {
            Reply::Text(text) => Ok(text.to_string()),
            Reply::NetworkError => Err(Error::Generation("connection refused".to_string())),
        }
    }

    fn name(&self) -> &str {
        "stub"
    }

    fn model(&self) -> &str {
        "stub-model"
    }
}

struct TestApp {
    _dir: tempfile::TempDir,
    router: Router,
}

impl TestApp {
    fn new(llm: Option<Reply>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let mut config = DocQaConfig::default();
        config.storage.upload_dir = dir.path().to_path_buf();

        let store: Arc<dyn DocumentStoreProvider> = Arc::new(LocalDocumentStore::new(dir.path()));
        let llm = llm.map(|reply| Arc::new(StubLlm(reply)) as Arc<dyn LlmProvider>);
        let state = AppState::with_providers(config, store, llm);

        Self {
            _dir: dir,
            router: DocQaServer::with_state(state).router(),
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    async fn upload(&self, session: Option<&str>, filename: &str, content: &str) -> (StatusCode, Value) {
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{f}\"\r\n\
             Content-Type: text/plain\r\n\r\n{c}\r\n--{b}--\r\n",
            b = BOUNDARY,
            f = filename,
            c = content
        );
        let mut builder = Request::post("/api/upload").header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        );
        if let Some(session) = session {
            builder = builder.header("x-session-id", session);
        }
        self.send(builder.body(Body::from(body)).unwrap()).await
    }

    async fn ask(&self, session: Option<&str>, body: Value) -> (StatusCode, Value) {
        let mut builder = Request::post("/api/ask").header("content-type", "application/json");
        if let Some(session) = session {
            builder = builder.header("x-session-id", session);
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap()).await
    }

    async fn list(&self, session: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::get("/api/documents");
        if let Some(session) = session {
            builder = builder.header("x-session-id", session);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }
}

#[tokio::test]
async fn test_health_reports_generation_status() {
    let app = TestApp::new(None);
    let (status, body) = app
        .send(Request::get("/api/health").body(Body::empty()).unwrap())
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["storage"], "operational");
    assert_eq!(body["services"]["generation"], "disconnected");

    let app = TestApp::new(Some(Reply::Text("ok")));
    let (_, body) = app
        .send(Request::get("/api/health").body(Body::empty()).unwrap())
        .await;
    assert_eq!(body["services"]["generation"], "connected");
}

#[tokio::test]
async fn test_ready() {
    let app = TestApp::new(None);
    let (status, _) = app
        .send(Request::get("/ready").body(Body::empty()).unwrap())
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_upload_list_delete() {
    let app = TestApp::new(None);

    let (status, body) = app.upload(None, "plan.txt", PLAN).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "File uploaded successfully");
    assert_eq!(body["document"]["name"], "plan.txt");
    assert_eq!(body["document"]["sizeBytes"], PLAN.len() as u64);
    assert!(body["document"].get("contentLocation").is_none());
    let id = body["document"]["id"].as_str().unwrap().to_string();

    let (status, body) = app.list(None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], id.as_str());

    let (status, body) = app
        .send(
            Request::delete(format!("/api/documents/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Document deleted successfully");

    let (_, body) = app.list(None).await;
    assert!(body.as_array().unwrap().is_empty());

    let (status, body) = app
        .send(
            Request::delete(format!("/api/documents/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Document not found");
}

#[tokio::test]
async fn test_upload_without_file_is_rejected() {
    let app = TestApp::new(None);
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhello\r\n--{b}--\r\n",
        b = BOUNDARY
    );
    let request = Request::post("/api/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap();

    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file uploaded");
}

#[tokio::test]
async fn test_upload_form_value_is_not_a_file() {
    let app = TestApp::new(None);
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"\r\n\r\nplain text value\r\n--{b}--\r\n",
        b = BOUNDARY
    );
    let request = Request::post("/api/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap();

    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file uploaded");

    let (_, list) = app.list(None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let app = TestApp::new(None);
    app.upload(Some("alice"), "plan.txt", PLAN).await;

    let (_, alice) = app.list(Some("alice")).await;
    let (_, bob) = app.list(Some("bob")).await;
    let (_, default) = app.list(None).await;

    assert_eq!(alice.as_array().unwrap().len(), 1);
    assert!(bob.as_array().unwrap().is_empty());
    assert!(default.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_session_is_rejected() {
    let app = TestApp::new(None);
    let (status, body) = app.list(Some("../escape")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid session id");
}

#[tokio::test]
async fn test_ask_requires_question() {
    let app = TestApp::new(Some(Reply::Text("unused")));

    let (status, body) = app.ask(None, serde_json::json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Question is required");

    let (status, _) = app.ask(None, serde_json::json!({ "question": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ask_without_credentials_is_unavailable() {
    let app = TestApp::new(None);
    app.upload(None, "plan.txt", PLAN).await;

    let (status, body) = app
        .ask(None, serde_json::json!({ "question": "What is the deadline?" }))
        .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].as_str().unwrap().contains("GEMINI_API_KEY"));
}

#[tokio::test]
async fn test_ask_without_documents() {
    let app = TestApp::new(Some(Reply::Text("unused")));
    let (status, body) = app
        .ask(None, serde_json::json!({ "question": "What is the deadline?" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["answer"],
        "I don't have enough context. Please upload some documents first."
    );
    assert_eq!(body["sources"], serde_json::json!([]));
}

#[tokio::test]
async fn test_ask_without_matches() {
    let app = TestApp::new(Some(Reply::Text("unused")));
    app.upload(None, "plan.txt", PLAN).await;

    let (status, body) = app
        .ask(None, serde_json::json!({ "question": "Who won the football championship?" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["answer"]
        .as_str()
        .unwrap()
        .contains("No Relevant Information Found"));
    assert_eq!(body["sources"], serde_json::json!([]));
}

#[tokio::test]
async fn test_ask_with_generation() {
    let app = TestApp::new(Some(Reply::Text("The deadline is March 5.")));
    app.upload(None, "plan.txt", PLAN).await;

    let (status, body) = app
        .ask(None, serde_json::json!({ "question": "What is the deadline?" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answer"], "The deadline is March 5.");
    assert_eq!(body["model"], "stub-model");
    assert_eq!(body["blocks"][0]["type"], "paragraph");

    let sources = body["sources"].as_array().unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0]["documentName"], "plan.txt");
    assert_eq!(sources[0]["score"], 1);
    assert!(sources[0]["snippet"]
        .as_str()
        .unwrap()
        .starts_with("Alpha project deadline"));
}

#[tokio::test]
async fn test_ask_network_error_falls_back() {
    let app = TestApp::new(Some(Reply::NetworkError));
    app.upload(None, "plan.txt", PLAN).await;

    let (status, body) = app
        .ask(None, serde_json::json!({ "question": "What is the deadline?" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model"], FALLBACK_MODEL_LABEL);

    let answer = body["answer"].as_str().unwrap();
    assert!(answer.contains("From \"plan.txt\""));
    assert!(answer.contains("Alpha project deadline is March 5"));
    assert!(!answer.contains("Beta project"));

    let sources = body["sources"].as_array().unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0]["score"], 1);
}

#[tokio::test]
async fn test_ask_skips_deleted_documents() {
    let app = TestApp::new(Some(Reply::NetworkError));
    let (_, first) = app.upload(None, "plan.txt", PLAN).await;
    app.upload(None, "other.txt", "Gamma project deadline moved to April after the supplier review.")
        .await;

    let id = first["document"]["id"].as_str().unwrap();
    app.send(
        Request::delete(format!("/api/documents/{}", id))
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    let (status, body) = app
        .ask(None, serde_json::json!({ "question": "deadline" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    let sources = body["sources"].as_array().unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0]["documentName"], "other.txt");
}
