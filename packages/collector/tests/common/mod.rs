//! Local HTTP servers standing in for the core API and for scraped sites.

#![allow(dead_code)]

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// A request received by the mock ingestion endpoint.
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct EndpointState {
    status: StatusCode,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

/// Mock ingestion endpoint answering every POST with a fixed status.
pub struct MockIngestApi {
    pub url: String,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

impl MockIngestApi {
    pub async fn start(status: StatusCode) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = EndpointState {
            status,
            received: Arc::clone(&received),
        };

        let app = Router::new()
            .route("/internal/ingest", post(ingest_handler))
            .with_state(state);
        let base = serve(app).await;

        Self {
            url: format!("{}/internal/ingest", base),
            received,
        }
    }

    pub fn requests(&self) -> Vec<ReceivedRequest> {
        self.received.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

async fn ingest_handler(
    State(state): State<EndpointState>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    state
        .received
        .lock()
        .unwrap()
        .push(ReceivedRequest { content_type, body });

    let body = if state.status.is_success() {
        serde_json::json!({ "id": "4b1f6c2e-1111-4a5b-9c1d-000000000001", "status": "queued" })
    } else {
        serde_json::json!({ "error": "Database error" })
    };
    (state.status, Json(body))
}

type Hits = Arc<Mutex<HashMap<String, usize>>>;

/// Small site serving fixed pages and counting requests per path.
pub struct MockSite {
    pub base: String,
    hits: Hits,
}

impl MockSite {
    pub async fn start() -> Self {
        let hits: Hits = Arc::default();
        let app = Router::new()
            .route(
                "/page",
                get(|| async {
                    Html(
                        "<html><head><title>Example</title><style>body{}</style></head>\
                         <body>\n  <h1>Hello</h1> <p>world</p>\n  <script>track()</script>\n</body></html>",
                    )
                }),
            )
            .route("/blank", get(|| async { Html("<html><body>  \n </body></html>") }))
            .route("/moved", get(|| async { Redirect::temporary("/page") }))
            .route(
                "/away",
                get(|| async { Redirect::temporary("http://elsewhere.invalid/page") }),
            )
            .route(
                "/missing",
                get(|| async { (StatusCode::NOT_FOUND, Html("<body>not found</body>")) }),
            )
            .layer(middleware::from_fn_with_state(Arc::clone(&hits), count_hits));

        Self {
            base: serve(app).await,
            hits,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Number of requests received for `path`.
    pub fn hits(&self, path: &str) -> usize {
        self.hits.lock().unwrap().get(path).copied().unwrap_or(0)
    }
}

async fn count_hits(State(hits): State<Hits>, request: Request, next: Next) -> Response {
    *hits
        .lock()
        .unwrap()
        .entry(request.uri().path().to_string())
        .or_default() += 1;
    next.run(request).await
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
