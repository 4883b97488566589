//! Shared helpers for cross-crate directory tests: an in-process stand-in for
//! the remote provider.

use std::net::SocketAddr;

use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::{Value, json};

/// Provider record in the shape the public API returns.
pub fn person(token: &str, first: &str, last: &str, birth: &str) -> Value {
    json!({
        "gender": "female",
        "name": { "title": "Ms", "first": first, "last": last },
        "location": {
            "street": { "number": 221, "name": "Baker Street" },
            "city": "London",
            "state": "Greater London",
            "country": "United Kingdom",
            "postcode": "NW1 6XE",
            "timezone": { "offset": "+0:00", "description": "GMT" }
        },
        "email": format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        "login": { "uuid": format!("uuid-{token}"), "username": first.to_lowercase() },
        "dob": { "date": birth, "age": 30 },
        "registered": { "date": "2010-01-01T00:00:00.000Z", "age": 15 },
        "phone": "020 7946 0000",
        "cell": "07700 900000",
        "id": { "name": "NINO", "value": token },
        "picture": {
            "large": format!("https://img.example/large/{token}.jpg"),
            "medium": format!("https://img.example/med/{token}.jpg"),
            "thumbnail": format!("https://img.example/thumb/{token}.jpg")
        },
        "nat": "GB"
    })
}

/// A running stub provider.
pub struct StubProvider {
    addr: SocketAddr,
}

impl StubProvider {
    /// Serve `results` under `/api/`.
    pub async fn with_results(results: Vec<Value>) -> Self {
        let body = json!({
            "results": results,
            "info": { "seed": "stub", "results": 12, "page": 1, "version": "1.4" }
        });
        Self::spawn(Router::new().route("/api/", get(move || async move { Json(body) }))).await
    }

    /// Answer every request with `status`.
    pub async fn failing(status: StatusCode) -> Self {
        Self::spawn(Router::new().route(
            "/api/",
            get(move || async move { (status, "provider down").into_response() }),
        ))
        .await
    }

    /// Answer with a body that is not JSON.
    pub async fn garbled() -> Self {
        Self::spawn(Router::new().route("/api/", get(|| async { "<html>oops</html>" }))).await
    }

    async fn spawn(router: Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub provider");
        let addr = listener.local_addr().expect("stub provider address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        Self { addr }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/api/", self.addr)
    }
}
