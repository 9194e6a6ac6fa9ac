pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::compatibility::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Compatibility API
        .route("/api/v1/match", post(handlers::handle_match))
        .route("/api/v1/match/upload", post(handlers::handle_match_upload))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    const JOB: &str = "Junior fullstack developer. Requires Python and SQL experience, \
                       React on the frontend and Docker for deployments.";
    const CV: &str = "Experienced in Python and JavaScript. Built React dashboards \
                      and shipped small services to production.";

    fn app_with(min_input_chars: usize) -> Router {
        let mut config = Config::from_lookup(|_| None).unwrap();
        config.min_input_chars = min_input_chars;
        build_router(AppState::new(config))
    }

    fn app_with_env(pairs: &[(&str, &str)]) -> Router {
        let config = Config::from_lookup(|key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        })
        .unwrap();
        build_router(AppState::new(config))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_request(fields: &[(&str, &str)]) -> Request<Body> {
        let boundary = "cvtrackerboundary";
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!("--{boundary}--\r\n"));

        Request::post("/api/v1/match/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app_with(50), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "cvtracker-api");
    }

    #[tokio::test]
    async fn test_match_returns_result() {
        let request = json_request("/api/v1/match", json!({ "cv_text": CV, "job_text": JOB }));
        let (status, body) = send(app_with(50), request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["request_id"].is_string());
        let result = &body["result"];
        // 10 job keywords, the CV covers python, experience and react
        assert_eq!(result["score"], 30);
        assert_eq!(result["strengths"], json!(["python", "experience", "react"]));
        assert_eq!(
            result["gaps"],
            json!(["junior", "fullstack", "developer", "sql", "frontend", "docker", "deployments"])
        );
        assert_eq!(result["keywords"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_match_rejects_short_input() {
        let request = json_request(
            "/api/v1/match",
            json!({ "cv_text": "Python", "job_text": JOB }),
        );
        let (status, body) = send(app_with(50), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_match_with_threshold_disabled_scores_empty_text() {
        let request = json_request("/api/v1/match", json!({ "cv_text": "", "job_text": "" }));
        let (status, body) = send(app_with(0), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["score"], 0);
        assert_eq!(body["result"]["keywords"], json!([]));
    }

    #[tokio::test]
    async fn test_match_sentence_style() {
        let request = json_request(
            "/api/v1/match",
            json!({
                "cv_text": "Experienced in Python and JavaScript",
                "job_text": "Requires Python and SQL experience",
                "style": { "kind": "sentence", "language": "hu" }
            }),
        );
        let (status, body) = send(app_with(0), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["score"], 67);
        assert_eq!(
            body["result"]["strengths"][0],
            "Az önéletrajzod tartalmazza: \"python\"."
        );
    }

    #[tokio::test]
    async fn test_upload_with_text_fields() {
        let request = multipart_request(&[
            ("cv", "Experienced in Python and JavaScript"),
            ("job", "Requires Python and SQL experience"),
        ]);
        let (status, body) = send(app_with(0), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["score"], 67);
        assert_eq!(body["result"]["gaps"], json!(["sql"]));
    }

    #[tokio::test]
    async fn test_upload_missing_job_field() {
        let request = multipart_request(&[("cv", "Experienced in Python and JavaScript")]);
        let (status, body) = send(app_with(0), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_upload_rejects_unknown_style() {
        let request = multipart_request(&[
            ("cv", "Python"),
            ("job", "Python"),
            ("style", "haiku"),
        ]);
        let (status, _) = send(app_with(0), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_match_caps_phrases_from_env() {
        let app = app_with_env(&[("MIN_INPUT_CHARS", "0"), ("MAX_PHRASES", "2")]);
        let request = json_request("/api/v1/match", json!({ "cv_text": CV, "job_text": JOB }));
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        let result = &body["result"];
        assert_eq!(result["score"], 30);
        assert_eq!(result["strengths"], json!(["python", "experience"]));
        assert_eq!(result["gaps"], json!(["junior", "fullstack"]));
        assert_eq!(result["keywords"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_upload_rejects_repeated_cv_field() {
        let request = multipart_request(&[
            ("cv", "Experienced in Python and JavaScript"),
            ("cv", "Rust and Kafka"),
            ("job", "Requires Python and SQL experience"),
        ]);
        let (status, body) = send(app_with(0), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_upload_rejects_repeated_job_field() {
        let request = multipart_request(&[
            ("cv", "Experienced in Python and JavaScript"),
            ("job", "Requires Python and SQL experience"),
            ("job", "Go"),
        ]);
        let (status, _) = send(app_with(0), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
