#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::application::http::server::http_server::{router, state};
    use crate::args::{Args, LlmArgs, ServerArgs};

    fn test_server() -> TestServer {
        let args = Arc::new(Args {
            server: ServerArgs {
                host: "127.0.0.1".to_string(),
                port: 0,
                allowed_origins: vec!["http://localhost:3000".to_string()],
            },
            llm: LlmArgs {
                gemini_api_key: "test-key".to_string(),
                gemini_model: "gemini-2.0-flash".to_string(),
            },
            log_format: "pretty".to_string(),
        });

        let app = router(state(args)).unwrap();
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_root_returns_welcome_message() {
        let server = test_server();

        let response = server.get("/").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["message"], "Welcome to Comidas API!");
        assert!(body.get("name").is_none());
    }

    #[tokio::test]
    async fn test_hello_echoes_name() {
        let server = test_server();

        let response = server.get("/hello/Isaac").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["message"], "Hello, Isaac!");
        assert_eq!(body["name"], "Isaac");
    }

    #[tokio::test]
    async fn test_health_returns_static_status() {
        let server = test_server();

        let response = server.get("/api/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_extract_foods_rejects_empty_text() {
        let server = test_server();

        let response = server.post("/extract-foods").json(&json!({"text": ""})).await;
        response.assert_status_bad_request();

        let body: Value = response.json();
        assert!(body.get("detail").is_some());
    }

    #[tokio::test]
    async fn test_extract_foods_rejects_missing_text_field() {
        let server = test_server();

        let response = server
            .post("/extract-foods")
            .json(&json!({"texto": "arroz"}))
            .await;
        response.assert_status_bad_request();
    }
}
