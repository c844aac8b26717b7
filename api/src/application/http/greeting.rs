use axum::{Router, extract::Path, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HelloResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "greeting",
    summary = "Welcome message",
    responses(
        (status = 200, body = HelloResponse)
    )
)]
pub async fn root() -> Response<HelloResponse> {
    Response::OK(HelloResponse {
        message: "Welcome to Comidas API!".to_string(),
        name: None,
    })
}

#[utoipa::path(
    get,
    path = "/hello/{name}",
    tag = "greeting",
    summary = "Personalized hello message",
    responses(
        (status = 200, body = HelloResponse)
    ),
    params(
        ("name" = String, Path, description = "Name to greet"),
    )
)]
pub async fn hello_name(Path(name): Path<String>) -> Response<HelloResponse> {
    Response::OK(HelloResponse {
        message: format!("Hello, {name}!"),
        name: Some(name),
    })
}

#[derive(OpenApi)]
#[openapi(paths(root, hello_name))]
pub struct GreetingApiDoc;

pub fn greeting_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/hello/{name}", get(hello_name))
}
