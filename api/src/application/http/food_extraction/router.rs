use super::handlers::extract_foods::{__path_extract_foods, extract_foods};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(extract_foods))]
pub struct FoodExtractionApiDoc;

pub fn food_extraction_routes() -> Router<AppState> {
    Router::new().route("/extract-foods", post(extract_foods))
}
