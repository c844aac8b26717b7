use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use comidas_core::domain::food_extraction::{
    ports::FoodExtractionService, value_objects::ExtractFoodsInput,
};

use crate::application::http::{
    food_extraction::validators::ExtractFoodsRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExtractFoodsResponse {
    pub foods: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/extract-foods",
    tag = "food-extraction",
    summary = "Extract known foods from free text",
    description = "Asks the LLM which catalog foods the text mentions and returns the validated matches",
    responses(
        (status = 200, body = ExtractFoodsResponse),
        (status = 401, description = "Upstream rejected the configured credential"),
        (status = 429, description = "Upstream rate limit exceeded"),
        (status = 500, description = "Upstream or internal failure"),
    ),
    request_body = ExtractFoodsRequest
)]
pub async fn extract_foods(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ExtractFoodsRequest>,
) -> Result<Response<ExtractFoodsResponse>, ApiError> {
    let extraction = state
        .service
        .extract_foods(ExtractFoodsInput { text: payload.text })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ExtractFoodsResponse {
        foods: extraction.foods,
    }))
}
