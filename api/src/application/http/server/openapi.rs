use crate::application::http::{
    food_extraction::router::FoodExtractionApiDoc, greeting::GreetingApiDoc,
    health::HealthApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Comidas API"
    ),
    nest(
        (path = "", api = GreetingApiDoc),
        (path = "", api = FoodExtractionApiDoc),
        (path = "/api/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
