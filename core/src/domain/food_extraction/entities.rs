use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validated outcome of one extraction request. Every entry is an exact
/// catalog match; order and duplicates are the model's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodExtraction {
    pub foods: Vec<String>,
}
