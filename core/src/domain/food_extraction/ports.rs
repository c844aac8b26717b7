use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_extraction::{entities::FoodExtraction, value_objects::ExtractFoodsInput},
};

/// Client trait for the external text-completion provider.
///
/// One prompt in, raw untrusted text out. A single attempt: the
/// implementation must not retry, and must surface throttling and
/// credential failures as the distinct [`CoreError`] variants.
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    fn generate(&self, prompt: String) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the food extraction business logic.
#[cfg_attr(test, mockall::automock)]
pub trait FoodExtractionService: Send + Sync {
    fn extract_foods(
        &self,
        input: ExtractFoodsInput,
    ) -> impl Future<Output = Result<FoodExtraction, CoreError>> + Send;
}
