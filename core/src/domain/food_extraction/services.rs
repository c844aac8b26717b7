use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_extraction::{
        entities::FoodExtraction,
        helpers::{filter_known_foods, parse_food_list},
        ports::{FoodExtractionService, LlmClient},
        prompt::build_extraction_prompt,
        sanitizer::sanitize_response,
        value_objects::ExtractFoodsInput,
    },
};

impl<LLM> FoodExtractionService for Service<LLM>
where
    LLM: LlmClient,
{
    async fn extract_foods(&self, input: ExtractFoodsInput) -> Result<FoodExtraction, CoreError> {
        // 1. Build prompt
        let prompt = build_extraction_prompt(&input.text);

        // 2. Call LLM, the only fallible stage
        let raw_response = self.llm_client.generate(prompt).await?;
        tracing::debug!(raw_len = raw_response.len(), "received LLM response");

        // 3. Strip markdown wrapping
        let sanitized = sanitize_response(&raw_response);

        // 4. Parse and validate against the catalog
        let candidates = parse_food_list(&sanitized);
        let foods = filter_known_foods(candidates);
        tracing::debug!(count = foods.len(), "extraction complete");

        Ok(FoodExtraction { foods })
    }
}
