use crate::domain::food_extraction::ports::LlmClient;

/// Carrier for the domain service implementations, generic over the
/// outbound ports it needs.
#[derive(Clone)]
pub struct Service<LLM>
where
    LLM: LlmClient,
{
    pub llm_client: LLM,
}

impl<LLM> Service<LLM>
where
    LLM: LlmClient,
{
    pub fn new(llm_client: LLM) -> Self {
        Self { llm_client }
    }
}
