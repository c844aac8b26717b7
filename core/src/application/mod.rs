use crate::{
    domain::common::{ComidasConfig, services::Service},
    infrastructure::llm::gemini_client::GeminiLlmClient,
};

pub type ComidasService = Service<GeminiLlmClient>;

pub fn create_service(config: ComidasConfig) -> ComidasService {
    let llm_client = GeminiLlmClient::new(config.llm.gemini_api_key, config.llm.gemini_model);
    Service::new(llm_client)
}
