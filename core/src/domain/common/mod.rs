pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct ComidasConfig {
    pub llm: LlmConfig,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
}
