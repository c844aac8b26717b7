use clap::Parser;
use comidas_core::domain::common::{ComidasConfig, LlmConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "comidas-api", about = "Comidas food-extraction HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    /// Log output format: "pretty" or "json"
    #[arg(long, env = "LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    /// Address the HTTP server binds on
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Comma-separated list of allowed CORS origins
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// Gemini API key. Required: the process refuses to start without it.
    #[arg(long, env = "GEMINI_API_KEY")]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,
}

impl From<Args> for ComidasConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LlmConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
            },
        }
    }
}
