use serde::{Deserialize, Serialize};

pub const MAX_BATCH_ITEMS: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_base: String,
    pub model: String,
    pub max_output_tokens: u32,
    pub timeout_secs: u64,
    /// Root for run artifacts (request/response dumps).
    pub runs_dir: String,
    pub save_request: bool,
    pub save_response: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "https://ai-gateway.vercel.sh/v1".into(),
            model: "openai/gpt-5.2".into(),
            max_output_tokens: 4096,
            timeout_secs: 120,
            runs_dir: ".reelprompt/runs".into(),
            save_request: false,
            save_response: false,
        }
    }
}

impl Config {
    /// Gateway credential. `AI_GATEWAY_API_KEY` is the primary name,
    /// `OPENAI_API_KEY` the fallback for direct-to-OpenAI setups.
    pub fn api_key() -> anyhow::Result<String> {
        std::env::var("AI_GATEWAY_API_KEY")
            .or_else(|_| std::env::var("OPENAI_API_KEY"))
            .map_err(|_| anyhow::anyhow!("AI_GATEWAY_API_KEY (or OPENAI_API_KEY) env var is not set"))
    }
}
