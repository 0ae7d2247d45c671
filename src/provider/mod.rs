use anyhow::Result;
use async_trait::async_trait;

pub mod openai;

/// One piece of the user turn, in the order it is sent to the model.
#[derive(Debug, Clone)]
pub enum UserPart {
    Text(String),
    /// Reference image as a base64 data URL.
    ImageDataUrl(String),
}

#[async_trait]
pub trait Provider: Send + Sync {
    /// Sends one system instruction plus a multipart user turn and returns
    /// the generated text verbatim. Single attempt, no retries.
    async fn complete(
        &self,
        system: &str,
        user_parts: &[UserPart],
        max_output_tokens: u32,
        debug: bool,
    ) -> Result<String>;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

pub fn make_provider(api_base: String, model: String, timeout_secs: u64) -> Result<DynProvider> {
    let api_key = crate::config::Config::api_key()?;
    Ok(Box::new(openai::OpenAIProvider::new(
        api_base,
        api_key,
        model,
        timeout_secs,
    )))
}
