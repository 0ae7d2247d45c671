use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use super::UserPart;

/// OpenAI-compatible chat-completions client. Works against the Vercel AI
/// gateway or any endpoint speaking the same protocol.
pub struct OpenAIProvider {
    api_base: String,
    api_key: String,
    model: String,
    client: Client,
    timeout_secs: u64,
}

impl OpenAIProvider {
    pub fn new(api_base: String, api_key: String, model: String, timeout_secs: u64) -> Self {
        Self {
            api_base,
            api_key,
            model,
            client: Client::new(),
            timeout_secs,
        }
    }
}

fn convert_user_parts(parts: &[UserPart]) -> Vec<Value> {
    parts
        .iter()
        .map(|part| match part {
            UserPart::Text(text) => json!({ "type": "text", "text": text }),
            UserPart::ImageDataUrl(url) => json!({
                "type": "image_url",
                "image_url": { "url": url }
            }),
        })
        .collect()
}

#[async_trait]
impl super::Provider for OpenAIProvider {
    async fn complete(
        &self,
        system: &str,
        user_parts: &[UserPart],
        max_output_tokens: u32,
        debug: bool,
    ) -> Result<String> {
        let url = format!("{}/chat/completions", self.api_base.trim_end_matches('/'));

        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": convert_user_parts(user_parts) }
            ],
            "max_tokens": max_output_tokens
        });

        if debug {
            eprintln!("debug[gateway]: HTTP POST {}", url);
        }

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .timeout(Duration::from_secs(self.timeout_secs))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if debug {
            eprintln!("debug[gateway]: raw status: {}", status);
            eprintln!("debug[gateway]: raw response:\n{}", &text);
        }

        if !status.is_success() {
            // Prefer the upstream error message; fall back to the raw body.
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|v| {
                    v.pointer("/error/message")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or(text);
            return Err(anyhow!("Gateway error ({}): {}", status, message));
        }

        #[derive(Deserialize)]
        struct ChatMessage {
            content: String,
        }
        #[derive(Deserialize)]
        struct Choice {
            message: ChatMessage,
        }
        #[derive(Deserialize)]
        struct ChatResponse {
            choices: Vec<Choice>,
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse gateway response: {e}\nRaw: {text}"))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| anyhow!("Gateway returned no choices"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_parts_keep_image_before_text() {
        let parts = vec![
            UserPart::ImageDataUrl("data:image/png;base64,AAAA".into()),
            UserPart::Text("## Initial Video Prompt\nA cat".into()),
        ];
        let converted = convert_user_parts(&parts);
        assert_eq!(converted[0]["type"], "image_url");
        assert_eq!(converted[0]["image_url"]["url"], "data:image/png;base64,AAAA");
        assert_eq!(converted[1]["type"], "text");
    }
}
