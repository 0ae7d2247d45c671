use crate::errors::PromptError;
use crate::prompt;
use crate::provider::{Provider, UserPart};
use crate::wire::GenerateRequest;

/// Runs one generation: validates the request, assembles the user turn
/// (image first, then the labeled text block), and makes a single attempt
/// against the gateway. Validation happens before any network call.
pub async fn generate_one(
    provider: &dyn Provider,
    max_output_tokens: u32,
    req: &GenerateRequest,
    debug: bool,
) -> Result<String, PromptError> {
    if req.prompt.trim().is_empty() {
        return Err(PromptError::Validation(
            "A video prompt is required.".into(),
        ));
    }

    let mut user_parts = Vec::new();
    if let Some(image) = req.image_data.as_deref() {
        if !image.is_empty() {
            user_parts.push(UserPart::ImageDataUrl(image.to_string()));
        }
    }
    user_parts.push(UserPart::Text(prompt::user_sections(
        req.prompt.trim(),
        req.goals.as_deref(),
    )));

    provider
        .complete(prompt::system_prompt(), &user_parts, max_output_tokens, debug)
        .await
        .map_err(|err| PromptError::Upstream(err.to_string()))
}
