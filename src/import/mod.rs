use anyhow::Context;
use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use base64::Engine;
use fs_err as fs;
use uuid::Uuid;

use crate::config::MAX_BATCH_ITEMS;
use crate::wire::GenerateRequest;

/// One row of the working list. The id exists only so list positions can be
/// tracked while rows are edited; it carries no meaning on the wire.
#[derive(Debug, Clone)]
pub struct BatchItem {
    pub id: Uuid,
    pub prompt: String,
    pub goals: String,
    pub image_data: Option<String>,
}

impl BatchItem {
    pub fn new(prompt: impl Into<String>, goals: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            prompt: prompt.into(),
            goals: goals.into(),
            image_data: None,
        }
    }
}

/// Parses a delimited-text blob into a fresh working list, replacing
/// whatever was there before. The first non-empty line is treated as a
/// header (and dropped) only when it contains "prompt" or "idea",
/// case-insensitively. At most 20 rows are kept.
pub fn parse_batch_text(text: &str) -> Vec<BatchItem> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return Vec::new();
    }

    let first = lines[0].to_lowercase();
    let has_header = first.contains("prompt") || first.contains("idea");
    let data_lines = if has_header { &lines[1..] } else { &lines[..] };

    data_lines
        .iter()
        .take(MAX_BATCH_ITEMS)
        .map(|line| {
            let fields = split_fields(line);
            let prompt = fields.first().cloned().unwrap_or_default();
            let goals = fields.get(1).cloned().unwrap_or_default();
            BatchItem::new(prompt, goals)
        })
        .collect()
}

/// Minimal line grammar: split on commas, trim each field, strip one pair
/// of surrounding double quotes. Deliberately does NOT handle commas or
/// escaped quotes inside quoted fields; the import format is defined as
/// one plain `prompt, goals` record per line.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    for ch in line.chars() {
        if ch == ',' {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);

    fields
        .into_iter()
        .map(|raw| {
            let trimmed = raw.trim();
            if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
                trimmed[1..trimmed.len() - 1].to_string()
            } else {
                trimmed.to_string()
            }
        })
        .collect()
}

pub fn load_batch_file(path: &str) -> anyhow::Result<Vec<BatchItem>> {
    let text = fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    Ok(parse_batch_text(&text))
}

/// Reads an image file and serialises it as a base64 data URL for JSON
/// transport. Unrecognised extensions fall back to image/jpeg.
pub fn image_data_url(path: &str) -> anyhow::Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read image {path}"))?;
    let mime = mime_guess::from_path(path).first_or(mime_guess::mime::IMAGE_JPEG);
    Ok(format!("data:{};base64,{}", mime.essence_str(), BASE64_ENGINE.encode(bytes)))
}

/// Client-side half of the two-stage filter: drops blank-prompt rows before
/// submission (the sequencer's bound check still sees the raw list size of
/// what IS submitted). Trims prompt and goals the way the original form did.
pub fn to_requests(items: &[BatchItem], shared_image: Option<&str>) -> Vec<GenerateRequest> {
    items
        .iter()
        .filter(|item| !item.prompt.trim().is_empty())
        .map(|item| GenerateRequest {
            prompt: item.prompt.trim().to_string(),
            goals: Some(item.goals.trim().to_string()).filter(|g| !g.is_empty()),
            image_data: item
                .image_data
                .as_deref()
                .or(shared_image)
                .map(str::to_string),
        })
        .collect()
}
