use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "reelprompt", version, about = "Restructure a video concept + reference image into a production-ready Sora 2 prompt")]
pub struct Args {
    #[command(subcommand)]
    pub mode: Mode,

    /// OpenAI-compatible chat-completions base URL.
    #[arg(long, default_value = "https://ai-gateway.vercel.sh/v1")]
    pub api_base: String,

    #[arg(long, default_value = "openai/gpt-5.2")]
    pub model: String,

    #[arg(long, default_value_t = 4096)]
    pub max_output_tokens: u32,

    #[arg(long, default_value_t = 120)]
    pub timeout_secs: u64,

    /// Emit wire-format JSON bodies instead of formatted output.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,

    #[arg(long, default_value_t = false)]
    pub save_request: bool,

    #[arg(long, default_value_t = false)]
    pub save_response: bool,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// One prompt, one generation.
    Single {
        /// Initial video prompt / concept.
        #[arg(long)]
        prompt: String,

        /// Additional goals or constraints.
        #[arg(long)]
        goals: Option<String>,

        /// Path to a reference image (JPEG, PNG, or WebP).
        #[arg(long)]
        image: Option<String>,
    },
    /// Up to 20 prompts from a CSV/text file, processed one at a time.
    Batch {
        /// File with one `prompt, goals` record per line; an optional
        /// header row containing "prompt" or "idea" is skipped.
        #[arg(long)]
        file: String,

        /// Reference image applied to every item in the batch.
        #[arg(long)]
        image: Option<String>,
    },
}
