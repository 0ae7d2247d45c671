use clap::Parser;
use uuid::Uuid;

mod batch;
mod cli;
mod config;
mod errors;
mod generate;
mod import;
mod log;
mod prompt;
mod provider;
mod ux;
mod wire;

use errors::PromptError;
use wire::{BatchRequest, BatchResponse, ErrorResponse, GenerateRequest, GenerateResponse};

fn config_from(args: &cli::Args) -> config::Config {
    config::Config {
        api_base: args.api_base.clone(),
        model: args.model.clone(),
        max_output_tokens: args.max_output_tokens,
        timeout_secs: args.timeout_secs,
        save_request: args.save_request,
        save_response: args.save_response,
        ..config::Config::default()
    }
}

/// Prints the failure the way the wire contract describes it (message only,
/// no backtrace) and maps the 400/500-equivalent onto the exit status.
fn bail(err: &PromptError, json: bool) -> ! {
    if json {
        let body = ErrorResponse { error: err.to_string() };
        println!("{}", serde_json::to_string(&body).unwrap_or_default());
    } else {
        ux::print_error(&err.to_string());
    }
    std::process::exit(if err.status() == 400 { 2 } else { 1 });
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    let cfg = config_from(&args);

    let prov = provider::make_provider(cfg.api_base.clone(), cfg.model.clone(), cfg.timeout_secs)?;
    let run = Uuid::new_v4();

    match &args.mode {
        cli::Mode::Single { prompt, goals, image } => {
            let image_data = image.as_deref().map(import::image_data_url).transpose()?;
            let req = GenerateRequest {
                prompt: prompt.clone(),
                goals: goals.clone(),
                image_data,
            };

            match generate::generate_one(prov.as_ref(), cfg.max_output_tokens, &req, args.debug).await {
                Ok(result) => {
                    let resp = GenerateResponse { result };
                    if let Some(saved) = log::save_run("single", &req, &resp, run, &cfg)? {
                        if args.debug {
                            log::print_saved_paths("single", &saved);
                        }
                    }
                    if args.json {
                        println!("{}", serde_json::to_string(&resp)?);
                    } else {
                        ux::print_single_result(&resp.result);
                    }
                }
                Err(err) => bail(&err, args.json),
            }
        }

        cli::Mode::Batch { file, image } => {
            let items = import::load_batch_file(file)?;
            let shared_image = image.as_deref().map(import::image_data_url).transpose()?;
            let submitted = import::to_requests(&items, shared_image.as_deref());

            let bar = ux::batch_progress_bar(submitted.len());
            let outcome = batch::run(
                prov.as_ref(),
                cfg.max_output_tokens,
                &submitted,
                args.debug,
                |progress, _partial| bar.set_position(progress.current as u64),
            )
            .await;
            bar.finish_and_clear();

            match outcome {
                Ok(results) => {
                    let resp = BatchResponse { results };
                    let req = BatchRequest { items: submitted.clone() };
                    if let Some(saved) = log::save_run("batch", &req, &resp, run, &cfg)? {
                        if args.debug {
                            log::print_saved_paths("batch", &saved);
                        }
                    }
                    if args.json {
                        println!("{}", serde_json::to_string(&resp)?);
                    } else {
                        ux::print_batch_results(&resp.results, &submitted);
                    }
                }
                Err(err) => bail(&err, args.json),
            }
        }
    }

    Ok(())
}
