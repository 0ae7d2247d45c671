use chrono::{DateTime, Utc};
use fs_err as fs;
use serde::Serialize;
use serde_json::to_string_pretty;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::config::Config;

pub struct SavedPaths {
    pub dir: PathBuf,
    pub request: Option<PathBuf>,
    pub response: Option<PathBuf>,
}

#[derive(Serialize)]
struct RunMeta<'a> {
    id: Uuid,
    mode: &'a str,
    timestamp: DateTime<Utc>,
}

fn run_dir(root: &Path, run: Uuid) -> PathBuf {
    root.join(run.to_string())
}

/// Writes opt-in debug artifacts for one run under `<runs_dir>/<uuid>/`.
/// Nothing is written when both save flags are off.
pub fn save_run<Req: Serialize, Resp: Serialize>(
    mode: &str,
    req: &Req,
    resp: &Resp,
    run: Uuid,
    cfg: &Config,
) -> anyhow::Result<Option<SavedPaths>> {
    if !cfg.save_request && !cfg.save_response {
        return Ok(None);
    }

    let dir = run_dir(Path::new(&cfg.runs_dir), run);
    fs::create_dir_all(&dir)?;

    let meta = RunMeta { id: run, mode, timestamp: Utc::now() };
    fs::write(dir.join("run.json"), to_string_pretty(&meta)?)?;

    let mut request_path = None;
    let mut response_path = None;

    if cfg.save_request {
        let p = dir.join(format!("{mode}.request.json"));
        fs::write(&p, to_string_pretty(req)?)?;
        request_path = Some(p);
    }

    if cfg.save_response {
        let p = dir.join(format!("{mode}.response.json"));
        fs::write(&p, to_string_pretty(resp)?)?;
        response_path = Some(p);
    }

    Ok(Some(SavedPaths { dir, request: request_path, response: response_path }))
}

pub fn print_saved_paths(mode: &str, saved: &SavedPaths) {
    println!("debug[{mode}]: artifacts directory: {}", saved.dir.display());
    if let Some(p) = &saved.request {
        println!("debug[{mode}]: request saved at: {}", p.display());
    }
    if let Some(p) = &saved.response {
        println!("debug[{mode}]: response saved at: {}", p.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{GenerateRequest, GenerateResponse};

    #[test]
    fn nothing_is_written_when_flags_are_off() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config {
            runs_dir: dir.path().to_string_lossy().into_owned(),
            ..Config::default()
        };
        let req = GenerateRequest { prompt: "A cat".into(), goals: None, image_data: None };
        let resp = GenerateResponse { result: "out".into() };

        let saved = save_run("single", &req, &resp, Uuid::new_v4(), &cfg).unwrap();
        assert!(saved.is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn request_and_response_land_in_the_run_dir() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config {
            runs_dir: dir.path().to_string_lossy().into_owned(),
            save_request: true,
            save_response: true,
            ..Config::default()
        };
        let req = GenerateRequest { prompt: "A cat".into(), goals: None, image_data: None };
        let resp = GenerateResponse { result: "out".into() };
        let run = Uuid::new_v4();

        let saved = save_run("single", &req, &resp, run, &cfg).unwrap().unwrap();
        assert!(saved.request.unwrap().exists());
        assert!(saved.response.unwrap().exists());
        assert!(saved.dir.join("run.json").exists());
        assert!(saved.dir.ends_with(run.to_string()));
    }
}
