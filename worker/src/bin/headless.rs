//! Headless replay host.
//!
//! Runs the worker over the in-process platform and replays
//! newline-delimited JSON commands from stdin:
//!
//! - `{"push": <payload or null>}`
//! - `{"click": <notification index>}`
//! - `{"window": {"url": "/", "focusable": true}}`
//! - `{"open_window": false}` toggles open-window support
//!
//! Each command waits for its event to settle before the next is read.

use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use notify_core::PushEvent;
use quickpost_worker_lib::shutdown::graceful_shutdown;
use quickpost_worker_lib::{
    MemoryPlatform, NotificationHandler, ServiceWorker, WorkerConfig, WorkerEvent, WorkerHandle,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Command {
    Push(Option<Value>),
    Click(usize),
    Window(WindowSpec),
    OpenWindow(bool),
}

#[derive(Debug, Deserialize)]
struct WindowSpec {
    #[serde(default = "default_url")]
    url: String,
    #[serde(default = "default_focusable")]
    focusable: bool,
}

fn default_url() -> String {
    "/".into()
}

fn default_focusable() -> bool {
    true
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting QuickPost worker (headless replay)");

    let config = WorkerConfig::load().context("loading worker config")?;
    let platform = Arc::new(MemoryPlatform::new());
    let handler = NotificationHandler::from_platform(platform.clone(), &config);
    let worker = ServiceWorker::start(Arc::new(handler), &config);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Command>(line) {
            Ok(cmd) => run_command(&worker, &platform, cmd).await?,
            Err(e) => tracing::warn!(error = %e, "Skipping unrecognized command"),
        }
    }

    let summary = serde_json::json!({
        "notifications": platform.notifications(),
        "windows": platform.windows(),
        "actions": platform.actions(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    graceful_shutdown(worker).await;
    Ok(())
}

async fn run_command(
    worker: &WorkerHandle,
    platform: &MemoryPlatform,
    cmd: Command,
) -> anyhow::Result<()> {
    let event = match cmd {
        Command::Push(Some(payload)) => WorkerEvent::Push(PushEvent::from_json(&payload)),
        Command::Push(None) => WorkerEvent::Push(PushEvent::empty()),
        Command::Click(index) => match platform.click(index) {
            Some(click) => WorkerEvent::NotificationClick(click),
            None => {
                tracing::warn!(index, "No notification at index");
                return Ok(());
            }
        },
        Command::Window(spec) => {
            let id = platform.add_window(&spec.url, spec.focusable);
            tracing::info!(client_id = %id, url = %spec.url, "Window registered");
            return Ok(());
        }
        Command::OpenWindow(enabled) => {
            platform.set_can_open_window(enabled);
            return Ok(());
        }
    };

    let status = worker
        .dispatch(event)
        .context("dispatching event")?
        .settled()
        .await?;
    tracing::debug!(?status, "Event settled");
    Ok(())
}
