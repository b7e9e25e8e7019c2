use std::sync::mpsc;
use std::time::Instant;

use anyhow::Context;
use tracing::warn;

use picsum_core::config::SourceConfig;
use picsum_core::io::picsum::PicsumLoader;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("picsum-fetch".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::FetchBatch { source } => handle_fetch_batch(source, &tx, &ctx),
        }
    }
}

fn handle_fetch_batch(source: SourceConfig, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    let start = Instant::now();
    let url = source.url.clone();
    let loader = PicsumLoader::new(source);

    match loader
        .fetch_sequence()
        .with_context(|| format!("Fetching images from {url}"))
    {
        Ok(sequence) => send(tx, ctx, WorkerResult::BatchReady {
            sequence,
            elapsed: start.elapsed(),
        }),
        Err(e) => {
            warn!("{e:#}");
            send(tx, ctx, WorkerResult::BatchFailed {
                message: format!("{e:#}"),
            });
        }
    }
}
