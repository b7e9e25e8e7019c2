use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;

use tracing::info;

use picsum_core::config::ViewerConfig;
use picsum_core::picture::PictureSequence;
use picsum_core::presenter::ImagePresenter;

use crate::display::EguiImageDisplay;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::worker;

pub struct ViewerApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub display: Rc<RefCell<EguiImageDisplay>>,
    pub presenter: ImagePresenter<EguiImageDisplay>,
    /// Overrides the position readout while fetching or after a failure.
    pub status: Option<String>,
}

impl ViewerApp {
    pub fn new(ctx: &egui::Context, config: &ViewerConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone());

        let display = Rc::new(RefCell::new(EguiImageDisplay::new(ctx.clone())));
        let presenter = ImagePresenter::new(Rc::clone(&display));

        let app = Self {
            cmd_tx,
            result_rx,
            display,
            presenter,
            status: Some("Fetching images...".to_string()),
        };
        app.send_command(WorkerCommand::FetchBatch {
            source: config.source.clone(),
        });
        app
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::BatchReady { sequence, elapsed } => {
                    info!(count = sequence.len(), ?elapsed, "Image batch ready");
                    self.status = None;
                    self.presenter.show_with(&sequence);
                }
                WorkerResult::BatchFailed { message } => {
                    self.status = Some(format!("Could not fetch images: {message}"));
                    self.presenter.show_with(&PictureSequence::empty());
                }
            }
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();

        panels::navigation::show(ctx, self);
        panels::viewport::show(ctx, self);
    }
}
